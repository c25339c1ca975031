//! Page loaders
//!
//! Each loader gathers everything one page needs. Fetches run concurrently
//! and the first failure wins, unless that endpoint's [`FallbackPolicy`]
//! says to carry on without it.

use serde::Serialize;
use std::future::Future;

use crate::client::{ContentClient, Result};
use crate::config::{FallbackConfig, FallbackPolicy};
use crate::content::{About, ContactInfo, Footer, Homepage, PartnerData, ProjectData};

/// Content for the landing page
///
/// A `None` field means the fetch failed under a `use_default` policy and
/// the built-in content should be shown instead.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub homepage: Option<Homepage>,
    pub about: Option<About>,
    pub projects: Option<Vec<ProjectData>>,
    pub partners: Option<Vec<PartnerData>>,
    pub contact_info: Option<ContactInfo>,
    pub footer: Option<Footer>,
}

/// Load the landing page
pub async fn load_home(client: &ContentClient, fallback: &FallbackConfig) -> Result<HomePage> {
    let (homepage, about, projects, partners, contact_info, footer) = tokio::try_join!(
        apply_policy("homepage", fallback.homepage, client.get_homepage()),
        apply_policy("about", fallback.about, client.get_about()),
        apply_policy("projects", fallback.projects, client.get_projects()),
        apply_policy("partners", fallback.partners, client.get_partners()),
        apply_policy("contact-info", fallback.contact_info, client.get_contact_info()),
        apply_policy("footer", fallback.footer, client.get_footer()),
    )?;

    Ok(HomePage {
        homepage,
        about,
        projects,
        partners,
        contact_info,
        footer,
    })
}

/// Load a project page; `None` means the page should answer "not found"
pub async fn load_project(client: &ContentClient, slug: &str) -> Result<Option<ProjectData>> {
    let project = client.get_project_by_slug(slug).await?;
    if project.is_none() {
        tracing::debug!("No project with slug {:?}", slug);
    }
    Ok(project)
}

/// Slugs of every project page, in display order
pub async fn project_slugs(client: &ContentClient) -> Result<Vec<String>> {
    let projects = client.get_projects().await?;
    Ok(projects.into_iter().map(|p| p.slug).collect())
}

/// Resolve one fetch according to its endpoint's policy
async fn apply_policy<T, F>(endpoint: &str, policy: FallbackPolicy, fetch: F) -> Result<Option<T>>
where
    F: Future<Output = Result<T>>,
{
    match fetch.await {
        Ok(value) => Ok(Some(value)),
        Err(e) if policy == FallbackPolicy::UseDefault => {
            tracing::warn!("Failed to load {}, using defaults: {}", endpoint, e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{self, fixture_cms, fixture_cms_failing, project_json};
    use crate::client::ContentError;
    use axum::Router;

    async fn client_for(router: Router) -> ContentClient {
        ContentClient::new(&mock::serve(router).await).unwrap()
    }

    fn projects() -> Vec<serde_json::Value> {
        vec![
            project_json(3, "c", 3),
            project_json(1, "a", 1),
            project_json(2, "b", 2),
        ]
    }

    #[tokio::test]
    async fn test_load_home() {
        let client = client_for(fixture_cms(projects(), Vec::new())).await;
        let page = load_home(&client, &FallbackConfig::default()).await.unwrap();

        assert_eq!(page.homepage.unwrap().hero_title, "Eventum");
        assert_eq!(page.about.unwrap().statistics.len(), 2);
        assert_eq!(page.projects.unwrap().len(), 3);
        assert!(page.partners.unwrap().is_empty());
        assert!(page.contact_info.is_some());
        assert!(page.footer.is_some());
    }

    #[tokio::test]
    async fn test_footer_failure_uses_default() {
        let router = fixture_cms_failing(projects(), Vec::new(), &["/api/footer"]);
        let client = client_for(router).await;

        let page = load_home(&client, &FallbackConfig::default()).await.unwrap();
        assert!(page.footer.is_none());
        assert!(page.homepage.is_some());
    }

    #[tokio::test]
    async fn test_footer_failure_under_strict_policy() {
        let router = fixture_cms_failing(projects(), Vec::new(), &["/api/footer"]);
        let client = client_for(router).await;

        let err = load_home(&client, &FallbackConfig::strict()).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_any_failure_aborts_page() {
        let router = fixture_cms_failing(projects(), Vec::new(), &["/api/about"]);
        let client = client_for(router).await;

        let err = load_home(&client, &FallbackConfig::default()).await.unwrap_err();
        assert!(matches!(err, ContentError::Server { status: 500 }));
    }

    #[tokio::test]
    async fn test_unreachable_service_aborts_page() {
        let client = ContentClient::new(&mock::unreachable_url().await).unwrap();
        let err = load_home(&client, &FallbackConfig::default()).await.unwrap_err();
        assert!(matches!(err, ContentError::ServiceUnavailable));
    }

    #[tokio::test]
    async fn test_load_project() {
        let client = client_for(fixture_cms(projects(), Vec::new())).await;

        let project = load_project(&client, "a").await.unwrap().unwrap();
        assert_eq!(project.slug, "a");
        assert!(load_project(&client, "zzz").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_project_slugs() {
        let client = client_for(fixture_cms(projects(), Vec::new())).await;
        assert_eq!(project_slugs(&client).await.unwrap(), vec!["a", "b", "c"]);
    }
}

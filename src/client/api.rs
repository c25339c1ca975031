//! Typed accessors, one per content type

use super::{ContentClient, FetchOptions, Populate, Result};
use crate::content::types::{Collection, Envelope};
use crate::content::{
    normalize_partner, normalize_project, About, ContactInfo, Footer, Homepage, Partner,
    PartnerData, Project, ProjectData,
};

/// Sort parameter for ordered collections
const ORDER_ASC: &str = "order:asc";

impl ContentClient {
    pub async fn get_homepage(&self) -> Result<Homepage> {
        let response: Envelope<Homepage> = self
            .fetch_content("/homepage", &FetchOptions::new())
            .await?;
        Ok(response.data)
    }

    pub async fn get_about(&self) -> Result<About> {
        let options = FetchOptions::new().populate(Populate::many(["statistics"]));
        let response: Envelope<About> = self.fetch_content("/about", &options).await?;
        Ok(response.data)
    }

    pub async fn get_contact_info(&self) -> Result<ContactInfo> {
        let options =
            FetchOptions::new().populate(Populate::many(["socialLinks", "serviceOptions"]));
        let response: Envelope<ContactInfo> = self.fetch_content("/contact-info", &options).await?;
        Ok(response.data)
    }

    pub async fn get_footer(&self) -> Result<Footer> {
        let options = FetchOptions::new().populate(Populate::one("linkGroups.links"));
        let response: Envelope<Footer> = self.fetch_content("/footer", &options).await?;
        Ok(response.data)
    }

    /// All projects, ascending by `order`
    pub async fn get_projects(&self) -> Result<Vec<ProjectData>> {
        let options = FetchOptions::new()
            .query("sort", ORDER_ASC)
            .populate(Populate::All);
        let response: Collection<Project> = self.fetch_content("/projects", &options).await?;

        // Stable, so equal orders keep the service's sequence
        let mut projects = response.data.unwrap_or_default();
        projects.sort_by_key(|p| p.order);

        Ok(projects.iter().map(normalize_project).collect())
    }

    /// Look up one project by its exact slug; `None` when there is no such project
    ///
    /// Slugs are unique in the CMS. Should duplicates slip through, the first
    /// record returned wins.
    pub async fn get_project_by_slug(&self, slug: &str) -> Result<Option<ProjectData>> {
        let options = FetchOptions::new()
            .query("filters[slug][$eq]", slug)
            .populate(Populate::All);
        let response: Collection<Project> = self.fetch_content("/projects", &options).await?;

        let projects = response.data.unwrap_or_default();
        let mut matches = projects.iter().filter(|p| p.slug == slug);
        let first = matches.next();

        let duplicates = matches.count();
        if duplicates > 0 {
            tracing::warn!(
                "Slug {:?} matched {} projects, using the first",
                slug,
                duplicates + 1
            );
        }

        Ok(first.map(normalize_project))
    }

    /// All partners, ascending by `order`
    pub async fn get_partners(&self) -> Result<Vec<PartnerData>> {
        let options = FetchOptions::new()
            .query("sort", ORDER_ASC)
            .populate(Populate::All);
        let response: Collection<Partner> = self.fetch_content("/partners", &options).await?;

        let mut partners = response.data.unwrap_or_default();
        partners.sort_by_key(|p| p.order);

        Ok(partners.iter().map(normalize_partner).collect())
    }
}

//! Print site content

use anyhow::Result;
use serde::Serialize;

use crate::content::ProjectData;
use crate::pages;
use crate::Eventum;

/// Print one kind of content
pub async fn run(app: &Eventum, content_type: &str) -> Result<()> {
    let client = &app.client;

    match content_type {
        "homepage" => print_json(&client.get_homepage().await?)?,
        "about" => print_json(&client.get_about().await?)?,
        "contact" | "contact-info" => print_json(&client.get_contact_info().await?)?,
        "footer" => print_json(&client.get_footer().await?)?,
        "project" | "projects" => {
            let projects = client.get_projects().await?;
            tracing::info!("Loaded {} projects", projects.len());
            print_json(&projects)?;
        }
        "partner" | "partners" => {
            let partners = client.get_partners().await?;
            tracing::info!("Loaded {} partners", partners.len());
            print_json(&partners)?;
        }
        "slug" | "slugs" => {
            for slug in pages::project_slugs(client).await? {
                println!("{}", slug);
            }
        }
        "home" => print_json(&app.home().await?)?,
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: homepage, about, contact, footer, projects, partners, slugs, home",
                content_type
            );
        }
    }

    Ok(())
}

/// Print a single project page's content, as JSON or as a text summary
pub async fn project(app: &Eventum, slug: &str, text: bool) -> Result<()> {
    let Some(project) = app.project(slug).await? else {
        anyhow::bail!("Project not found: {}", slug);
    };

    if text {
        print!("{}", project_summary(&project));
        Ok(())
    } else {
        print_json(&project)
    }
}

/// Human-readable view of a project page
pub fn project_summary(project: &ProjectData) -> String {
    let mut out = format!("{}\n", project.title);

    let mut meta = vec![project.category.as_str()];
    if let Some(date) = project.date.as_deref().filter(|d| !d.is_empty()) {
        meta.push(date);
    }
    out.push_str(&format!("{}\n", meta.join(" • ")));

    if let Some(client) = project.client.as_deref().filter(|c| !c.is_empty()) {
        out.push_str(&format!("Client: {}\n", client));
    }
    if let Some(image) = &project.image {
        out.push_str(&format!("Image: {}\n", image));
    }

    out.push('\n');
    out.push_str(project.body());
    out.push('\n');

    if !project.gallery.is_empty() {
        out.push_str(&format!("\nGallery ({}):\n", project.gallery.len()));
        for url in &project.gallery {
            out.push_str(&format!("  {}\n", url));
        }
    }

    out
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

//! Reduce raw CMS records to the shapes pages render

use super::media::{resolve_media, resolve_media_list};
use super::types::{Partner, PartnerData, Project, ProjectData};

/// Flatten a project: uploaded media wins over bundled paths, gallery defaults to empty
pub fn normalize_project(project: &Project) -> ProjectData {
    ProjectData {
        id: project.id,
        slug: project.slug.clone(),
        category: project.category.clone(),
        title: project.title.clone(),
        description: project.description.clone(),
        detailed_description: project.detailed_description.clone(),
        client: project.client.clone(),
        date: project.date.clone(),
        order: project.order,
        image: resolve_media(project.image.as_ref(), project.image_path.as_deref()),
        logo: resolve_media(project.logo.as_ref(), project.logo_path.as_deref()),
        gallery: resolve_media_list(project.gallery.as_deref(), project.gallery_paths.as_deref()),
    }
}

/// Flatten a partner with the same rule applied to its logo
pub fn normalize_partner(partner: &Partner) -> PartnerData {
    PartnerData {
        id: partner.id,
        name: partner.name.clone(),
        logo: resolve_media(partner.logo.as_ref(), partner.logo_path.as_deref()),
        url: partner.url.clone(),
        order: partner.order,
    }
}

//! Content models as returned by the CMS, and the flattened shapes pages consume

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::ops::Deref;

use super::media::Media;

/// Treat an explicit `null` the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Envelope
// ============================================================================

/// Response envelope shared by every read endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u32,
}

/// A collection response; `data` may come back as `null`
pub type Collection<T> = Envelope<Option<Vec<T>>>;

/// Error body returned alongside non-2xx statuses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A stored entry: bookkeeping fields plus the content type's own attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item<T> {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub attributes: T,
}

impl<T> Deref for Item<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.attributes
    }
}

// ============================================================================
// Components
// ============================================================================

/// A headline number in the about section, e.g. "150+ events"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    #[serde(default)]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: f64,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default)]
    pub id: u64,
    pub platform: String,
    pub url: String,
}

/// One checkbox of the contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOption {
    #[serde(default)]
    pub id: u64,
    pub service_id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub id: u64,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkGroup {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<Link>,
}

// ============================================================================
// Singletons
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageAttributes {
    pub hero_title: String,
    #[serde(default)]
    pub hero_subtitle: Option<String>,
    #[serde(default)]
    pub hero_description: Option<String>,
    #[serde(default)]
    pub hero_button_text: Option<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

pub type Homepage = Item<HomepageAttributes>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutAttributes {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Display order
    #[serde(default, deserialize_with = "null_as_default")]
    pub statistics: Vec<Statistic>,
}

pub type About = Item<AboutAttributes>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoAttributes {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub social_links: Vec<SocialLink>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_options: Vec<ServiceOption>,
}

pub type ContactInfo = Item<ContactInfoAttributes>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterAttributes {
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link_groups: Vec<LinkGroup>,
}

pub type Footer = Item<FooterAttributes>;

// ============================================================================
// Collections
// ============================================================================

/// A portfolio entry. `slug` is unique and is the only identifier used in URLs.
///
/// Every media field comes either as an uploaded [`Media`] or as a path to a
/// bundled asset; see [`crate::content::normalize_project`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAttributes {
    pub title: String,
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub detailed_description: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i64,

    // Bundled asset paths
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub gallery_paths: Option<Vec<String>>,

    // Uploaded media
    #[serde(default)]
    pub image: Option<Media>,
    #[serde(default)]
    pub logo: Option<Media>,
    #[serde(default)]
    pub gallery: Option<Vec<Media>>,
}

pub type Project = Item<ProjectAttributes>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerAttributes {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i64,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub logo: Option<Media>,
}

pub type Partner = Item<PartnerAttributes>;

// ============================================================================
// Contact submissions
// ============================================================================

/// Processing state, assigned and changed by the CMS only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    New,
    Processed,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmissionAttributes {
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: SubmissionStatus,
}

pub type ContactSubmission = Item<ContactSubmissionAttributes>;

// ============================================================================
// Normalized shapes
// ============================================================================

/// A project with every media field reduced to a single URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    pub id: u64,
    pub slug: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub detailed_description: Option<String>,
    pub client: Option<String>,
    pub date: Option<String>,
    pub order: i64,
    pub image: Option<String>,
    pub logo: Option<String>,
    pub gallery: Vec<String>,
}

impl ProjectData {
    /// Long description when there is one, else the short one
    pub fn body(&self) -> &str {
        self.detailed_description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(&self.description)
    }
}

/// A partner with the logo reduced to a single URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerData {
    pub id: u64,
    pub name: String,
    pub logo: Option<String>,
    pub url: Option<String>,
    pub order: i64,
}

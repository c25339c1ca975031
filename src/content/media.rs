//! Media references and their resolution to plain URLs

use serde::{Deserialize, Serialize};

use super::types::null_as_default;

/// An asset hosted by the content service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub formats: MediaFormats,
    pub url: String,
}

/// Resized variants generated by the content service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaFormats {
    pub thumbnail: Option<MediaFormat>,
    pub small: Option<MediaFormat>,
    pub medium: Option<MediaFormat>,
    pub large: Option<MediaFormat>,
}

/// A single resized variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFormat {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub ext: String,
    #[serde(default)]
    pub mime: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub size: f64,
    pub url: String,
}

/// Pick the media URL, else the fallback path. Empty strings count as missing.
pub fn resolve_media(media: Option<&Media>, path: Option<&str>) -> Option<String> {
    media
        .map(|m| m.url.as_str())
        .filter(|url| !url.is_empty())
        .or_else(|| path.filter(|p| !p.is_empty()))
        .map(str::to_string)
}

/// Same rule for lists: a non-empty media list wins over the path list
///
/// An uploaded list that is present but empty counts as missing, so the
/// bundled paths are used in that case.
pub fn resolve_media_list(media: Option<&[Media]>, paths: Option<&[String]>) -> Vec<String> {
    let from_media: Vec<String> = media
        .unwrap_or_default()
        .iter()
        .map(|m| m.url.as_str())
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect();

    if !from_media.is_empty() {
        return from_media;
    }

    paths
        .unwrap_or_default()
        .iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect()
}

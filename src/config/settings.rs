//! Site settings (eventum.yml + environment)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "eventum.yml";

/// CMS address used when nothing else is configured
pub const DEFAULT_STRAPI_URL: &str = "http://localhost:1337";

/// Public site address used when nothing else is configured
pub const DEFAULT_SITE_URL: &str = "https://eventum.ru";

/// Main settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base address of the content service (without the `/api` suffix)
    pub strapi_url: String,

    /// Public address of the site itself
    pub site_url: String,

    /// What page loaders do when an endpoint fails
    #[serde(default)]
    pub fallback: FallbackConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strapi_url: DEFAULT_STRAPI_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            fallback: FallbackConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Load `eventum.yml` from a directory if present, then apply environment overrides
    pub fn discover<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let path = base_dir.as_ref().join(SETTINGS_FILE);

        let mut settings = if path.exists() {
            tracing::debug!("Loading settings from {:?}", path);
            Self::load(&path)?
        } else {
            Self::default()
        };

        settings.apply_env(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Apply environment overrides using the given lookup
    ///
    /// The plain names win over the `NEXT_PUBLIC_` ones the site build uses.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let first_set = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| lookup(*key))
                .find(|value| !value.trim().is_empty())
        };

        if let Some(url) = first_set(&["STRAPI_URL", "NEXT_PUBLIC_STRAPI_URL"]) {
            self.strapi_url = url;
        }
        if let Some(url) = first_set(&["SITE_URL", "NEXT_PUBLIC_SITE_URL"]) {
            self.site_url = url;
        }
    }
}

/// Behaviour of a page loader when one endpoint fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Propagate the error and abort the page
    #[default]
    Fail,
    /// Continue without the content; rendering uses built-in defaults
    UseDefault,
}

/// Per-endpoint fallback policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    pub homepage: FallbackPolicy,
    pub about: FallbackPolicy,
    pub contact_info: FallbackPolicy,
    pub footer: FallbackPolicy,
    pub projects: FallbackPolicy,
    pub partners: FallbackPolicy,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            homepage: FallbackPolicy::Fail,
            about: FallbackPolicy::Fail,
            contact_info: FallbackPolicy::Fail,
            footer: FallbackPolicy::UseDefault,
            projects: FallbackPolicy::Fail,
            partners: FallbackPolicy::Fail,
        }
    }
}

impl FallbackConfig {
    /// A configuration where every endpoint fails hard
    pub fn strict() -> Self {
        Self {
            footer: FallbackPolicy::Fail,
            ..Self::default()
        }
    }
}

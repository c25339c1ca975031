//! eventum-rs: typed content client for the Eventum event-agency site
//!
//! This crate talks to the site's headless CMS, shapes its responses into
//! flat, render-ready values and gathers the content each page needs.

pub mod client;
pub mod commands;
pub mod config;
pub mod content;
pub mod pages;

use anyhow::Result;
use std::path::Path;

/// The main application: settings plus a client bound to them
#[derive(Debug, Clone)]
pub struct Eventum {
    /// Loaded settings
    pub settings: config::Settings,
    /// Content service client
    pub client: client::ContentClient,
    /// Directory the settings were discovered in
    pub base_dir: std::path::PathBuf,
}

impl Eventum {
    /// Create an instance from a directory (reads `eventum.yml` and the environment)
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let settings = config::Settings::discover(base_dir.as_ref())?;
        Self::with_settings(base_dir, settings)
    }

    /// Create an instance from explicit settings
    pub fn with_settings<P: AsRef<Path>>(base_dir: P, settings: config::Settings) -> Result<Self> {
        let client = client::ContentClient::from_settings(&settings)?;

        Ok(Self {
            settings,
            client,
            base_dir: base_dir.as_ref().to_path_buf(),
        })
    }

    /// Load the landing page content
    pub async fn home(&self) -> Result<pages::HomePage> {
        Ok(pages::load_home(&self.client, &self.settings.fallback).await?)
    }

    /// Load a project page; `None` when the slug is unknown
    pub async fn project(&self, slug: &str) -> Result<Option<content::ProjectData>> {
        Ok(pages::load_project(&self.client, slug).await?)
    }
}

//! Write a default settings file

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SETTINGS_FILE;

const DEFAULT_SETTINGS: &str = r#"# Eventum content settings
# STRAPI_URL / NEXT_PUBLIC_STRAPI_URL and SITE_URL / NEXT_PUBLIC_SITE_URL override these.

# Content service
strapi_url: http://localhost:1337

# Public site
site_url: https://eventum.ru

# What the landing page does when an endpoint fails: fail | use_default
fallback:
  homepage: fail
  about: fail
  contact_info: fail
  footer: use_default
  projects: fail
  partners: fail
"#;

/// Create `eventum.yml` in the given directory unless one exists
pub fn init_settings(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let path = target_dir.join(SETTINGS_FILE);
    if path.exists() {
        anyhow::bail!("{} already exists in {:?}", SETTINGS_FILE, target_dir);
    }

    fs::write(&path, DEFAULT_SETTINGS)?;
    tracing::info!("Created {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FallbackPolicy, Settings};

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = tempfile::tempdir().unwrap();
        init_settings(dir.path()).unwrap();

        let settings = Settings::load(dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(settings.strapi_url, "http://localhost:1337");
        assert_eq!(settings.fallback.footer, FallbackPolicy::UseDefault);
        assert_eq!(settings.fallback.about, FallbackPolicy::Fail);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        init_settings(dir.path()).unwrap();
        assert!(init_settings(dir.path()).is_err());
    }
}

//! Configuration module

mod settings;

pub use settings::FallbackConfig;
pub use settings::FallbackPolicy;
pub use settings::Settings;
pub use settings::{DEFAULT_SITE_URL, DEFAULT_STRAPI_URL, SETTINGS_FILE};

//! Contact form payload

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Fields a visitor fills in on the contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub email: String,
    /// Selected `ServiceOption::service_id` values
    pub services: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Reasons a form is not worth sending
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Select at least one service")]
    NoServices,
}

impl ContactForm {
    pub fn new(email: impl Into<String>, services: Vec<String>) -> Self {
        Self {
            email: email.into(),
            services,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.message = (!message.trim().is_empty()).then_some(message);
        self
    }

    /// Check the form before it is submitted
    pub fn validate(&self) -> Result<(), FormError> {
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(FormError::InvalidEmail(self.email.clone()));
        }
        if self.services.iter().all(|s| s.trim().is_empty()) {
            return Err(FormError::NoServices);
        }
        Ok(())
    }
}

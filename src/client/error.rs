//! Content client errors

use thiserror::Error;

/// Message reported for every transport-level failure
pub const SERVICE_UNAVAILABLE: &str = "content service unreachable";

/// Message used when a rejected submission carries no usable error body
pub const SUBMISSION_FALLBACK: &str = "Failed to submit contact form";

/// Errors raised while talking to the content service
#[derive(Error, Debug)]
pub enum ContentError {
    /// The service answered with a non-2xx status
    #[error("Server error: {status}")]
    Server { status: u16 },

    /// The service could not be reached; the transport error is not kept
    #[error("{}", SERVICE_UNAVAILABLE)]
    ServiceUnavailable,

    /// A contact form submission was refused
    #[error("{0}")]
    SubmissionRejected(String),

    /// The body did not match the expected content type
    #[error("Invalid response from {endpoint}: {source}")]
    Validation {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ContentError {
    /// HTTP status for `Server` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ContentError::Server { status } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;

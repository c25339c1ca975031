//! HTTP client for the content service
//!
//! A single request helper ([`ContentClient::fetch_content`]) plus typed
//! accessors for each content type. Every call is one independent request:
//! no retries, no caching, no shared mutable state.

mod api;
mod error;
#[cfg(test)]
pub(crate) mod mock;
mod options;

pub use error::{ContentError, Result, SERVICE_UNAVAILABLE, SUBMISSION_FALLBACK};
pub use options::{FetchOptions, Populate};

use reqwest::header::CACHE_CONTROL;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Settings;
use crate::content::types::{Envelope, ErrorEnvelope};
use crate::content::{ContactForm, ContactSubmission};

/// Client bound to one content service address
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    /// Base address without trailing slash, e.g. `http://localhost:1337`
    base_url: String,
}

/// Body of a create request
#[derive(Serialize)]
struct CreateRequest<'a, T> {
    data: &'a T,
}

impl ContentClient {
    /// Create a client for the given base address
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http(base_url, reqwest::Client::new())
    }

    /// Create a client from loaded settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(&settings.strapi_url)
    }

    /// Create a client that reuses an existing connection pool
    pub fn with_http(base_url: &str, http: reqwest::Client) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| ContentError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ContentError::InvalidUrl {
                url: base_url.to_string(),
                reason: "expected an http(s) address".to_string(),
            });
        }

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base address this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full request URL for an endpoint such as `/projects`
    pub fn api_url(&self, endpoint: &str, options: &FetchOptions) -> Result<Url> {
        let endpoint = endpoint.trim_start_matches('/');
        let raw = format!("{}/api/{}", self.base_url, endpoint);

        let mut url = Url::parse(&raw).map_err(|e| ContentError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        let populate = options
            .populate
            .as_ref()
            .map(Populate::query_pairs)
            .unwrap_or_default();

        if !options.query.is_empty() || !populate.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in options.query.iter().chain(populate.iter()) {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// GET an endpoint and decode the JSON body as `T`
    pub async fn fetch_content<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: &FetchOptions,
    ) -> Result<T> {
        let url = self.api_url(endpoint, options)?;
        let cache_control = options.cache_control();
        tracing::debug!("GET {} ({})", url, cache_control);

        let response = self
            .http
            .get(url)
            .header(CACHE_CONTROL, cache_control)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} answered {}", endpoint, status);
            return Err(ContentError::Server {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&body).map_err(|source| ContentError::Validation {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    /// Create a contact submission and return the stored record
    ///
    /// Each call creates a new record; nothing is deduplicated.
    pub async fn submit_contact_form(&self, form: &ContactForm) -> Result<ContactSubmission> {
        const ENDPOINT: &str = "/contact-submissions";

        let url = self.api_url(ENDPOINT, &FetchOptions::default())?;
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .json(&CreateRequest { data: form })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorEnvelope>()
                .await
                .ok()
                .and_then(|envelope| envelope.error)
                .and_then(|error| error.message)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| SUBMISSION_FALLBACK.to_string());

            tracing::debug!("Submission rejected with {}: {}", status, message);
            return Err(ContentError::SubmissionRejected(message));
        }

        let body = response.bytes().await.map_err(transport_error)?;
        let envelope: Envelope<ContactSubmission> =
            serde_json::from_slice(&body).map_err(|source| ContentError::Validation {
                endpoint: ENDPOINT.to_string(),
                source,
            })?;

        Ok(envelope.data)
    }
}

/// Collapse any transport failure into the fixed unavailable error
fn transport_error(err: reqwest::Error) -> ContentError {
    tracing::debug!("Content service transport error: {}", err);
    ContentError::ServiceUnavailable
}

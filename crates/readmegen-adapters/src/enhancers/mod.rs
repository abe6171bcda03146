//! Optional remote metadata sources.
//!
//! Both enhancers use a blocking `reqwest` client with a bounded timeout and
//! report every failure as an [`EnhancerError`]; the caller decides that
//! those are warnings, not errors.

mod ai;
mod github;

use std::time::Duration;

use readmegen_core::application::EnhancerError;
use reqwest::blocking::{Client, Response};

pub use ai::{AiEnhancer, AiSettings};
pub use github::{GithubEnhancer, GithubSettings};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest slice of an error body kept in [`EnhancerError::Http`].
const MAX_ERROR_BODY: usize = 200;

fn http_client(timeout: Duration) -> Result<Client, EnhancerError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("readmegen/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| EnhancerError::Network(e.to_string()))
}

fn map_reqwest_error(e: reqwest::Error) -> EnhancerError {
    if e.is_timeout() {
        EnhancerError::Timeout
    } else if e.is_decode() {
        EnhancerError::MalformedResponse(e.to_string())
    } else {
        EnhancerError::Network(e.to_string())
    }
}

/// Pass successful responses through; turn anything else into `Http`.
fn check_status(response: Response) -> Result<Response, EnhancerError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(EnhancerError::Http {
        status: status.as_u16(),
        body: body.chars().take(MAX_ERROR_BODY).collect(),
    })
}

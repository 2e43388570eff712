//! Providers of raw announcement text

mod twitter;

pub use twitter::{SearchResponse, TwitterSource, DEFAULT_API_BASE, DEFAULT_QUERY};

use std::future::Future;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid request URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pulls the text of the single most recent matching post.
///
/// `Ok(None)` means the source answered but had nothing; errors are transport
/// or server failures that the caller retries on its next cycle.
pub trait AnnouncementSource: Send + Sync {
    fn latest(&self) -> impl Future<Output = Result<Option<String>, SourceError>> + Send;
}

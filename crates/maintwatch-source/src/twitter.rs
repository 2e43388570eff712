//! Twitter v2 recent-search client

use crate::{AnnouncementSource, SourceError};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_API_BASE: &str = "https://api.twitter.com";
pub const DEFAULT_QUERY: &str = "perform maintenance from:ArknightsEN";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchMeta {
    pub newest_id: Option<String>,
    #[serde(default)]
    pub result_count: u64,
}

/// Body of `GET /2/tweets/search/recent`. `data` is omitted when nothing matched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<Tweet>,
    #[serde(default)]
    pub meta: SearchMeta,
}

impl SearchResponse {
    /// Text of the newest post: the one whose id matches `meta.newest_id`,
    /// falling back to the first entry (the API returns newest first).
    pub fn newest_text(self) -> Option<String> {
        let newest_id = self.meta.newest_id;
        let mut data = self.data;
        let index = newest_id
            .as_deref()
            .and_then(|id| data.iter().position(|t| t.id == id))
            .unwrap_or(0);
        if index < data.len() {
            Some(data.swap_remove(index).text)
        } else {
            None
        }
    }
}

/// Searches one fixed query with an app bearer token.
pub struct TwitterSource {
    client: reqwest::Client,
    base_url: String,
    bearer_token: String,
    query: String,
}

impl TwitterSource {
    pub fn new(bearer_token: String, query: String) -> Result<Self, SourceError> {
        Self::with_base_url(DEFAULT_API_BASE.to_string(), bearer_token, query)
    }

    /// `base_url` should be like `https://api.twitter.com` (no trailing slash needed).
    pub fn with_base_url(
        base_url: String,
        bearer_token: String,
        query: String,
    ) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
            query,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    fn search_url(&self) -> Result<reqwest::Url, SourceError> {
        let url = format!("{}/2/tweets/search/recent", self.base_url);
        reqwest::Url::parse_with_params(&url, &[("query", self.query.as_str())]).map_err(|e| {
            SourceError::InvalidUrl {
                url,
                reason: e.to_string(),
            }
        })
    }

    pub async fn search(&self) -> Result<SearchResponse, SourceError> {
        let url = self.search_url()?;
        debug!(url = %url, "searching recent posts");

        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SourceError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        info!(
            result_count = parsed.meta.result_count,
            newest_id = parsed.meta.newest_id.as_deref().unwrap_or("-"),
            "recent search complete"
        );
        Ok(parsed)
    }
}

impl AnnouncementSource for TwitterSource {
    async fn latest(&self) -> Result<Option<String>, SourceError> {
        Ok(self.search().await?.newest_text())
    }
}

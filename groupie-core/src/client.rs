use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::models::{Artist, ArtistId, DateRecord, Index, LocationRecord, RelationRecord};

/// A client for the catalogue's read-only JSON API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status} for {url}")]
    Status { status: u16, url: String },
    #[error("malformed response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Transport failure or non-2xx status.
    Network,
    /// Body was not valid JSON or lacked required fields.
    Parse,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport(_) | FetchError::Status { .. } => FetchErrorKind::Network,
            FetchError::Parse { .. } => FetchErrorKind::Parse,
        }
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an endpoint path. Does not make a network request.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET a path and decode the body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.endpoint_url(path);
        debug!("GET {url}");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = resp.text().await?;
        decode_body(&url, &body)
    }

    pub async fn fetch_artists(&self) -> Result<Vec<Artist>, FetchError> {
        self.get_json("/artists").await
    }

    pub async fn fetch_artist(&self, id: ArtistId) -> Result<Artist, FetchError> {
        self.get_json(&format!("/artist/{id}")).await
    }

    pub async fn fetch_locations(&self) -> Result<Vec<LocationRecord>, FetchError> {
        self.fetch_index("/locations").await
    }

    pub async fn fetch_dates(&self) -> Result<Vec<DateRecord>, FetchError> {
        self.fetch_index("/dates").await
    }

    pub async fn fetch_relations(&self) -> Result<Vec<RelationRecord>, FetchError> {
        self.fetch_index("/relations").await
    }

    /// GET a `{ "index": [...] }` collection at `path` and unwrap it.
    pub async fn fetch_index<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, FetchError> {
        let envelope: Index<T> = self.get_json(path).await?;
        Ok(envelope.index)
    }
}

fn decode_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|source| FetchError::Parse {
        url: url.to_string(),
        source,
    })
}

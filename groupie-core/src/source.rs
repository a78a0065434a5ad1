//! Catalog source abstraction
//!
//! The barrier and the screens only need "something that can fetch the five
//! resources". [`ApiClient`] is the real implementation; tests plug in
//! in-memory fakes.
//!
//! Futures are not required to be `Send`: on the web everything runs on the
//! single browser event loop.

use async_trait::async_trait;

use crate::client::{ApiClient, FetchError};
use crate::models::{Artist, ArtistId, DateRecord, LocationRecord, RelationRecord};

#[async_trait(?Send)]
pub trait CatalogSource {
    async fn artists(&self) -> Result<Vec<Artist>, FetchError>;

    async fn artist(&self, id: ArtistId) -> Result<Artist, FetchError>;

    async fn locations(&self) -> Result<Vec<LocationRecord>, FetchError>;

    async fn dates(&self) -> Result<Vec<DateRecord>, FetchError>;

    async fn relations(&self) -> Result<Vec<RelationRecord>, FetchError>;
}

#[async_trait(?Send)]
impl CatalogSource for ApiClient {
    async fn artists(&self) -> Result<Vec<Artist>, FetchError> {
        self.fetch_artists().await
    }

    async fn artist(&self, id: ArtistId) -> Result<Artist, FetchError> {
        self.fetch_artist(id).await
    }

    async fn locations(&self) -> Result<Vec<LocationRecord>, FetchError> {
        self.fetch_locations().await
    }

    async fn dates(&self) -> Result<Vec<DateRecord>, FetchError> {
        self.fetch_dates().await
    }

    async fn relations(&self) -> Result<Vec<RelationRecord>, FetchError> {
        self.fetch_relations().await
    }
}

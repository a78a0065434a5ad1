//! groupie-core - data access and view state for the Groupie Tracker catalogue
//!
//! Everything here is framework agnostic and compiles for both native and
//! `wasm32` targets. The Dioxus views live in `groupie-ui`; the pages that
//! wire them to these controllers live in `groupie-web`.

pub mod barrier;
pub mod client;
pub mod config;
pub mod join;
pub mod models;
pub mod scope;
pub mod screen;
pub mod search;
pub mod source;

pub use barrier::load_artist_detail;
pub use client::{ApiClient, FetchError, FetchErrorKind};
pub use config::{ApiConfig, ConfigError, DEFAULT_API_BASE_URL};
pub use join::{assemble, ArtistDetail};
pub use models::{Artist, ArtistId, DateRecord, DatesLocations, Index, LocationRecord, RelationRecord};
pub use scope::{TaskScope, Ticket};
pub use screen::{ArtistScreen, CatalogueScreen, DetailTab, NavMenu, Notification, Phase};
pub use search::filter_artists;
pub use source::CatalogSource;

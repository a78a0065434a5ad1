//! Wire types for the catalogue API
//!
//! Field names follow the API's camelCase JSON. Required fields are enforced
//! by serde, so a response missing one fails to parse instead of producing a
//! half-filled value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type ArtistId = u32;

/// Concert date -> locations played on that date.
pub type DatesLocations = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ArtistId,
    pub image: String,
    pub name: String,
    pub members: Vec<String>,
    pub creation_date: i32,
    pub first_album: String,
    /// URL of this artist's location record. Not used by the client join.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<String>,
    /// URL of this artist's date record. Not used by the client join.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concert_dates: Option<String>,
    /// URL of this artist's relation record. Not used by the client join.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relations: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: ArtistId,
    pub locations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    /// Owning artist's name, filled in by the API server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRecord {
    pub id: ArtistId,
    pub dates: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRecord {
    pub id: ArtistId,
    #[serde(rename = "datesLocations")]
    pub dates_locations: DatesLocations,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `{ "index": [...] }` envelope used by the collection endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index<T> {
    pub index: Vec<T>,
}

impl<T> Default for Index<T> {
    fn default() -> Self {
        Self { index: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Index<T> {
    fn from(index: Vec<T>) -> Self {
        Self { index }
    }
}

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use groupie_core::join::{dates_for, locations_for, relations_for};
use groupie_core::{Artist, ArtistId, DateRecord, Index, LocationRecord, RelationRecord};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::ApiError;

type SharedCatalog = Arc<Catalog>;

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    query: String,
}

/// JSON API over `catalog`. Records are served with their artist's name filled in.
pub fn api_router(catalog: Catalog) -> Router {
    let state: SharedCatalog = Arc::new(catalog.with_artist_names());

    Router::new()
        .route("/", get(index))
        .route("/artists", get(artists))
        .route("/artist/:id", get(artist))
        .route("/locations", get(locations))
        .route("/dates", get(dates))
        .route("/relations", get(relations))
        .route("/artist/locations/:id", get(artist_locations))
        .route("/artist/dates/:id", get(artist_dates))
        .route("/artist/relations/:id", get(artist_relations))
        .route("/search", get(search))
        .route("/health", get(health))
        .with_state(state)
}

/// Any integer parses; one outside the id range simply matches no artist.
fn parse_artist_id(raw: &str) -> Result<ArtistId, ApiError> {
    let id: i64 = raw.trim().parse().map_err(|_| ApiError::InvalidArtistId)?;
    ArtistId::try_from(id).map_err(|_| ApiError::ArtistNotFound)
}

fn find_artist<'a>(catalog: &'a Catalog, raw: &str) -> Result<&'a Artist, ApiError> {
    let id = parse_artist_id(raw)?;
    catalog.artist(id).ok_or_else(|| {
        debug!("artist {id} not found");
        ApiError::ArtistNotFound
    })
}

async fn index(State(catalog): State<SharedCatalog>) -> Json<Value> {
    Json(json!({ "artists": catalog.artists }))
}

async fn artists(State(catalog): State<SharedCatalog>) -> Json<Vec<Artist>> {
    Json(catalog.artists.clone())
}

async fn artist(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<String>,
) -> Result<Json<Artist>, ApiError> {
    find_artist(&catalog, &id).cloned().map(Json)
}

async fn locations(State(catalog): State<SharedCatalog>) -> Json<Index<LocationRecord>> {
    Json(Index::from(catalog.locations.clone()))
}

async fn dates(State(catalog): State<SharedCatalog>) -> Json<Index<DateRecord>> {
    Json(Index::from(catalog.dates.clone()))
}

async fn relations(State(catalog): State<SharedCatalog>) -> Json<Index<RelationRecord>> {
    Json(Index::from(catalog.relations.clone()))
}

async fn artist_locations(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let artist = find_artist(&catalog, &id)?;
    Ok(Json(json!({
        "name": artist.name,
        "locations": locations_for(artist.id, &catalog.locations),
    })))
}

async fn artist_dates(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let artist = find_artist(&catalog, &id)?;
    Ok(Json(json!({
        "name": artist.name,
        "dates": dates_for(artist.id, &catalog.dates),
    })))
}

async fn artist_relations(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let artist = find_artist(&catalog, &id)?;
    Ok(Json(json!({
        "name": artist.name,
        "relations": relations_for(artist.id, &catalog.relations),
    })))
}

async fn search(
    State(catalog): State<SharedCatalog>,
    Query(params): Query<SearchQuery>,
) -> Json<Value> {
    let found = catalog.search(&params.query);
    Json(json!({ "query": params.query, "artists": found }))
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    use super::*;
    use crate::catalog::fixture;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = api_router(fixture::catalog())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[test]
    fn artist_id_parsing() {
        assert_eq!(parse_artist_id("3"), Ok(3));
        assert_eq!(parse_artist_id("abc"), Err(ApiError::InvalidArtistId));
        assert_eq!(parse_artist_id("1.5"), Err(ApiError::InvalidArtistId));
        assert_eq!(parse_artist_id("-1"), Err(ApiError::ArtistNotFound));
    }

    #[tokio::test]
    async fn index_wraps_artists() {
        let (status, body) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["artists"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn artists_is_a_bare_array() {
        let (status, body) = get_json("/artists").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "Queen");
        assert_eq!(body[0]["creationDate"], 1966);
    }

    #[tokio::test]
    async fn single_artist() {
        let (status, body) = get_json("/artist/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Blur");
    }

    #[tokio::test]
    async fn non_integer_id_is_bad_request() {
        let (status, body) = get_json("/artist/queen").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid artist ID" }));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let (status, body) = get_json("/artist/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Artist not found" }));
    }

    #[tokio::test]
    async fn collections_are_enveloped_and_named() {
        let (status, body) = get_json("/locations").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["index"][0]["name"], "Queen");

        let (_, body) = get_json("/dates").await;
        assert_eq!(body["index"][0]["dates"][0], "*28-01-2020");
        assert_eq!(body["index"][0]["name"], "Pink Floyd");

        let (_, body) = get_json("/relations").await;
        assert_eq!(body["index"][0]["datesLocations"]["30-01-2019"][0], "nagoya-japan");
    }

    #[tokio::test]
    async fn per_artist_views() {
        let (_, body) = get_json("/artist/locations/3").await;
        assert_eq!(
            body,
            json!({ "name": "Pink Floyd", "locations": ["osaka-japan", "nagoya-japan"] })
        );

        let (_, body) = get_json("/artist/dates/3").await;
        assert_eq!(body["dates"].as_array().unwrap().len(), 2);

        let (_, body) = get_json("/artist/relations/3").await;
        assert_eq!(body["relations"]["28-01-2020"], json!(["osaka-japan"]));
    }

    #[tokio::test]
    async fn per_artist_views_for_artist_without_records() {
        let (status, body) = get_json("/artist/dates/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "name": "Blur", "dates": [] }));

        let (status, _) = get_json("/artist/relations/x").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_filters_by_name() {
        let (_, body) = get_json("/search?query=qu").await;
        assert_eq!(body["query"], "qu");
        let names: Vec<&str> = body["artists"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Queen"]);

        let (_, body) = get_json("/search").await;
        assert_eq!(body["artists"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn health_is_plain_ok() {
        let response = api_router(Catalog::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"ok");
    }
}

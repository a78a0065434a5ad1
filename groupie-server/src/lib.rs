//! groupie-server - JSON API backing the Groupie Tracker web app
//!
//! Serves a snapshot of the upstream catalogue from memory. With a web
//! directory configured, the API moves under `/api` and everything else falls
//! back to the single-page app.

pub mod catalog;
pub mod cors;
pub mod error;
pub mod routes;
pub mod snapshot;

use std::path::Path;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use catalog::Catalog;
pub use cors::{cors_layer, DEFAULT_ALLOW_ORIGINS};
pub use error::ApiError;
pub use routes::api_router;
pub use snapshot::{SnapshotError, SnapshotStore, Upstream, DEFAULT_UPSTREAM_URL};

/// Prefix for the API when the web app is served alongside it.
pub const API_PREFIX: &str = "/api";

pub fn build_app(catalog: Catalog, cors: CorsLayer, web_dir: Option<&Path>) -> Router {
    let api = api_router(catalog);

    let router = match web_dir {
        Some(web_dir) => {
            info!("serving web UI from {}", web_dir.display());
            let spa_fallback =
                ServeDir::new(web_dir).fallback(ServeFile::new(web_dir.join("index.html")));
            Router::new()
                .nest(API_PREFIX, api)
                .fallback_service(spa_fallback)
        }
        None => api,
    };

    router.layer(cors).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    use super::*;
    use crate::catalog::fixture;

    fn app(web_dir: Option<&Path>) -> Router {
        build_app(
            fixture::catalog(),
            cors_layer(&DEFAULT_ALLOW_ORIGINS).unwrap(),
            web_dir,
        )
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/artists")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn preflight_from_allowed_origin() {
        let response = app(None).oneshot(preflight("http://localhost:5173")).await.unwrap();

        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "43200");
    }

    #[tokio::test]
    async fn preflight_from_unknown_origin_gets_no_grant() {
        let response = app(None).oneshot(preflight("https://evil.example")).await.unwrap();
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[test]
    fn invalid_origin_is_rejected() {
        assert!(cors_layer(&["http://ok.example", "bad\norigin"]).is_err());
    }

    #[tokio::test]
    async fn web_dir_moves_api_and_serves_spa() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>groupie</html>").unwrap();
        let app = app(Some(dir.path()));

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/artist/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Client-side routes resolve to the app shell.
        let response = app
            .oneshot(Request::builder().uri("/artist/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<html>groupie</html>");
    }
}

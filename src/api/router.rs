use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use tower_http::cors::CorsLayer;

use super::endpoints;
use crate::db::Database;

pub fn router(db: Database) -> axum::Router {
    axum::Router::new()
        .route("/api/top-zones", get(endpoints::top_zones))
        .route("/api/zone-trips", get(endpoints::zone_trips))
        .route("/api/list-trips", get(endpoints::list_trips))
        .route("/api/zones", get(endpoints::zones))
        .layer(cors())
        .with_state(db)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://localhost:5176"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

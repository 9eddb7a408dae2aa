use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::config::ServerSettings;
use crate::presentation::handlers::{
    analyze_audio_doc_handler, analyze_audio_json_handler, health_handler,
};
use crate::presentation::state::AppState;

pub const ANALYZE_JSON_PATH: &str = "/analyze-audio-gemini-json/";
pub const ANALYZE_DOC_PATH: &str = "/analyze-audio-gemini-doc/";

pub fn create_router(state: AppState, server: &ServerSettings) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(ANALYZE_JSON_PATH, post(analyze_audio_json_handler))
        .route(
            ANALYZE_JSON_PATH.trim_end_matches('/'),
            post(analyze_audio_json_handler),
        )
        .route(ANALYZE_DOC_PATH, post(analyze_audio_doc_handler))
        .route(
            ANALYZE_DOC_PATH.trim_end_matches('/'),
            post(analyze_audio_doc_handler),
        )
        .layer(DefaultBodyLimit::max(server.max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors_layer(&server.allowed_origins))
        .with_state(state)
}

/// CORS for a fixed list of origins, mirroring any requested method or header.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

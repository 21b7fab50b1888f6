//! HTTP router.
//!
//! Returns a composable `Router` with every endpoint nested under `/api/`.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::config::MAX_IMAGE_BODY_BYTES;

/// Build the service router from a pre-constructed `ApiContext`.
pub fn api_router(ctx: ApiContext) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/knowledge/diseases", get(endpoints::knowledge::list))
        .route("/knowledge/resolve", get(endpoints::knowledge::resolve))
        .route(
            "/vision-diagnosis",
            post(endpoints::diagnosis::vision)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_BODY_BYTES)), // base64 photos
        )
        .route(
            "/diagnose-description",
            post(endpoints::diagnosis::description),
        )
        .route("/last-diagnosis", get(endpoints::diagnosis::last))
        .route("/report-context", get(endpoints::diagnosis::report_context))
        .route("/chat", post(endpoints::chat::send))
        .route("/translate", post(endpoints::chat::translate))
        .route("/predict-crop", post(endpoints::agronomy::predict_crop))
        .route(
            "/geographic-intelligence",
            post(endpoints::agronomy::geographic),
        )
        .route("/simulate", post(endpoints::agronomy::simulate))
        .with_state(ctx);

    Router::new()
        .nest("/api", routes)
        .layer(CorsLayer::permissive())
}

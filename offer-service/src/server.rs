use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::handlers;
use crate::repository::offer_repository::OfferRepository;

pub struct AppState {
    pub config: Config,
    pub repository: Arc<dyn OfferRepository>,
}

pub fn create_app(state: AppState) -> Router {
    let app_state = Arc::new(state);

    let health_route = Router::new().route("/health", get(|| async { "OK" }));

    let api_routes = Router::new().nest("/offers", handlers::routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(health_route)
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(app_state)
}

async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "no such endpoint")
}

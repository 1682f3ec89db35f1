use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};

use crate::error::AppError;
use crate::models::offer::Offer;
use crate::server::AppState;
use crate::services::offer_service::OfferService;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_valid_offers))
        .route("/", post(save_offer))
        .route("/all", get(get_offers))
        .route("/:id", put(cancel_offer))
}

/// Current and future offers: everything whose validity window contains
/// today.
async fn get_valid_offers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Offer>>, AppError> {
    let offer_service = OfferService::new(state.repository.clone());

    let offers = offer_service.get_valid_offers().await?;

    Ok(Json(offers))
}

/// Every offer in the store, expired ones included.
async fn get_offers(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Offer>>, AppError> {
    let offer_service = OfferService::new(state.repository.clone());

    let offers = offer_service.get_offers().await?;

    Ok(Json(offers))
}

/// An offer needs a name and a startOffer date; anything else is optional.
async fn save_offer(
    State(state): State<Arc<AppState>>,
    Json(offer): Json<Offer>,
) -> Result<Json<Offer>, AppError> {
    let offer_service = OfferService::new(state.repository.clone());

    let saved = offer_service.save(offer).await?;

    Ok(Json(saved))
}

/// Cancelling expires the offer instead of deleting it, hence PUT: the
/// endOffer date is rewritten to yesterday and the record kept.
async fn cancel_offer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Offer>, AppError> {
    let offer_service = OfferService::new(state.repository.clone());

    let cancelled = offer_service.cancel_offer(&id).await?;

    Ok(Json(cancelled))
}

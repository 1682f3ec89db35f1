use std::sync::Arc;

use chrono::Local;

use crate::error::AppError;
use crate::models::offer::Offer;
use crate::repository::offer_repository::OfferRepository;
use crate::utils::validator;

/// Orchestrates validate → persist / query / cancel over the repository
/// port and owns the error taxonomy the HTTP layer exposes.
///
/// Business outcomes (`InvalidOffer`, `NotFound`) pass through untouched;
/// only store failures get wrapped, with a template naming the operation.
pub struct OfferService {
    repository: Arc<dyn OfferRepository>,
}

impl OfferService {
    pub fn new(repository: Arc<dyn OfferRepository>) -> Self {
        Self { repository }
    }

    pub async fn save(&self, offer: Offer) -> Result<Offer, AppError> {
        validator::validate(&offer)?;

        // The persisted record is returned exactly as the store produced
        // it, id included. No field defaulting happens here.
        self.repository
            .save(offer)
            .await
            .map_err(|e| AppError::Storage(format!("The offer could not be saved. [{e}]")))
    }

    /// Offers whose validity window contains today, taken at call time.
    /// Filtering is fully delegated to the repository's date-range query.
    pub async fn get_valid_offers(&self) -> Result<Vec<Offer>, AppError> {
        let today = Local::now().date_naive();

        let offers = self
            .repository
            .find_valid_offers(today)
            .await
            .map_err(|e| AppError::Storage(format!("The offer could not be found. [{e}]")))?;

        if offers.is_empty() {
            return Err(AppError::NotFound("No data found.".to_string()));
        }

        Ok(offers)
    }

    pub async fn get_offers(&self) -> Result<Vec<Offer>, AppError> {
        let offers = self
            .repository
            .find_all()
            .await
            .map_err(|e| AppError::Storage(format!("The offer could not be found. [{e}]")))?;

        if offers.is_empty() {
            return Err(AppError::NotFound("No data found.".to_string()));
        }

        Ok(offers)
    }

    /// Soft-cancel: the repository rewrites `end_offer` to yesterday and
    /// returns the record as read back after the update.
    pub async fn cancel_offer(&self, id: &str) -> Result<Offer, AppError> {
        self.repository
            .cancel_offer_by_id(id)
            .await
            .map_err(|e| AppError::Storage(format!("The offer could not be cancelled. [{e}]")))?
            .ok_or_else(|| AppError::NotFound(format!("No offer found for id {id}.")))
    }
}

//! Field rules an offer must pass before it reaches the repository.
//!
//! Rules are evaluated in declaration order and every failing message is
//! reported, joined with `" - "`.

use crate::error::AppError;
use crate::models::offer::Offer;

const SEPARATOR: &str = " - ";

fn name_is_missing(offer: &Offer) -> bool {
    offer.name.is_empty()
}

fn start_offer_is_missing(offer: &Offer) -> bool {
    offer.start_offer.is_none()
}

const RULES: &[(&str, fn(&Offer) -> bool)] = &[
    ("The name is required", name_is_missing),
    ("The startOffer is required", start_offer_is_missing),
];

pub fn validate(offer: &Offer) -> Result<(), AppError> {
    let failures: Vec<&str> = RULES
        .iter()
        .filter(|(_, failed)| failed(offer))
        .map(|(message, _)| *message)
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(AppError::InvalidOffer(failures.join(SEPARATOR)))
    }
}

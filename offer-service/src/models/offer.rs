use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::date_format;

/// A time-bounded priced promotion record.
///
/// `id` is assigned by the repository on first save and treated as an opaque
/// string everywhere else. Dates use the `dd/MM/yyyy` wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub offer_price: f64,
    #[serde(default, with = "date_format")]
    pub start_offer: Option<NaiveDate>,
    #[serde(default, with = "date_format")]
    pub end_offer: Option<NaiveDate>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Offer {
    /// Inclusive on both ends. An offer without an end date never matches,
    /// so open-ended records stay out of the valid listing.
    pub fn is_valid_at(&self, date: NaiveDate) -> bool {
        match (self.start_offer, self.end_offer) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }
}

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::domain::models::pricing::PricingSource;
use crate::error::PricingError;

/// One guest-facing quote request, consumed once per quote.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub room_id: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub guests: i32,
}

impl BookingRequest {
    pub fn duration_minutes(&self) -> Result<i64, PricingError> {
        let minutes = (self.end_at - self.start_at).num_minutes();
        if minutes <= 0 {
            return Err(PricingError::InvalidBookingRequest(format!(
                "end {} does not follow start {}",
                self.end_at, self.start_at
            )));
        }
        Ok(minutes)
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        self.duration_minutes()?;
        if self.guests < 1 {
            return Err(PricingError::InvalidBookingRequest(format!(
                "guests must be at least 1, got {}",
                self.guests
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentSource {
    Duration,
    Group,
}

/// One modifier's contribution: negative for discounts, positive for
/// surcharges, already clamped so the running total never went below zero.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceAdjustment {
    pub source: AdjustmentSource,
    pub amount: f64,
}

/// Itemized quote. Callers render these line items, so the breakdown is
/// part of the contract.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Flat price of the selected tier.
    pub base: f64,
    /// The selected tier's hour step.
    pub tier_hours: f64,
    pub adjustments: Vec<PriceAdjustment>,
    /// Added after modifiers, never discounted.
    pub extra_guest_surcharge: f64,
    pub total: f64,
}

/// Combined outcome for a booking screen: a price plus whether the
/// requested range is actually free.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub available: bool,
    pub breakdown: PriceBreakdown,
    pub source: PricingSource,
}

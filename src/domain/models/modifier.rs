use serde::{Deserialize, Serialize};

use crate::error::PricingError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModifierType {
    Discount,
    Surcharge,
}

/// Reduces the tier price when the booking duration (minutes) falls in
/// `[min, max]`; `max` absent means unbounded.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DurationModifier {
    pub min_duration_minutes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration_minutes: Option<i64>,
    pub discount_type: DiscountType,
    pub discount_value: f64,
}

impl DurationModifier {
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.min_duration_minutes <= 0 {
            return Err(PricingError::InvalidFormat(
                "minDurationMinutes must be positive".to_string(),
            ));
        }
        if let Some(max) = self.max_duration_minutes {
            if max < self.min_duration_minutes {
                return Err(PricingError::InvalidFormat(
                    "maxDurationMinutes precedes minDurationMinutes".to_string(),
                ));
            }
        }
        validate_discount(self.discount_type, self.discount_value)
    }

    pub fn matches(&self, duration_minutes: i64) -> bool {
        duration_minutes >= self.min_duration_minutes
            && self
                .max_duration_minutes
                .map_or(true, |max| duration_minutes <= max)
    }
}

/// Adjusts the price when the guest count falls in `[minGuests, maxGuests]`;
/// a surcharge adds, a discount subtracts.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupModifier {
    pub min_guests: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_guests: Option<i32>,
    pub modifier_type: ModifierType,
    pub discount_type: DiscountType,
    pub discount_value: f64,
}

impl GroupModifier {
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.min_guests <= 0 {
            return Err(PricingError::InvalidFormat(
                "minGuests must be positive".to_string(),
            ));
        }
        if let Some(max) = self.max_guests {
            if max < self.min_guests {
                return Err(PricingError::InvalidFormat(
                    "maxGuests precedes minGuests".to_string(),
                ));
            }
        }
        validate_discount(self.discount_type, self.discount_value)
    }

    pub fn matches(&self, guests: i32) -> bool {
        guests >= self.min_guests && self.max_guests.map_or(true, |max| guests <= max)
    }
}

fn validate_discount(discount_type: DiscountType, value: f64) -> Result<(), PricingError> {
    if value < 0.0 {
        return Err(PricingError::InvalidFormat(
            "discountValue must not be negative".to_string(),
        ));
    }
    if discount_type == DiscountType::Percentage && value > 100.0 {
        return Err(PricingError::InvalidFormat(
            "percentage discountValue must not exceed 100".to_string(),
        ));
    }
    Ok(())
}

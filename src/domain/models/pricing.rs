use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::domain::services::timeutil::time_to_minutes;
use crate::error::PricingError;

/// A flat price for bookings of at least `hours` hours.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HourlyTier {
    pub hours: f64,
    pub price: f64,
}

/// The pricing a room falls back to when no override window matches.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomPricingDefault {
    pub hourly_tiers: Vec<HourlyTier>,
    pub included_guests: i32,
    pub extra_person_charge_per_hour: f64,
}

impl RoomPricingDefault {
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.hourly_tiers.is_empty() {
            return Err(PricingError::NoPricingAvailable);
        }
        for tier in &self.hourly_tiers {
            if tier.hours <= 0.0 {
                return Err(PricingError::InvalidFormat(
                    format!("tier hours must be positive, got {}", tier.hours),
                ));
            }
            if tier.price < 0.0 {
                return Err(PricingError::InvalidFormat(
                    format!("tier price must not be negative, got {}", tier.price),
                ));
            }
        }
        let mut hours: Vec<f64> = self.hourly_tiers.iter().map(|t| t.hours).collect();
        hours.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        if hours.windows(2).any(|w| w[0] == w[1]) {
            return Err(PricingError::InvalidFormat(
                "duplicate tier hours".to_string(),
            ));
        }
        if self.included_guests < 0 {
            return Err(PricingError::InvalidFormat(
                "includedGuests must not be negative".to_string(),
            ));
        }
        if self.extra_person_charge_per_hour < 0.0 {
            return Err(PricingError::InvalidFormat(
                "extraPersonChargePerHour must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// When an override is active: a recurring weekly window (wrap-around
/// supported, e.g. Friday 17:30 through Monday 01:00) or an inclusive
/// calendar date range.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OverrideWindow {
    #[serde(rename_all = "camelCase")]
    Day {
        /// 0 = Sunday .. 6 = Saturday.
        start_day_of_week: u8,
        end_day_of_week: u8,
        /// "HH:mm", 24h.
        start_time: String,
        end_time: String,
    },
    #[serde(rename_all = "camelCase")]
    Date {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
}

/// A merchant-defined ruleset that replaces parts of the default pricing
/// while its window matches. Absent fields fall back to the default,
/// field by field; `included_guests` always comes from the default
/// (overrides carry no such field by design of the pricing model).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingOverride {
    pub id: String,
    #[serde(flatten)]
    pub window: OverrideWindow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_tiers: Option<Vec<HourlyTier>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_person_charge_per_hour: Option<f64>,
    /// Higher wins among overrides of the same type matching the same
    /// instant. Ties keep the first declared.
    #[serde(default)]
    pub priority: i32,
}

impl PricingOverride {
    pub fn validate(&self) -> Result<(), PricingError> {
        match &self.window {
            OverrideWindow::Day {
                start_day_of_week,
                end_day_of_week,
                start_time,
                end_time,
            } => {
                if *start_day_of_week > 6 || *end_day_of_week > 6 {
                    return Err(PricingError::InvalidFormat(
                        "day of week must be in 0..=6 (0 = Sunday)".to_string(),
                    ));
                }
                time_to_minutes(start_time)?;
                time_to_minutes(end_time)?;
            }
            OverrideWindow::Date {
                start_date,
                end_date,
            } => {
                if end_date < start_date {
                    return Err(PricingError::InvalidFormat(format!(
                        "endDate {} precedes startDate {}",
                        end_date, start_date
                    )));
                }
            }
        }
        if let Some(tiers) = &self.hourly_tiers {
            if tiers.is_empty() {
                return Err(PricingError::InvalidFormat(
                    "override hourlyTiers must not be empty when present".to_string(),
                ));
            }
            for tier in tiers {
                if tier.hours <= 0.0 || tier.price < 0.0 {
                    return Err(PricingError::InvalidFormat(
                        "override tier out of range".to_string(),
                    ));
                }
            }
        }
        if let Some(charge) = self.extra_person_charge_per_hour {
            if charge < 0.0 {
                return Err(PricingError::InvalidFormat(
                    "override extraPersonChargePerHour must not be negative".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Where a resolved ruleset came from, for display ("weekend pricing
/// applied") and for tests.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PricingSource {
    Default,
    #[serde(rename_all = "camelCase")]
    DayOverride { override_id: String },
    #[serde(rename_all = "camelCase")]
    DateOverride { override_id: String },
}

/// The single ruleset in effect for one booking start instant.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPricing {
    pub hourly_tiers: Vec<HourlyTier>,
    pub included_guests: i32,
    pub extra_person_charge_per_hour: f64,
    pub source: PricingSource,
}

/// Immutable pricing snapshot for one room, fetched by the caller and
/// handed to the resolver/calculator as plain data.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingContext {
    pub room_id: String,
    /// IANA zone name; unparseable values fall back to UTC.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    pub default: RoomPricingDefault,
    #[serde(default)]
    pub overrides: Vec<PricingOverride>,
    #[serde(default)]
    pub duration_modifiers: Vec<super::modifier::DurationModifier>,
    #[serde(default)]
    pub group_modifiers: Vec<super::modifier::GroupModifier>,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl PricingContext {
    /// Parses and validates the pricing payload the backend serves.
    pub fn from_json(json: &str) -> Result<Self, PricingError> {
        let ctx: PricingContext = serde_json::from_str(json)
            .map_err(|e| PricingError::InvalidFormat(format!("pricing context: {}", e)))?;
        ctx.validate()?;
        Ok(ctx)
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        self.default.validate()?;
        for o in &self.overrides {
            o.validate()?;
        }
        for m in &self.duration_modifiers {
            m.validate()?;
        }
        for m in &self.group_modifiers {
            m.validate()?;
        }
        Ok(())
    }
}

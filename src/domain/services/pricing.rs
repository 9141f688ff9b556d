use tracing::debug;

use crate::domain::models::booking::{AdjustmentSource, PriceAdjustment, PriceBreakdown};
use crate::domain::models::modifier::{
    DiscountType, DurationModifier, GroupModifier, ModifierType,
};
use crate::domain::models::pricing::{HourlyTier, ResolvedPricing};
use crate::error::PricingError;

/// Computes the itemized price for a resolved ruleset.
///
/// Tier selection is a floor lookup: the tier with the largest hour step
/// not exceeding the requested duration, or the smallest tier when the
/// booking is shorter than every step ("book at least N hours, priced at
/// the N-hour rate"). Never nearest-match, never interpolated.
///
/// Duration modifiers stack first, then group modifiers, each applied to
/// the running total in declaration order with a clamp at zero after every
/// step. The extra-guest surcharge is added last and is not subject to
/// modifier discounts.
pub fn calculate_price(
    resolved: &ResolvedPricing,
    duration_minutes: i64,
    guests: i32,
    duration_modifiers: &[DurationModifier],
    group_modifiers: &[GroupModifier],
) -> Result<PriceBreakdown, PricingError> {
    if duration_minutes <= 0 {
        return Err(PricingError::InvalidBookingRequest(format!(
            "duration must be positive, got {} minutes",
            duration_minutes
        )));
    }
    if guests < 1 {
        return Err(PricingError::InvalidBookingRequest(format!(
            "guests must be at least 1, got {}",
            guests
        )));
    }
    if resolved.hourly_tiers.is_empty() {
        return Err(PricingError::NoPricingAvailable);
    }

    let hours = duration_minutes as f64 / 60.0;
    let tier = select_tier(&resolved.hourly_tiers, hours);

    let mut running = tier.price;
    let mut adjustments = Vec::new();

    for rule in duration_modifiers.iter().filter(|m| m.matches(duration_minutes)) {
        let delta = discount_delta(rule.discount_type, rule.discount_value, running);
        running = apply_delta(&mut adjustments, AdjustmentSource::Duration, running, -delta);
    }

    for rule in group_modifiers.iter().filter(|m| m.matches(guests)) {
        let delta = discount_delta(rule.discount_type, rule.discount_value, running);
        let signed = match rule.modifier_type {
            ModifierType::Surcharge => delta,
            ModifierType::Discount => -delta,
        };
        running = apply_delta(&mut adjustments, AdjustmentSource::Group, running, signed);
    }

    let extra_guests = (guests - resolved.included_guests).max(0);
    let extra_guest_surcharge =
        extra_guests as f64 * resolved.extra_person_charge_per_hour * hours;

    let total = running + extra_guest_surcharge;

    debug!(
        base = tier.price,
        tier_hours = tier.hours,
        surcharge = extra_guest_surcharge,
        total,
        "price computed for {:.2}h x {} guests", hours, guests
    );

    Ok(PriceBreakdown {
        base: tier.price,
        tier_hours: tier.hours,
        adjustments,
        extra_guest_surcharge,
        total,
    })
}

/// Floor lookup over tiers sorted ascending by hour step.
fn select_tier(tiers: &[HourlyTier], hours: f64) -> HourlyTier {
    let mut sorted: Vec<&HourlyTier> = tiers.iter().collect();
    sorted.sort_by(|a, b| {
        a.hours
            .partial_cmp(&b.hours)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted
        .iter()
        .rev()
        .find(|t| t.hours <= hours)
        .copied()
        .unwrap_or(sorted[0])
        .clone()
}

fn discount_delta(discount_type: DiscountType, value: f64, running: f64) -> f64 {
    match discount_type {
        DiscountType::Fixed => value,
        DiscountType::Percentage => running * value / 100.0,
    }
}

/// Applies a signed delta, clamping the running total at zero, and records
/// the delta as actually applied.
fn apply_delta(
    adjustments: &mut Vec<PriceAdjustment>,
    source: AdjustmentSource,
    running: f64,
    signed_delta: f64,
) -> f64 {
    let next = (running + signed_delta).max(0.0);
    adjustments.push(PriceAdjustment {
        source,
        amount: next - running,
    });
    next
}

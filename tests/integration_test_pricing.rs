mod common;

use common::standard_context;
use room_pricing_engine::{
    calculate_price, resolve_pricing, AdjustmentSource, DiscountType, DurationModifier,
    GroupModifier, ModifierType, PricingError, ResolveOptions,
};
use chrono::{TimeZone, Utc};

fn resolved_default() -> room_pricing_engine::ResolvedPricing {
    let ctx = standard_context();
    let any_tuesday = Utc.with_ymd_and_hms(2026, 1, 6, 10, 0, 0).unwrap();
    resolve_pricing(&ctx, any_tuesday, ResolveOptions::default()).unwrap()
}

#[test]
fn test_tier_floor_five_hours_prices_at_four_hour_rate() {
    let r = resolved_default();
    let b = calculate_price(&r, 5 * 60, 2, &[], &[]).unwrap();
    assert_eq!(b.base, 200.0);
    assert_eq!(b.tier_hours, 4.0);
    assert_eq!(b.total, 200.0);
}

#[test]
fn test_exact_tier_match() {
    let r = resolved_default();
    let b = calculate_price(&r, 6 * 60, 2, &[], &[]).unwrap();
    assert_eq!(b.base, 280.0);
    assert_eq!(b.tier_hours, 6.0);
}

#[test]
fn test_extra_guest_surcharge() {
    // includedGuests=4, $5/h extra, 4h at $200, 6 guests: 2 * 5 * 4 = $40.
    let r = resolved_default();
    let b = calculate_price(&r, 4 * 60, 6, &[], &[]).unwrap();
    assert_eq!(b.base, 200.0);
    assert_eq!(b.extra_guest_surcharge, 40.0);
    assert_eq!(b.total, 240.0);
}

#[test]
fn test_surcharge_uses_fractional_hours() {
    let r = resolved_default();
    // 4.5h books the 4h tier but the surcharge runs on real hours.
    let b = calculate_price(&r, 270, 5, &[], &[]).unwrap();
    assert_eq!(b.base, 200.0);
    assert_eq!(b.extra_guest_surcharge, 1.0 * 5.0 * 4.5);
}

#[test]
fn test_modifier_stacking_order() {
    // $200 -> 20% duration discount -> $160 -> $10 group surcharge -> $170.
    // The surcharge applies after the discount, not before.
    let r = resolved_default();
    let duration_mods = vec![DurationModifier {
        min_duration_minutes: 60,
        max_duration_minutes: None,
        discount_type: DiscountType::Percentage,
        discount_value: 20.0,
    }];
    let group_mods = vec![GroupModifier {
        min_guests: 1,
        max_guests: None,
        modifier_type: ModifierType::Surcharge,
        discount_type: DiscountType::Fixed,
        discount_value: 10.0,
    }];
    let b = calculate_price(&r, 4 * 60, 2, &duration_mods, &group_mods).unwrap();
    assert_eq!(b.total, 170.0);
    assert_eq!(b.adjustments.len(), 2);
    assert_eq!(b.adjustments[0].source, AdjustmentSource::Duration);
    assert_eq!(b.adjustments[0].amount, -40.0);
    assert_eq!(b.adjustments[1].source, AdjustmentSource::Group);
    assert_eq!(b.adjustments[1].amount, 10.0);
}

#[test]
fn test_percentage_discounts_stack_sequentially() {
    // Two 50% discounts leave a quarter, not zero.
    let r = resolved_default();
    let duration_mods = vec![
        DurationModifier {
            min_duration_minutes: 60,
            max_duration_minutes: None,
            discount_type: DiscountType::Percentage,
            discount_value: 50.0,
        },
        DurationModifier {
            min_duration_minutes: 60,
            max_duration_minutes: None,
            discount_type: DiscountType::Percentage,
            discount_value: 50.0,
        },
    ];
    let b = calculate_price(&r, 4 * 60, 2, &duration_mods, &[]).unwrap();
    assert_eq!(b.total, 50.0);
}

#[test]
fn test_running_total_clamps_at_zero() {
    let r = resolved_default();
    let duration_mods = vec![DurationModifier {
        min_duration_minutes: 60,
        max_duration_minutes: None,
        discount_type: DiscountType::Fixed,
        discount_value: 300.0,
    }];
    let b = calculate_price(&r, 4 * 60, 2, &duration_mods, &[]).unwrap();
    // Only $200 of the $300 discount could apply.
    assert_eq!(b.adjustments[0].amount, -200.0);
    assert_eq!(b.total, 0.0);
}

#[test]
fn test_surcharge_is_exempt_from_discounts() {
    let r = resolved_default();
    let duration_mods = vec![DurationModifier {
        min_duration_minutes: 60,
        max_duration_minutes: None,
        discount_type: DiscountType::Percentage,
        discount_value: 100.0,
    }];
    // Base fully discounted, extra-guest surcharge untouched.
    let b = calculate_price(&r, 4 * 60, 6, &duration_mods, &[]).unwrap();
    assert_eq!(b.total, 40.0);
}

#[test]
fn test_modifiers_outside_their_range_do_not_apply() {
    let r = resolved_default();
    let duration_mods = vec![DurationModifier {
        min_duration_minutes: 300,
        max_duration_minutes: Some(600),
        discount_type: DiscountType::Percentage,
        discount_value: 50.0,
    }];
    let group_mods = vec![GroupModifier {
        min_guests: 8,
        max_guests: None,
        modifier_type: ModifierType::Discount,
        discount_type: DiscountType::Fixed,
        discount_value: 30.0,
    }];
    let b = calculate_price(&r, 4 * 60, 2, &duration_mods, &group_mods).unwrap();
    assert!(b.adjustments.is_empty());
    assert_eq!(b.total, 200.0);
}

#[test]
fn test_group_discount_subtracts() {
    let r = resolved_default();
    let group_mods = vec![GroupModifier {
        min_guests: 2,
        max_guests: Some(4),
        modifier_type: ModifierType::Discount,
        discount_type: DiscountType::Percentage,
        discount_value: 10.0,
    }];
    let b = calculate_price(&r, 4 * 60, 3, &[], &group_mods).unwrap();
    assert_eq!(b.total, 180.0);
}

#[test]
fn test_invalid_requests_fail_fast() {
    let r = resolved_default();
    assert!(matches!(
        calculate_price(&r, 0, 2, &[], &[]),
        Err(PricingError::InvalidBookingRequest(_))
    ));
    assert!(matches!(
        calculate_price(&r, -60, 2, &[], &[]),
        Err(PricingError::InvalidBookingRequest(_))
    ));
    assert!(matches!(
        calculate_price(&r, 60, 0, &[], &[]),
        Err(PricingError::InvalidBookingRequest(_))
    ));
}

#[test]
fn test_pricing_is_deterministic() {
    // The host-facing charts recompute this dozens of times per render.
    let r = resolved_default();
    let first = calculate_price(&r, 5 * 60, 6, &[], &[]).unwrap();
    for _ in 0..50 {
        let again = calculate_price(&r, 5 * 60, 6, &[], &[]).unwrap();
        assert_eq!(again, first);
    }
}

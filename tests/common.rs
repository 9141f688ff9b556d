use room_pricing_engine::{
    HourlyTier, PricingContext, RoomPricingDefault,
};
use tracing_subscriber::EnvFilter;

#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_test_writer()
        .try_init();
}

/// Room with tiers 4h/$200 and 6h/$280, 4 guests included, $5/h per extra
/// guest — the shape the booking screens fetch from the backend.
#[allow(dead_code)]
pub fn standard_context() -> PricingContext {
    PricingContext {
        room_id: "room-1".to_string(),
        timezone: "UTC".to_string(),
        default: RoomPricingDefault {
            hourly_tiers: vec![
                HourlyTier { hours: 4.0, price: 200.0 },
                HourlyTier { hours: 6.0, price: 280.0 },
            ],
            included_guests: 4,
            extra_person_charge_per_hour: 5.0,
        },
        overrides: vec![],
        duration_modifiers: vec![],
        group_modifiers: vec![],
    }
}

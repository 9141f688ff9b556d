//! Pricing & availability resolution engine for room bookings.
//!
//! Pure, deterministic computations over immutable snapshots: the caller
//! fetches a room's pricing configuration and schedule, and this crate
//! answers "what does this booking cost" and "is this range free". It never
//! reads a clock beyond the supplied start instant, never performs I/O, and
//! never writes — persistence and the check-then-book transaction belong to
//! the surrounding system.

pub mod domain;
pub mod error;

pub use domain::models::booking::{
    AdjustmentSource, BookingRequest, PriceAdjustment, PriceBreakdown, Quote,
};
pub use domain::models::modifier::{DiscountType, DurationModifier, GroupModifier, ModifierType};
pub use domain::models::pricing::{
    HourlyTier, OverrideWindow, PricingContext, PricingOverride, PricingSource,
    ResolvedPricing, RoomPricingDefault,
};
pub use domain::models::schedule::{ScheduleSlot, SlotKind};
pub use domain::services::availability::{
    conflicting_slots, effective_window, has_conflict, is_day_fully_blocked,
};
pub use domain::services::pricing::calculate_price;
pub use domain::services::quote::quote;
pub use domain::services::resolver::{resolve_pricing, ResolveOptions};
pub use error::PricingError;

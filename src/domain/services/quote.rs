use tracing::info;

use crate::domain::models::booking::{BookingRequest, Quote};
use crate::domain::models::pricing::PricingContext;
use crate::domain::models::schedule::ScheduleSlot;
use crate::domain::services::availability::has_conflict;
use crate::domain::services::pricing::calculate_price;
use crate::domain::services::resolver::{resolve_pricing, ResolveOptions};
use crate::error::PricingError;

/// The composition a booking screen performs: validate the request, resolve
/// the ruleset for the start instant, price the stay, and check the range
/// against the room's schedule snapshot.
///
/// Price and availability stay independent computations; an unavailable
/// range still gets a full breakdown so the screen can show "booked" next
/// to the would-be price.
pub fn quote(
    ctx: &PricingContext,
    schedule: &[ScheduleSlot],
    request: &BookingRequest,
    opts: ResolveOptions,
) -> Result<Quote, PricingError> {
    request.validate()?;

    let duration_minutes = request.duration_minutes()?;
    let resolved = resolve_pricing(ctx, request.start_at, opts)?;
    let breakdown = calculate_price(
        &resolved,
        duration_minutes,
        request.guests,
        &ctx.duration_modifiers,
        &ctx.group_modifiers,
    )?;
    let available = !has_conflict(schedule, request.start_at, request.end_at)?;

    info!(
        room_id = %request.room_id,
        total = breakdown.total,
        available,
        "quote computed for {} to {}", request.start_at, request.end_at
    );

    Ok(Quote {
        available,
        breakdown,
        source: resolved.source,
    })
}

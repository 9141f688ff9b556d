use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::domain::models::schedule::{ScheduleSlot, SlotKind};
use crate::error::PricingError;

/// The window a slot actually occupies: booking slots stay unavailable for
/// the cleaning buffer past their end, everything else occupies exactly
/// `[start, end)`.
pub fn effective_window(slot: &ScheduleSlot) -> (DateTime<Utc>, DateTime<Utc>) {
    let buffer = match slot.kind {
        SlotKind::Booking => slot.cleaning_buffer_minutes.unwrap_or(0),
        SlotKind::Cleaning | SlotKind::Blocked => 0,
    };
    (slot.start_time, slot.end_time + Duration::minutes(buffer))
}

/// Half-open interval overlap against every slot's effective window.
/// Touching ranges ([10:00,12:00) then [12:00,13:00)) do not conflict.
pub fn has_conflict(
    slots: &[ScheduleSlot],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<bool, PricingError> {
    Ok(!conflicting_slots(slots, start, end)?.is_empty())
}

/// The slots whose effective windows intersect `[start, end)`, for
/// caller-side messaging.
pub fn conflicting_slots<'a>(
    slots: &'a [ScheduleSlot],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<&'a ScheduleSlot>, PricingError> {
    if end <= start {
        return Err(PricingError::InvalidBookingRequest(format!(
            "proposed end {} does not follow start {}",
            end, start
        )));
    }
    Ok(slots
        .iter()
        .filter(|slot| {
            let (slot_start, slot_end) = effective_window(slot);
            slot_start < end && start < slot_end
        })
        .collect())
}

/// True when a blocked slot covers the entire calendar day in the room's
/// zone (local 00:00:00 through 23:59:59.999).
pub fn is_day_fully_blocked(slots: &[ScheduleSlot], date: NaiveDate, tz: &Tz) -> bool {
    let day_start = match tz
        .from_local_datetime(&date.and_hms_opt(0, 0, 0).expect("valid midnight"))
        .single()
    {
        Some(dt) => dt.with_timezone(&Utc),
        None => return false,
    };
    let day_end = match tz
        .from_local_datetime(&date.and_hms_milli_opt(23, 59, 59, 999).expect("valid day end"))
        .single()
    {
        Some(dt) => dt.with_timezone(&Utc),
        None => return false,
    };

    slots.iter().any(|slot| {
        if slot.kind != SlotKind::Blocked {
            return false;
        }
        let (slot_start, slot_end) = effective_window(slot);
        slot_start <= day_start && slot_end >= day_end
    })
}

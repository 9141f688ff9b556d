use chrono::{NaiveTime, Timelike};

use crate::error::PricingError;

/// Parses a 24h "HH:mm" boundary into minutes since midnight, [0, 1440).
pub fn time_to_minutes(value: &str) -> Result<u32, PricingError> {
    let time = NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| PricingError::InvalidFormat(format!("expected HH:mm, got {:?}", value)))?;
    Ok(time.hour() * 60 + time.minute())
}

/// Day-of-week range membership, 0 = Sunday. A `start > end` range wraps
/// across the week boundary (Fri..Mon covers Fri, Sat, Sun, Mon).
pub fn day_of_week_in_range(day: u8, start: u8, end: u8) -> bool {
    if start <= end {
        start <= day && day <= end
    } else {
        day >= start || day <= end
    }
}

/// Time-of-day membership for a (possibly wrapped) weekly window, given the
/// day the instant falls on. Non-wrapped windows compare the time alone;
/// wrapped windows constrain only the boundary days, any day strictly
/// inside the wrap matches at every time.
pub fn time_in_range(
    day: u8,
    minutes: u32,
    start_day: u8,
    end_day: u8,
    start_minutes: u32,
    end_minutes: u32,
) -> bool {
    if start_day <= end_day {
        return start_minutes <= minutes && minutes <= end_minutes;
    }
    if day == start_day {
        minutes >= start_minutes
    } else if day == end_day {
        minutes <= end_minutes
    } else {
        true
    }
}

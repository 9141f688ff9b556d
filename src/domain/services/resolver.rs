use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::domain::models::pricing::{
    OverrideWindow, PricingContext, PricingOverride, PricingSource, ResolvedPricing,
};
use crate::domain::services::timeutil::{day_of_week_in_range, time_in_range, time_to_minutes};
use crate::error::PricingError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// When set, two overrides of the same type matching with equal top
    /// priority raise `AmbiguousOverride` instead of keeping the first
    /// declared.
    pub strict_overrides: bool,
}

/// Picks the single pricing ruleset in effect at `start_at`.
///
/// Day-type overrides are scanned first; date-type overrides only apply
/// when no day-type window matches. Among matches of the same type the
/// highest priority wins, ties keep the first declared. With no match the
/// room default applies verbatim, so in non-strict mode this cannot fail
/// for a room with a valid default.
pub fn resolve_pricing(
    ctx: &PricingContext,
    start_at: DateTime<Utc>,
    opts: ResolveOptions,
) -> Result<ResolvedPricing, PricingError> {
    let tz: Tz = ctx.timezone.parse().unwrap_or(chrono_tz::UTC);
    let local = start_at.with_timezone(&tz);

    let day = local.weekday().num_days_from_sunday() as u8;
    let minutes = local.hour() * 60 + local.minute();
    let date = local.date_naive();

    let day_matches: Vec<&PricingOverride> = ctx
        .overrides
        .iter()
        .filter(|o| match &o.window {
            OverrideWindow::Day {
                start_day_of_week,
                end_day_of_week,
                start_time,
                end_time,
            } => {
                // Malformed boundaries are treated as 00:00; from_json
                // validation rejects them upstream.
                let start_min = time_to_minutes(start_time).unwrap_or(0);
                let end_min = time_to_minutes(end_time).unwrap_or(0);
                day_of_week_in_range(day, *start_day_of_week, *end_day_of_week)
                    && time_in_range(
                        day,
                        minutes,
                        *start_day_of_week,
                        *end_day_of_week,
                        start_min,
                        end_min,
                    )
            }
            OverrideWindow::Date { .. } => false,
        })
        .collect();

    if let Some(winner) = pick_winner(&day_matches, opts, "day")? {
        debug!(
            room_id = %ctx.room_id,
            override_id = %winner.id,
            "day override matched for {}", local
        );
        return Ok(apply_override(ctx, winner, PricingSource::DayOverride {
            override_id: winner.id.clone(),
        }));
    }

    let date_matches: Vec<&PricingOverride> = ctx
        .overrides
        .iter()
        .filter(|o| match &o.window {
            OverrideWindow::Date {
                start_date,
                end_date,
            } => *start_date <= date && date <= *end_date,
            OverrideWindow::Day { .. } => false,
        })
        .collect();

    if let Some(winner) = pick_winner(&date_matches, opts, "date")? {
        debug!(
            room_id = %ctx.room_id,
            override_id = %winner.id,
            "date override matched for {}", date
        );
        return Ok(apply_override(ctx, winner, PricingSource::DateOverride {
            override_id: winner.id.clone(),
        }));
    }

    Ok(ResolvedPricing {
        hourly_tiers: ctx.default.hourly_tiers.clone(),
        included_guests: ctx.default.included_guests,
        extra_person_charge_per_hour: ctx.default.extra_person_charge_per_hour,
        source: PricingSource::Default,
    })
}

fn pick_winner<'a>(
    matches: &[&'a PricingOverride],
    opts: ResolveOptions,
    kind: &str,
) -> Result<Option<&'a PricingOverride>, PricingError> {
    let top_priority = match matches.iter().map(|o| o.priority).max() {
        Some(p) => p,
        None => return Ok(None),
    };
    let mut at_top = matches.iter().filter(|o| o.priority == top_priority);
    let winner = at_top.next().copied();
    if let (Some(first), Some(second)) = (winner, at_top.next()) {
        if opts.strict_overrides {
            return Err(PricingError::AmbiguousOverride(format!(
                "{} overrides {} and {} both match at priority {}",
                kind, first.id, second.id, top_priority
            )));
        }
        warn!(
            first = %first.id,
            second = %second.id,
            priority = top_priority,
            "multiple {} overrides match, keeping the first declared", kind
        );
    }
    Ok(winner)
}

fn apply_override(
    ctx: &PricingContext,
    rule: &PricingOverride,
    source: PricingSource,
) -> ResolvedPricing {
    // Field-by-field fallback, never a deep merge. included_guests always
    // comes from the default: overrides carry no such field.
    ResolvedPricing {
        hourly_tiers: rule
            .hourly_tiers
            .clone()
            .unwrap_or_else(|| ctx.default.hourly_tiers.clone()),
        included_guests: ctx.default.included_guests,
        extra_person_charge_per_hour: rule
            .extra_person_charge_per_hour
            .unwrap_or(ctx.default.extra_person_charge_per_hour),
        source,
    }
}

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Booking,
    Cleaning,
    Blocked,
}

/// A committed time range on a room's schedule. Created when a booking is
/// confirmed or a merchant blocks time, destroyed on cancellation/unblock.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub id: String,
    pub room_id: String,
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub kind: SlotKind,
    /// Only meaningful on booking slots: the room stays occupied for this
    /// many minutes past `end_time` before it can be rebooked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleaning_buffer_minutes: Option<i64>,
}

impl ScheduleSlot {
    pub fn new(
        room_id: String,
        kind: SlotKind,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            room_id,
            date: start_time.date_naive(),
            start_time,
            end_time,
            kind,
            cleaning_buffer_minutes: None,
        }
    }

    pub fn with_cleaning_buffer(mut self, minutes: i64) -> Self {
        self.cleaning_buffer_minutes = Some(minutes);
        self
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BookingEventKind {
    Booked,
    Cancelled,
}

/// Emitted after a trip's roster changes, for live seat-count feeds.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookingEvent {
    pub trip_id: String,
    pub user_id: String,
    pub kind: BookingEventKind,
    pub seats_remaining: u32,
    /// Unix timestamp (seconds).
    pub occurred_at: i64,
}

//! Domain model for an event.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Generated key for an event. Results point at events through this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(Uuid);

impl EventId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event::{}", self.0)
    }
}

/// An event with limited seating.
/// Invariant: `booked_seats <= total_seats`, and `booked_seats` only grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub location: String,
    pub date: NaiveDate,
    pub total_seats: u32,
    pub booked_seats: u32,
}

impl Event {
    pub fn new(name: &str, location: &str, date: NaiveDate, total_seats: u32) -> Self {
        Self {
            id: EventId::generate(),
            name: name.to_string(),
            location: location.to_string(),
            date,
            total_seats,
            booked_seats: 0,
        }
    }

    pub fn is_full(&self) -> bool {
        self.booked_seats >= self.total_seats
    }

    pub fn seats_left(&self) -> u32 {
        self.total_seats.saturating_sub(self.booked_seats)
    }

    /// Take one seat if any is left. Returns false and leaves the count alone when full.
    pub fn try_book_seat(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        self.booked_seats += 1;
        true
    }

    /// "Seats: booked/total"
    pub fn occupancy(&self) -> String {
        format!("{}/{}", self.booked_seats, self.total_seats)
    }
}

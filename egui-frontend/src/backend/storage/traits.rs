//! # Storage Traits
//!
//! This module defines the storage abstraction traits that the domain services
//! are written against. The collections only grow: there are no update or
//! delete operations apart from seat reservation.

use anyhow::Result;
use chrono::NaiveDate;
use crate::backend::domain::models::event::{Event, EventId};
use crate::backend::domain::models::event_result::EventResult;
use crate::backend::domain::models::user::User;

/// Outcome of trying to take one seat of an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatReservation {
    /// A seat was taken; carries the event after the increment
    Reserved(Event),
    /// No seat left; the event is unchanged
    Full(Event),
    NotFound,
}

/// Trait defining the interface for account storage operations
pub trait UserStorage: Send + Sync {
    /// Insert a user unless the username is taken.
    /// Returns false, leaving storage unchanged, when it is.
    fn insert_unique(&self, user: &User) -> Result<bool>;

    /// Retrieve a user by username
    fn get_user(&self, username: &str) -> Result<Option<User>>;

    /// List all users in creation order
    fn list_users(&self) -> Result<Vec<User>>;
}

/// Trait defining the interface for event storage operations
pub trait EventStorage: Send + Sync {
    /// Append a new event
    fn store_event(&self, event: &Event) -> Result<()>;

    /// Retrieve a specific event by ID
    fn get_event(&self, event_id: &EventId) -> Result<Option<Event>>;

    /// List all events in creation order
    fn list_events(&self) -> Result<Vec<Event>>;

    /// Events held on the given date, in creation order
    fn list_events_on(&self, date: NaiveDate) -> Result<Vec<Event>>;

    /// Check capacity and take one seat as a single step
    fn reserve_seat(&self, event_id: &EventId) -> Result<SeatReservation>;
}

/// Trait defining the interface for result storage operations
pub trait ResultStorage: Send + Sync {
    /// Append a result
    fn store_result(&self, result: &EventResult) -> Result<()>;

    /// Results for one event, in publication order
    fn list_results_for_event(&self, event_id: &EventId) -> Result<Vec<EventResult>>;

    /// Every result, in publication order
    fn list_results(&self) -> Result<Vec<EventResult>>;
}

//! Typed failures for domain operations.
//!
//! Services return `anyhow::Result` and wrap these, so callers that need to
//! branch on the failure kind use `err.downcast_ref::<DomainError>()`.

use crate::backend::domain::models::event::EventId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Username already exists!")]
    DuplicateUsername(String),
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    #[error("Invalid date '{0}'. Use YYYY-MM-DD.")]
    InvalidDate(String),
    #[error("Invalid seat count '{0}'. Enter a whole number.")]
    InvalidSeatCount(String),
    #[error("Total seats must be greater than zero")]
    NonPositiveSeats,
    #[error("Invalid month: {0}. Must be between 1 and 12")]
    InvalidMonth(u32),
    #[error("Sorry, event is full.")]
    EventFull { event_name: String },
    #[error("Event not found: {0}")]
    EventNotFound(EventId),
    #[error("Invalid credentials or role. If you're a student ask the admin to create an account.")]
    InvalidCredentials,
}

impl DomainError {
    /// Validation failures of the Add Event form, reported under one heading
    pub fn is_event_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidDate(_) | DomainError::InvalidSeatCount(_) | DomainError::NonPositiveSeats
        )
    }
}

//! Domain model for a published result.

use serde::{Deserialize, Serialize};
use crate::backend::domain::models::event::EventId;

/// One placing of one student in one event. Results are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResult {
    pub event_id: EventId,
    pub student_name: String,
    pub department: String,
    /// Free text such as "1st" or "Participation"
    pub position: String,
}

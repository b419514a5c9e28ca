use anyhow::Result;
use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::connection::MemoryConnection;
use crate::backend::domain::models::event::{Event, EventId};
use crate::backend::storage::traits::{EventStorage, SeatReservation};

/// In-memory event repository
#[derive(Clone)]
pub struct EventRepository {
    connection: Arc<MemoryConnection>,
}

impl EventRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl EventStorage for EventRepository {
    fn store_event(&self, event: &Event) -> Result<()> {
        let mut events = self.connection.events_mut()?;
        events.push(event.clone());
        debug!("Stored event {} ({} events total)", event.id, events.len());
        Ok(())
    }

    fn get_event(&self, event_id: &EventId) -> Result<Option<Event>> {
        let events = self.connection.events()?;
        Ok(events.iter().find(|e| e.id == *event_id).cloned())
    }

    fn list_events(&self) -> Result<Vec<Event>> {
        Ok(self.connection.events()?.clone())
    }

    fn list_events_on(&self, date: NaiveDate) -> Result<Vec<Event>> {
        let events = self.connection.events()?;
        Ok(events.iter().filter(|e| e.date == date).cloned().collect())
    }

    fn reserve_seat(&self, event_id: &EventId) -> Result<SeatReservation> {
        let mut events = self.connection.events_mut()?;
        let Some(event) = events.iter_mut().find(|e| e.id == *event_id) else {
            return Ok(SeatReservation::NotFound);
        };

        if event.try_book_seat() {
            debug!("Reserved seat {} for event {}", event.occupancy(), event.id);
            Ok(SeatReservation::Reserved(event.clone()))
        } else {
            Ok(SeatReservation::Full(event.clone()))
        }
    }
}

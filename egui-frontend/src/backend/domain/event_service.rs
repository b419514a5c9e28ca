use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};
use std::sync::Arc;

use crate::backend::domain::commands::event::{
    CreateEventCommand, CreateEventResult, ListEventsResult, RegisterForEventCommand, RegisterForEventResult,
};
use crate::backend::domain::errors::DomainError;
use crate::backend::domain::models::event::{Event, EventId};
use crate::backend::storage::memory::{EventRepository, MemoryConnection};
use crate::backend::storage::traits::{EventStorage, SeatReservation};

/// Service for creating events and taking registrations
#[derive(Clone)]
pub struct EventService {
    event_repository: EventRepository,
}

impl EventService {
    /// Create a new EventService
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        let event_repository = EventRepository::new(connection);
        Self { event_repository }
    }

    /// Create an event from raw form text
    pub fn create_event(&self, command: CreateEventCommand) -> Result<CreateEventResult> {
        info!("Creating event: name={}, date={}, seats={}", command.name.trim(), command.date.trim(), command.total_seats.trim());

        let name = command.name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyField("Event name").into());
        }

        // Parse everything before touching storage
        let date = Self::parse_event_date(&command.date)?;
        let total_seats = Self::parse_total_seats(&command.total_seats)?;

        let event = Event::new(name, command.location.trim(), date, total_seats);
        self.event_repository.store_event(&event)?;

        info!("Created event '{}' on {} with ID: {}", event.name, event.date, event.id);

        Ok(CreateEventResult {
            event,
            success_message: "Event added!".to_string(),
        })
    }

    /// Parse an ISO-8601 calendar date (YYYY-MM-DD)
    pub fn parse_event_date(input: &str) -> Result<NaiveDate, DomainError> {
        let trimmed = input.trim();
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map_err(|_| DomainError::InvalidDate(trimmed.to_string()))
    }

    /// Parse a seat count, which must be a positive whole number
    pub fn parse_total_seats(input: &str) -> Result<u32, DomainError> {
        let trimmed = input.trim();
        let seats: i64 = trimmed
            .parse()
            .map_err(|_| DomainError::InvalidSeatCount(trimmed.to_string()))?;

        if seats <= 0 {
            return Err(DomainError::NonPositiveSeats);
        }

        u32::try_from(seats).map_err(|_| DomainError::InvalidSeatCount(trimmed.to_string()))
    }

    /// List all events in creation order
    pub fn list_events(&self) -> Result<ListEventsResult> {
        let events = self.event_repository.list_events()?;
        info!("Found {} events", events.len());
        Ok(ListEventsResult { events })
    }

    /// Get an event by ID
    pub fn get_event(&self, event_id: &EventId) -> Result<Option<Event>> {
        self.event_repository.get_event(event_id)
    }

    /// Events held on a date, in creation order
    pub fn events_on(&self, date: NaiveDate) -> Result<Vec<Event>> {
        self.event_repository.list_events_on(date)
    }

    /// Take one seat for a student. Fails with `EventFull` and no change when none is left.
    pub fn register_for_event(&self, command: RegisterForEventCommand) -> Result<RegisterForEventResult> {
        info!("Registering '{}' for event {}", command.username, command.event_id);

        match self.event_repository.reserve_seat(&command.event_id)? {
            SeatReservation::Reserved(event) => {
                info!("Registered '{}' for '{}' (seats {})", command.username, event.name, event.occupancy());
                Ok(RegisterForEventResult {
                    success_message: format!("Registered for {}!", event.name),
                    event,
                })
            }
            SeatReservation::Full(event) => {
                warn!("Registration rejected, '{}' is full ({})", event.name, event.occupancy());
                Err(DomainError::EventFull { event_name: event.name }.into())
            }
            SeatReservation::NotFound => {
                warn!("Registration for unknown event {}", command.event_id);
                Err(DomainError::EventNotFound(command.event_id).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test() -> EventService {
        EventService::new(Arc::new(MemoryConnection::new()))
    }

    fn create_command(name: &str, date: &str, seats: &str) -> CreateEventCommand {
        CreateEventCommand {
            name: name.to_string(),
            location: " Main Hall ".to_string(),
            date: date.to_string(),
            total_seats: seats.to_string(),
        }
    }

    fn register(service: &EventService, event_id: EventId) -> Result<RegisterForEventResult> {
        service.register_for_event(RegisterForEventCommand {
            event_id,
            username: "student".to_string(),
        })
    }

    fn domain_error(err: &anyhow::Error) -> Option<&DomainError> {
        err.downcast_ref::<DomainError>()
    }

    #[test]
    fn test_create_event() {
        let service = setup_test();
        let result = service.create_event(create_command(" Cultural Fest ", " 2025-11-15 ", " 200 ")).unwrap();

        assert_eq!(result.event.name, "Cultural Fest");
        assert_eq!(result.event.location, "Main Hall");
        assert_eq!(result.event.date, NaiveDate::from_ymd_opt(2025, 11, 15).unwrap());
        assert_eq!(result.event.total_seats, 200);
        assert_eq!(result.event.booked_seats, 0);
        assert_eq!(result.success_message, "Event added!");
        assert_eq!(service.list_events().unwrap().events.len(), 1);
    }

    #[test]
    fn test_create_event_validation_leaves_store_unchanged() {
        let service = setup_test();

        let err = service.create_event(create_command("Bad date", "2025/11/15", "10")).unwrap_err();
        assert!(matches!(domain_error(&err), Some(DomainError::InvalidDate(_))));

        let err = service.create_event(create_command("Bad date", "2025-02-30", "10")).unwrap_err();
        assert!(matches!(domain_error(&err), Some(DomainError::InvalidDate(_))));

        let err = service.create_event(create_command("Bad seats", "2025-11-15", "fifty")).unwrap_err();
        assert!(matches!(domain_error(&err), Some(DomainError::InvalidSeatCount(_))));

        let err = service.create_event(create_command("No seats", "2025-11-15", "0")).unwrap_err();
        assert_eq!(domain_error(&err), Some(&DomainError::NonPositiveSeats));

        let err = service.create_event(create_command("Negative seats", "2025-11-15", "-5")).unwrap_err();
        assert_eq!(domain_error(&err), Some(&DomainError::NonPositiveSeats));

        let err = service.create_event(create_command("  ", "2025-11-15", "5")).unwrap_err();
        assert_eq!(domain_error(&err), Some(&DomainError::EmptyField("Event name")));

        assert!(service.list_events().unwrap().events.is_empty());
    }

    #[test]
    fn test_parse_total_seats() {
        assert_eq!(EventService::parse_total_seats("50"), Ok(50));
        assert_eq!(EventService::parse_total_seats(" 1 "), Ok(1));
        assert!(EventService::parse_total_seats("1.5").is_err());
        assert!(EventService::parse_total_seats("").is_err());
        assert!(EventService::parse_total_seats("99999999999").is_err());
    }

    #[test]
    fn test_register_until_full() {
        let service = setup_test();
        let event = service.create_event(create_command("Small", "2025-11-15", "3")).unwrap().event;

        let mut previous = 0;
        for _ in 0..3 {
            let result = register(&service, event.id).unwrap();
            assert_eq!(result.event.booked_seats, previous + 1);
            assert_eq!(result.success_message, "Registered for Small!");
            previous = result.event.booked_seats;
        }

        let err = register(&service, event.id).unwrap_err();
        assert!(matches!(domain_error(&err), Some(DomainError::EventFull { event_name }) if event_name == "Small"));
        assert_eq!(err.to_string(), "Sorry, event is full.");

        let stored = service.get_event(&event.id).unwrap().unwrap();
        assert_eq!(stored.booked_seats, 3);
    }

    #[test]
    fn test_register_unknown_event() {
        let service = setup_test();
        let missing = EventId::generate();
        let err = register(&service, missing).unwrap_err();
        assert_eq!(domain_error(&err), Some(&DomainError::EventNotFound(missing)));
    }

    #[test]
    fn test_events_on() {
        let service = setup_test();
        service.create_event(create_command("First", "2025-11-08", "10")).unwrap();
        service.create_event(create_command("Elsewhere", "2025-11-09", "10")).unwrap();
        service.create_event(create_command("Second", "2025-11-08", "10")).unwrap();

        let on_day = service.events_on(NaiveDate::from_ymd_opt(2025, 11, 8).unwrap()).unwrap();
        let names: Vec<&str> = on_day.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);

        assert!(service.events_on(NaiveDate::from_ymd_opt(2025, 11, 10).unwrap()).unwrap().is_empty());
    }
}

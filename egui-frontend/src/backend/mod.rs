//! # Backend Module for egui Frontend
//!
//! This backend module provides direct, synchronous access to domain services
//! and storage for the egui frontend:
//! - Every service shares one in-memory `MemoryConnection`
//! - Nothing is persisted; each run starts from the configured seed
//! - Seed data goes through the same service operations as user input

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use storage::MemoryConnection;

use crate::config::SeedConfig;
use domain::commands::event::CreateEventCommand;
use domain::models::user::{optional_field, User};

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub user_service: domain::UserService,
    pub event_service: domain::EventService,
    pub result_service: domain::ResultService,
    pub calendar_service: domain::CalendarService,
    pub auth_service: domain::AuthService,
}

impl Backend {
    /// Create a backend with empty stores
    pub fn empty() -> Self {
        let connection = Arc::new(MemoryConnection::new());

        let user_service = domain::UserService::new(connection.clone());
        let event_service = domain::EventService::new(connection.clone());
        let result_service = domain::ResultService::new(connection.clone(), event_service.clone());
        let auth_service = domain::AuthService::new(connection);
        let calendar_service = domain::CalendarService::new();

        Backend {
            user_service,
            event_service,
            result_service,
            calendar_service,
            auth_service,
        }
    }

    /// Create a backend and load the seed accounts and events
    pub fn new(seed: &SeedConfig) -> Result<Self> {
        let backend = Self::empty();

        for seed_user in &seed.users {
            let mut user = User::new(seed_user.username.trim(), seed_user.password.trim(), seed_user.role);
            user.full_name = seed_user.full_name.as_deref().and_then(optional_field);
            user.department = seed_user.department.as_deref().and_then(optional_field);
            backend
                .user_service
                .seed_user(user)
                .with_context(|| format!("Invalid seed account '{}'", seed_user.username))?;
        }

        for seed_event in &seed.events {
            let command = CreateEventCommand {
                name: seed_event.name.clone(),
                location: seed_event.location.clone(),
                date: seed_event.date.clone(),
                total_seats: seed_event.total_seats.to_string(),
            };
            backend
                .event_service
                .create_event(command)
                .with_context(|| format!("Invalid seed event '{}'", seed_event.name))?;
        }

        info!("Backend seeded with {} accounts and {} events", seed.users.len(), seed.events.len());
        Ok(backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SeedEvent, SeedUser};
    use domain::errors::DomainError;
    use shared::Role;

    #[test]
    fn test_default_seed() {
        let backend = Backend::new(&SeedConfig::default()).unwrap();

        let users = backend.user_service.list_users().unwrap().users;
        let accounts: Vec<(&str, Role)> = users.iter().map(|u| (u.username.as_str(), u.role)).collect();
        assert_eq!(accounts, vec![("admin", Role::Admin), ("faculty", Role::Faculty)]);

        let events = backend.event_service.list_events().unwrap().events;
        let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Tech Symposium", "AI Workshop", "Cultural Fest"]);
        assert!(events.iter().all(|e| e.booked_seats == 0));
    }

    #[test]
    fn test_bad_seed_date_is_an_error() {
        let seed = SeedConfig {
            users: vec![],
            events: vec![SeedEvent {
                name: "Broken".to_string(),
                location: "Nowhere".to_string(),
                date: "11/08/2025".to_string(),
                total_seats: 10,
            }],
        };

        let err = Backend::new(&seed).err().unwrap();
        assert!(err.to_string().contains("Broken"));
        assert!(matches!(err.root_cause().downcast_ref::<DomainError>(), Some(DomainError::InvalidDate(_))));
    }

    #[test]
    fn test_duplicate_seed_account_is_an_error() {
        let admin = SeedUser {
            username: "admin".to_string(),
            password: "admin".to_string(),
            role: Role::Admin,
            full_name: None,
            department: None,
        };
        let seed = SeedConfig {
            users: vec![admin.clone(), admin],
            events: vec![],
        };

        assert!(Backend::new(&seed).is_err());
    }
}

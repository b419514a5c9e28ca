//! Shared in-memory store.
//!
//! One `MemoryConnection` is created per `Backend` and handed to every
//! repository as an `Arc`. Each collection has its own lock; operations that
//! must check and then write (unique usernames, seat reservation) do both
//! under one write guard.

use anyhow::{anyhow, Result};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::backend::domain::models::event::Event;
use crate::backend::domain::models::event_result::EventResult;
use crate::backend::domain::models::user::User;

#[derive(Debug, Default)]
pub struct MemoryConnection {
    users: RwLock<Vec<User>>,
    events: RwLock<Vec<Event>>,
    results: RwLock<Vec<EventResult>>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> Result<RwLockReadGuard<'_, Vec<User>>> {
        self.users.read().map_err(|_| anyhow!("User store lock poisoned"))
    }

    pub fn users_mut(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>> {
        self.users.write().map_err(|_| anyhow!("User store lock poisoned"))
    }

    pub fn events(&self) -> Result<RwLockReadGuard<'_, Vec<Event>>> {
        self.events.read().map_err(|_| anyhow!("Event store lock poisoned"))
    }

    pub fn events_mut(&self) -> Result<RwLockWriteGuard<'_, Vec<Event>>> {
        self.events.write().map_err(|_| anyhow!("Event store lock poisoned"))
    }

    pub fn results(&self) -> Result<RwLockReadGuard<'_, Vec<EventResult>>> {
        self.results.read().map_err(|_| anyhow!("Result store lock poisoned"))
    }

    pub fn results_mut(&self) -> Result<RwLockWriteGuard<'_, Vec<EventResult>>> {
        self.results.write().map_err(|_| anyhow!("Result store lock poisoned"))
    }
}

//! # App State Module
//!
//! This module defines the central application state structure and initialization logic
//! for the event organizer.
//!
//! ## Key Types:
//! - `SmartEventApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Initialize the app inside an eframe creation context
//! - `with_backend()` - Build the app around an existing backend (used by tests)
//!
//! ## State Management:
//! Everything the UI needs lives in one struct: the backend services, the
//! current session (or none while the login screen shows), and one state
//! object per UI concern.

use log::info;

use crate::backend::Backend;
use crate::config::AppConfig;
use crate::ui::state::{CalendarState, LoginState, ModalState, ReminderScheduler, Session, UIState};

/// Main application struct for the egui event organizer
pub struct SmartEventApp {
    pub backend: Backend,
    pub config: AppConfig,

    /// `None` while the login screen is showing
    pub session: Option<Session>,

    pub login: LoginState,
    pub ui: UIState,
    pub calendar: CalendarState,
    pub modal: ModalState,
    pub reminders: ReminderScheduler,
}

impl SmartEventApp {
    /// Create the app, seeding the backend from configuration
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing SmartEventApp");

        crate::ui::setup_style(&cc.egui_ctx);

        let backend = Backend::new(&config.seed)?;
        Ok(Self::with_backend(backend, config))
    }

    pub fn with_backend(backend: Backend, config: AppConfig) -> Self {
        let (month, year) = backend.calendar_service.current_month();
        let reminders = ReminderScheduler::new(config.reminder.clone());

        Self {
            backend,
            config,
            session: None,
            login: LoginState::new(),
            ui: UIState::new(),
            calendar: CalendarState::new(month, year),
            modal: ModalState::new(),
            reminders,
        }
    }
}

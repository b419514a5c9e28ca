//! Smart Event Organizer: campus events, registrations and results in an egui
//! desktop window.
//!
//! - `backend` - in-memory domain services, seeded at startup
//! - `config` - optional YAML configuration
//! - `ui` - eframe application and its components

pub mod backend;
pub mod config;
pub mod ui;

pub use ui::app_state::SmartEventApp;

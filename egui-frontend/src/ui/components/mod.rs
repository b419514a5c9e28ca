//! # UI Components Module
//!
//! This module organizes all UI components for the event organizer.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `actions` - Backend calls behind every button and form
//! - `styling` - Visual styling and color constants
//! - `login_screen` - Username/password/role form
//! - `header` - Dashboard title bar with logout
//! - `dashboard` - Role-scoped action buttons and the output area
//! - `modals` - Dashboard dialogs and message boxes
//! - `calendar_renderer` - Calendar window with event markers
//! - `reminder_popup` - Fading reminder popups

pub mod actions;
pub mod calendar_renderer;
pub mod dashboard;
pub mod header;
pub mod login_screen;
pub mod modals;
pub mod reminder_popup;
pub mod styling;

pub use styling::{colors, primary_button, setup_style};

//! Domain layer: models, commands and the services the UI calls.

pub mod auth_service;
pub mod calendar;
pub mod commands;
pub mod errors;
pub mod event_service;
pub mod listing;
pub mod models;
pub mod result_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use calendar::CalendarService;
pub use errors::DomainError;
pub use event_service::EventService;
pub use result_service::ResultService;
pub use user_service::UserService;

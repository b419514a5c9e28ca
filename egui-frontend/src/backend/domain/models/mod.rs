pub mod user;
pub mod event;
pub mod event_result;

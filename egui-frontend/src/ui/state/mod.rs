//! # UI State
//!
//! State owned by `SmartEventApp`, split by concern:
//! - `session_state` - the logged-in account
//! - `login_state` - login form fields
//! - `ui_state` - output text and message boxes
//! - `calendar_state` - calendar window and navigation
//! - `modal_state` - dashboard dialogs and forms
//! - `reminder_state` - delayed reminder popups

pub mod calendar_state;
pub mod login_state;
pub mod modal_state;
pub mod reminder_state;
pub mod session_state;
pub mod ui_state;

pub use calendar_state::CalendarState;
pub use login_state::LoginState;
pub use modal_state::{ActiveModal, ModalState};
pub use reminder_state::{ActiveReminder, Reminder, ReminderPhase, ReminderScheduler, SessionToken};
pub use session_state::Session;
pub use ui_state::{Notice, NoticeKind, UIState};

//! # Modal State Module
//!
//! This module contains all state related to dashboard dialogs and their forms.
//!
//! ## Responsibilities:
//! - Which dialog is open (at most one at a time)
//! - Form fields of each dialog and their conversion to backend commands
//!
//! ## Purpose:
//! Forms hold raw text exactly as typed. Parsing and validation happen in the
//! backend services, so a rejected form keeps its contents for correction.

use chrono::Local;
use crate::backend::domain::commands::event::CreateEventCommand;
use crate::backend::domain::commands::result::PublishResultCommand;
use crate::backend::domain::commands::user::CreateStudentCommand;
use crate::backend::domain::models::event::{Event, EventId};

/// The dialog currently shown over the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveModal {
    None,
    AddStudent,
    AddEvent,
    PublishResult,
    Register,
    ViewResults,
    /// Yes/no question after a successful registration
    ReminderPrompt(Event),
}

#[derive(Debug, Clone, Default)]
pub struct AddStudentForm {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub department: String,
}

impl AddStudentForm {
    pub fn to_command(&self) -> CreateStudentCommand {
        CreateStudentCommand {
            username: self.username.clone(),
            password: self.password.clone(),
            full_name: self.full_name.clone(),
            department: self.department.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddEventForm {
    pub name: String,
    pub location: String,
    /// YYYY-MM-DD, pre-filled with today
    pub date: String,
    pub total_seats: String,
}

impl AddEventForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            date: Local::now().date_naive().to_string(),
            total_seats: "50".to_string(),
        }
    }

    pub fn to_command(&self) -> CreateEventCommand {
        CreateEventCommand {
            name: self.name.clone(),
            location: self.location.clone(),
            date: self.date.clone(),
            total_seats: self.total_seats.clone(),
        }
    }
}

impl Default for AddEventForm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PublishResultForm {
    pub event_id: Option<EventId>,
    pub student_name: String,
    pub department: String,
    pub position: String,
}

impl PublishResultForm {
    /// `None` until an event is picked
    pub fn to_command(&self) -> Option<PublishResultCommand> {
        Some(PublishResultCommand {
            event_id: self.event_id?,
            student_name: self.student_name.clone(),
            department: self.department.clone(),
            position: self.position.clone(),
        })
    }
}

/// State shared by all dialogs
#[derive(Debug)]
pub struct ModalState {
    pub active: ActiveModal,

    /// Events offered in the dialog's combo box, loaded when it opens
    pub event_choices: Vec<Event>,

    /// Event picked in the Register and View Results dialogs
    pub selected_event: Option<EventId>,

    pub add_student_form: AddStudentForm,
    pub add_event_form: AddEventForm,
    pub publish_result_form: PublishResultForm,
}

impl ModalState {
    pub fn new() -> Self {
        Self {
            active: ActiveModal::None,
            event_choices: Vec::new(),
            selected_event: None,
            add_student_form: AddStudentForm::default(),
            add_event_form: AddEventForm::new(),
            publish_result_form: PublishResultForm::default(),
        }
    }

    /// Open a dialog with fresh forms
    pub fn open(&mut self, modal: ActiveModal, event_choices: Vec<Event>) {
        let first_event = event_choices.first().map(|e| e.id);

        self.add_student_form = AddStudentForm::default();
        self.add_event_form = AddEventForm::new();
        self.publish_result_form = PublishResultForm {
            event_id: first_event,
            ..PublishResultForm::default()
        };
        self.selected_event = first_event;
        self.event_choices = event_choices;
        self.active = modal;
    }

    pub fn close(&mut self) {
        self.active = ActiveModal::None;
        self.event_choices.clear();
    }

    pub fn is_open(&self) -> bool {
        self.active != ActiveModal::None
    }

    /// Combo box caption for an event choice
    pub fn event_label(&self, event_id: Option<EventId>) -> String {
        event_id
            .and_then(|id| self.event_choices.iter().find(|e| e.id == id))
            .map(|e| format!("{} ({})", e.name, e.date))
            .unwrap_or_else(|| "Select an event".to_string())
    }
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(name: &str) -> Event {
        Event::new(name, "Main Hall", NaiveDate::from_ymd_opt(2025, 11, 15).unwrap(), 10)
    }

    #[test]
    fn test_open_preselects_first_event() {
        let mut state = ModalState::new();
        let events = vec![event("Cultural Fest"), event("Quiz")];
        let first = events[0].id;

        state.open(ActiveModal::Register, events);
        assert!(state.is_open());
        assert_eq!(state.selected_event, Some(first));
        assert_eq!(state.publish_result_form.event_id, Some(first));
        assert_eq!(state.event_label(state.selected_event), "Cultural Fest (2025-11-15)");

        state.close();
        assert!(!state.is_open());
        assert!(state.event_choices.is_empty());
    }

    #[test]
    fn test_open_resets_forms() {
        let mut state = ModalState::new();
        state.add_student_form.username = "leftover".to_string();
        state.add_event_form.total_seats = "7".to_string();

        state.open(ActiveModal::AddEvent, vec![]);
        assert!(state.add_student_form.username.is_empty());
        assert_eq!(state.add_event_form.total_seats, "50");
        assert_eq!(state.add_event_form.date, Local::now().date_naive().to_string());
        assert_eq!(state.event_label(None), "Select an event");
    }

    #[test]
    fn test_publish_form_requires_event() {
        let mut form = PublishResultForm::default();
        assert!(form.to_command().is_none());

        let picked = event("Quiz");
        form.event_id = Some(picked.id);
        form.student_name = "Asha".to_string();
        let command = form.to_command().unwrap();
        assert_eq!(command.event_id, picked.id);
        assert_eq!(command.student_name, "Asha");
    }
}

//! # Actions Module
//!
//! This module handles everything the UI asks the backend to do, and maps the
//! outcome back onto UI state.
//!
//! ## Key Functions:
//! - `submit_login()` / `logout()` - Session lifecycle
//! - `run_action()` - Dispatch a dashboard button
//! - `submit_*()` - Submit the open dialog's form
//! - `answer_reminder_prompt()` - Schedule (or skip) a reminder popup
//! - `open_calendar()`, `calendar_previous_month()`, `calendar_next_month()`,
//!   `select_calendar_day()` - Calendar window data
//!
//! ## Data Flow:
//! 1. A render function calls one of these methods on click
//! 2. The method builds a command from form state and calls a backend service
//! 3. Success closes the dialog and confirms with a message box
//! 4. Failure shows the error and leaves the form as typed
//!
//! None of these methods touch egui, so they are tested directly.

use chrono::NaiveDate;
use log::{info, warn};
use std::time::Instant;

use shared::{DashboardAction, Role};
use crate::backend::domain::commands::event::RegisterForEventCommand;
use crate::backend::domain::commands::result::ResultsForEventQuery;
use crate::backend::domain::errors::DomainError;
use crate::backend::domain::listing::{event_list_report, results_report, user_list_report};
use crate::backend::domain::models::event::Event;
use crate::ui::app_state::SmartEventApp;
use crate::ui::state::{ActiveModal, Reminder, Session};

impl SmartEventApp {
    /// Check the login form and open a session on success
    pub fn submit_login(&mut self) {
        match self.backend.auth_service.login(self.login.to_command()) {
            Ok(result) => {
                let token = self.reminders.open_session();
                info!("🔑 {} logged in as {}", result.user.username, result.user.role);
                self.session = Some(Session::new(result.user, token));
                self.login.clear();
                self.ui.clear();
            }
            Err(e) => {
                self.login.password.clear();
                self.login.error_message = Some(e.to_string());
            }
        }
    }

    /// Close the session, cancelling its reminders, and return to login
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!("🔑 {} logged out", session.user.username);
            self.reminders.close_session(session.token);
        }
        self.modal.close();
        self.calendar.close();
        self.ui.clear();
        self.login.clear();
    }

    /// Run a dashboard button for the current session
    pub fn run_action(&mut self, action: DashboardAction) {
        let Some(session) = &self.session else {
            return;
        };
        if !session.can(action) {
            warn!("{} may not {:?}", session.role(), action);
            return;
        }
        if self.modal.is_open() {
            warn!("Ignoring {:?} while a dialog is open", action);
            return;
        }

        info!("▶️ Dashboard action: {:?}", action);
        match action {
            DashboardAction::ViewUsers => self.show_user_list(),
            DashboardAction::ViewEvents => self.show_event_list(),
            DashboardAction::AddStudent => self.modal.open(ActiveModal::AddStudent, Vec::new()),
            DashboardAction::AddEvent => self.modal.open(ActiveModal::AddEvent, Vec::new()),
            DashboardAction::PublishResult => {
                self.open_event_dialog(ActiveModal::PublishResult, "No events available to publish results for.")
            }
            DashboardAction::Register => self.open_event_dialog(ActiveModal::Register, "No events available."),
            DashboardAction::ViewResults => self.open_event_dialog(ActiveModal::ViewResults, "No events available."),
            DashboardAction::ViewCalendar => self.open_calendar(),
        }
    }

    fn open_event_dialog(&mut self, modal: ActiveModal, empty_message: &str) {
        let events = self.load_events();
        if events.is_empty() {
            self.ui.show_info("Info", empty_message);
            return;
        }
        self.modal.open(modal, events);
    }

    fn load_events(&mut self) -> Vec<Event> {
        match self.backend.event_service.list_events() {
            Ok(result) => result.events,
            Err(e) => {
                self.ui.show_error("Error", format!("Failed to load events: {}", e));
                Vec::new()
            }
        }
    }

    pub fn show_user_list(&mut self) {
        match self.backend.user_service.list_users() {
            Ok(result) => self.ui.set_output(user_list_report(&result.users)),
            Err(e) => self.ui.show_error("Error", format!("Failed to load users: {}", e)),
        }
    }

    pub fn show_event_list(&mut self) {
        let events = self.load_events();
        self.ui.set_output(event_list_report(&events));
    }

    pub fn submit_add_student(&mut self) {
        match self.backend.user_service.create_student(self.modal.add_student_form.to_command()) {
            Ok(result) => {
                self.modal.close();
                self.ui.show_info("Success", result.success_message);
            }
            Err(e) => self.ui.show_error("Error", e.to_string()),
        }
    }

    pub fn submit_add_event(&mut self) {
        match self.backend.event_service.create_event(self.modal.add_event_form.to_command()) {
            Ok(result) => {
                self.modal.close();
                self.ui.show_info("Success", result.success_message);
                if self.calendar.open {
                    self.refresh_calendar();
                }
            }
            Err(e) => {
                let is_input_error = e
                    .downcast_ref::<DomainError>()
                    .is_some_and(DomainError::is_event_input_error);
                if is_input_error {
                    self.ui.show_error("Error", format!("Invalid date or seats\n{}", e));
                } else {
                    self.ui.show_error("Error", e.to_string());
                }
            }
        }
    }

    pub fn submit_publish_result(&mut self) {
        let Some(role) = self.session.as_ref().map(Session::role) else {
            return;
        };
        let Some(command) = self.modal.publish_result_form.to_command() else {
            self.ui.show_error("Error", "Select an event first.");
            return;
        };

        match self.backend.result_service.publish_result(command) {
            Ok(result) => {
                let message = match role {
                    Role::Faculty => format!("Result saved for {}", result.event.name),
                    Role::Admin | Role::Student => format!("Result published for event: {}", result.event.name),
                };
                self.modal.close();
                self.ui.show_info("Success", message);
            }
            Err(e) => self.ui.show_error("Error", e.to_string()),
        }
    }

    /// Take a seat in the selected event, then offer a reminder
    pub fn submit_register(&mut self) {
        let Some(username) = self.session.as_ref().map(|s| s.user.username.clone()) else {
            return;
        };
        let Some(event_id) = self.modal.selected_event else {
            self.ui.show_error("Error", "Select an event first.");
            return;
        };

        match self.backend.event_service.register_for_event(RegisterForEventCommand { event_id, username }) {
            Ok(result) => {
                self.ui.show_info("Success", result.success_message);
                self.show_event_list();
                if let Some(day) = self.calendar.selected_day {
                    self.select_calendar_day(day);
                }
                self.modal.close();
                self.modal.active = ActiveModal::ReminderPrompt(result.event);
            }
            Err(e) => self.ui.show_error("Error", e.to_string()),
        }
    }

    /// Close the reminder question, scheduling the popup on "yes"
    pub fn answer_reminder_prompt(&mut self, accept: bool, now: Instant) {
        if !matches!(self.modal.active, ActiveModal::ReminderPrompt(_)) {
            return;
        }
        let ActiveModal::ReminderPrompt(event) = std::mem::replace(&mut self.modal.active, ActiveModal::None) else {
            return;
        };
        if !accept {
            info!("🔔 Reminder declined for '{}'", event.name);
            return;
        }
        let Some(session) = &self.session else {
            return;
        };

        let reminder = Reminder {
            student_name: session.user.display_name().to_string(),
            event_name: event.name,
            event_date: event.date,
            location: event.location,
        };
        self.reminders.schedule(session.token, reminder, now);
    }

    pub fn submit_view_results(&mut self) {
        let Some(event_id) = self.modal.selected_event else {
            self.ui.show_error("Error", "Select an event first.");
            return;
        };

        match self.backend.result_service.results_for_event(ResultsForEventQuery { event_id }) {
            Ok(listing) => {
                self.ui.set_output(results_report(&listing.event.name, &listing.results));
                self.modal.close();
            }
            Err(e) => self.ui.show_error("Error", e.to_string()),
        }
    }

    /// Open the calendar window on the current month
    pub fn open_calendar(&mut self) {
        let (month, year) = self.backend.calendar_service.current_month();
        self.calendar.set_month(month, year);
        self.calendar.selected_day = None;
        self.calendar.day_report = None;
        self.calendar.open = true;
        self.refresh_calendar();
    }

    pub fn refresh_calendar(&mut self) {
        let result = self.backend.calendar_service.get_calendar_month_with_events(
            self.calendar.selected_month,
            self.calendar.selected_year,
            &self.backend.event_service,
        );
        match result {
            Ok(month) => self.calendar.calendar_month = Some(month),
            Err(e) => self.ui.show_error("Error", format!("Failed to load calendar: {}", e)),
        }
    }

    pub fn calendar_previous_month(&mut self) {
        let (month, year) = self
            .backend
            .calendar_service
            .previous_month(self.calendar.selected_month, self.calendar.selected_year);
        info!("🗓️ Calendar moved to {}/{}", month, year);
        self.calendar.set_month(month, year);
        self.refresh_calendar();
    }

    pub fn calendar_next_month(&mut self) {
        let (month, year) = self
            .backend
            .calendar_service
            .next_month(self.calendar.selected_month, self.calendar.selected_year);
        info!("🗓️ Calendar moved to {}/{}", month, year);
        self.calendar.set_month(month, year);
        self.refresh_calendar();
    }

    pub fn select_calendar_day(&mut self, date: NaiveDate) {
        info!("🗓️ Selected day {}", date);
        match self.backend.event_service.events_on(date) {
            Ok(events) => {
                self.calendar.selected_day = Some(date);
                self.calendar.day_report = Some(self.backend.calendar_service.day_report(date, &events));
            }
            Err(e) => self.ui.show_error("Error", e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Backend;
    use crate::config::{AppConfig, SeedConfig};
    use crate::ui::state::NoticeKind;
    use std::time::Duration;

    fn setup_test() -> SmartEventApp {
        let backend = Backend::new(&SeedConfig::default()).unwrap();
        SmartEventApp::with_backend(backend, AppConfig::default())
    }

    fn login_as(app: &mut SmartEventApp, username: &str, password: &str, role: Role) {
        app.login.username = username.to_string();
        app.login.password = password.to_string();
        app.login.role = role;
        app.submit_login();
    }

    fn add_student(app: &mut SmartEventApp, username: &str) {
        app.run_action(DashboardAction::AddStudent);
        let form = &mut app.modal.add_student_form;
        form.username = username.to_string();
        form.password = "pw".to_string();
        form.full_name = "Asha Rao".to_string();
        form.department = "CSE".to_string();
        app.submit_add_student();
    }

    fn notice_text(app: &SmartEventApp) -> &str {
        app.ui.notice.as_ref().map(|n| n.text.as_str()).unwrap_or("")
    }

    #[test]
    fn test_failed_login_stays_on_login_screen() {
        let mut app = setup_test();
        login_as(&mut app, "admin", "admin", Role::Faculty);

        assert!(app.session.is_none());
        assert_eq!(
            app.login.error_message.as_deref(),
            Some("Invalid credentials or role. If you're a student ask the admin to create an account.")
        );
        assert_eq!(app.login.username, "admin");
        assert!(app.login.password.is_empty());
    }

    #[test]
    fn test_admin_creates_student_who_can_log_in() {
        let mut app = setup_test();
        login_as(&mut app, "admin", "admin", Role::Admin);
        add_student(&mut app, "asha");
        assert_eq!(notice_text(&app), "Student added successfully!");
        assert!(!app.modal.is_open());

        add_student(&mut app, "asha");
        assert_eq!(notice_text(&app), "Username already exists!");
        assert_eq!(app.modal.active, ActiveModal::AddStudent);
        app.modal.close();

        app.run_action(DashboardAction::ViewUsers);
        assert!(app.ui.output.contains("Asha Rao (asha) - CSE"));

        app.logout();
        login_as(&mut app, "asha", "pw", Role::Student);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.dashboard_title(), "Student Dashboard - Asha Rao");
    }

    #[test]
    fn test_actions_outside_role_are_ignored() {
        let mut app = setup_test();
        login_as(&mut app, "faculty", "faculty", Role::Faculty);

        app.run_action(DashboardAction::AddStudent);
        app.run_action(DashboardAction::ViewUsers);
        assert!(!app.modal.is_open());
        assert!(app.ui.output.is_empty());
    }

    #[test]
    fn test_invalid_event_form_reports_and_keeps_input() {
        let mut app = setup_test();
        login_as(&mut app, "faculty", "faculty", Role::Faculty);
        app.run_action(DashboardAction::AddEvent);
        app.modal.add_event_form.name = "Hackathon".to_string();
        app.modal.add_event_form.total_seats = "lots".to_string();
        app.submit_add_event();

        let notice = app.ui.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.text.starts_with("Invalid date or seats"));
        assert_eq!(app.modal.add_event_form.name, "Hackathon");
        assert_eq!(app.backend.event_service.list_events().unwrap().events.len(), 3);
    }

    #[test]
    fn test_publish_result_message_depends_on_role() {
        let mut app = setup_test();
        login_as(&mut app, "faculty", "faculty", Role::Faculty);
        app.run_action(DashboardAction::PublishResult);
        assert_eq!(app.modal.active, ActiveModal::PublishResult);
        app.modal.publish_result_form.student_name = "Asha".to_string();
        app.submit_publish_result();
        assert_eq!(notice_text(&app), "Result saved for Tech Symposium");

        app.logout();
        login_as(&mut app, "admin", "admin", Role::Admin);
        app.run_action(DashboardAction::PublishResult);
        app.modal.publish_result_form.student_name = "Ravi".to_string();
        app.submit_publish_result();
        assert_eq!(notice_text(&app), "Result published for event: Tech Symposium");
    }

    #[test]
    fn test_register_offers_reminder_and_logout_cancels_it() {
        let mut app = setup_test();
        login_as(&mut app, "admin", "admin", Role::Admin);
        add_student(&mut app, "asha");
        app.logout();
        login_as(&mut app, "asha", "pw", Role::Student);

        app.run_action(DashboardAction::Register);
        let workshop = app.modal.event_choices[1].id;
        app.modal.selected_event = Some(workshop);
        app.submit_register();

        assert_eq!(notice_text(&app), "Registered for AI Workshop!");
        assert!(app.ui.output.contains("AI Workshop | 2025-11-12 | Innovation Lab | Seats: 1/50"));
        assert!(matches!(&app.modal.active, ActiveModal::ReminderPrompt(e) if e.id == workshop));

        let now = Instant::now();
        app.answer_reminder_prompt(true, now);
        assert!(!app.modal.is_open());
        assert_eq!(app.reminders.pending_count(), 1);

        app.logout();
        assert_eq!(app.reminders.pending_count(), 0);
        assert_eq!(app.reminders.poll(now + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_reminder_uses_display_name() {
        let mut app = setup_test();
        login_as(&mut app, "admin", "admin", Role::Admin);
        add_student(&mut app, "asha");
        app.logout();
        login_as(&mut app, "asha", "pw", Role::Student);

        app.run_action(DashboardAction::Register);
        app.submit_register();
        let now = Instant::now();
        app.answer_reminder_prompt(true, now);
        app.reminders.poll(now + Duration::from_secs(5));

        let shown = &app.reminders.active()[0].reminder;
        assert_eq!(shown.student_name, "Asha Rao");
        assert_eq!(shown.event_name, "Tech Symposium");
    }

    #[test]
    fn test_declined_reminder_schedules_nothing() {
        let mut app = setup_test();
        login_as(&mut app, "admin", "admin", Role::Admin);
        add_student(&mut app, "asha");
        app.logout();
        login_as(&mut app, "asha", "pw", Role::Student);

        app.run_action(DashboardAction::Register);
        app.submit_register();
        app.answer_reminder_prompt(false, Instant::now());
        assert_eq!(app.reminders.pending_count(), 0);
    }

    #[test]
    fn test_view_results_without_results() {
        let mut app = setup_test();
        login_as(&mut app, "admin", "admin", Role::Admin);
        add_student(&mut app, "asha");
        app.logout();
        login_as(&mut app, "asha", "pw", Role::Student);

        app.run_action(DashboardAction::ViewResults);
        app.submit_view_results();
        assert_eq!(app.ui.output, "Results for: Tech Symposium\n\nNo results published for this event yet.");
    }

    #[test]
    fn test_no_events_message() {
        let backend = Backend::new(&SeedConfig { events: vec![], ..SeedConfig::default() }).unwrap();
        let mut app = SmartEventApp::with_backend(backend, AppConfig::default());
        login_as(&mut app, "faculty", "faculty", Role::Faculty);

        app.run_action(DashboardAction::PublishResult);
        assert!(!app.modal.is_open());
        assert_eq!(notice_text(&app), "No events available to publish results for.");
    }

    #[test]
    fn test_calendar_navigation_and_day_report() {
        let mut app = setup_test();
        login_as(&mut app, "faculty", "faculty", Role::Faculty);
        app.run_action(DashboardAction::ViewCalendar);
        assert!(app.calendar.open);
        assert!(app.calendar.calendar_month.is_some());

        app.calendar.set_month(12, 2025);
        app.calendar_next_month();
        assert_eq!((app.calendar.selected_month, app.calendar.selected_year), (1, 2026));
        app.calendar_previous_month();
        app.calendar_previous_month();
        let month = app.calendar.calendar_month.as_ref().unwrap();
        assert_eq!((month.month, month.year), (11, 2025));
        assert_eq!(month.day(8).unwrap().event_count, 1);

        app.select_calendar_day(NaiveDate::from_ymd_opt(2025, 11, 8).unwrap());
        let report = app.calendar.day_report.as_deref().unwrap();
        assert!(report.contains("Tech Symposium @ Auditorium"));

        app.logout();
        assert!(!app.calendar.open);
    }

    #[test]
    fn test_dashboard_actions_wait_for_open_dialog() {
        let mut app = setup_test();
        login_as(&mut app, "admin", "admin", Role::Admin);
        add_student(&mut app, "asha");
        app.logout();
        login_as(&mut app, "asha", "pw", Role::Student);

        app.run_action(DashboardAction::Register);
        app.submit_register();
        assert!(matches!(app.modal.active, ActiveModal::ReminderPrompt(_)));

        app.run_action(DashboardAction::ViewResults);
        app.run_action(DashboardAction::ViewCalendar);
        assert!(matches!(app.modal.active, ActiveModal::ReminderPrompt(_)));
        assert!(!app.calendar.open);

        app.answer_reminder_prompt(true, Instant::now());
        assert_eq!(app.reminders.pending_count(), 1);
    }

    #[test]
    fn test_half_filled_form_survives_other_buttons() {
        let mut app = setup_test();
        login_as(&mut app, "admin", "admin", Role::Admin);
        app.run_action(DashboardAction::AddEvent);
        app.modal.add_event_form.name = "Hackathon".to_string();

        app.run_action(DashboardAction::AddStudent);
        assert_eq!(app.modal.active, ActiveModal::AddEvent);
        assert_eq!(app.modal.add_event_form.name, "Hackathon");
    }

    #[test]
    fn test_register_refreshes_selected_day_report() {
        let mut app = setup_test();
        login_as(&mut app, "admin", "admin", Role::Admin);
        add_student(&mut app, "asha");
        app.logout();
        login_as(&mut app, "asha", "pw", Role::Student);

        app.run_action(DashboardAction::ViewCalendar);
        app.select_calendar_day(NaiveDate::from_ymd_opt(2025, 11, 12).unwrap());
        assert!(app.calendar.day_report.as_deref().unwrap().contains("Seats: 0/50"));

        app.run_action(DashboardAction::Register);
        let workshop = app.modal.event_choices[1].id;
        app.modal.selected_event = Some(workshop);
        app.submit_register();

        let report = app.calendar.day_report.as_deref().unwrap();
        assert!(report.contains("AI Workshop @ Innovation Lab\nSeats: 1/50"));
    }
}

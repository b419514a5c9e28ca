//! # Modals Module
//!
//! This module renders the dialog opened from a dashboard button, plus the
//! message box confirming or rejecting the last action.
//!
//! ## Key Functions:
//! - `render_modals()` - Draw whichever dialog is open
//! - `render_notice()` - Draw the pending message box, above any dialog
//!
//! ## Purpose:
//! Render functions only collect clicks. Once a window closure returns, the
//! matching method in `actions` does the backend work.

use eframe::egui;
use std::time::Instant;

use crate::backend::domain::models::event::{Event, EventId};
use crate::ui::app_state::SmartEventApp;
use crate::ui::components::styling::{colors, primary_button};
use crate::ui::state::{ActiveModal, NoticeKind};

/// Which button the user pressed in a dialog this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogOutcome {
    Pending,
    Submit,
    Cancel,
}

fn dialog_window(title: &str) -> egui::Window<'static> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

fn form_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(240.0));
    ui.end_row();
}

fn event_picker(ui: &mut egui::Ui, id: &str, choices: &[Event], selected: &mut Option<EventId>, caption: String) {
    egui::ComboBox::from_id_source(id)
        .selected_text(caption)
        .width(240.0)
        .show_ui(ui, |ui| {
            for event in choices {
                ui.selectable_value(selected, Some(event.id), format!("{} ({})", event.name, event.date));
            }
        });
}

fn dialog_buttons(ui: &mut egui::Ui, submit_label: &str) -> DialogOutcome {
    let mut outcome = DialogOutcome::Pending;
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.add(primary_button(submit_label)).clicked() {
            outcome = DialogOutcome::Submit;
        }
        if ui.button("Cancel").clicked() {
            outcome = DialogOutcome::Cancel;
        }
    });
    outcome
}

impl SmartEventApp {
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        // A message box blocks the dialog underneath until dismissed
        let enabled = self.ui.notice.is_none();

        let outcome = match self.modal.active.clone() {
            ActiveModal::None => return,
            ActiveModal::AddStudent => self.render_add_student_modal(ctx, enabled),
            ActiveModal::AddEvent => self.render_add_event_modal(ctx, enabled),
            ActiveModal::PublishResult => self.render_publish_result_modal(ctx, enabled),
            ActiveModal::Register => self.render_event_choice_modal(ctx, enabled, "Register for Event", "Register"),
            ActiveModal::ViewResults => self.render_event_choice_modal(ctx, enabled, "View Results", "Show"),
            ActiveModal::ReminderPrompt(event) => {
                self.render_reminder_prompt(ctx, enabled, &event);
                return;
            }
        };

        match outcome {
            DialogOutcome::Pending => {}
            DialogOutcome::Cancel => {
                log::info!("Dialog cancelled");
                self.modal.close();
            }
            DialogOutcome::Submit => match self.modal.active {
                ActiveModal::AddStudent => self.submit_add_student(),
                ActiveModal::AddEvent => self.submit_add_event(),
                ActiveModal::PublishResult => self.submit_publish_result(),
                ActiveModal::Register => self.submit_register(),
                ActiveModal::ViewResults => self.submit_view_results(),
                ActiveModal::None | ActiveModal::ReminderPrompt(_) => {}
            },
        }
    }

    fn render_add_student_modal(&mut self, ctx: &egui::Context, enabled: bool) -> DialogOutcome {
        let mut outcome = DialogOutcome::Pending;
        let form = &mut self.modal.add_student_form;

        dialog_window("Add Student").enabled(enabled).show(ctx, |ui| {
            egui::Grid::new("add_student_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                form_row(ui, "Username:", &mut form.username);
                ui.label("Password:");
                ui.add(egui::TextEdit::singleline(&mut form.password).password(true).desired_width(240.0));
                ui.end_row();
                form_row(ui, "Full Name:", &mut form.full_name);
                form_row(ui, "Department:", &mut form.department);
            });
            outcome = dialog_buttons(ui, "Add");
        });

        outcome
    }

    fn render_add_event_modal(&mut self, ctx: &egui::Context, enabled: bool) -> DialogOutcome {
        let mut outcome = DialogOutcome::Pending;
        let form = &mut self.modal.add_event_form;

        dialog_window("Add Event").enabled(enabled).show(ctx, |ui| {
            egui::Grid::new("add_event_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                form_row(ui, "Event Name:", &mut form.name);
                form_row(ui, "Location:", &mut form.location);
                form_row(ui, "Date (YYYY-MM-DD):", &mut form.date);
                form_row(ui, "Total Seats:", &mut form.total_seats);
            });
            outcome = dialog_buttons(ui, "Add");
        });

        outcome
    }

    fn render_publish_result_modal(&mut self, ctx: &egui::Context, enabled: bool) -> DialogOutcome {
        let mut outcome = DialogOutcome::Pending;
        let caption = self.modal.event_label(self.modal.publish_result_form.event_id);
        let choices = &self.modal.event_choices;
        let form = &mut self.modal.publish_result_form;

        dialog_window("Publish Result").enabled(enabled).show(ctx, |ui| {
            egui::Grid::new("publish_result_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                ui.label("Event:");
                event_picker(ui, "publish_result_event", choices, &mut form.event_id, caption);
                ui.end_row();
                form_row(ui, "Student Name:", &mut form.student_name);
                form_row(ui, "Department:", &mut form.department);
                form_row(ui, "Position:", &mut form.position);
            });
            outcome = dialog_buttons(ui, "Publish");
        });

        outcome
    }

    /// Register and View Results share one layout: pick an event, press a button
    fn render_event_choice_modal(
        &mut self,
        ctx: &egui::Context,
        enabled: bool,
        title: &str,
        submit_label: &str,
    ) -> DialogOutcome {
        let mut outcome = DialogOutcome::Pending;
        let caption = self.modal.event_label(self.modal.selected_event);
        let choices = &self.modal.event_choices;
        let selected = &mut self.modal.selected_event;

        dialog_window(title).enabled(enabled).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Event:");
                event_picker(ui, "event_choice", choices, selected, caption);
            });
            outcome = dialog_buttons(ui, submit_label);
        });

        outcome
    }

    fn render_reminder_prompt(&mut self, ctx: &egui::Context, enabled: bool, event: &Event) {
        let mut answer = None;
        let seconds = self.config.reminder.delay().as_secs();

        dialog_window("Reminder").enabled(enabled).show(ctx, |ui| {
            ui.label(format!("Do you want a reminder for this event in {} seconds?", seconds));
            ui.label(egui::RichText::new(&event.name).strong());
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.add(primary_button("Yes")).clicked() {
                    answer = Some(true);
                }
                if ui.button("No").clicked() {
                    answer = Some(false);
                }
            });
        });

        if let Some(accept) = answer {
            self.answer_reminder_prompt(accept, Instant::now());
        }
    }

    /// Message box for the last action's outcome
    pub fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.ui.notice else {
            return;
        };
        let mut dismissed = ctx.input(|i| i.key_pressed(egui::Key::Escape));

        let text_color = match notice.kind {
            NoticeKind::Info => colors::TEXT_DARK,
            NoticeKind::Error => colors::ERROR,
        };

        dialog_window(&notice.title)
            .id(egui::Id::new("notice_window"))
            .show(ctx, |ui| {
                ui.set_min_width(260.0);
                ui.label(egui::RichText::new(&notice.text).color(text_color));
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.add(primary_button("OK")).clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.ui.dismiss_notice();
        }
    }
}

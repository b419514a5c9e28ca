//! # App Coordinator Module
//!
//! This module contains the main application coordination logic, handling the primary
//! update loop.
//!
//! ## Application Flow:
//! 1. Promote due reminders
//! 2. Handle global input (ESC closes the open dialog)
//! 3. Render the login screen, or header + dashboard + dialogs + calendar
//! 4. Render the message box and reminder popups on top
//! 5. Ask for a repaint when the next reminder needs one

use eframe::egui;
use std::time::Instant;

use crate::ui::app_state::SmartEventApp;
use crate::ui::state::ActiveModal;

impl eframe::App for SmartEventApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.reminders.poll(now);

        // ESC closes an open dialog once any message box is gone
        if self.ui.notice.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            match self.modal.active {
                ActiveModal::ReminderPrompt(_) => self.answer_reminder_prompt(false, now),
                ActiveModal::None => {}
                _ => self.modal.close(),
            }
        }

        if self.session.is_none() {
            self.render_login_screen(ctx);
        } else {
            self.render_header(ctx);
            self.render_dashboard(ctx);
            self.render_modals(ctx);
            self.render_calendar_window(ctx);
        }

        self.render_notice(ctx);
        self.render_reminder_popups(ctx, now);

        if let Some(wait) = self.reminders.next_wakeup(now) {
            ctx.request_repaint_after(wait);
        }
    }
}

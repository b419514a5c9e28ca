//! # Dashboard Module
//!
//! One button per action the session's role offers, above a read-only output
//! area that shows the latest report.

use eframe::egui;

use crate::ui::app_state::SmartEventApp;
use crate::ui::components::styling::primary_button;
use crate::ui::state::Session;

impl SmartEventApp {
    pub fn render_dashboard(&mut self, ctx: &egui::Context) {
        let Some(role) = self.session.as_ref().map(Session::role) else {
            return;
        };
        let mut clicked = None;
        // An open dialog owns input until it is answered
        let buttons_enabled = !self.modal.is_open();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(6.0);
            ui.add_enabled_ui(buttons_enabled, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for action in role.dashboard_actions() {
                        if ui.add(primary_button(action.label(role))).clicked() {
                            clicked = Some(*action);
                        }
                    }
                });
            });

            ui.add_space(6.0);
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut self.ui.output.as_str())
                            .font(egui::TextStyle::Monospace)
                            .desired_width(f32::INFINITY)
                            .desired_rows(24),
                    );
                });
        });

        if let Some(action) = clicked {
            self.run_action(action);
        }
    }
}

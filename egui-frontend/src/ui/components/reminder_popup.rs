//! # Reminder Popup Module
//!
//! Draws every active reminder as a dark card near the middle of the screen.
//! Cards fade and slide with their phase, stack downward when several are
//! showing, and never take input.

use eframe::egui;
use std::time::Instant;

use crate::ui::app_state::SmartEventApp;
use crate::ui::components::styling::colors;

const POPUP_WIDTH: f32 = 380.0;
const POPUP_SPACING: f32 = 170.0;

impl SmartEventApp {
    pub fn render_reminder_popups(&self, ctx: &egui::Context, now: Instant) {
        for (index, active) in self.reminders.active().iter().enumerate() {
            let alpha = active.phase(now).alpha();
            if alpha <= 0.0 {
                continue;
            }
            let offset = self.reminders.slide_offset(alpha) + index as f32 * POPUP_SPACING;

            egui::Area::new(egui::Id::new(("reminder_popup", index)))
                .order(egui::Order::Foreground)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, offset))
                .interactable(false)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(colors::REMINDER_BACKGROUND.gamma_multiply(alpha))
                        .stroke(egui::Stroke::new(2.0, colors::REMINDER_BORDER.gamma_multiply(alpha)))
                        .rounding(egui::Rounding::same(8.0))
                        .inner_margin(egui::Margin::same(12.0))
                        .show(ui, |ui| {
                            ui.set_width(POPUP_WIDTH - 24.0);
                            ui.vertical_centered(|ui| {
                                ui.label(egui::RichText::new("🔔 Reminder")
                                    .size(18.0)
                                    .strong()
                                    .color(colors::REMINDER_TITLE.gamma_multiply(alpha)));
                                ui.add_space(8.0);
                                ui.label(egui::RichText::new(active.reminder.greeting())
                                    .color(egui::Color32::WHITE.gamma_multiply(alpha)));
                                ui.add_space(4.0);
                                ui.label(egui::RichText::new(active.reminder.details())
                                    .color(colors::REMINDER_DETAILS.gamma_multiply(alpha)));
                            });
                        });
                });
        }
    }
}

//! # Header Module
//!
//! Title bar shown above every dashboard: the role's title on the left and a
//! Logout button on the right.

use eframe::egui;

use crate::ui::app_state::SmartEventApp;
use crate::ui::components::styling::{colors, primary_button};

impl SmartEventApp {
    pub fn render_header(&mut self, ctx: &egui::Context) {
        let Some(title) = self.session.as_ref().map(|s| s.dashboard_title()) else {
            return;
        };
        let mut logout = false;

        egui::TopBottomPanel::top("dashboard_header")
            .frame(egui::Frame::none()
                .fill(colors::PRIMARY)
                .inner_margin(egui::Margin::symmetric(16.0, 12.0)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add(egui::Label::new(egui::RichText::new(title)
                        .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(egui::Color32::WHITE))
                        .selectable(false));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let button = primary_button("Logout").fill(colors::PRIMARY_HOVER);
                        if ui.add(button).clicked() {
                            logout = true;
                        }
                    });
                });
            });

        if logout {
            self.logout();
        }
    }
}

//! # Login Screen Module
//!
//! Username, masked password and role picker. Enter in either text field or
//! the Login button submits; a failed attempt shows one generic message.

use eframe::egui;
use shared::Role;

use crate::ui::app_state::SmartEventApp;
use crate::ui::components::styling::{colors, primary_button};

impl SmartEventApp {
    pub fn render_login_screen(&mut self, ctx: &egui::Context) {
        let mut submit = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.label(egui::RichText::new(&self.config.window.title)
                    .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::PRIMARY));
                ui.add_space(30.0);

                egui::Grid::new("login_form")
                    .num_columns(2)
                    .spacing([12.0, 10.0])
                    .show(ui, |ui| {
                        ui.label("Username:");
                        let username = ui.add(egui::TextEdit::singleline(&mut self.login.username).desired_width(220.0));
                        ui.end_row();

                        ui.label("Password:");
                        let password = ui.add(
                            egui::TextEdit::singleline(&mut self.login.password)
                                .password(true)
                                .desired_width(220.0),
                        );
                        ui.end_row();

                        ui.label("Role:");
                        egui::ComboBox::from_id_source("login_role")
                            .selected_text(self.login.role.as_str())
                            .width(220.0)
                            .show_ui(ui, |ui| {
                                for role in Role::ALL {
                                    ui.selectable_value(&mut self.login.role, role, role.as_str());
                                }
                            });
                        ui.end_row();

                        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
                        if enter && (username.lost_focus() || password.lost_focus()) {
                            submit = true;
                        }
                    });

                ui.add_space(16.0);
                if ui.add(primary_button("Login").min_size(egui::vec2(120.0, 32.0))).clicked() {
                    submit = true;
                }

                if let Some(error) = &self.login.error_message {
                    ui.add_space(10.0);
                    ui.colored_label(colors::ERROR, error);
                }

                ui.add_space(20.0);
                ui.label(egui::RichText::new("Note: Admin should create student accounts in Admin Dashboard.")
                    .italics()
                    .color(colors::TEXT_MUTED));
            });
        });

        if submit {
            self.submit_login();
        }
    }
}

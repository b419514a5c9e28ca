//! # Calendar Renderer Module
//!
//! This module draws the calendar window: month navigation, a Sunday-first
//! seven column grid, and the report for the clicked day.
//!
//! ## Key Functions:
//! - `render_calendar_window()` - Window with `<<` / `>>`, month label and grid
//!
//! ## Features:
//! - Days with one event show a dot, days with several show the count
//! - Event days are highlighted in gold
//! - Clicking any day lists that day's events under the grid

use chrono::NaiveDate;
use eframe::egui;
use shared::{CalendarDayType, CalendarMonth, WEEKDAY_HEADERS};

use crate::ui::app_state::SmartEventApp;
use crate::ui::components::styling::colors;

const CELL_SIZE: egui::Vec2 = egui::vec2(64.0, 44.0);

/// What the user did in the calendar window this frame
enum CalendarInput {
    PreviousMonth,
    NextMonth,
    SelectDay(NaiveDate),
}

fn draw_month_grid(ui: &mut egui::Ui, month: &CalendarMonth, selected: Option<NaiveDate>) -> Option<NaiveDate> {
    let mut clicked = None;

    egui::Grid::new("calendar_grid")
        .num_columns(7)
        .spacing([4.0, 4.0])
        .show(ui, |ui| {
            for header in WEEKDAY_HEADERS {
                ui.add_sized([CELL_SIZE.x, 20.0], egui::Label::new(egui::RichText::new(header)
                    .strong()
                    .color(colors::PRIMARY)));
            }
            ui.end_row();

            for (index, day) in month.days.iter().enumerate() {
                match (day.day_type.clone(), day.date) {
                    (CalendarDayType::MonthDay, Some(date)) => {
                        let fill = if day.marker.has_events() { colors::EVENT_DAY } else { colors::DAY_CELL };
                        let stroke_color = if selected == Some(date) { colors::PRIMARY } else { colors::DAY_CELL_BORDER };
                        let button = egui::Button::new(egui::RichText::new(day.marker.cell_text(day.day))
                            .color(colors::TEXT_DARK))
                            .fill(fill)
                            .stroke(egui::Stroke::new(1.0, stroke_color))
                            .min_size(CELL_SIZE);
                        if ui.add(button).clicked() {
                            clicked = Some(date);
                        }
                    }
                    _ => {
                        ui.allocate_space(CELL_SIZE);
                    }
                }

                if (index + 1) % 7 == 0 {
                    ui.end_row();
                }
            }
        });

    clicked
}

impl SmartEventApp {
    pub fn render_calendar_window(&mut self, ctx: &egui::Context) {
        if !self.calendar.open {
            return;
        }

        let mut open = true;
        let mut input = None;
        let label = self
            .backend
            .calendar_service
            .month_label(self.calendar.selected_month, self.calendar.selected_year);
        let month = self.calendar.calendar_month.as_ref();
        let selected_day = self.calendar.selected_day;
        let day_report = self.calendar.day_report.as_deref();

        egui::Window::new("Event Calendar")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_pos([120.0, 80.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("<<").clicked() {
                        input = Some(CalendarInput::PreviousMonth);
                    }
                    ui.add_sized([CELL_SIZE.x * 7.0 - 80.0, 24.0], egui::Label::new(egui::RichText::new(&label)
                        .strong()
                        .size(18.0)));
                    if ui.button(">>").clicked() {
                        input = Some(CalendarInput::NextMonth);
                    }
                });
                ui.add_space(6.0);

                if let Some(month) = month {
                    if let Some(date) = draw_month_grid(ui, month, selected_day) {
                        input = Some(CalendarInput::SelectDay(date));
                    }
                }

                if let Some(report) = day_report {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add(egui::TextEdit::multiline(&mut report.to_string().as_str())
                        .desired_width(f32::INFINITY)
                        .desired_rows(6));
                }
            });

        if !open {
            log::info!("🗓️ Calendar closed");
            self.calendar.close();
            return;
        }

        match input {
            Some(CalendarInput::PreviousMonth) => self.calendar_previous_month(),
            Some(CalendarInput::NextMonth) => self.calendar_next_month(),
            Some(CalendarInput::SelectDay(date)) => self.select_calendar_day(date),
            None => {}
        }
    }
}

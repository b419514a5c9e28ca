//! # Styling Module
//!
//! This module contains the global egui style and the color constants used
//! across the event organizer.
//!
//! ## Key Functions:
//! - `setup_style()` - Configure global egui styling
//! - `primary_button()` - Blue action button used on every screen
//!
//! ## Color Palette:
//! - Blue primary with a lighter hover shade for buttons and headers
//! - Light grey-blue page background
//! - Gold highlight for calendar days that have events
//! - Dark panel with a yellow border for reminder popups

use eframe::egui;

pub mod colors {
    use eframe::egui::Color32;

    pub const PRIMARY: Color32 = Color32::from_rgb(33, 97, 174);
    pub const PRIMARY_HOVER: Color32 = Color32::from_rgb(52, 152, 219);
    pub const BACKGROUND: Color32 = Color32::from_rgb(245, 247, 250);
    pub const TEXT_DARK: Color32 = Color32::from_rgb(60, 60, 60);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(110, 110, 110);
    pub const ERROR: Color32 = Color32::from_rgb(192, 57, 43);

    pub const DAY_CELL: Color32 = Color32::WHITE;
    pub const DAY_CELL_BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    pub const EVENT_DAY: Color32 = Color32::from_rgb(255, 236, 179);

    pub const REMINDER_BACKGROUND: Color32 = Color32::from_rgb(30, 30, 30);
    pub const REMINDER_BORDER: Color32 = Color32::from_rgb(200, 200, 80);
    pub const REMINDER_TITLE: Color32 = Color32::from_rgb(250, 220, 120);
    pub const REMINDER_DETAILS: Color32 = Color32::from_rgb(192, 192, 192);
}

/// Setup UI styling for the entire application
pub fn setup_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = colors::BACKGROUND;
        style.visuals.window_fill = egui::Color32::WHITE;
        style.visuals.extreme_bg_color = egui::Color32::WHITE;
        style.visuals.widgets.hovered.weak_bg_fill = colors::PRIMARY_HOVER;
        style.visuals.selection.bg_fill = colors::PRIMARY_HOVER;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(22.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(10.0, 8.0);

        style
    });
}

/// Blue button with white text
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(egui::Color32::WHITE).strong())
        .fill(colors::PRIMARY)
        .rounding(egui::Rounding::same(6.0))
}

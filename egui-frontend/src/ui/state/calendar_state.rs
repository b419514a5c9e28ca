//! # Calendar State Module
//!
//! This module contains all state related to the calendar window and navigation.
//!
//! ## Responsibilities:
//! - Window visibility
//! - Calendar month/year navigation
//! - The generated month grid and the clicked day's report
//!
//! ## Purpose:
//! This isolates calendar-specific state, so the window can be opened from any
//! dashboard without touching the rest of the UI.

use chrono::NaiveDate;
use shared::CalendarMonth;

/// Calendar-specific state for month navigation and display
#[derive(Debug)]
pub struct CalendarState {
    /// Whether the calendar window is open
    pub open: bool,

    /// Currently shown month (1-12)
    pub selected_month: u32,

    /// Currently shown year
    pub selected_year: i32,

    /// Month grid built for the selected month
    pub calendar_month: Option<CalendarMonth>,

    /// Day last clicked and its report
    pub selected_day: Option<NaiveDate>,
    pub day_report: Option<String>,
}

impl CalendarState {
    pub fn new(month: u32, year: i32) -> Self {
        Self {
            open: false,
            selected_month: month,
            selected_year: year,
            calendar_month: None,
            selected_day: None,
            day_report: None,
        }
    }

    pub fn set_month(&mut self, month: u32, year: i32) {
        self.selected_month = month;
        self.selected_year = year;
        self.calendar_month = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.selected_day = None;
        self.day_report = None;
    }
}

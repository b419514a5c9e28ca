//! Calendar domain logic for the event organizer.
//!
//! Builds the month grid the calendar window draws: weekday padding before
//! day 1, then one cell per day with the number of events held on it. The UI
//! only paints cells and handles clicks; counting and navigation live here.

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use log::{debug, info};
use std::collections::HashMap;

use shared::{CalendarDay, CalendarDayType, CalendarMonth, DayMarker};
use crate::backend::domain::errors::DomainError;
use crate::backend::domain::event_service::EventService;
use crate::backend::domain::models::event::Event;

/// Calendar service that handles all calendar-related business logic
#[derive(Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Load every event and lay out the requested month
    pub fn get_calendar_month_with_events(
        &self,
        month: u32,
        year: i32,
        event_service: &EventService,
    ) -> Result<CalendarMonth> {
        info!("🗓️ CALENDAR: Getting calendar month with events for {}/{}", month, year);

        let events = event_service.list_events()?.events;
        let calendar_month = self.generate_calendar_month(month, year, &events)?;

        let total: usize = calendar_month.days.iter().map(|d| d.event_count).sum();
        info!("🗓️ CALENDAR: {} events fall in {} {}", total, self.month_name(month), year);

        Ok(calendar_month)
    }

    /// Generate a calendar month view with per-day event counts
    pub fn generate_calendar_month(
        &self,
        month: u32,
        year: i32,
        events: &[Event],
    ) -> Result<CalendarMonth, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidMonth(month));
        }

        let days_in_month = self.days_in_month(month, year);
        let first_day = self.first_day_of_month(month, year);

        debug!("🗓️ CALENDAR DEBUG: Generating calendar for {}/{}", month, year);
        debug!("🗓️ CALENDAR DEBUG: Days in month: {}, First day of week: {}", days_in_month, first_day);

        let counts = self.count_events_by_day(month, year, events);

        let mut calendar_days: Vec<CalendarDay> = (0..first_day).map(|_| CalendarDay::padding()).collect();

        for day in 1..=days_in_month {
            let event_count = counts.get(&day).copied().unwrap_or(0);
            calendar_days.push(CalendarDay {
                day,
                date: NaiveDate::from_ymd_opt(year, month, day),
                event_count,
                marker: DayMarker::from_count(event_count),
                day_type: CalendarDayType::MonthDay,
            });
        }

        debug!("🗓️ CALENDAR DEBUG: Total calendar cells created: {}", calendar_days.len());

        Ok(CalendarMonth {
            month,
            year,
            days: calendar_days,
            first_day_of_week: first_day,
        })
    }

    fn count_events_by_day(&self, month: u32, year: i32, events: &[Event]) -> HashMap<u32, usize> {
        let mut counts = HashMap::new();
        for event in events {
            if event.date.month() == month && event.date.year() == year {
                *counts.entry(event.date.day()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: i32) -> u32 {
        match month {
            2 => if self.is_leap_year(year) { 29 } else { 28 },
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: i32) -> u32 {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }

    /// "November 2025"
    pub fn month_label(&self, month: u32, year: i32) -> String {
        format!("{} {}", self.month_name(month), year)
    }

    /// Navigate to the previous month
    pub fn previous_month(&self, current_month: u32, current_year: i32) -> (u32, i32) {
        if current_month == 1 {
            (12, current_year - 1)
        } else {
            (current_month - 1, current_year)
        }
    }

    /// Navigate to the next month
    pub fn next_month(&self, current_month: u32, current_year: i32) -> (u32, i32) {
        if current_month == 12 {
            (1, current_year + 1)
        } else {
            (current_month + 1, current_year)
        }
    }

    /// Month and year the calendar opens on
    pub fn current_month(&self) -> (u32, i32) {
        let today = Local::now().date_naive();
        (today.month(), today.year())
    }

    /// Report for a clicked day, events in insertion order
    pub fn day_report(&self, date: NaiveDate, events: &[Event]) -> String {
        let mut report = format!("Events on {}:\n", date);
        let on_day: Vec<&Event> = events.iter().filter(|e| e.date == date).collect();

        if on_day.is_empty() {
            report.push_str("No events scheduled on this date.");
            return report;
        }

        for event in on_day {
            report.push_str(&format!("{} @ {}\nSeats: {}\n\n", event.name, event.location, event.occupancy()));
        }
        report
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use chrono::NaiveDate;

/// Role of an account. Every dashboard is selected by matching on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Faculty,
    Student,
}

impl Role {
    /// All roles in the order they appear in the login role picker
    pub const ALL: [Role; 3] = [Role::Admin, Role::Faculty, Role::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Faculty => "Faculty",
            Role::Student => "Student",
        }
    }

    /// Actions available on this role's dashboard, in button order
    pub fn dashboard_actions(&self) -> &'static [DashboardAction] {
        match self {
            Role::Admin => &[
                DashboardAction::ViewUsers,
                DashboardAction::ViewEvents,
                DashboardAction::AddStudent,
                DashboardAction::AddEvent,
                DashboardAction::PublishResult,
                DashboardAction::ViewCalendar,
            ],
            Role::Faculty => &[
                DashboardAction::AddEvent,
                DashboardAction::ViewEvents,
                DashboardAction::PublishResult,
                DashboardAction::ViewCalendar,
            ],
            Role::Student => &[
                DashboardAction::ViewEvents,
                DashboardAction::Register,
                DashboardAction::ViewCalendar,
                DashboardAction::ViewResults,
            ],
        }
    }

    /// Whether this role's dashboard offers the given action
    pub fn can(&self, action: DashboardAction) -> bool {
        self.dashboard_actions().contains(&action)
    }

    /// Title shown in the dashboard header
    pub fn dashboard_title(&self) -> &'static str {
        match self {
            Role::Admin => "Admin Dashboard",
            Role::Faculty => "Faculty Dashboard",
            Role::Student => "Student Dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A button on one of the role dashboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashboardAction {
    ViewUsers,
    ViewEvents,
    AddStudent,
    AddEvent,
    /// Admin "Publish Results" and Faculty "Add/Edit Results"
    PublishResult,
    Register,
    ViewResults,
    ViewCalendar,
}

impl DashboardAction {
    /// Button label; the result action is worded differently per role
    pub fn label(&self, role: Role) -> &'static str {
        match self {
            DashboardAction::ViewUsers => "View Users",
            DashboardAction::ViewEvents => "View Events",
            DashboardAction::AddStudent => "Add Student",
            DashboardAction::AddEvent => "Add Event",
            DashboardAction::PublishResult => match role {
                Role::Faculty => "Add/Edit Results",
                Role::Admin | Role::Student => "Publish Results (per event)",
            },
            DashboardAction::Register => "Register",
            DashboardAction::ViewResults => "View Results by Event",
            DashboardAction::ViewCalendar => "View Calendar",
        }
    }
}

/// Weekday column headers, Sunday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Type of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CalendarDayType {
    /// Empty padding cell before day 1
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// How many events fall on a day, reduced to what the cell shows
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DayMarker {
    /// No events: plain cell
    None,
    /// Exactly one event: small dot
    Single,
    /// More than one event: numeric count
    Count(usize),
}

impl DayMarker {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => DayMarker::None,
            1 => DayMarker::Single,
            n => DayMarker::Count(n),
        }
    }

    /// Cell caption for a day number carrying this marker
    pub fn cell_text(&self, day: u32) -> String {
        match self {
            DayMarker::None => day.to_string(),
            DayMarker::Single => format!("{} •", day),
            DayMarker::Count(n) => format!("{} ({})", day, n),
        }
    }

    pub fn has_events(&self) -> bool {
        !matches!(self, DayMarker::None)
    }
}

/// Represents a calendar month with per-day event counts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    pub days: Vec<CalendarDay>,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
}

impl CalendarMonth {
    /// Cells that belong to the month itself (padding excluded)
    pub fn month_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter().filter(|d| d.day_type == CalendarDayType::MonthDay)
    }

    /// Number of padding cells before day 1
    pub fn padding_count(&self) -> usize {
        self.days
            .iter()
            .filter(|d| d.day_type == CalendarDayType::PaddingBefore)
            .count()
    }

    /// Look up the cell for a day of the month
    pub fn day(&self, day: u32) -> Option<&CalendarDay> {
        self.month_days().find(|d| d.day == day)
    }
}

/// Represents a single cell in the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day of month, 0 for padding cells
    pub day: u32,
    pub date: Option<NaiveDate>,
    pub event_count: usize,
    pub marker: DayMarker,
    pub day_type: CalendarDayType,
}

impl CalendarDay {
    pub fn padding() -> Self {
        Self {
            day: 0,
            date: None,
            event_count: 0,
            marker: DayMarker::None,
            day_type: CalendarDayType::PaddingBefore,
        }
    }
}

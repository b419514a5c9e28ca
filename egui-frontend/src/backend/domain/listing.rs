//! Plain-text reports shown in the dashboard output area.

use shared::Role;
use crate::backend::domain::models::event::Event;
use crate::backend::domain::models::event_result::EventResult;
use crate::backend::domain::models::user::User;

pub fn user_list_report(users: &[User]) -> String {
    let mut report = String::from("=== USERS ===\n");
    for user in users {
        let line = match user.role {
            Role::Student => format!(
                "{} ({}) - {}",
                user.display_name(),
                user.username,
                user.department.as_deref().unwrap_or("")
            ),
            Role::Admin | Role::Faculty => format!("{} ({})", user.username, user.role),
        };
        report.push_str(&line);
        report.push('\n');
    }
    report
}

pub fn event_list_report(events: &[Event]) -> String {
    let mut report = String::from("=== EVENTS ===\n\n");
    for (i, event) in events.iter().enumerate() {
        report.push_str(&format!(
            "{}. {} | {} | {} | Seats: {}\n",
            i + 1,
            event.name,
            event.date,
            event.location,
            event.occupancy()
        ));
    }
    report
}

/// Results of one event, numbered, with a closing line when there are any
pub fn results_report(event_name: &str, results: &[EventResult]) -> String {
    let mut report = format!("Results for: {}\n\n", event_name);
    if results.is_empty() {
        report.push_str("No results published for this event yet.");
        return report;
    }

    for (i, result) in results.iter().enumerate() {
        report.push_str(&format!(
            "{}. {} | {} | {}\n",
            i + 1,
            result.student_name,
            result.department,
            result.position
        ));
    }
    report.push_str("\nCongratulations to all winners!");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_user_list_report() {
        let mut student = User::new("asha", "pw", Role::Student);
        student.full_name = Some("Asha Rao".to_string());
        student.department = Some("CSE".to_string());
        let users = vec![User::new("admin", "admin", Role::Admin), student];

        assert_eq!(user_list_report(&users), "=== USERS ===\nadmin (Admin)\nAsha Rao (asha) - CSE\n");
    }

    #[test]
    fn test_event_list_report() {
        let mut event = Event::new("AI Workshop", "Innovation Lab", NaiveDate::from_ymd_opt(2025, 11, 12).unwrap(), 50);
        event.try_book_seat();

        assert_eq!(
            event_list_report(&[event]),
            "=== EVENTS ===\n\n1. AI Workshop | 2025-11-12 | Innovation Lab | Seats: 1/50\n"
        );
    }

    #[test]
    fn test_results_report() {
        let event = Event::new("Cultural Fest", "Main Hall", NaiveDate::from_ymd_opt(2025, 11, 15).unwrap(), 200);
        assert_eq!(
            results_report(&event.name, &[]),
            "Results for: Cultural Fest\n\nNo results published for this event yet."
        );

        let results = vec![EventResult {
            event_id: event.id,
            student_name: "Asha".to_string(),
            department: "CSE".to_string(),
            position: "1st".to_string(),
        }];
        let report = results_report(&event.name, &results);
        assert!(report.contains("1. Asha | CSE | 1st\n"));
        assert!(report.ends_with("Congratulations to all winners!"));
    }
}

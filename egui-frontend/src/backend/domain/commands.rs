//! Domain-level command and query types
//! These structs are the inputs and outputs of the domain services. Text
//! fields arrive exactly as typed into the forms; the services trim and parse.

pub mod user {
    use crate::backend::domain::models::user::User;

    /// Input for the Admin "Add Student" form.
    #[derive(Debug, Clone, Default)]
    pub struct CreateStudentCommand {
        pub username: String,
        pub password: String,
        pub full_name: String,
        pub department: String,
    }

    /// Result of creating a student account.
    #[derive(Debug, Clone)]
    pub struct CreateStudentResult {
        pub user: User,
        pub success_message: String,
    }

    /// Result of listing accounts.
    #[derive(Debug, Clone)]
    pub struct ListUsersResult {
        pub users: Vec<User>,
    }
}

pub mod event {
    use crate::backend::domain::models::event::{Event, EventId};

    /// Input for the "Add Event" form. Date and seats are raw text.
    #[derive(Debug, Clone, Default)]
    pub struct CreateEventCommand {
        pub name: String,
        pub location: String,
        pub date: String,
        pub total_seats: String,
    }

    /// Result of creating an event.
    #[derive(Debug, Clone)]
    pub struct CreateEventResult {
        pub event: Event,
        pub success_message: String,
    }

    /// Result of listing events.
    #[derive(Debug, Clone)]
    pub struct ListEventsResult {
        pub events: Vec<Event>,
    }

    /// Input for registering the logged-in student.
    #[derive(Debug, Clone)]
    pub struct RegisterForEventCommand {
        pub event_id: EventId,
        pub username: String,
    }

    /// Result of a successful registration.
    #[derive(Debug, Clone)]
    pub struct RegisterForEventResult {
        pub event: Event,
        pub success_message: String,
    }
}

pub mod result {
    use crate::backend::domain::models::event::{Event, EventId};
    use crate::backend::domain::models::event_result::EventResult;

    /// Input for publishing a result against an existing event.
    #[derive(Debug, Clone)]
    pub struct PublishResultCommand {
        pub event_id: EventId,
        pub student_name: String,
        pub department: String,
        pub position: String,
    }

    /// Result of publishing.
    #[derive(Debug, Clone)]
    pub struct PublishResultResult {
        pub result: EventResult,
        pub event: Event,
    }

    /// Query for the results of one event.
    #[derive(Debug, Clone)]
    pub struct ResultsForEventQuery {
        pub event_id: EventId,
    }

    /// Results of one event in publication order.
    #[derive(Debug, Clone)]
    pub struct ResultsForEventResult {
        pub event: Event,
        pub results: Vec<EventResult>,
    }
}

pub mod auth {
    use crate::backend::domain::models::user::User;
    use shared::Role;

    /// Input from the login screen.
    #[derive(Debug, Clone)]
    pub struct LoginCommand {
        pub username: String,
        pub password: String,
        pub role: Role,
    }

    /// The account that matched.
    #[derive(Debug, Clone)]
    pub struct LoginResult {
        pub user: User,
    }
}

//! # Session State Module
//!
//! The logged-in account and its reminder token. `None` on the app means the
//! login screen is showing.

use shared::{DashboardAction, Role};
use crate::backend::domain::models::user::User;
use crate::ui::state::reminder_state::SessionToken;

#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub token: SessionToken,
}

impl Session {
    pub fn new(user: User, token: SessionToken) -> Self {
        Self { user, token }
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    /// Whether this session's dashboard offers the action
    pub fn can(&self, action: DashboardAction) -> bool {
        self.user.role.can(action)
    }

    pub fn dashboard_title(&self) -> String {
        match self.user.role {
            Role::Student => format!("{} - {}", Role::Student.dashboard_title(), self.user.display_name()),
            Role::Admin | Role::Faculty => self.user.role.dashboard_title().to_string(),
        }
    }
}

//! # Login State Module
//!
//! Form fields of the login screen.

use shared::Role;
use crate::backend::domain::commands::auth::LoginCommand;

#[derive(Debug, Clone)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub role: Role,
    /// Shown under the form after a failed attempt
    pub error_message: Option<String>,
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            role: Role::Admin,
            error_message: None,
        }
    }

    pub fn to_command(&self) -> LoginCommand {
        LoginCommand {
            username: self.username.clone(),
            password: self.password.clone(),
            role: self.role,
        }
    }

    /// Clear typed credentials, keeping the selected role
    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
        self.error_message = None;
    }
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}

//! Domain model for an account.

use serde::{Deserialize, Serialize};
use shared::Role;

/// An account that can log in. Usernames are unique across all roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub full_name: Option<String>,
    pub department: Option<String>,
}

impl User {
    pub fn new(username: &str, password: &str, role: Role) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            role,
            full_name: None,
            department: None,
        }
    }

    /// Full name when one was given, otherwise the username
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }

    /// Exact, case-sensitive match on the login triple
    pub fn matches_credentials(&self, username: &str, password: &str, role: Role) -> bool {
        self.username == username && self.password == password && self.role == role
    }
}

/// Turn a trimmed form field into `None` when left blank
pub fn optional_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut user = User::new("jdoe", "pw", Role::Student);
        assert_eq!(user.display_name(), "jdoe");

        user.full_name = Some("   ".to_string());
        assert_eq!(user.display_name(), "jdoe");

        user.full_name = Some("Jane Doe".to_string());
        assert_eq!(user.display_name(), "Jane Doe");
    }

    #[test]
    fn test_matches_credentials_is_exact() {
        let user = User::new("admin", "admin", Role::Admin);
        assert!(user.matches_credentials("admin", "admin", Role::Admin));
        assert!(!user.matches_credentials("Admin", "admin", Role::Admin));
        assert!(!user.matches_credentials("admin", "ADMIN", Role::Admin));
        assert!(!user.matches_credentials("admin", "admin", Role::Faculty));
    }

    #[test]
    fn test_optional_field() {
        assert_eq!(optional_field("  "), None);
        assert_eq!(optional_field(" CSE "), Some("CSE".to_string()));
    }
}

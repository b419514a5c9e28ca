use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::backend::domain::commands::auth::{LoginCommand, LoginResult};
use crate::backend::domain::errors::DomainError;
use crate::backend::storage::memory::{MemoryConnection, UserRepository};
use crate::backend::storage::traits::UserStorage;

/// Checks login attempts against stored accounts
#[derive(Clone)]
pub struct AuthService {
    user_repository: UserRepository,
}

impl AuthService {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        let user_repository = UserRepository::new(connection);
        Self { user_repository }
    }

    /// Succeeds only when username, password and role all match one account exactly.
    /// The error never says which of the three was wrong.
    pub fn login(&self, command: LoginCommand) -> Result<LoginResult> {
        let username = command.username.trim();
        let password = command.password.trim();

        let matched = self
            .user_repository
            .list_users()?
            .into_iter()
            .find(|u| u.matches_credentials(username, password, command.role));

        match matched {
            Some(user) => {
                info!("Login succeeded: {} as {}", user.username, user.role);
                Ok(LoginResult { user })
            }
            None => {
                warn!("Login failed for username '{}' as {}", username, command.role);
                Err(DomainError::InvalidCredentials.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::user::User;
    use crate::backend::domain::user_service::UserService;
    use shared::Role;

    fn setup_test() -> AuthService {
        let connection = Arc::new(MemoryConnection::new());
        let users = UserService::new(connection.clone());
        users.seed_user(User::new("admin", "admin", Role::Admin)).unwrap();
        users.seed_user(User::new("faculty", "faculty", Role::Faculty)).unwrap();
        AuthService::new(connection)
    }

    fn login(service: &AuthService, username: &str, password: &str, role: Role) -> Result<LoginResult> {
        service.login(LoginCommand {
            username: username.to_string(),
            password: password.to_string(),
            role,
        })
    }

    #[test]
    fn test_login_trims_input() {
        let service = setup_test();
        let result = login(&service, "  admin ", " admin\t", Role::Admin).unwrap();
        assert_eq!(result.user.username, "admin");
        assert_eq!(result.user.role, Role::Admin);
    }

    #[test]
    fn test_login_failures_share_one_message() {
        let service = setup_test();
        let attempts = [
            ("admin", "wrong", Role::Admin),
            ("ADMIN", "admin", Role::Admin),
            ("admin", "admin", Role::Faculty),
            ("nobody", "admin", Role::Student),
        ];

        for (username, password, role) in attempts {
            let err = login(&service, username, password, role).unwrap_err();
            assert_eq!(err.downcast_ref::<DomainError>(), Some(&DomainError::InvalidCredentials));
            assert_eq!(
                err.to_string(),
                "Invalid credentials or role. If you're a student ask the admin to create an account."
            );
        }
    }

    #[test]
    fn test_faculty_login() {
        let service = setup_test();
        assert!(login(&service, "faculty", "faculty", Role::Faculty).is_ok());
    }
}

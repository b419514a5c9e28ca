use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use shared::Role;
use crate::backend::domain::commands::user::{CreateStudentCommand, CreateStudentResult, ListUsersResult};
use crate::backend::domain::errors::DomainError;
use crate::backend::domain::models::user::{optional_field, User};
use crate::backend::storage::memory::{MemoryConnection, UserRepository};
use crate::backend::storage::traits::UserStorage;

/// Service for managing accounts
#[derive(Clone)]
pub struct UserService {
    user_repository: UserRepository,
}

impl UserService {
    /// Create a new UserService
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        let user_repository = UserRepository::new(connection);
        Self { user_repository }
    }

    /// Create a student account from the Admin form
    pub fn create_student(&self, command: CreateStudentCommand) -> Result<CreateStudentResult> {
        info!("Creating student: username={}", command.username.trim());

        let mut user = User::new(command.username.trim(), command.password.trim(), Role::Student);
        user.full_name = optional_field(&command.full_name);
        user.department = optional_field(&command.department);

        let user = self.insert_user(user)?;

        info!("Created student '{}' ({})", user.display_name(), user.username);

        Ok(CreateStudentResult {
            user,
            success_message: "Student added successfully!".to_string(),
        })
    }

    /// Insert a configured account of any role at startup
    pub fn seed_user(&self, user: User) -> Result<User> {
        info!("Seeding {} account: {}", user.role, user.username);
        self.insert_user(user)
    }

    fn insert_user(&self, user: User) -> Result<User> {
        if user.username.trim().is_empty() {
            return Err(DomainError::EmptyField("Username").into());
        }

        if !self.user_repository.insert_unique(&user)? {
            warn!("Rejected duplicate username: {}", user.username);
            return Err(DomainError::DuplicateUsername(user.username).into());
        }

        Ok(user)
    }

    /// Get an account by username
    pub fn get_user(&self, username: &str) -> Result<Option<User>> {
        self.user_repository.get_user(username)
    }

    /// List all accounts in creation order
    pub fn list_users(&self) -> Result<ListUsersResult> {
        info!("Listing all users");

        let users = self.user_repository.list_users()?;

        info!("Found {} users", users.len());

        Ok(ListUsersResult { users })
    }
}

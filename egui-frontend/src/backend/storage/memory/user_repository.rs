use anyhow::Result;
use log::debug;
use std::sync::Arc;

use super::connection::MemoryConnection;
use crate::backend::domain::models::user::User;
use crate::backend::storage::traits::UserStorage;

/// In-memory account repository
#[derive(Clone)]
pub struct UserRepository {
    connection: Arc<MemoryConnection>,
}

impl UserRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl UserStorage for UserRepository {
    fn insert_unique(&self, user: &User) -> Result<bool> {
        let mut users = self.connection.users_mut()?;
        if users.iter().any(|u| u.username == user.username) {
            debug!("Username '{}' already taken", user.username);
            return Ok(false);
        }
        users.push(user.clone());
        debug!("Stored user '{}' ({} users total)", user.username, users.len());
        Ok(true)
    }

    fn get_user(&self, username: &str) -> Result<Option<User>> {
        let users = self.connection.users()?;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.connection.users()?.clone())
    }
}

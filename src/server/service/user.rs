//! User service for business logic.
//!
//! This module provides the `UserService` which turns repository lookups into
//! application errors and handles account deactivation.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{GetUserParam, User},
};

/// Service providing business logic for user accounts.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a live user by id.
    ///
    /// # Arguments
    /// - `param` - Parameters containing the user id to look up
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id, or the user was soft-deleted
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, param: GetUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_id(param.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", param.id)))
    }

    /// Deactivates a user account by soft-deleting it.
    ///
    /// # Returns
    /// - `Ok(())` - Account deactivated
    /// - `Err(AppError::NotFound)` - No live user with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn deactivate_user(&self, id: Uuid) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.soft_delete(id).await? {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        Ok(())
    }
}

//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Soft-deleted rows stay in the table so their email keeps its unique slot, but every
//! lookup here filters them out.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter,
};
use uuid::Uuid;

use crate::server::model::user::{CreateUserParam, UpdateProfileParam, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new, active user with a freshly generated id.
    ///
    /// # Arguments
    /// - `param` - Account fields; the password must already be hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now().naive_utc();

        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            avatar: ActiveValue::Set(param.avatar),
            phone: ActiveValue::Set(param.phone),
            address: ActiveValue::Set(param.address),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a live user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No such user, or the user was soft-deleted
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a live user by email. Matching is exact.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Updates the provided profile fields of a live user and bumps `updatedAt`.
    ///
    /// # Arguments
    /// - `param` - User id and the fields to change
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No live user with that id
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update_profile(&self, param: UpdateProfileParam) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(param.id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(avatar) = param.avatar {
            active.avatar = ActiveValue::Set(Some(avatar));
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(address) = param.address {
            active.address = ActiveValue::Set(Some(address));
        }
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Soft-deletes a user by setting `deletedAt` and clearing `isActive`.
    ///
    /// Rows already soft-deleted are left untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - A live user was deleted
    /// - `Ok(false)` - No live user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let now = Utc::now().naive_utc();

        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::DeletedAt.is_null())
            .col_expr(entity::user::Column::DeletedAt, Expr::value(Some(now)))
            .col_expr(entity::user::Column::IsActive, Expr::value(false))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

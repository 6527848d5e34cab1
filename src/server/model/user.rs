//! User domain models and parameters.
//!
//! Provides the domain model for reader accounts along with the parameter types
//! used when creating accounts and editing profiles. The stored password hash
//! stays inside the domain model and is dropped when converting to a DTO.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::model::user::UserDto;

/// Reader account with profile data and soft-delete state.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    /// Display name of the user.
    pub name: String,
    /// Login email, unique across all rows including soft-deleted ones.
    pub email: String,
    /// Stored password hash.
    pub password: String,
    /// False once the account has been deactivated.
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Set when the account is soft-deleted; such rows are hidden from lookups.
    pub deleted_at: Option<NaiveDateTime>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - Public view of the user without the password hash
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id.to_string(),
            name: self.name,
            email: self.email,
            is_active: self.is_active,
            avatar: self.avatar,
            phone: self.phone,
            address: self.address,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password: entity.password,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
            avatar: entity.avatar,
            phone: entity.phone,
            address: entity.address,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Parameters for creating a user account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    /// Already hashed password.
    pub password: String,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Parameters for editing a user's profile.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParam {
    pub id: Uuid,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Parameters for querying a user by id.
#[derive(Debug, Clone)]
pub struct GetUserParam {
    pub id: Uuid,
}

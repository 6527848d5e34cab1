//! Shared helper utilities for factory methods.

use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::user::UserFactory;

/// Counter for generating unique names and emails in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user whose row has already been soft-deleted.
///
/// The row keeps its email, so it still occupies the unique email slot.
///
/// # Arguments
/// - `db` - Database connection
/// - `email` - Email address of the deleted user
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity with `deleted_at` set
/// - `Err(DbErr)` - Database error during insert
pub async fn create_soft_deleted_user(
    db: &DatabaseConnection,
    email: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .email(email)
        .active(false)
        .deleted_at(Utc::now().naive_utc())
        .build()
        .await
}

//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create a user that has already been soft-deleted
//!     let gone = factory::helpers::create_soft_deleted_user(&db, "gone@example.com").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("reader@example.com")
//!     .name("Reader")
//!     .active(false)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use helpers::create_soft_deleted_user;
pub use user::{create_user, create_user_with_email};

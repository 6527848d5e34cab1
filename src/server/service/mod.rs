//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data sources. They work
//! with domain models rather than DTOs or entity models:
//!
//! - `user` reads and deactivates accounts stored in Postgres
//! - `content` loads page data from the external content API

pub mod content;
pub mod user;

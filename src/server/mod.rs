//! Server-side API backend and business logic.
//!
//! The backend runs two Axum routers. The REST API (greetings, user lookups and
//! Swagger UI) listens on its own port, while the page data routes are merged into the
//! Dioxus fullstack server that renders the site. SeaORM handles the Postgres user
//! store and reqwest talks to the external content API.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - User business logic and content loading
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, content service)
//! - **Startup** (`startup`) - Database, HTTP client and REST listener initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

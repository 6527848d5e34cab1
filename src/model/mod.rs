//! Data transfer objects shared between the server and the client.

pub mod api;
pub mod page;
pub mod story;
pub mod user;

//! HTTP request handlers.
//!
//! `hello` and `user` belong to the public REST API; `content` serves the page data
//! consumed by the site.

pub mod content;
pub mod hello;
pub mod user;

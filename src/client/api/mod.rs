//! Page data loaders.
//!
//! Each loader has two implementations with the same signature. During server
//! rendering they call the content service in-process; in the browser they fetch the
//! `/api/content/*` JSON endpoints.

pub mod path;

#[cfg(all(feature = "web", not(feature = "server")))]
mod content;
#[cfg(all(feature = "web", not(feature = "server")))]
mod helper;
#[cfg(feature = "server")]
mod render;

#[cfg(all(feature = "web", not(feature = "server")))]
pub use content::{get_category_page, get_home_page, get_reader_page, get_search_page, get_story};
#[cfg(feature = "server")]
pub use render::{get_category_page, get_home_page, get_reader_page, get_search_page, get_story};

use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Category, Home, NotFound, Reader, Search, StoryDetail};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/category/:slug")]
    Category { slug: String },

    #[route("/search?:q")]
    Search { q: String },

    #[route("/story/:slug")]
    StoryDetail { slug: String },

    #[route("/story/:slug/:id")]
    Reader { slug: String, id: i64 },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

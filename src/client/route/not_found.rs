use dioxus::prelude::*;

use crate::client::{component::NotFoundPage, constant::SITE_NAME, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        Title { "404 | {SITE_NAME}" }
        NotFoundPage {
            message: "Trang không tồn tại.".to_string(),
            back: Route::Home {},
            back_label: "Quay lại trang chủ".to_string(),
        }
    }
}

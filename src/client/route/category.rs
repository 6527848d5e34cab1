use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::get_category_page,
        component::{EmptyState, LoadingPage, Page, RankingSidebar, StoryGrid},
        constant::SITE_NAME,
        model::cache::Cache,
    },
    model::page::CategoryPageDto,
};

#[component]
pub fn Category(slug: String) -> Element {
    let page = use_server_future(use_reactive!(|slug| async move {
        get_category_page(slug).await
    }))?;

    let cache = Cache::from_result(page.read().as_ref());
    if let Cache::Error(err) = &cache {
        tracing::error!("Failed to fetch category {}: {}", slug, err);
    }

    let page = cache
        .data()
        .cloned()
        .unwrap_or_else(|| CategoryPageDto::new(slug.clone(), Vec::new()));
    let name = page.name.clone();

    rsx! {
        Title { "{name} | {SITE_NAME}" }
        if cache.is_loading() {
            LoadingPage {}
        } else {
            Page {
                div {
                    class: "flex flex-col gap-2 mb-12",
                    h1 {
                        class: "text-4xl font-black",
                        "Thể loại: "
                        span { class: "text-emerald-400 capitalize", "{name}" }
                    }
                    p {
                        class: "text-slate-500 text-sm",
                        "Khám phá thế giới truyện thuộc thể loại {name}."
                    }
                }
                div {
                    class: "grid grid-cols-1 lg:grid-cols-4 gap-12",
                    div {
                        class: "lg:col-span-3",
                        if page.stories.is_empty() {
                            EmptyState {
                                title: "Chưa có truyện nào",
                                message: "Chúng tôi đang cập nhật thêm truyện cho thể loại này. Vui lòng quay lại sau!",
                            }
                        } else {
                            StoryGrid { stories: page.stories.clone() }
                        }
                    }
                    div {
                        class: "space-y-8",
                        RankingSidebar { title: "Xem nhiều nhất", items: page.ranking.clone() }
                    }
                }
            }
        }
    }
}

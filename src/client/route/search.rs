use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::get_search_page,
        component::{EmptyState, LoadingPage, Page, RankingSidebar, StoryGrid},
        constant::SITE_NAME,
        model::cache::Cache,
    },
    model::page::SearchPageDto,
};

#[component]
pub fn Search(q: String) -> Element {
    let page = use_server_future(use_reactive!(|q| async move { get_search_page(q).await }))?;

    let cache = Cache::from_result(page.read().as_ref());
    if let Cache::Error(err) = &cache {
        tracing::error!("Failed to search for {}: {}", q, err);
    }

    let page = cache.data().cloned().unwrap_or_else(|| SearchPageDto {
        query: q.trim().to_string(),
        ..Default::default()
    });

    rsx! {
        Title { "Tìm kiếm: {page.query} | {SITE_NAME}" }
        if cache.is_loading() {
            LoadingPage {}
        } else {
            Page {
                div {
                    class: "mb-12",
                    h1 { class: "text-3xl font-black mb-2", "Kết quả tìm kiếm" }
                    p {
                        class: "text-slate-500 text-sm",
                        "Tìm thấy "
                        span { class: "text-emerald-400 font-bold", "{page.results.len()}" }
                        " kết quả cho từ khóa:"
                        span { class: "italic text-white ml-2", "\"{page.query}\"" }
                    }
                }
                div {
                    class: "grid grid-cols-1 lg:grid-cols-4 gap-12",
                    div {
                        class: "lg:col-span-3",
                        if page.results.is_empty() {
                            EmptyState {
                                title: "Không tìm thấy truyện",
                                message: "Hãy thử tìm với từ khóa khác hoặc kiểm tra lại chính tả.",
                            }
                        } else {
                            StoryGrid {
                                stories: page.results.clone(),
                                search_term: page.query.clone(),
                            }
                        }
                    }
                    div {
                        class: "space-y-8",
                        RankingSidebar { title: "Có thể bạn quan tâm", items: page.ranking.clone() }
                    }
                }
            }
        }
    }
}

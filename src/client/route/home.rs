use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::get_home_page,
        component::{FeaturedCarousel, LoadingPage, Page, RankingSidebar, StoryGrid},
        constant::SITE_NAME,
        model::cache::Cache,
    },
    model::{page::HomePageDto, story::StoryDto},
};

#[component]
pub fn Home() -> Element {
    let page = use_server_future(|| async move { get_home_page().await })?;

    let cache = Cache::from_result(page.read().as_ref());
    if let Cache::Error(err) = &cache {
        tracing::error!("Failed to fetch home page: {}", err);
    }

    rsx! {
        Title { "{SITE_NAME} - Đọc truyện online" }
        if cache.is_loading() {
            LoadingPage {}
        } else {
            HomeContent { page: cache.data().cloned().unwrap_or_default() }
        }
    }
}

#[component]
fn HomeContent(page: HomePageDto) -> Element {
    let is_empty = page.is_empty();

    rsx! {
        Page {
            FeaturedCarousel { stories: page.featured }
            div {
                class: "grid grid-cols-1 lg:grid-cols-4 gap-12",
                div {
                    class: "lg:col-span-3 space-y-20",
                    Section { title: "Top Xem Nhiều", accent: "bg-emerald-500", stories: page.top_viewed }
                    Section { title: "Đánh Giá Cao", accent: "bg-amber-500", stories: page.top_rated }
                    Section { title: "Mới Cập Nhật", accent: "bg-indigo-500", stories: page.latest }
                    if is_empty {
                        div {
                            class: "text-center py-20 glass rounded-3xl border border-dashed border-white/10",
                            p {
                                class: "text-slate-500",
                                "Đang tải dữ liệu hoặc chưa có truyện nào..."
                            }
                        }
                    }
                }
                div {
                    class: "space-y-8",
                    RankingSidebar { title: "Bảng Xếp Hạng", items: page.ranking }
                }
            }
        }
    }
}

#[component]
fn Section(title: &'static str, accent: &'static str, stories: Vec<StoryDto>) -> Element {
    rsx! {
        section {
            h2 {
                class: "text-2xl font-black flex items-center gap-3 mb-8",
                span { class: "w-2 h-8 rounded-full {accent}" }
                {title}
            }
            StoryGrid { stories }
        }
    }
}

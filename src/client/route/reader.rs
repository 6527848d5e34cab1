use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaArrowLeft, FaArrowRight, FaList},
    Icon,
};
use dioxus_logger::tracing;

use crate::{
    client::{
        api::get_reader_page,
        component::{LoadingPage, NotFoundPage},
        constant::{NOT_FOUND_CHAPTER, SITE_NAME},
        model::cache::Cache,
        router::Route,
    },
    model::page::ReaderPageDto,
};

/// Shown when the chapter body is empty.
const NO_CONTENT: &str = "Chương này chưa có nội dung.";

#[component]
pub fn Reader(slug: String, id: i64) -> Element {
    let page = use_server_future(use_reactive!(|slug, id| async move {
        get_reader_page(slug, id).await
    }))?;

    let cache = Cache::from_result(page.read().as_ref());
    if !cache.is_not_found() {
        if let Cache::Error(err) = &cache {
            tracing::error!("Failed to fetch chapter {} of {}: {}", id, slug, err);
        }
    }

    match cache {
        Cache::Loading => rsx! { LoadingPage {} },
        Cache::Fetched(page) => rsx! { ReaderContent { slug, page } },
        Cache::Error(_) => rsx! {
            Title { "Không tìm thấy chương | {SITE_NAME}" }
            NotFoundPage {
                message: NOT_FOUND_CHAPTER,
                back: Route::StoryDetail { slug },
                back_label: "Quay lại truyện",
            }
        },
    }
}

#[component]
fn ReaderContent(slug: String, page: ReaderPageDto) -> Element {
    let ReaderPageDto {
        chapter,
        previous_id,
        next_id,
    } = page;
    let heading = chapter.heading();
    let story_title = chapter
        .story
        .as_ref()
        .map(|s| s.title.clone())
        .unwrap_or_default();
    let content = if chapter.content.trim().is_empty() {
        NO_CONTENT.to_string()
    } else {
        chapter.content.clone()
    };

    rsx! {
        Title { "{heading} | {SITE_NAME}" }
        div {
            class: "min-h-screen",
            div {
                class: "sticky top-16 z-40 glass border-b border-white/5 py-4",
                div {
                    class: "max-w-4xl mx-auto px-4 md:px-8 text-center",
                    h2 { class: "text-xs font-bold text-emerald-400 uppercase tracking-widest mb-1 truncate", "{story_title}" }
                    h1 { class: "text-sm font-black truncate", "{heading}" }
                }
            }
            div {
                class: "max-w-4xl mx-auto px-4 md:px-12 py-16",
                div {
                    class: "text-slate-300 md:text-xl leading-[2] font-serif whitespace-pre-line text-justify",
                    {content}
                }
                div {
                    class: "mt-20 pt-12 border-t border-white/5 flex items-center justify-between gap-8",
                    if let Some(previous) = previous_id {
                        Link {
                            to: Route::Reader { slug: slug.clone(), id: previous },
                            class: "flex-1 glass hover:bg-white/10 p-5 rounded-2xl flex items-center justify-center gap-4 border border-white/10",
                            Icon { width: 16, height: 16, icon: FaArrowLeft }
                            span { class: "font-bold hidden md:block", "Chương trước" }
                        }
                    } else {
                        button {
                            class: "flex-1 glass p-5 rounded-2xl flex items-center justify-center gap-4 border border-white/10 opacity-20",
                            disabled: true,
                            Icon { width: 16, height: 16, icon: FaArrowLeft }
                            span { class: "font-bold hidden md:block", "Chương trước" }
                        }
                    }
                    Link {
                        to: Route::StoryDetail { slug: slug.clone() },
                        class: "glass hover:bg-white/10 p-5 rounded-2xl text-slate-400",
                        Icon { width: 16, height: 16, icon: FaList }
                    }
                    if let Some(next) = next_id {
                        Link {
                            to: Route::Reader { slug: slug.clone(), id: next },
                            class: "flex-1 bg-emerald-500 hover:bg-emerald-600 text-white p-5 rounded-2xl flex items-center justify-center gap-4",
                            span { class: "font-bold hidden md:block", "Chương sau" }
                            Icon { width: 16, height: 16, icon: FaArrowRight }
                        }
                    } else {
                        button {
                            class: "flex-1 bg-emerald-500 text-white p-5 rounded-2xl flex items-center justify-center gap-4 opacity-20",
                            disabled: true,
                            span { class: "font-bold hidden md:block", "Chương sau" }
                            Icon { width: 16, height: 16, icon: FaArrowRight }
                        }
                    }
                }
                div {
                    class: "mt-12 text-center text-slate-500 text-xs italic",
                    "Cảm ơn bạn đã đọc tại {SITE_NAME}. Chúc bạn có những giây phút thư giãn!"
                }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::get_story,
        component::{LoadingPage, NotFoundPage, Page},
        constant::{NOT_FOUND_STORY, SITE_NAME},
        model::cache::Cache,
        router::Route,
    },
    model::story::{group_thousands, StoryDetailDto},
};

/// Shown when the story has no description.
const NO_DESCRIPTION: &str = "Chưa có giới thiệu cho truyện này.";
/// Characters of the description used for the page's meta description.
const META_DESCRIPTION_CHARS: usize = 160;

#[component]
pub fn StoryDetail(slug: String) -> Element {
    let story = use_server_future(use_reactive!(|slug| async move { get_story(slug).await }))?;

    let cache = Cache::from_result(story.read().as_ref());
    if !cache.is_not_found() {
        if let Cache::Error(err) = &cache {
            tracing::error!("Failed to fetch story {}: {}", slug, err);
        }
    }

    match cache {
        Cache::Loading => rsx! { LoadingPage {} },
        Cache::Fetched(detail) => rsx! { StoryContent { detail } },
        Cache::Error(_) => rsx! {
            Title { "Không tìm thấy truyện | {SITE_NAME}" }
            NotFoundPage {
                message: NOT_FOUND_STORY,
                back: Route::Home {},
                back_label: "Quay lại trang chủ",
            }
        },
    }
}

#[component]
fn StoryContent(detail: StoryDetailDto) -> Element {
    let StoryDetailDto { story, chapters } = detail;
    let author = story.author_name().to_string();
    let rating = story.rating_label().unwrap_or_else(|| "—".to_string());
    let first_chapter = chapters.first().map(|c| c.id);
    let description = story
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    let meta_description = meta_description(story.description.as_deref(), &story.title);

    rsx! {
        Title { "{story.title} - Đọc truyện online tại {SITE_NAME}" }
        document::Meta { name: "description", content: meta_description }
        Page {
            div {
                class: "grid grid-cols-1 lg:grid-cols-4 gap-12",
                div {
                    class: "lg:col-span-3 space-y-12",
                    div {
                        class: "flex flex-col md:flex-row gap-8",
                        div {
                            class: "w-full md:w-64 flex-shrink-0 aspect-[3/4] rounded-2xl overflow-hidden ring-1 ring-white/10 bg-slate-800",
                            if let Some(cover) = story.cover_image.clone() {
                                img { src: cover, alt: story.title.clone(), class: "w-full h-full object-cover" }
                            } else {
                                div { class: "flex h-full items-center justify-center text-slate-500", "No Cover" }
                            }
                        }
                        div {
                            class: "flex-grow",
                            div {
                                class: "flex flex-wrap items-center gap-2 mb-4",
                                for category in story.categories.clone() {
                                    Link {
                                        key: "{category.id}",
                                        to: Route::Category { slug: category.slug.clone() },
                                        class: "text-[10px] font-bold uppercase px-2 py-0.5 rounded bg-emerald-500/10 text-emerald-400 border border-emerald-500/20",
                                        {category.name}
                                    }
                                }
                                if !story.status.is_empty() {
                                    span {
                                        class: "text-[10px] font-bold uppercase px-2 py-0.5 rounded bg-amber-500/10 text-amber-500 border border-amber-500/20",
                                        "{story.status}"
                                    }
                                }
                            }
                            h1 { class: "text-3xl md:text-4xl font-black mb-4", "{story.title}" }
                            div {
                                class: "flex flex-wrap items-center gap-6 text-sm text-slate-400 mb-8 pb-8 border-b border-white/5",
                                span { "Tác giả: " span { class: "text-white font-medium", "{author}" } }
                                span { "Đánh giá: " span { class: "text-yellow-400 font-bold", "★ {rating}" } }
                                span { "Số chương: " span { class: "text-white font-medium", "{story.chapter_count}" } }
                            }
                            if let Some(id) = first_chapter {
                                Link {
                                    to: Route::Reader { slug: story.slug.clone(), id },
                                    class: "inline-block bg-emerald-500 hover:bg-emerald-600 text-white px-10 py-3.5 rounded-xl font-bold mb-12",
                                    "Đọc từ đầu"
                                }
                            }
                            h3 { class: "text-lg font-bold mb-4", "Giới thiệu" }
                            p {
                                class: "text-slate-400 leading-relaxed whitespace-pre-line text-sm md:text-base",
                                {description}
                            }
                        }
                    }
                    div {
                        class: "pt-12",
                        h3 {
                            class: "text-2xl font-black mb-8 flex items-center justify-between",
                            "Danh sách chương"
                            span { class: "text-sm font-normal text-slate-500", "{chapters.len()} chương" }
                        }
                        if chapters.is_empty() {
                            div {
                                class: "text-center py-12 glass rounded-2xl border border-dashed border-white/10",
                                p { class: "text-slate-500", "Chưa có chương nào được cập nhật." }
                            }
                        } else {
                            div {
                                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                                for chapter in chapters.clone() {
                                    Link {
                                        key: "{chapter.id}",
                                        to: Route::Reader { slug: story.slug.clone(), id: chapter.id },
                                        class: "group flex items-center gap-4 p-4 rounded-xl glass border border-white/5 hover:border-emerald-400/30",
                                        span { class: "text-xs font-black text-slate-600 group-hover:text-emerald-500 w-12 italic", "{chapter.number_label()}" }
                                        span { class: "text-sm font-bold truncate group-hover:text-emerald-400", "{chapter.title}" }
                                    }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "glass rounded-2xl border border-white/10 p-6 h-fit",
                    h4 { class: "font-bold mb-4 text-emerald-400", "Thống kê" }
                    Stat { label: "Lượt đọc", value: group_thousands(story.view_count) }
                    Stat { label: "Số chữ", value: group_thousands(story.word_count) }
                    Stat { label: "Đề cử", value: group_thousands(story.vote_count) }
                }
            }
        }
    }
}

#[component]
fn Stat(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "flex justify-between items-center text-xs mb-4",
            span { class: "text-slate-500", {label} }
            span { class: "font-bold", {value} }
        }
    }
}

/// First characters of the description, or a generic line naming the story.
fn meta_description(description: Option<&str>, title: &str) -> String {
    match description.map(str::trim).filter(|d| !d.is_empty()) {
        Some(description) => description.chars().take(META_DESCRIPTION_CHARS).collect(),
        None => format!("Đọc truyện {} online tại {}", title, SITE_NAME),
    }
}

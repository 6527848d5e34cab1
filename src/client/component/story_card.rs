use dioxus::prelude::*;

use crate::{
    client::{model::highlight::highlight_segments, router::Route},
    model::story::StoryDto,
};

#[component]
pub fn StoryCard(story: StoryDto, search_term: Option<String>) -> Element {
    let segments = highlight_segments(&story.title, search_term.as_deref().unwrap_or_default());
    let category = story.main_category().cloned();
    let author = story.author_name().to_string();
    let rating = story.rating_label();

    rsx!(div {
        class: "group block relative",
        Link {
            to: Route::StoryDetail { slug: story.slug.clone() },
            class: "block",
            div {
                class: "relative aspect-[3/4] overflow-hidden rounded-xl bg-slate-800 ring-1 ring-white/10",
                if let Some(cover) = story.cover_image.clone() {
                    img {
                        src: cover,
                        alt: story.title.clone(),
                        class: "h-full w-full object-cover transition-transform duration-500 group-hover:scale-110",
                    }
                } else {
                    div {
                        class: "flex h-full items-center justify-center text-slate-500",
                        "No Cover"
                    }
                }
                div {
                    class: "absolute bottom-0 left-0 right-0 bg-gradient-to-t from-black/90 to-transparent p-4 pt-12 flex justify-between items-end",
                    span {
                        class: "text-xs font-bold text-emerald-400",
                        "{story.chapter_count} chương"
                    }
                    if let Some(rating) = rating {
                        span {
                            class: "text-[10px] text-yellow-400",
                            "★ {rating}"
                        }
                    }
                }
            }
        }
        if let Some(category) = category {
            div {
                class: "absolute top-2 left-2 z-20",
                Link {
                    to: Route::Category { slug: category.slug.clone() },
                    class: "px-2 py-0.5 rounded-md bg-emerald-500/90 text-[10px] font-bold text-white uppercase tracking-wider",
                    {category.name}
                }
            }
        }
        div {
            class: "mt-3",
            Link {
                to: Route::StoryDetail { slug: story.slug.clone() },
                h3 {
                    class: "line-clamp-2 text-sm font-semibold group-hover:text-emerald-400 transition-colors",
                    for (i, segment) in segments.into_iter().enumerate() {
                        if segment.matched {
                            span {
                                key: "{i}",
                                class: "text-red-500 font-bold underline underline-offset-2",
                                {segment.text}
                            }
                        } else {
                            span {
                                key: "{i}",
                                {segment.text}
                            }
                        }
                    }
                }
            }
            p {
                class: "mt-1 text-xs text-slate-500 truncate",
                {author}
            }
        }
    })
}

/// Responsive grid of story cards.
#[component]
pub fn StoryGrid(stories: Vec<StoryDto>, search_term: Option<String>) -> Element {
    rsx!(div {
        class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-x-4 gap-y-10 md:gap-x-6 md:gap-y-12",
        for story in stories {
            StoryCard {
                key: "{story.id}",
                story,
                search_term: search_term.clone(),
            }
        }
    })
}

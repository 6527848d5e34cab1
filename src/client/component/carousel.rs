use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaChevronLeft, FaChevronRight},
    Icon,
};

use crate::{
    client::{model::carousel::CarouselState, router::Route},
    model::story::StoryDto,
};

#[cfg(feature = "web")]
use crate::client::constant::CAROUSEL_INTERVAL_MS;

/// Rotating banner of featured stories.
///
/// Advances on its own every few seconds, counting from the last slide change; the
/// timer stops when the component unmounts. Renders nothing without stories.
#[component]
pub fn FeaturedCarousel(stories: Vec<StoryDto>) -> Element {
    let len = stories.len();
    let mut state = use_signal(move || CarouselState::new(len));

    use_effect(use_reactive!(|len| {
        if state.peek().len() != len {
            state.set(CarouselState::new(len));
        }
    }));

    // Reading the index subscribes the countdown to it, so any slide change
    // (manual or automatic) cancels the pending wait and starts a fresh one.
    #[cfg(feature = "web")]
    let _countdown = use_resource(move || async move {
        let started_at = state.read().index();
        gloo_timers::future::TimeoutFuture::new(CAROUSEL_INTERVAL_MS).await;
        let next = state.peek().auto_advance(started_at);
        state.set(next);
    });

    if stories.is_empty() {
        return rsx!();
    }

    let current = state();

    rsx!(section {
        class: "mb-12 relative overflow-hidden rounded-3xl aspect-[21/9] md:aspect-[3/1] group ring-1 ring-white/10",
        for (index, story) in stories.into_iter().enumerate() {
            div {
                key: "{story.id}",
                class: if index == current.index() {
                    "absolute inset-0 transition-opacity duration-1000 opacity-100 z-10"
                } else {
                    "absolute inset-0 transition-opacity duration-1000 opacity-0 z-0"
                },
                if let Some(cover) = story.cover_image.clone() {
                    img {
                        src: cover,
                        alt: story.title.clone(),
                        class: "absolute inset-0 w-full h-full object-cover",
                    }
                }
                div {
                    class: "absolute inset-0 bg-gradient-to-r from-slate-950 via-slate-950/60 to-transparent flex items-center p-8 md:p-16",
                    div {
                        class: "max-w-xl",
                        span {
                            class: "inline-block px-3 py-1 rounded-full bg-emerald-500/20 text-emerald-400 text-xs font-bold mb-4 uppercase tracking-widest",
                            "Truyện HOT tuần • {index + 1}/{current.len()}"
                        }
                        h2 {
                            class: "text-2xl md:text-5xl font-black mb-4 leading-tight",
                            {story.title.clone()}
                        }
                        p {
                            class: "text-slate-300 text-xs md:text-base line-clamp-2 md:line-clamp-3 mb-8",
                            {story.description.clone().unwrap_or_default()}
                        }
                        div {
                            class: "flex gap-4",
                            Link {
                                to: Route::StoryDetail { slug: story.slug.clone() },
                                class: "bg-emerald-500 hover:bg-emerald-600 text-white px-6 md:px-10 py-2.5 rounded-xl font-bold",
                                "Đọc ngay"
                            }
                            Link {
                                to: Route::StoryDetail { slug: story.slug.clone() },
                                class: "bg-white/10 hover:bg-white/20 text-white px-6 md:px-10 py-2.5 rounded-xl font-bold",
                                "Chi tiết"
                            }
                        }
                    }
                }
            }
        }
        button {
            class: "absolute left-4 top-1/2 -translate-y-1/2 z-20 p-3 rounded-full glass opacity-0 group-hover:opacity-100",
            onclick: move |_| {
                let prev = state.peek().prev();
                state.set(prev);
            },
            Icon { width: 16, height: 16, icon: FaChevronLeft }
        }
        button {
            class: "absolute right-4 top-1/2 -translate-y-1/2 z-20 p-3 rounded-full glass opacity-0 group-hover:opacity-100",
            onclick: move |_| {
                let next = state.peek().next();
                state.set(next);
            },
            Icon { width: 16, height: 16, icon: FaChevronRight }
        }
        div {
            class: "absolute bottom-6 left-1/2 -translate-x-1/2 z-20 flex gap-2",
            for index in 0..current.len() {
                button {
                    key: "{index}",
                    class: if index == current.index() {
                        "h-1.5 rounded-full w-8 bg-emerald-500"
                    } else {
                        "h-1.5 rounded-full w-2 bg-white/30 hover:bg-white/50"
                    },
                    onclick: move |_| {
                        let target = state.peek().go_to(index);
                        state.set(target);
                    },
                }
            }
        }
    })
}

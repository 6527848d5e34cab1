use dioxus::prelude::*;

use crate::{
    client::router::Route,
    model::story::{group_thousands, RankingItemDto},
};

/// Ranks shown with the highlight color.
const HIGHLIGHTED_RANKS: usize = 3;

#[component]
pub fn RankingSidebar(#[props(into)] title: String, items: Vec<RankingItemDto>) -> Element {
    rsx!(div {
        class: "glass rounded-2xl border border-white/10 p-5",
        h2 {
            class: "text-lg font-bold mb-6",
            {title}
        }
        div {
            class: "space-y-4",
            for (index, item) in items.into_iter().enumerate() {
                Link {
                    key: "{item.id}",
                    to: Route::StoryDetail { slug: item.slug.clone() },
                    class: "flex items-start gap-4 group",
                    span {
                        class: if index < HIGHLIGHTED_RANKS {
                            "text-xl font-black italic w-6 flex-shrink-0 text-emerald-500"
                        } else {
                            "text-xl font-black italic w-6 flex-shrink-0 text-slate-600"
                        },
                        "{index + 1}"
                    }
                    div {
                        class: "min-w-0",
                        h4 {
                            class: "text-sm font-medium line-clamp-1 group-hover:text-emerald-400 transition-colors",
                            {item.title}
                        }
                        span {
                            class: "text-[10px] text-slate-500",
                            "{group_thousands(item.view_count)} lượt đọc"
                        }
                    }
                }
            }
        }
    })
}

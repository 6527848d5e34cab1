use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaSpinner, Icon};

use crate::client::router::Route;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "max-w-7xl mx-auto px-4 md:px-8 py-8 lg:py-12 {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        div {
            class: "flex items-center justify-center min-h-[60vh] text-emerald-400",
            Icon {
                class: "animate-spin",
                width: 32,
                height: 32,
                icon: FaSpinner
            }
        }
    )
}

/// 404 state with a single link out.
#[component]
pub fn NotFoundPage(
    #[props(into)] message: String,
    back: Route,
    #[props(into)] back_label: String,
) -> Element {
    rsx!(
        div {
            class: "flex flex-col items-center justify-center min-h-[60vh] text-center",
            h1 {
                class: "text-4xl font-bold mb-4",
                "404"
            }
            p {
                class: "text-slate-500",
                {message}
            }
            Link {
                to: back,
                class: "mt-8 text-emerald-400 font-bold hover:underline",
                {back_label}
            }
        }
    )
}

#[component]
pub fn EmptyState(#[props(into)] title: String, #[props(into)] message: String) -> Element {
    rsx!(
        div {
            class: "text-center py-32 glass rounded-3xl border border-dashed border-white/10",
            h3 {
                class: "text-xl font-bold mb-2",
                {title}
            }
            p {
                class: "text-slate-500",
                {message}
            }
        }
    )
}

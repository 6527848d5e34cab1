use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaMagnifyingGlass, Icon};

use crate::client::{constant::SITE_NAME, router::Route};

/// Category shortcuts shown next to the brand.
const SECTIONS: [(&str, &str); 4] = [
    ("tien-hiep", "Tiên Hiệp"),
    ("huyen-huyen", "Huyền Huyễn"),
    ("do-thi", "Đô Thị"),
    ("kiem-hiep", "Kiếm Hiệp"),
];

#[component]
pub fn Navbar() -> Element {
    let navigator = use_navigator();
    let mut query = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let q = query().trim().to_string();
        if !q.is_empty() {
            navigator.push(Route::Search { q });
        }
    };

    rsx!(nav {
        class: "sticky top-0 z-50 glass border-b border-white/10 px-4 md:px-8 py-4 flex items-center justify-between",
        div {
            class: "flex items-center gap-8",
            Link {
                to: Route::Home {},
                class: "text-2xl font-bold text-emerald-400",
                {SITE_NAME}
            }
            div {
                class: "hidden md:flex items-center gap-6 text-sm font-medium",
                for (slug, name) in SECTIONS {
                    Link {
                        key: "{slug}",
                        to: Route::Category { slug: slug.to_string() },
                        class: "hover:text-emerald-400 transition-colors",
                        {name}
                    }
                }
            }
        }
        form {
            class: "relative flex items-center",
            onsubmit: on_submit,
            input {
                r#type: "text",
                placeholder: "Tìm truyện...",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
                class: "bg-white/5 border border-white/10 rounded-full px-4 py-1.5 text-sm focus:outline-none focus:border-emerald-400/50 w-48 md:w-64",
            }
            button {
                r#type: "submit",
                class: "absolute right-3 text-slate-400",
                Icon {
                    width: 14,
                    height: 14,
                    icon: FaMagnifyingGlass
                }
            }
        }
    })
}

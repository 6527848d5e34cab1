use dioxus::prelude::*;

use crate::client::{
    component::{LoadingPage, Navbar},
    constant::SITE_NAME,
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        class: "min-h-screen flex flex-col bg-slate-950 text-slate-100",
        Navbar {}
        main {
            class: "flex-grow",
            SuspenseBoundary {
                fallback: |_| rsx!(LoadingPage {}),
                Outlet::<Route> {}
            }
        }
        footer {
            class: "border-t border-white/5 py-8 text-center text-xs text-slate-500",
            "© {SITE_NAME}"
        }
    })
}

use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn StatCard(
    title: String,
    value: String,
    icon: &'static str,
    accent: &'static str,
) -> Element {
    rsx! {
        div { class: "{theme::card()} animate-fade-in p-4",
            div { class: "flex items-center justify-between",
                h3 { class: "text-sm font-medium {theme::text_muted()}", "{title}" }
                span { class: "text-lg {accent}", "{icon}" }
            }
            p { class: "mt-2 text-2xl font-bold text-slate-900", "{value}" }
        }
    }
}

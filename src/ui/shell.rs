use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{AppState, Language};
use crate::util::{assets, version};

/// Sidebar + top-nav chrome wrapped around every page.
#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "flex min-h-screen bg-emerald-50/50 font-sans text-slate-800",
            aside { class: "flex w-64 flex-col bg-emerald-900 text-emerald-50",
                div { class: "flex items-center gap-3 p-6",
                    div { class: "flex h-10 w-10 items-center justify-center rounded-lg bg-emerald-800",
                        img { class: "h-6 w-6", src: assets::leaf_logo_data_uri(), alt: "AgriVision logo" }
                    }
                    div {
                        h1 { class: "text-lg font-bold", "{version::APP_NAME}" }
                        p { class: "text-xs text-emerald-200/70", "Advisory Platform" }
                    }
                }
                nav { class: "flex flex-1 flex-col gap-1 px-3",
                    NavButton {
                        active: matches!(current_route, Route::Dashboard {}),
                        onclick: move |_| { nav.push(Route::Dashboard {}); },
                        icon: "🏠",
                        label: "Dashboard",
                    }
                    NavButton {
                        active: matches!(current_route, Route::DiseaseDetection {}),
                        onclick: move |_| { nav.push(Route::DiseaseDetection {}); },
                        icon: "🔬",
                        label: "Disease Detection",
                    }
                    NavButton {
                        active: matches!(current_route, Route::MarketPrices {}),
                        onclick: move |_| { nav.push(Route::MarketPrices {}); },
                        icon: "📊",
                        label: "Market Prices",
                    }
                    NavButton {
                        active: matches!(current_route, Route::ProfitEstimator {}),
                        onclick: move |_| { nav.push(Route::ProfitEstimator {}); },
                        icon: "🧮",
                        label: "Profit Estimator",
                    }
                }
                footer { class: "p-4 text-center text-xs text-emerald-200/60",
                    "{version::APP_NAME} {version::version_label()}"
                }
            }
            div { class: "flex flex-1 flex-col",
                TopNav {}
                main { class: "flex-1 overflow-auto p-6", {children} }
            }
        }
    }
}

#[component]
fn NavButton(
    active: bool,
    onclick: EventHandler<()>,
    icon: &'static str,
    label: &'static str,
) -> Element {
    let class = if active {
        "flex h-11 w-full items-center gap-3 rounded-lg bg-emerald-800 px-3 text-sm font-semibold text-emerald-50"
    } else {
        "flex h-11 w-full items-center gap-3 rounded-lg px-3 text-sm text-emerald-100/80 transition hover:bg-emerald-800 hover:text-emerald-50"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            span { "{icon}" }
            span { "{label}" }
        }
    }
}

#[component]
fn TopNav() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let language = state.with(|st| st.language);
    let unread = state.with(|st| st.unread_notifications);

    rsx! {
        header { class: "flex h-16 items-center justify-between border-b border-emerald-100 bg-white px-6",
            p { class: "text-sm text-slate-500", "Welcome back, Farmer! 🌾" }
            div { class: "flex items-center gap-3",
                select {
                    class: "rounded-lg border border-slate-300 bg-white px-2 py-1 text-sm text-slate-700 focus:border-emerald-500 focus:outline-none",
                    value: language.code(),
                    onchange: move |evt| {
                        if let Some(selected) = Language::from_code(&evt.value()) {
                            state.with_mut(|st| st.language = selected);
                        }
                    },
                    for lang in Language::ALL {
                        option { value: lang.code(), selected: lang == language, "{lang.native_name()}" }
                    }
                }
                button { class: "relative rounded-full p-2 text-lg transition hover:bg-emerald-50",
                    "🔔"
                    if unread > 0 {
                        span { class: "absolute -right-0.5 -top-0.5 flex h-4 w-4 items-center justify-center rounded-full bg-red-500 text-[10px] text-white",
                            "{unread}"
                        }
                    }
                }
                div { class: "flex h-9 w-9 items-center justify-center rounded-full bg-emerald-600 text-white",
                    "👤"
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::domain::Trend;

#[component]
pub fn TrendIcon(trend: Trend) -> Element {
    let (glyph, color, title) = match trend {
        Trend::Up => ("▲", "text-emerald-600", "Rising"),
        Trend::Down => ("▼", "text-red-500", "Falling"),
        Trend::Stable => ("–", "text-slate-400", "Stable"),
    };

    rsx! {
        span { class: "text-sm {color}", title: "{title}", "{glyph}" }
    }
}

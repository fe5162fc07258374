use dioxus::prelude::*;

use crate::domain::Demand;

#[component]
pub fn DemandBadge(demand: Demand) -> Element {
    let color = match demand {
        Demand::High => "bg-emerald-100 text-emerald-700 border-emerald-200",
        Demand::Medium => "bg-amber-100 text-amber-700 border-amber-200",
        Demand::Low => "bg-slate-100 text-slate-600 border-slate-200",
    };

    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {color}",
            "{demand.label()}"
        }
    }
}

use dioxus::prelude::*;

use super::demand_badge::DemandBadge;
use super::trend_icon::TrendIcon;
use crate::domain::{Demand, Trend};
use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct MarketRow {
    pub crop: String,
    pub price_display: String,
    pub location: String,
    pub demand: Demand,
    pub trend: Trend,
}

#[component]
pub fn MarketTable(rows: Vec<MarketRow>) -> Element {
    let is_empty = rows.is_empty();

    rsx! {
        div { class: "{theme::table_container()}",
            table { class: "min-w-full text-sm",
                thead { class: "{theme::table_header()}",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Crop" }
                        th { class: "px-4 py-3 font-medium", "Price / Quintal" }
                        th { class: "px-4 py-3 font-medium", "Location" }
                        th { class: "px-4 py-3 font-medium", "Demand" }
                        th { class: "px-4 py-3 font-medium", "Trend" }
                    }
                }
                tbody { class: "{theme::table_divider()}",
                    for row in rows {
                        tr { class: "transition-colors hover:bg-emerald-50/60",
                            td { class: "px-4 py-3 font-medium text-slate-800", "{row.crop}" }
                            td { class: "px-4 py-3 text-slate-700", "{row.price_display}" }
                            td { class: "px-4 py-3 text-slate-700", "{row.location}" }
                            td { class: "px-4 py-3", DemandBadge { demand: row.demand } }
                            td { class: "px-4 py-3", TrendIcon { trend: row.trend } }
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm {theme::text_muted()}",
                                colspan: "5",
                                "No crops or locations match your search."
                            }
                        }
                    }
                }
            }
        }
    }
}

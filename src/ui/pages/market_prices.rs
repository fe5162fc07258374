use dioxus::prelude::*;

use crate::domain::{filter_records, price_bars};
use crate::infra::market_feed::{as_of_label, market_data};
use crate::ui::components::charts::PriceBarChart;
use crate::ui::components::market_table::{MarketRow, MarketTable};
use crate::ui::theme;
use crate::util::currency::format_inr;

#[component]
pub fn MarketPricesPage() -> Element {
    let mut search = use_signal(String::new);

    // Filter runs on every keystroke; eight rows make that a non-issue.
    let query = search();
    let filtered = filter_records(market_data(), &query);
    let bars = price_bars(&filtered);
    let rows: Vec<MarketRow> = filtered
        .iter()
        .map(|record| MarketRow {
            crop: record.crop.clone(),
            price_display: format_inr(record.price),
            location: record.location.clone(),
            demand: record.demand,
            trend: record.trend,
        })
        .collect();

    rsx! {
        div { class: "space-y-6",
            div {
                h1 { class: "{theme::page_title()}", "Market Prices 📊" }
                p { class: "{theme::page_subtitle()}",
                    "Crop market prices across India. Snapshot as of {as_of_label()}."
                }
            }

            div { class: "max-w-sm",
                label { class: "{theme::label_class()}", "Search" }
                input {
                    class: "{theme::input_class()}",
                    placeholder: "Search crop or location...",
                    value: search(),
                    oninput: move |evt| search.set(evt.value()),
                }
            }

            section { class: "{theme::card()} p-6",
                h2 { class: "{theme::card_title()}", "Price Comparison (₹ per Quintal)" }
                div { class: "mt-4",
                    PriceBarChart { bars }
                }
            }

            MarketTable { rows }
        }
    }
}

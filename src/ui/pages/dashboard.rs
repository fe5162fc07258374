use dioxus::prelude::*;

use crate::infra::market_feed::price_trend;
use crate::ui::components::charts::{TrendLineChart, TrendSeries};
use crate::ui::components::stat_card::StatCard;
use crate::ui::theme;
use crate::util::currency::format_inr;

#[component]
pub fn DashboardPage() -> Element {
    let trend = price_trend();
    let months: Vec<&'static str> = trend.iter().map(|point| point.month).collect();
    let series = vec![
        TrendSeries {
            name: "Wheat",
            color: "#15803d",
            values: trend.iter().map(|point| point.wheat).collect(),
        },
        TrendSeries {
            name: "Rice",
            color: "#0284c7",
            values: trend.iter().map(|point| point.rice).collect(),
        },
        TrendSeries {
            name: "Cotton",
            color: "#d97706",
            values: trend.iter().map(|point| point.cotton).collect(),
        },
    ];

    rsx! {
        div { class: "space-y-6",
            div {
                h1 { class: "{theme::page_title()}", "Welcome back, Farmer! 🌾" }
                p { class: "{theme::page_subtitle()}", "Here's your agricultural overview for today." }
            }

            div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                StatCard {
                    title: "Crop Health Status".to_string(),
                    value: "Good".to_string(),
                    icon: "💚",
                    accent: "text-emerald-600",
                }
                StatCard {
                    title: "Market Price Trends".to_string(),
                    value: "↑ 12%".to_string(),
                    icon: "📈",
                    accent: "text-sky-600",
                }
                StatCard {
                    title: "Estimated Profit".to_string(),
                    value: format_inr(245_000.0),
                    icon: "💰",
                    accent: "text-emerald-700",
                }
                StatCard {
                    title: "Weather Advisory".to_string(),
                    value: "Clear Skies".to_string(),
                    icon: "🌤️",
                    accent: "text-amber-500",
                }
            }

            section { class: "{theme::card()} p-6",
                h2 { class: "{theme::card_title()}", "Crop Price Trends (₹ per Quintal)" }
                div { class: "mt-4",
                    TrendLineChart { labels: months, series }
                }
            }
        }
    }
}

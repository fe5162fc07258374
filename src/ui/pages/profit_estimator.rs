use std::time::Duration;

use dioxus::{document, prelude::*};
use tokio::time::sleep;

use crate::domain::{
    compute, validate, Crop, Estimation, Field, FieldErrors, RawEstimationFields,
};
use crate::ui::theme;
use crate::util::currency::format_inr;

#[component]
pub fn ProfitEstimatorPage() -> Element {
    let mut crop_type = use_signal(String::new);
    let mut cost_input = use_signal(String::new);
    let mut yield_input = use_signal(String::new);
    let mut price_input = use_signal(String::new);
    let mut estimation = use_signal(|| None::<Estimation>);
    let mut errors = use_signal(FieldErrors::default);
    let summary_copied = use_signal(|| false);

    let on_calculate = move |_| {
        let raw = RawEstimationFields {
            crop_type: crop_type(),
            cost_per_unit: cost_input(),
            expected_yield: yield_input(),
            market_price: price_input(),
        };
        match validate(&raw) {
            Ok(input) => {
                errors.set(FieldErrors::default());
                estimation.set(Some(compute(&input)));
            }
            // Previous result stays visible; only the messages change.
            Err(field_errors) => errors.set(field_errors),
        }
    };

    let on_reset = move |_| {
        crop_type.set(String::new());
        cost_input.set(String::new());
        yield_input.set(String::new());
        price_input.set(String::new());
        estimation.set(None);
        errors.set(FieldErrors::default());
    };

    let on_copy_summary = {
        let crop_type = crop_type.clone();
        let estimation = estimation.clone();
        let summary_copied = summary_copied.clone();
        move |_| {
            let Some(result) = estimation() else {
                return;
            };
            let summary = summary_text(&crop_type(), &result);
            if copy_text_to_clipboard(&summary) {
                let mut summary_copied = summary_copied.clone();
                summary_copied.set(true);
                spawn(async move {
                    sleep(Duration::from_secs(2)).await;
                    summary_copied.set(false);
                });
            }
        }
    };

    let current_errors = errors();
    let crop_class = field_class(theme::input_class(), &current_errors, Field::CropType);
    let cost_class = field_class(theme::input_class(), &current_errors, Field::CostPerUnit);
    let yield_class = field_class(theme::input_class(), &current_errors, Field::ExpectedYield);
    let price_class = field_class(theme::input_class(), &current_errors, Field::MarketPrice);
    let selected_crop = crop_type();
    let result = estimation();

    rsx! {
        div { class: "space-y-6",
            div {
                h1 { class: "{theme::page_title()}", "Profit Estimation Engine 💰" }
                p { class: "{theme::page_subtitle()}", "Calculate your expected agricultural profits." }
            }

            div { class: "grid gap-6 lg:grid-cols-2",
                section { class: "{theme::card()} p-6",
                    h2 { class: "{theme::card_title()}", "🧮 Input Parameters" }
                    div { class: "mt-4 space-y-4",
                        div {
                            label { class: "{theme::label_class()}", "Crop Type" }
                            select {
                                class: "{crop_class}",
                                value: selected_crop.clone(),
                                onchange: move |evt| crop_type.set(evt.value()),
                                option { value: "", disabled: true, selected: selected_crop.is_empty(), "Select crop" }
                                for crop in Crop::ALL {
                                    option { value: crop.name(), "{crop.name()}" }
                                }
                            }
                            FieldMessage { message: current_errors.message(Field::CropType) }
                        }
                        div {
                            label { class: "{theme::label_class()}", "Cost per Unit (₹)" }
                            input {
                                class: "{cost_class}",
                                inputmode: "decimal",
                                placeholder: "e.g. 1200",
                                value: cost_input(),
                                oninput: move |evt| cost_input.set(evt.value()),
                            }
                            FieldMessage { message: current_errors.message(Field::CostPerUnit) }
                        }
                        div {
                            label { class: "{theme::label_class()}", "Expected Yield (Quintals)" }
                            input {
                                class: "{yield_class}",
                                inputmode: "decimal",
                                placeholder: "e.g. 50",
                                value: yield_input(),
                                oninput: move |evt| yield_input.set(evt.value()),
                            }
                            FieldMessage { message: current_errors.message(Field::ExpectedYield) }
                        }
                        div {
                            label { class: "{theme::label_class()}", "Current Market Price (₹ per Quintal)" }
                            input {
                                class: "{price_class}",
                                inputmode: "decimal",
                                placeholder: "e.g. 2500",
                                value: price_input(),
                                oninput: move |evt| price_input.set(evt.value()),
                            }
                            FieldMessage { message: current_errors.message(Field::MarketPrice) }
                        }
                        div { class: "flex gap-3",
                            button { class: "{theme::btn_primary()} flex-1", onclick: on_calculate, "Calculate Profit" }
                            button { class: "{theme::btn_secondary()}", onclick: on_reset, "Reset" }
                        }
                    }
                }

                section { class: "{theme::card()} p-6",
                    div { class: "flex items-center justify-between",
                        h2 { class: "{theme::card_title()}", "Estimation Results" }
                        if result.is_some() {
                            button {
                                class: "text-xs font-semibold uppercase tracking-wide text-emerald-700 hover:text-emerald-900",
                                onclick: on_copy_summary,
                                if summary_copied() { "Copied!" } else { "Copy Summary" }
                            }
                        }
                    }
                    if let Some(result) = result {
                        div { class: "mt-4 animate-fade-in space-y-4",
                            ResultRow { label: "Total Cost", value: format_inr(result.total_cost) }
                            ResultRow { label: "Estimated Revenue", value: format_inr(result.revenue) }
                            div { class: "rounded-xl bg-emerald-50 p-5",
                                p { class: "text-sm {theme::text_muted()}", "Estimated Profit" }
                                p {
                                    class: if result.is_loss() {
                                        "text-3xl font-bold {theme::loss_text()}"
                                    } else {
                                        "text-3xl font-bold {theme::gain_text()}"
                                    },
                                    {format_inr(result.profit)}
                                }
                            }
                            p { class: "text-xs {theme::text_muted()}",
                                "* Estimation based on {selected_crop} at current market rates. Actual results may vary."
                            }
                        }
                    } else {
                        div { class: "flex h-48 items-center justify-center {theme::text_muted()}",
                            p { class: "text-sm", "Fill in the form and calculate to see results." }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ResultRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "flex items-center justify-between rounded-xl border border-emerald-100 p-4",
            p { class: "text-sm {theme::text_muted()}", "{label}" }
            p { class: "text-lg font-semibold text-slate-800", "{value}" }
        }
    }
}

#[component]
fn FieldMessage(message: Option<String>) -> Element {
    match message {
        Some(text) => rsx! {
            p { class: "{theme::error_text()}", "{text}" }
        },
        None => rsx! { Fragment {} },
    }
}

fn field_class(base: &str, errors: &FieldErrors, field: Field) -> String {
    if errors.get(field).is_some() {
        format!("{base} {}", theme::input_error())
    } else {
        base.to_string()
    }
}

fn summary_text(crop: &str, result: &Estimation) -> String {
    format!(
        "{crop}: total cost {}, revenue {}, {} {}",
        format_inr(result.total_cost),
        format_inr(result.revenue),
        if result.is_loss() { "loss" } else { "profit" },
        format_inr(result.profit),
    )
}

fn copy_text_to_clipboard(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    // serde_json gives us a correctly escaped JS string literal.
    let payload = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    let script = format!(
        r#"(async () => {{
            const data = {payload};
            try {{
                if (navigator.clipboard && navigator.clipboard.writeText) {{
                    await navigator.clipboard.writeText(data);
                    return true;
                }}
            }} catch (_err) {{
                // fallback
            }}
            try {{
                const textarea = document.createElement('textarea');
                textarea.value = data;
                textarea.style.position = 'fixed';
                textarea.style.opacity = '0';
                document.body.appendChild(textarea);
                textarea.focus();
                textarea.select();
                const ok = document.execCommand('copy');
                document.body.removeChild(textarea);
                return ok;
            }} catch (_err) {{
                return false;
            }}
        }})()"#
    );
    let eval = document::eval(&script);
    spawn(async move {
        if let Err(err) = eval.await {
            println!("Clipboard eval failed: {err}");
        }
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_mentions_loss_for_negative_profit() {
        let result = Estimation {
            total_cost: 10_000.0,
            revenue: 800.0,
            profit: -9_200.0,
        };
        let text = summary_text("Rice", &result);
        assert!(text.contains("loss -₹9,200"));
        assert!(text.starts_with("Rice:"));
    }

    #[test]
    fn error_fields_get_the_error_border() {
        let errors = validate(&RawEstimationFields::default()).expect_err("empty form");
        let class = field_class("base", &errors, Field::CostPerUnit);
        assert!(class.contains(theme::input_error()));
        let clean = field_class("base", &FieldErrors::default(), Field::CostPerUnit);
        assert_eq!(clean, "base");
    }
}

use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    domain::{AppState, LeafClassifier},
    infra::catalog::CatalogClassifier,
    ui::{
        pages::{DashboardPage, DiseaseDetectionPage, MarketPricesPage, ProfitEstimatorPage},
        shell::Shell,
    },
    util::assets,
};

/// Classifier handle shared through context so pages stay decoupled from
/// the concrete implementation.
pub type SharedClassifier = Arc<dyn LeafClassifier>;

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/disease-detection")]
    DiseaseDetection {},
    #[route("/market-prices")]
    MarketPrices {},
    #[route("/profit-estimator")]
    ProfitEstimator {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state.clone());

    use_context_provider::<SharedClassifier>(|| Arc::new(CatalogClassifier::default()));

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn DiseaseDetection() -> Element {
    rsx! { Shell { DiseaseDetectionPage {} } }
}

#[component]
pub fn MarketPrices() -> Element {
    rsx! { Shell { MarketPricesPage {} } }
}

#[component]
pub fn ProfitEstimator() -> Element {
    rsx! { Shell { ProfitEstimatorPage {} } }
}

//! Domain logic for the advisory dashboard lives here.

pub mod app_state;
pub mod detection;
pub mod entities;
pub mod estimation;
pub mod market;

pub use app_state::{AppState, Language};
pub use detection::{FixedClassifier, LeafClassifier, LeafImage};
pub use entities::{
    AnalysisResult, Crop, Demand, Estimation, EstimationInput, MarketRecord, MonthlyPrice, Trend,
};
pub use estimation::{compute, validate, Field, FieldError, FieldErrors, RawEstimationFields};
pub use market::{filter_records, price_bars, PriceBar};

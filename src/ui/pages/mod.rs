pub mod dashboard;
pub mod disease_detection;
pub mod market_prices;
pub mod profit_estimator;

pub use dashboard::DashboardPage;
pub use disease_detection::DiseaseDetectionPage;
pub use market_prices::MarketPricesPage;
pub use profit_estimator::ProfitEstimatorPage;

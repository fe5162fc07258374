pub mod charts;
pub mod demand_badge;
pub mod market_table;
pub mod stat_card;
pub mod trend_icon;

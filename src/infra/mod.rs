//! Static data sources standing in for external collaborators. The disease
//! catalog and the market feed are placeholders with no real backend yet;
//! keeping them behind this layer means wiring in a live source later only
//! touches these modules.

pub mod catalog;
pub mod market_feed;

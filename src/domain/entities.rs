use serde::{Deserialize, Serialize};

/// Crops the advisory platform knows about. The profit estimator and the
/// market dataset both draw from this list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crop {
    Wheat,
    Rice,
    Cotton,
    Sugarcane,
    Soybean,
    Maize,
    Groundnut,
    Mustard,
}

impl Crop {
    pub const ALL: [Crop; 8] = [
        Crop::Wheat,
        Crop::Rice,
        Crop::Cotton,
        Crop::Sugarcane,
        Crop::Soybean,
        Crop::Maize,
        Crop::Groundnut,
        Crop::Mustard,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Crop::Wheat => "Wheat",
            Crop::Rice => "Rice",
            Crop::Cotton => "Cotton",
            Crop::Sugarcane => "Sugarcane",
            Crop::Soybean => "Soybean",
            Crop::Maize => "Maize",
            Crop::Groundnut => "Groundnut",
            Crop::Mustard => "Mustard",
        }
    }

    /// Case-insensitive lookup, used when resolving the form's select value.
    pub fn from_name(name: &str) -> Option<Crop> {
        let name = name.trim();
        Crop::ALL
            .into_iter()
            .find(|crop| crop.name().eq_ignore_ascii_case(name))
    }
}

/// Validated input to the profit calculation. Only `estimation::validate`
/// constructs one, so the numeric fields are always finite and positive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimationInput {
    pub crop: Crop,
    /// Cultivation cost in rupees per quintal of yield.
    pub cost_per_unit: f64,
    /// Expected harvest in quintals.
    pub expected_yield: f64,
    /// Current mandi price in rupees per quintal.
    pub market_price: f64,
}

/// Derived figures for one estimation. Profit may be zero or negative; a
/// loss is a valid outcome, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Estimation {
    pub total_cost: f64,
    pub revenue: f64,
    pub profit: f64,
}

impl Estimation {
    pub fn is_loss(&self) -> bool {
        self.profit < 0.0
    }
}

/// Coarse demand tier attached to a market record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Demand {
    High,
    Medium,
    Low,
}

impl Demand {
    pub fn label(&self) -> &'static str {
        match self {
            Demand::High => "High",
            Demand::Medium => "Medium",
            Demand::Low => "Low",
        }
    }
}

/// Price movement direction for a market record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// One row of the mandi price table. The crop is a display string rather
/// than a `Crop` because listings carry variety qualifiers ("Rice (Basmati)").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketRecord {
    pub crop: String,
    /// Rupees per quintal.
    pub price: f64,
    pub location: String,
    pub demand: Demand,
    pub trend: Trend,
}

/// One month of the dashboard's price-trend series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthlyPrice {
    pub month: &'static str,
    pub wheat: f64,
    pub rice: f64,
    pub cotton: f64,
}

/// Outcome of a leaf analysis run. The catalog entries are placeholders;
/// nothing here is derived from the uploaded image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub disease: String,
    /// Percentage, 0..=100.
    pub confidence: f32,
    pub treatment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_lookup_is_case_insensitive() {
        assert_eq!(Crop::from_name("wheat"), Some(Crop::Wheat));
        assert_eq!(Crop::from_name("  MUSTARD "), Some(Crop::Mustard));
        assert_eq!(Crop::from_name("Sugarcane"), Some(Crop::Sugarcane));
    }

    #[test]
    fn crop_lookup_rejects_unknown_names() {
        assert_eq!(Crop::from_name(""), None);
        assert_eq!(Crop::from_name("Barley"), None);
    }

    #[test]
    fn every_crop_round_trips_through_its_name() {
        for crop in Crop::ALL {
            assert_eq!(Crop::from_name(crop.name()), Some(crop));
        }
    }
}

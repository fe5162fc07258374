//! Static mandi price data. A snapshot rather than a live feed; the as-of
//! date is shown next to the table so the staleness is visible.

use std::sync::OnceLock;

use time::macros::{date, format_description};
use time::Date;

use crate::domain::{Demand, MarketRecord, MonthlyPrice, Trend};

static MARKET_DATA: OnceLock<Vec<MarketRecord>> = OnceLock::new();

const AS_OF: Date = date!(2026 - 08 - 25);

pub fn market_data() -> &'static [MarketRecord] {
    MARKET_DATA.get_or_init(|| {
        let row = |crop: &str, price: f64, location: &str, demand, trend| MarketRecord {
            crop: crop.to_string(),
            price,
            location: location.to_string(),
            demand,
            trend,
        };
        vec![
            row("Wheat", 2_500.0, "Delhi", Demand::High, Trend::Up),
            row("Rice (Basmati)", 3_800.0, "Punjab", Demand::High, Trend::Up),
            row("Cotton", 7_200.0, "Gujarat", Demand::Medium, Trend::Down),
            row("Sugarcane", 350.0, "Maharashtra", Demand::High, Trend::Up),
            row("Soybean", 4_500.0, "Madhya Pradesh", Demand::Low, Trend::Stable),
            row("Maize", 2_100.0, "Karnataka", Demand::Medium, Trend::Up),
            row("Groundnut", 5_800.0, "Rajasthan", Demand::Medium, Trend::Down),
            row("Mustard", 5_200.0, "Haryana", Demand::High, Trend::Up),
        ]
    })
}

/// Six months of wheat/rice/cotton prices for the dashboard trend chart.
pub fn price_trend() -> &'static [MonthlyPrice] {
    const TREND: [MonthlyPrice; 6] = [
        MonthlyPrice { month: "Jan", wheat: 2_150.0, rice: 3_200.0, cotton: 6_100.0 },
        MonthlyPrice { month: "Feb", wheat: 2_200.0, rice: 3_100.0, cotton: 6_300.0 },
        MonthlyPrice { month: "Mar", wheat: 2_350.0, rice: 3_350.0, cotton: 6_000.0 },
        MonthlyPrice { month: "Apr", wheat: 2_400.0, rice: 3_400.0, cotton: 6_500.0 },
        MonthlyPrice { month: "May", wheat: 2_300.0, rice: 3_500.0, cotton: 6_800.0 },
        MonthlyPrice { month: "Jun", wheat: 2_500.0, rice: 3_600.0, cotton: 7_000.0 },
    ];
    &TREND
}

/// When the snapshot was taken, formatted for display ("25 Aug 2026").
pub fn as_of_label() -> String {
    let format = format_description!("[day] [month repr:short] [year]");
    AS_OF
        .format(&format)
        .unwrap_or_else(|_| AS_OF.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_has_eight_rows() {
        assert_eq!(market_data().len(), 8);
    }

    #[test]
    fn trend_series_covers_six_months() {
        let trend = price_trend();
        assert_eq!(trend.len(), 6);
        assert_eq!(trend[0].month, "Jan");
        assert_eq!(trend[5].month, "Jun");
    }

    #[test]
    fn as_of_label_is_human_readable() {
        assert_eq!(as_of_label(), "25 Aug 2026");
    }
}

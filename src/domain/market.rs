use super::entities::MarketRecord;

/// One bar of the price-comparison chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceBar {
    pub label: String,
    pub price: f64,
}

/// Case-insensitive substring filter over crop name and location. An empty
/// or whitespace query keeps every record; no match yields an empty set.
pub fn filter_records<'a>(records: &'a [MarketRecord], query: &str) -> Vec<&'a MarketRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| {
            record.crop.to_lowercase().contains(&needle)
                || record.location.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Chart rows for the filtered records. Listings like "Rice (Basmati)" are
/// shortened to their first word so bar labels stay readable.
pub fn price_bars(records: &[&MarketRecord]) -> Vec<PriceBar> {
    records
        .iter()
        .map(|record| PriceBar {
            label: record
                .crop
                .split_whitespace()
                .next()
                .unwrap_or(record.crop.as_str())
                .to_string(),
            price: record.price,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::market_feed::market_data;

    #[test]
    fn substring_match_on_crop_name() {
        let hits = filter_records(market_data(), "whe");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].crop, "Wheat");
    }

    #[test]
    fn substring_match_on_location() {
        let hits = filter_records(market_data(), "punjab");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].crop, "Rice (Basmati)");
    }

    #[test]
    fn filter_is_case_insensitive() {
        assert_eq!(
            filter_records(market_data(), "COTTON").len(),
            filter_records(market_data(), "cotton").len()
        );
    }

    #[test]
    fn empty_query_returns_every_record() {
        assert_eq!(filter_records(market_data(), "").len(), market_data().len());
        assert_eq!(
            filter_records(market_data(), "   ").len(),
            market_data().len()
        );
    }

    #[test]
    fn no_match_returns_empty_not_error() {
        assert!(filter_records(market_data(), "dragonfruit").is_empty());
    }

    #[test]
    fn bars_shorten_multiword_listings() {
        let hits = filter_records(market_data(), "basmati");
        let bars = price_bars(&hits);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].label, "Rice");
        assert!((bars[0].price - 3_800.0).abs() < f64::EPSILON);
    }
}

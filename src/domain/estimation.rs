//! The profit estimator's validate/compute pair. Validation collects one
//! error per offending field instead of stopping at the first, so the form
//! can mark every invalid input in a single pass.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use super::entities::{Crop, Estimation, EstimationInput};

/// Raw form fields exactly as entered. Parsing and range checks happen in
/// [`validate`]; the UI never interprets these itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawEstimationFields {
    pub crop_type: String,
    pub cost_per_unit: String,
    pub expected_yield: String,
    pub market_price: String,
}

/// Form fields a validation error can point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    CropType,
    CostPerUnit,
    ExpectedYield,
    MarketPrice,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::CropType => "Crop Type",
            Field::CostPerUnit => "Cost per Unit",
            Field::ExpectedYield => "Expected Yield",
            Field::MarketPrice => "Market Price",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Select a crop")]
    MissingCrop,
    #[error("Unknown crop: {0}")]
    UnknownCrop(String),
    #[error("Enter valid cost")]
    InvalidCost,
    #[error("Enter valid yield")]
    InvalidYield,
    #[error("Enter valid market price")]
    InvalidMarketPrice,
}

/// Field-scoped validation failures. At most one entry per field; iteration
/// order follows the form layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Human-readable message for one field, ready for inline display.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(FieldError::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {error}", field.label())?;
            first = false;
        }
        Ok(())
    }
}

/// Checks every field independently and reports all failures together.
/// Returns a constructed [`EstimationInput`] only when the whole form is
/// clean, which is the only way one is ever built.
pub fn validate(raw: &RawEstimationFields) -> Result<EstimationInput, FieldErrors> {
    let mut errors = FieldErrors::default();

    let crop = match raw.crop_type.trim() {
        "" => {
            errors.insert(Field::CropType, FieldError::MissingCrop);
            None
        }
        name => match Crop::from_name(name) {
            Some(crop) => Some(crop),
            None => {
                errors.insert(Field::CropType, FieldError::UnknownCrop(name.to_string()));
                None
            }
        },
    };

    let cost_per_unit = parse_positive(&raw.cost_per_unit).or_else(|| {
        errors.insert(Field::CostPerUnit, FieldError::InvalidCost);
        None
    });
    let expected_yield = parse_positive(&raw.expected_yield).or_else(|| {
        errors.insert(Field::ExpectedYield, FieldError::InvalidYield);
        None
    });
    let market_price = parse_positive(&raw.market_price).or_else(|| {
        errors.insert(Field::MarketPrice, FieldError::InvalidMarketPrice);
        None
    });

    match (crop, cost_per_unit, expected_yield, market_price) {
        (Some(crop), Some(cost_per_unit), Some(expected_yield), Some(market_price))
            if errors.is_empty() =>
        {
            Ok(EstimationInput {
                crop,
                cost_per_unit,
                expected_yield,
                market_price,
            })
        }
        _ => Err(errors),
    }
}

/// Derives cost, revenue and profit from a validated input. Pure arithmetic,
/// no rounding; currency formatting is applied at display time only.
pub fn compute(input: &EstimationInput) -> Estimation {
    let total_cost = input.cost_per_unit * input.expected_yield;
    let revenue = input.market_price * input.expected_yield;
    Estimation {
        total_cost,
        revenue,
        profit: revenue - total_cost,
    }
}

fn parse_positive(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(crop: &str, cost: &str, yield_: &str, price: &str) -> RawEstimationFields {
        RawEstimationFields {
            crop_type: crop.to_string(),
            cost_per_unit: cost.to_string(),
            expected_yield: yield_.to_string(),
            market_price: price.to_string(),
        }
    }

    #[test]
    fn profit_case() {
        let input = validate(&raw("Wheat", "1200", "50", "2500")).expect("valid form");
        let result = compute(&input);
        assert!((result.total_cost - 60_000.0).abs() < f64::EPSILON);
        assert!((result.revenue - 125_000.0).abs() < f64::EPSILON);
        assert!((result.profit - 65_000.0).abs() < f64::EPSILON);
        assert!(!result.is_loss());
    }

    #[test]
    fn loss_case_is_computed_not_rejected() {
        let input = validate(&raw("Rice", "1000", "10", "80")).expect("valid form");
        let result = compute(&input);
        assert!((result.total_cost - 10_000.0).abs() < f64::EPSILON);
        assert!((result.revenue - 800.0).abs() < f64::EPSILON);
        assert!((result.profit + 9_200.0).abs() < f64::EPSILON);
        assert!(result.is_loss());
    }

    #[test]
    fn compute_is_idempotent() {
        let input = validate(&raw("Maize", "2100.5", "12.25", "2400")).expect("valid form");
        assert_eq!(compute(&input), compute(&input));
    }

    #[test]
    fn all_invalid_fields_are_reported_together() {
        let errors = validate(&raw("", "0", "-3", "abc")).expect_err("invalid form");
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::CropType), Some(&FieldError::MissingCrop));
        assert_eq!(errors.get(Field::CostPerUnit), Some(&FieldError::InvalidCost));
        assert_eq!(
            errors.get(Field::ExpectedYield),
            Some(&FieldError::InvalidYield)
        );
        assert_eq!(
            errors.get(Field::MarketPrice),
            Some(&FieldError::InvalidMarketPrice)
        );
    }

    #[test]
    fn valid_fields_are_not_flagged() {
        let errors = validate(&raw("Cotton", "500", "", "100")).expect_err("invalid form");
        assert_eq!(errors.len(), 1);
        assert!(errors.get(Field::CostPerUnit).is_none());
        assert!(errors.get(Field::MarketPrice).is_none());
        assert_eq!(
            errors.get(Field::ExpectedYield),
            Some(&FieldError::InvalidYield)
        );
    }

    #[test]
    fn zero_and_negative_numbers_are_rejected() {
        for bad in ["0", "-1", "-0.01"] {
            let errors = validate(&raw("Wheat", bad, "10", "100")).expect_err("invalid cost");
            assert_eq!(errors.get(Field::CostPerUnit), Some(&FieldError::InvalidCost));
        }
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        for bad in ["NaN", "inf", "-inf"] {
            let errors = validate(&raw("Wheat", "100", bad, "100")).expect_err("invalid yield");
            assert_eq!(
                errors.get(Field::ExpectedYield),
                Some(&FieldError::InvalidYield)
            );
        }
    }

    #[test]
    fn unknown_crop_gets_its_own_message() {
        let errors = validate(&raw("Barley", "100", "10", "100")).expect_err("unknown crop");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message(Field::CropType).as_deref(),
            Some("Unknown crop: Barley")
        );
    }

    #[test]
    fn numeric_fields_tolerate_surrounding_whitespace() {
        let input = validate(&raw("Soybean", " 450 ", "20", " 4500")).expect("valid form");
        assert!((input.cost_per_unit - 450.0).abs() < f64::EPSILON);
    }
}

//! Rupee display formatting with Indian digit grouping: the last three
//! digits stand alone, every group before them has two (₹12,34,567).
//! Amounts are rounded to whole rupees; the sign survives for losses.

pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0 && amount.abs().round() > 0.0;
    let rounded = amount.abs().round();
    let digits = format!("{rounded:.0}");
    let grouped = group_indian(&digits);
    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts_have_no_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(100.0), "₹100");
        assert_eq!(format_inr(999.0), "₹999");
    }

    #[test]
    fn thousands_group_the_last_three_digits() {
        assert_eq!(format_inr(2_500.0), "₹2,500");
        assert_eq!(format_inr(65_000.0), "₹65,000");
    }

    #[test]
    fn lakhs_and_crores_group_in_pairs() {
        assert_eq!(format_inr(245_000.0), "₹2,45,000");
        assert_eq!(format_inr(125_000.0), "₹1,25,000");
        assert_eq!(format_inr(12_345_678.0), "₹1,23,45,678");
    }

    #[test]
    fn losses_keep_their_sign() {
        assert_eq!(format_inr(-9_200.0), "-₹9,200");
        assert_eq!(format_inr(-125_000.0), "-₹1,25,000");
    }

    #[test]
    fn fractions_round_to_whole_rupees() {
        assert_eq!(format_inr(2_499.6), "₹2,500");
        assert_eq!(format_inr(-0.4), "₹0");
    }
}

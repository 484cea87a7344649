//! Reward-points scoring rules.
//!
//! Seven independent rules, each a pure function contributing a bounded
//! number of points. A rule that cannot parse its field contributes zero;
//! the fallback lives inside each rule so one malformed field never affects
//! the others.

use crate::model::{LineItem, Receipt};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Total points for a receipt: the sum of all seven rules. Summation order
/// is irrelevant; no rule depends on another.
pub fn score(receipt: &Receipt) -> u64 {
    retailer_alphanumeric(&receipt.retailer)
        + round_dollar_total(&receipt.total)
        + quarter_multiple_total(&receipt.total)
        + item_pair_bonus(&receipt.items)
        + item_description_bonus(&receipt.items)
        + odd_purchase_day(&receipt.purchase_date)
        + afternoon_purchase_time(&receipt.purchase_time)
}

/// One point per ASCII letter or digit in the retailer name.
pub fn retailer_alphanumeric(retailer: &str) -> u64 {
    retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count() as u64
}

/// 50 points if the total string literally ends in ".00". This is a textual
/// suffix check: "10.000" does not qualify even though it is numerically
/// round.
pub fn round_dollar_total(total: &str) -> u64 {
    if total.ends_with(".00") { 50 } else { 0 }
}

/// 25 points if the total parses and is an exact multiple of 0.25.
pub fn quarter_multiple_total(total: &str) -> u64 {
    match total.parse::<f64>() {
        // exact float compare on purpose: quarter steps are exactly
        // representable, so a true multiple leaves a zero remainder
        Ok(value) if value % 0.25 == 0.0 => 25,
        _ => 0,
    }
}

/// 5 points for every complete pair of line items.
pub fn item_pair_bonus(items: &[LineItem]) -> u64 {
    (items.len() as u64 / 2) * 5
}

/// For each item whose trimmed description length is a multiple of 3
/// (length 0 included), ceil(price * 0.2) points. An unparseable price
/// drops that item's contribution only.
pub fn item_description_bonus(items: &[LineItem]) -> u64 {
    items
        .iter()
        .map(|item| {
            let trimmed = item.short_description.trim();
            if trimmed.len() % 3 != 0 {
                return 0;
            }
            match item.price.parse::<f64>() {
                Ok(price) if price.is_finite() => (price * 0.2).ceil() as u64,
                _ => 0,
            }
        })
        .sum()
}

/// 6 points if the purchase date parses and the day of the month is odd.
pub fn odd_purchase_day(date: &str) -> u64 {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) if parsed.day() % 2 == 1 => 6,
        _ => 0,
    }
}

/// 10 points if the purchase time parses and the hour is 14 or 15; 16:00
/// itself is outside the window.
pub fn afternoon_purchase_time(time: &str) -> u64 {
    match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(parsed) if (14..16).contains(&parsed.hour()) => 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, price: &str) -> LineItem {
        LineItem {
            short_description: description.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn counts_ascii_alphanumerics_only() {
        assert_eq!(retailer_alphanumeric("M&M Corner Market"), 14);
        assert_eq!(retailer_alphanumeric("Best-Buy123"), 10);
        assert_eq!(retailer_alphanumeric("!!!***"), 0);
        assert_eq!(retailer_alphanumeric(""), 0);
        assert_eq!(retailer_alphanumeric("café"), 3);
    }

    #[test]
    fn round_dollar_is_a_suffix_check() {
        assert_eq!(round_dollar_total("10.00"), 50);
        assert_eq!(round_dollar_total("10.99"), 0);
        assert_eq!(round_dollar_total("10.000"), 0);
        assert_eq!(round_dollar_total(""), 0);
    }

    #[test]
    fn quarter_multiples_earn_25() {
        assert_eq!(quarter_multiple_total("10.25"), 25);
        assert_eq!(quarter_multiple_total("5.50"), 25);
        assert_eq!(quarter_multiple_total("7.33"), 0);
        assert_eq!(quarter_multiple_total("6.00"), 25);
        assert_eq!(quarter_multiple_total("not-a-number"), 0);
        assert_eq!(quarter_multiple_total(""), 0);
    }

    #[test]
    fn both_total_rules_fire_on_round_dollars() {
        let total = "10.00";
        assert_eq!(round_dollar_total(total) + quarter_multiple_total(total), 75);
        // numerically round but textually not: only the quarter rule fires
        assert_eq!(
            round_dollar_total("10.000") + quarter_multiple_total("10.000"),
            25
        );
    }

    #[test]
    fn pair_bonus_uses_integer_division() {
        assert_eq!(item_pair_bonus(&[]), 0);
        assert_eq!(item_pair_bonus(&[item("A", "1.00")]), 0);
        assert_eq!(item_pair_bonus(&[item("A", "1.00"), item("B", "2.00")]), 5);
        assert_eq!(
            item_pair_bonus(&[
                item("A", "1.00"),
                item("B", "2.00"),
                item("C", "3.00"),
                item("D", "4.00"),
            ]),
            10
        );
        assert_eq!(
            item_pair_bonus(&[item("A", "1.00"), item("B", "2.00"), item("C", "3.00")]),
            5
        );
    }

    #[test]
    fn description_bonus_rounds_price_up() {
        // 18 chars, ceil(12.25 * 0.2) = 3
        assert_eq!(
            item_description_bonus(&[item("Emils Cheese Pizza", "12.25")]),
            3
        );
        // trimmed to 24 chars, ceil(12.00 * 0.2) = 3
        assert_eq!(
            item_description_bonus(&[item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")]),
            3
        );
        // 4 chars, not a multiple of 3
        assert_eq!(item_description_bonus(&[item("Milk", "3.00")]), 0);
    }

    #[test]
    fn empty_description_counts_as_multiple_of_three() {
        assert_eq!(item_description_bonus(&[item("", "4.00")]), 1);
        assert_eq!(item_description_bonus(&[item("   ", "4.00")]), 1);
    }

    #[test]
    fn bad_price_drops_only_that_item() {
        let items = [
            item("Emils Cheese Pizza", "not-a-price"),
            item("Klarbrunn 12-PK 12 FL OZ", "12.00"),
        ];
        assert_eq!(item_description_bonus(&items), 3);
    }

    #[test]
    fn odd_days_earn_six() {
        assert_eq!(odd_purchase_day("2023-07-15"), 6);
        assert_eq!(odd_purchase_day("2023-07-16"), 0);
        assert_eq!(odd_purchase_day("2022-01-01"), 6);
        assert_eq!(odd_purchase_day("garbage"), 0);
        assert_eq!(odd_purchase_day("2023-13-40"), 0);
        assert_eq!(odd_purchase_day(""), 0);
    }

    #[test]
    fn afternoon_window_is_half_open() {
        assert_eq!(afternoon_purchase_time("14:00"), 10);
        assert_eq!(afternoon_purchase_time("14:30"), 10);
        assert_eq!(afternoon_purchase_time("15:59"), 10);
        assert_eq!(afternoon_purchase_time("16:00"), 0);
        assert_eq!(afternoon_purchase_time("13:59"), 0);
        assert_eq!(afternoon_purchase_time("2:30 PM"), 0);
        assert_eq!(afternoon_purchase_time(""), 0);
    }

    #[test]
    fn scores_the_corner_market_receipt() {
        let receipt = Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2023-07-15".to_string(),
            purchase_time: "14:30".to_string(),
            items: vec![item("Milk", "3.00")],
            total: "6.00".to_string(),
        };
        // 14 retailer + 50 round + 25 quarter + 6 odd day + 10 afternoon
        assert_eq!(score(&receipt), 105);
    }

    #[test]
    fn scores_the_target_receipt() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Emils Cheese Pizza", "12.25"),
                item("Knorr Creamy Chicken", "1.26"),
                item("Doritos Nacho Cheese", "3.35"),
                item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            total: "35.35".to_string(),
        };
        // 6 retailer + 10 pairs + 3 + 3 descriptions + 6 odd day
        assert_eq!(score(&receipt), 28);
    }

    #[test]
    fn scores_the_gatorade_receipt() {
        let receipt = Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            items: vec![
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
            ],
            total: "9.00".to_string(),
        };
        // 14 retailer + 50 round + 25 quarter + 10 pairs + 10 afternoon
        assert_eq!(score(&receipt), 109);
    }

    #[test]
    fn malformed_fields_degrade_to_zero_individually() {
        let receipt = Receipt {
            retailer: "Best-Buy123".to_string(),
            purchase_date: "not a date".to_string(),
            purchase_time: "not a time".to_string(),
            items: vec![item("ABC", "oops"), item("DEF", "5.00")],
            total: "abc".to_string(),
        };
        // 10 retailer + 5 pair + ceil(5.00 * 0.2) = 1 for the parseable item
        assert_eq!(score(&receipt), 16);
    }
}

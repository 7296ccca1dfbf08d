//! Display formatting for wei-scale magnitudes and percentages

use agora_common::TOKEN_DECIMALS;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Convert a wei-scale fixed-point quantity to whole tokens
pub fn from_wei(value: Decimal) -> Decimal {
    value * Decimal::new(1, TOKEN_DECIMALS)
}

/// Abbreviate a magnitude with a k/M/B suffix and one fractional digit
pub fn abbreviate(value: Decimal) -> String {
    let abs = value.abs();
    if abs < dec!(1000) {
        return value
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_string();
    }

    let (divisor, suffix) = if abs >= dec!(1000000000) {
        (dec!(1000000000), "B")
    } else if abs >= dec!(1000000) {
        (dec!(1000000), "M")
    } else {
        (dec!(1000), "k")
    };

    let mut scaled =
        (value / divisor).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    // Rounding can carry into the next magnitude (999950 -> 1000.0k);
    // promote to the next suffix instead
    if suffix != "B" && scaled.abs() >= dec!(1000) {
        return abbreviate(scaled * divisor);
    }
    scaled.rescale(1);
    format!("{scaled}{suffix}")
}

/// Format a pre-rounded percentage for display at 2 fractional digits
pub fn display_percent(value: Decimal) -> String {
    let mut pct = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    pct.rescale(2);
    pct.to_string()
}

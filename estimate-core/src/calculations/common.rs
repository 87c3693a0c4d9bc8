//! Shared helpers for pricing calculations.

use rust_decimal::Decimal;

/// Rounds a rupee amount to two decimal places using half-up rounding.
///
/// Used only at display and wire boundaries; intermediate results stay
/// unrounded so rounding error cannot compound across rooms.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a lakh amount to one decimal place, half-up. The quick-estimate
/// tables quote ranges in lakhs at this precision.
pub fn round_lakh(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Computes `amount × percentage / 100` without intermediate rounding.
pub fn percent_of(amount: Decimal, percentage: Decimal) -> Decimal {
    amount * percentage / Decimal::ONE_HUNDRED
}

//! Common utility functions for crop finance calculations.
//!
//! This module provides shared functionality used by the calculator and by
//! anything rendering its output: permissive coercion of user-entered text
//! into amounts, and half-up rounding for display.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

/// Normalizes input for amount parsing.
///
/// Trims whitespace, removes commas (thousands separators in either Indian
/// `1,00,000` or Western `100,000` grouping), drops a leading `+` in front of
/// a digit or point, and pads a bare leading or trailing decimal point so
/// `".5"` and `"12."` parse.
fn normalize_amount_input(s: &str) -> String {
    let mut normalized = s.trim().replace(',', "");

    let signed_number = normalized
        .strip_prefix('+')
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_digit() || c == '.'));
    if signed_number {
        normalized.remove(0);
    }
    if normalized.ends_with('.') && normalized.matches('.').count() == 1 {
        normalized.pop();
    }
    if normalized.starts_with('.') {
        normalized.insert(0, '0');
    } else if let Some(rest) = normalized.strip_prefix("-.") {
        normalized = format!("-0.{rest}");
    }

    normalized
}

/// True for an optional `-`, digits with at most one `.`, and an optional
/// exponent (`e`/`E`, optional sign, digits).
fn is_plain_number(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mantissa_ok = !whole.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit());

    let exponent_ok = exponent.is_none_or(|exp| {
        let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    });

    mantissa_ok && exponent_ok
}

/// Coerces a raw text field into an amount, treating anything unusable as zero.
///
/// Half-typed or garbage input never blocks the calculation. Empty or
/// whitespace-only input is zero; input that is not a number (`"abc"`, `"-"`,
/// `"1 000"`, `"1_000"`) is also zero. Scientific notation (`"2.5e3"`) is
/// accepted. A number beyond the `Decimal` range clamps to `Decimal::MAX` or
/// `Decimal::MIN`, the same as the saturating arithmetic downstream.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use finance_core::calculations::common::coerce_amount;
///
/// assert_eq!(coerce_amount("1,00,000"), dec!(100000));
/// assert_eq!(coerce_amount("  250.50 "), dec!(250.50));
/// assert_eq!(coerce_amount(""), Decimal::ZERO);
/// assert_eq!(coerce_amount("abc"), Decimal::ZERO);
/// ```
pub fn coerce_amount(s: &str) -> Decimal {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    if !is_plain_number(&normalized) {
        debug!(input = %s, "treating non-numeric amount as zero");
        return Decimal::ZERO;
    }

    let parsed = if normalized.contains(['e', 'E']) {
        Decimal::from_scientific(&normalized)
    } else {
        normalized.parse::<Decimal>()
    };

    parsed.unwrap_or_else(|e| clamp_out_of_range(s, &normalized, e))
}

// Well-formed but unrepresentable: saturate large magnitudes, flush tiny ones.
fn clamp_out_of_range(
    input: &str,
    normalized: &str,
    error: rust_decimal::Error,
) -> Decimal {
    let approx = normalized.parse::<f64>().unwrap_or(0.0);
    if approx.abs() < 1.0 {
        debug!(input = %input, "treating unrepresentable amount as zero: {}", error);
        return Decimal::ZERO;
    }

    warn!(input = %input, "amount out of range, clamping: {}", error);
    if approx.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// Rounds a decimal value to `dp` decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// the midpoint are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use finance_core::calculations::common::round_half_up_dp;
///
/// assert_eq!(round_half_up_dp(dec!(123.454), 2), dec!(123.45));
/// assert_eq!(round_half_up_dp(dec!(123.455), 2), dec!(123.46));
/// assert_eq!(round_half_up_dp(dec!(-123.455), 2), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up_dp(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

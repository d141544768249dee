//! Amount formatting for reports.

use finance_core::calculations::common::round_half_up_dp;
use rust_decimal::Decimal;

use crate::config::{DigitGrouping, ReportConfig};

/// Inserts `,` separators into a run of ASCII digits.
fn group_digits(
    digits: &str,
    grouping: DigitGrouping,
) -> String {
    // Both styles group the last three digits; Indian then groups in pairs.
    let rest_size = match grouping {
        DigitGrouping::Indian => 2,
        DigitGrouping::Western => 3,
    };

    let mut groups = Vec::new();
    let mut end = digits.len();
    let mut size = 3;
    while end > size {
        groups.push(&digits[end - size..end]);
        end -= size;
        size = rest_size;
    }
    groups.push(&digits[..end]);
    groups.reverse();
    groups.join(",")
}

/// Formats an amount with the configured currency symbol, rounding and grouping.
///
/// Rounds half-up (away from zero) to `decimal_places`, always showing that
/// many decimals. Negative amounts put the sign before the symbol.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use finance_data::{ReportConfig, format_amount};
///
/// let config = ReportConfig::default();
/// assert_eq!(format_amount(dec!(1234567.5), &config), "₹12,34,567.50");
/// assert_eq!(format_amount(dec!(-3000), &config), "-₹3,000.00");
/// ```
pub fn format_amount(
    value: Decimal,
    config: &ReportConfig,
) -> String {
    let mut rounded = round_half_up_dp(value, config.decimal_places);
    rounded.rescale(config.decimal_places);

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = rounded.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let grouped = group_digits(whole, config.grouping);
    let symbol = &config.currency_symbol;

    // `rescale` cannot add places to values near `Decimal::MAX`; pad by hand.
    let places = config.decimal_places as usize;
    if places == 0 {
        format!("{sign}{symbol}{grouped}")
    } else {
        format!("{sign}{symbol}{grouped}.{fraction:0<places$}")
    }
}

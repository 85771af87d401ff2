//! Parsing and rounding helpers for money amounts and percentages.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, DISPLAY_ROUNDING};
use crate::errors::{Result, ValidationError};

/// Parses a numeric text input into a `Decimal`.
///
/// Accepts plain (`"1250.50"`) and scientific (`"1.5e3"`) notation.
/// Blank input, `NaN`, infinities and trailing garbage are rejected with
/// an error naming `field`.
pub fn parse_amount(field: &str, raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| {
            ValidationError::InvalidNumber {
                field: field.to_string(),
                value: raw.to_string(),
            }
            .into()
        })
}

/// Like [`parse_amount`], additionally rejecting negative values.
pub fn parse_non_negative_amount(field: &str, raw: &str) -> Result<Decimal> {
    let value = parse_amount(field, raw)?;
    ensure_non_negative(field, value)?;
    Ok(value)
}

/// Fails with `NegativeAmount` when `value` is below zero.
pub fn ensure_non_negative(field: &str, value: Decimal) -> Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::NegativeAmount(field.to_string()).into());
    }
    Ok(())
}

/// Parses an optional amount. Absent, blank, unparsable or negative input yields `None`.
pub fn parse_optional_amount(raw: Option<&str>) -> Option<Decimal> {
    let raw = raw?;
    parse_non_negative_amount("", raw).ok()
}

/// Parses an optional loan term. The value is truncated to whole months and
/// must be at least one month, otherwise `None`.
pub fn parse_optional_term_months(raw: Option<&str>) -> Option<u32> {
    let months = parse_amount("", raw?).ok()?.trunc().to_u32()?;
    (months > 0).then_some(months)
}

/// `lhs + rhs`, failing with `AmountOverflow` naming `field` instead of
/// panicking when the sum leaves the `Decimal` range.
pub fn checked_add_amount(field: &str, lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    lhs.checked_add(rhs)
        .ok_or_else(|| ValidationError::AmountOverflow(field.to_string()).into())
}

/// Rounds a value for display (2 decimals, half away from zero).
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, DISPLAY_ROUNDING)
}

/// `paid / original * 100`, clamped into `[0, 100]` and rounded for display.
///
/// Returns zero when `original` is not positive.
pub fn progress_percentage(paid: Decimal, original: Decimal) -> Decimal {
    if original <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let raw = paid
        .checked_div(original)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if paid.is_sign_negative() {
            Decimal::ZERO
        } else {
            Decimal::ONE_HUNDRED
        });
    round_display(raw.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount_accepts_plain_and_scientific() {
        assert_eq!(parse_amount("originalDebt", "2000").unwrap(), dec!(2000));
        assert_eq!(parse_amount("originalDebt", " 12.50 ").unwrap(), dec!(12.50));
        assert_eq!(parse_amount("originalDebt", "1.5e3").unwrap(), dec!(1500));
    }

    #[test]
    fn test_parse_amount_names_field_on_failure() {
        for raw in ["", "   ", "abc", "NaN", "Infinity", "12abc"] {
            match parse_amount("interestRate", raw) {
                Err(Error::Validation(ValidationError::InvalidNumber { field, value })) => {
                    assert_eq!(field, "interestRate");
                    assert_eq!(value, raw);
                }
                other => panic!("expected InvalidNumber for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_parse_non_negative_amount() {
        assert_eq!(parse_non_negative_amount("x", "0").unwrap(), dec!(0));
        assert_eq!(parse_non_negative_amount("x", "-0").unwrap(), dec!(0));
        assert!(matches!(
            parse_non_negative_amount("minimumPayment", "-5"),
            Err(Error::Validation(ValidationError::NegativeAmount(f))) if f == "minimumPayment"
        ));
    }

    #[test]
    fn test_parse_optional_values() {
        assert_eq!(parse_optional_amount(None), None);
        assert_eq!(parse_optional_amount(Some("")), None);
        assert_eq!(parse_optional_amount(Some("oops")), None);
        assert_eq!(parse_optional_amount(Some("-1")), None);
        assert_eq!(parse_optional_amount(Some("5000")), Some(dec!(5000)));

        assert_eq!(parse_optional_term_months(None), None);
        assert_eq!(parse_optional_term_months(Some("0")), None);
        assert_eq!(parse_optional_term_months(Some("0.5")), None);
        assert_eq!(parse_optional_term_months(Some("-12")), None);
        assert_eq!(parse_optional_term_months(Some("36")), Some(36));
        assert_eq!(parse_optional_term_months(Some("12.9")), Some(12));
    }

    #[test]
    fn test_checked_add_amount_reports_overflow() {
        assert_eq!(
            checked_add_amount("totalDebtLeft", dec!(1.5), dec!(2)).unwrap(),
            dec!(3.5)
        );
        assert!(matches!(
            checked_add_amount("totalDebtLeft", Decimal::MAX, dec!(1)),
            Err(Error::Validation(ValidationError::AmountOverflow(f))) if f == "totalDebtLeft"
        ));
    }

    #[test]
    fn test_round_display_is_half_away_from_zero() {
        assert_eq!(round_display(dec!(0.125)), dec!(0.13));
        assert_eq!(round_display(dec!(0.135)), dec!(0.14));
        assert_eq!(round_display(dec!(-0.125)), dec!(-0.13));
        assert_eq!(round_display(dec!(16.6666)), dec!(16.67));
        assert_eq!(round_display(dec!(10.124)), dec!(10.12));
    }

    #[test]
    fn test_progress_percentage() {
        assert_eq!(progress_percentage(dec!(250), dec!(1500)), dec!(16.67));
        assert_eq!(progress_percentage(dec!(0), dec!(0)), dec!(0));
        assert_eq!(progress_percentage(dec!(10), dec!(0)), dec!(0));
        assert_eq!(progress_percentage(dec!(1200), dec!(1000)), dec!(100));
        assert_eq!(progress_percentage(dec!(-50), dec!(1000)), dec!(0));
    }
}

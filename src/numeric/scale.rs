// ============================================================================
// Scale Helpers
// Cached scale factors and the single rescaling path for every amount
// ============================================================================

use rust_decimal::{Decimal, RoundingStrategy};

use super::errors::{MoneyError, MoneyResult};
use super::rounding::RoundingMode;

/// Largest scale a `Decimal` can carry.
pub const MAX_DECIMAL_SCALE: u32 = 28;

/// Compute 10^-n at compile time
const fn unit_factor(n: u32) -> Decimal {
    Decimal::from_parts(1, 0, 0, false, n)
}

/// Scale factors for the fraction digit counts nearly every currency uses.
const CACHED_FACTORS: [Decimal; 5] = [
    unit_factor(0),
    unit_factor(1),
    unit_factor(2),
    unit_factor(3),
    unit_factor(4),
];

/// Returns the factor `10^-fraction_digits`, the value of one smallest unit.
///
/// Counts 0 through 4 come from a precomputed table; larger counts are
/// built directly.
///
/// # Errors
/// Returns `ScaleOutOfRange` beyond the decimal scale limit.
#[inline]
pub fn cent_factor(fraction_digits: u32) -> MoneyResult<Decimal> {
    match CACHED_FACTORS.get(fraction_digits as usize) {
        Some(factor) => Ok(*factor),
        None if fraction_digits <= MAX_DECIMAL_SCALE => Ok(unit_factor(fraction_digits)),
        None => Err(MoneyError::ScaleOutOfRange(fraction_digits)),
    }
}

/// Rescales `value` to exactly `scale` fraction digits.
///
/// Narrowing rounds under `mode`; widening pads with zeros and never
/// rounds. A zero result is always positive.
///
/// # Errors
/// - `RoundingNecessary` if `mode` is `Unnecessary` and digits would be lost
/// - `ScaleOutOfRange` if `scale` exceeds the decimal limit
/// - `Overflow` if the value is too large to carry `scale` digits
pub fn set_scale(value: Decimal, scale: u32, mode: RoundingMode) -> MoneyResult<Decimal> {
    if scale > MAX_DECIMAL_SCALE {
        return Err(MoneyError::ScaleOutOfRange(scale));
    }

    let mut result = match mode.strategy() {
        Some(strategy) => value.round_dp_with_strategy(scale, strategy),
        None => {
            let truncated = value.round_dp_with_strategy(scale, RoundingStrategy::ToZero);
            if truncated != value {
                return Err(MoneyError::RoundingNecessary { value, scale });
            }
            truncated
        }
    };

    // round_dp only ever narrows; pad to the requested scale
    result.rescale(scale);
    if result.scale() != scale {
        return Err(MoneyError::Overflow);
    }

    if result.is_zero() {
        result.set_sign_positive(true);
    }
    Ok(result)
}

/// Widens `value` to `scale` fraction digits without rounding.
///
/// # Errors
/// Returns `DownscaleNotAllowed` if `value` already has more digits.
pub fn widen(value: Decimal, scale: u32) -> MoneyResult<Decimal> {
    if value.scale() > scale {
        return Err(MoneyError::DownscaleNotAllowed {
            from: value.scale(),
            to: scale,
        });
    }
    set_scale(value, scale, RoundingMode::Unnecessary)
}

/// Count of smallest units held by `value` at its own scale.
///
/// The count is kept symmetric so every stored count can be negated.
///
/// # Errors
/// Returns `Overflow` if the count does not fit an `i64` or is `i64::MIN`.
#[inline]
pub fn unscaled_i64(value: Decimal) -> MoneyResult<i64> {
    match i64::try_from(value.mantissa()) {
        Ok(units) if units != i64::MIN => Ok(units),
        _ => Err(MoneyError::Overflow),
    }
}

/// Builds a decimal from a count of `10^-scale` units.
///
/// # Errors
/// Returns `Overflow` if the count does not fit a decimal, or
/// `ScaleOutOfRange` for an unsupported scale.
pub fn from_units(units: i128, scale: u32) -> MoneyResult<Decimal> {
    let factor = cent_factor(scale)?;
    let whole = Decimal::try_from_i128_with_scale(units, 0).map_err(|_| MoneyError::Overflow)?;
    let amount = whole.checked_mul(factor).ok_or(MoneyError::Overflow)?;
    set_scale(amount, scale, RoundingMode::Unnecessary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_cent_factor_cached_range() {
        assert_eq!(cent_factor(0).unwrap(), Decimal::ONE);
        assert_eq!(cent_factor(2).unwrap(), d("0.01"));
        assert_eq!(cent_factor(4).unwrap(), d("0.0001"));
        assert_eq!(cent_factor(2).unwrap().scale(), 2);
    }

    #[test]
    fn test_cent_factor_beyond_cache() {
        assert_eq!(cent_factor(10).unwrap(), d("0.0000000001"));
        assert_eq!(cent_factor(28).unwrap().scale(), 28);
        assert_eq!(cent_factor(29), Err(MoneyError::ScaleOutOfRange(29)));
    }

    #[test]
    fn test_set_scale_rounds_when_narrowing() {
        assert_eq!(set_scale(d("1.005"), 2, RoundingMode::HalfEven).unwrap(), d("1.00"));
        assert_eq!(set_scale(d("1.005"), 2, RoundingMode::HalfUp).unwrap(), d("1.01"));
        assert_eq!(set_scale(d("1.001"), 2, RoundingMode::Ceiling).unwrap(), d("1.01"));
        assert_eq!(set_scale(d("-1.001"), 2, RoundingMode::Floor).unwrap(), d("-1.01"));
        assert_eq!(set_scale(d("-1.009"), 2, RoundingMode::Down).unwrap(), d("-1.00"));
        assert_eq!(set_scale(d("1.001"), 2, RoundingMode::Up).unwrap(), d("1.01"));
    }

    #[test]
    fn test_set_scale_pads_when_widening() {
        let widened = set_scale(d("12.34"), 4, RoundingMode::Unnecessary).unwrap();
        assert_eq!(widened.scale(), 4);
        assert_eq!(widened.to_string(), "12.3400");
    }

    #[test]
    fn test_set_scale_unnecessary() {
        assert_eq!(
            set_scale(d("1.230"), 2, RoundingMode::Unnecessary).unwrap().to_string(),
            "1.23"
        );
        assert_eq!(
            set_scale(d("1.234"), 2, RoundingMode::Unnecessary),
            Err(MoneyError::RoundingNecessary {
                value: d("1.234"),
                scale: 2
            })
        );
    }

    #[test]
    fn test_set_scale_never_negative_zero() {
        let zero = set_scale(d("-0.001"), 2, RoundingMode::HalfEven).unwrap();
        assert!(zero.is_zero());
        assert!(!zero.is_sign_negative());
        assert_eq!(zero.to_string(), "0.00");
    }

    #[test]
    fn test_set_scale_overflow() {
        let result = set_scale(Decimal::MAX, 10, RoundingMode::HalfEven);
        assert_eq!(result, Err(MoneyError::Overflow));
    }

    #[test]
    fn test_widen_rejects_narrowing() {
        assert_eq!(
            widen(d("1.234"), 2),
            Err(MoneyError::DownscaleNotAllowed { from: 3, to: 2 })
        );
        assert_eq!(widen(d("1.2"), 3).unwrap().to_string(), "1.200");
    }

    #[test]
    fn test_units_round_trip() {
        let amount = from_units(1234, 2).unwrap();
        assert_eq!(amount.to_string(), "12.34");
        assert_eq!(unscaled_i64(amount).unwrap(), 1234);

        let negative = from_units(-5, 3).unwrap();
        assert_eq!(negative.to_string(), "-0.005");

        assert_eq!(unscaled_i64(Decimal::from(i64::MIN)), Err(MoneyError::Overflow));
        assert_eq!(unscaled_i64(Decimal::from(-i64::MAX)).unwrap(), -i64::MAX);
    }
}

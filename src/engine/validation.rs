// ============================================================================
// Construction Validation
// Accumulating checks for externally supplied high precision amounts
// ============================================================================

use crate::domain::high_precision::round_to_cents;
use crate::domain::{Currency, HighPrecisionMoney, MoneyConfig, MAX_FRACTION_DIGITS};
use crate::numeric::scale::from_units;
use crate::numeric::{RoundingMode, Validated, ValidationErrors};
use rust_decimal::Decimal;

/// Builds a high precision value from a precise amount and fraction digits
/// received from outside the process.
///
/// Both checks run regardless of each other:
/// - `fraction_digits` must exceed the currency default and not exceed
///   `MAX_FRACTION_DIGITS`
/// - a supplied `cent_amount` must lie between the floor and ceiling cent
///   rounding of the precise amount
///
/// Without a supplied cent amount, one is rounded under the configured
/// precise amount rounding mode (half-even by default).
pub fn validate_precise_amount(
    precise_amount: i64,
    fraction_digits: u32,
    currency: Currency,
    cent_amount: Option<i64>,
) -> Validated<HighPrecisionMoney> {
    // Unrepresentable only for fraction digits far beyond the allowed range,
    // which the digit check already reports
    let amount = from_units(i128::from(precise_amount), fraction_digits).ok();

    let failures = ValidationErrors::collect([
        validate_fraction_digits(fraction_digits, currency).err(),
        amount.and_then(|amount| validate_cent_amount(amount, cent_amount, currency).err()),
    ]);

    if let Some(errors) = failures {
        tracing::debug!(
            precise_amount,
            fraction_digits,
            currency = %currency,
            %errors,
            "rejected precise amount"
        );
        return Err(errors);
    }

    let amount = amount.ok_or_else(|| {
        ValidationErrors::new(format!(
            "preciseAmount {precise_amount} cannot be represented with {fraction_digits} fraction digits."
        ))
    })?;

    let cent_amount = match cent_amount {
        Some(cent_amount) => cent_amount,
        None => round_to_cents(amount, currency, MoneyConfig::current().precise_amount_rounding)
            .map_err(|err| ValidationErrors::new(err.to_string()))?,
    };

    HighPrecisionMoney::from_parts(amount, fraction_digits, cent_amount, currency)
        .map_err(|err| ValidationErrors::new(err.to_string()))
}

fn validate_fraction_digits(fraction_digits: u32, currency: Currency) -> Result<u32, String> {
    let default_digits = currency.default_fraction_digits();
    if fraction_digits <= default_digits {
        Err(format!(
            "fractionDigits must be > {default_digits} (default fraction digits defined by currency {}).",
            currency.code()
        ))
    } else if fraction_digits > MAX_FRACTION_DIGITS {
        Err(format!("fractionDigits must be <= {MAX_FRACTION_DIGITS}."))
    } else {
        Ok(fraction_digits)
    }
}

fn validate_cent_amount(
    amount: Decimal,
    cent_amount: Option<i64>,
    currency: Currency,
) -> Result<Option<i64>, String> {
    let Some(actual) = cent_amount else {
        return Ok(None);
    };
    let min = round_to_cents(amount, currency, RoundingMode::Floor).map_err(|e| e.to_string())?;
    let max = round_to_cents(amount, currency, RoundingMode::Ceiling).map_err(|e| e.to_string())?;
    if actual < min || actual > max {
        Err(format!(
            "centAmount must be correctly rounded preciseAmount (a number between {min} and {max})."
        ))
    } else {
        Ok(Some(actual))
    }
}

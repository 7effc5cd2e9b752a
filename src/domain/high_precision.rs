// ============================================================================
// High-Precision Money
// Sub-cent amounts with an explicitly rounded cent equivalent
// ============================================================================

use super::config::MoneyConfig;
use super::currency::Currency;
use super::money::Money;
use super::AnyMoney;
use crate::engine::partition::partition_units;
use crate::engine::promotion::{calc, div_rem, require_same_currency, BinaryOp};
use crate::engine::validation;
use crate::interfaces::{BaseMoney, MoneyOps, MoneyType};
use crate::numeric::scale::{from_units, set_scale, unscaled_i64, widen};
use crate::numeric::{MoneyError, MoneyResult, RoundingMode, Validated};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

/// Rounds `amount` to the currency's default digits and returns the count
/// of smallest units.
pub(crate) fn round_to_cents(
    amount: Decimal,
    currency: Currency,
    mode: RoundingMode,
) -> MoneyResult<i64> {
    unscaled_i64(set_scale(amount, currency.default_fraction_digits(), mode)?)
}

/// Monetary amount with more fraction digits than its currency's default.
///
/// The cent amount is rounded once, when the value is built, under the
/// rounding mode the caller chose then. It is never silently recomputed;
/// [`update_cent_amount_with_rounding_mode`](Self::update_cent_amount_with_rounding_mode)
/// replaces it explicitly.
///
/// # Example
/// ```
/// use precise_money::prelude::*;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let unit_price = HighPrecisionMoney::from_decimal_amount(
///     Decimal::from_str("0.0125").unwrap(),
///     4,
///     Currency::EUR,
///     RoundingMode::HalfEven,
/// ).unwrap();
/// assert_eq!(unit_price.to_string(), "0.0125 EUR");
/// assert_eq!(unit_price.cent_amount(), 1);
/// assert_eq!(unit_price.precise_amount().unwrap(), 125);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HighPrecisionMoney {
    amount: Decimal,
    fraction_digits: u32,
    cent_amount: i64,
    currency: Currency,
}

impl HighPrecisionMoney {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Assembles a value, checking both scale invariants.
    ///
    /// # Errors
    /// - `ScaleMismatch` if the amount's scale differs from `fraction_digits`
    /// - `FractionDigitsBelowDefault` if `fraction_digits` is below the
    ///   currency default
    pub fn from_parts(
        amount: Decimal,
        fraction_digits: u32,
        cent_amount: i64,
        currency: Currency,
    ) -> MoneyResult<Self> {
        if amount.scale() != fraction_digits {
            return Err(MoneyError::ScaleMismatch {
                expected: fraction_digits,
                actual: amount.scale(),
            });
        }
        if fraction_digits < currency.default_fraction_digits() {
            return Err(MoneyError::FractionDigitsBelowDefault {
                fraction_digits,
                currency_default: currency.default_fraction_digits(),
                currency: currency.code(),
            });
        }
        Ok(Self {
            amount,
            fraction_digits,
            cent_amount,
            currency,
        })
    }

    /// Rescales `amount` to `fraction_digits` and rounds the cent amount,
    /// both under `mode`.
    pub fn from_decimal_amount(
        amount: Decimal,
        fraction_digits: u32,
        currency: Currency,
        mode: RoundingMode,
    ) -> MoneyResult<Self> {
        let scaled = set_scale(amount, fraction_digits, mode)?;
        let cent_amount = round_to_cents(scaled, currency, mode)?;
        Self::from_parts(scaled, fraction_digits, cent_amount, currency)
    }

    /// Builds a value from whole cents, padded to `fraction_digits`.
    pub fn from_cent_amount(
        cent_amount: i64,
        fraction_digits: u32,
        currency: Currency,
    ) -> MoneyResult<Self> {
        let cents = from_units(i128::from(cent_amount), currency.default_fraction_digits())?;
        let amount = set_scale(cents, fraction_digits, RoundingMode::Unnecessary)?;
        Self::from_parts(amount, fraction_digits, cent_amount, currency)
    }

    /// Lifts a cent-precision value by zero padding; the cent amount is
    /// carried over unchanged.
    pub fn from_money(money: &Money, fraction_digits: u32) -> MoneyResult<Self> {
        let amount = widen(money.amount(), fraction_digits)?;
        Self::from_parts(amount, fraction_digits, money.cent_amount(), money.currency())
    }

    /// Validating constructor for externally supplied data.
    ///
    /// Checks that `fraction_digits` lies strictly above the currency default
    /// and at most at [`MAX_FRACTION_DIGITS`](super::MAX_FRACTION_DIGITS),
    /// and that a supplied `cent_amount` lies between the floor and ceiling
    /// cent rounding of the precise amount. Every failed check is reported.
    pub fn from_precise_amount(
        precise_amount: i64,
        fraction_digits: u32,
        currency: Currency,
        cent_amount: Option<i64>,
    ) -> Validated<Self> {
        validation::validate_precise_amount(precise_amount, fraction_digits, currency, cent_amount)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The amount as an integer count of `10^-fraction_digits` units.
    ///
    /// # Errors
    /// Returns `Overflow` if the count does not fit an `i64`.
    pub fn precise_amount(&self) -> MoneyResult<i64> {
        unscaled_i64(self.amount)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    // ========================================================================
    // Precision Changes
    // ========================================================================

    /// Rescales to `fraction_digits` under `mode` and recomputes the cent
    /// amount. Narrowing may genuinely round.
    pub fn with_fraction_digits(
        &self,
        fraction_digits: u32,
        mode: RoundingMode,
    ) -> MoneyResult<Self> {
        Self::from_decimal_amount(self.amount, fraction_digits, self.currency, mode)
    }

    /// Replaces only the stored cent amount, rounded from the unchanged
    /// amount under `mode`.
    pub fn update_cent_amount_with_rounding_mode(&self, mode: RoundingMode) -> MoneyResult<Self> {
        Ok(Self {
            cent_amount: round_to_cents(self.amount, self.currency, mode)?,
            ..*self
        })
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Integral quotient and remainder of dividing by `divisor`, both at
    /// this value's fraction digits, with
    /// `quotient * divisor + remainder == self`.
    ///
    /// Neither amount is rounded. Their cent amounts are derived under the
    /// configured precise amount rounding mode.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero divisor
    /// - `RoundingNecessary` if the remainder needs more than
    ///   `fraction_digits` digits
    pub fn div_rem(
        &self,
        divisor: Decimal,
    ) -> MoneyResult<(HighPrecisionMoney, HighPrecisionMoney)> {
        let (quotient, remainder) = div_rem(self.amount, divisor)?;
        Ok((self.exact(quotient)?, self.exact(remainder)?))
    }

    /// Exact negation of both the amount and the stored cent amount.
    pub fn negate(&self) -> Self {
        let mut amount = -self.amount;
        if amount.is_zero() {
            amount.set_sign_positive(true);
        }
        Self {
            amount,
            cent_amount: -self.cent_amount,
            ..*self
        }
    }

    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.negate()
        } else {
            *self
        }
    }

    /// Numeric comparison; only defined within one currency.
    pub fn try_cmp(&self, other: &HighPrecisionMoney) -> MoneyResult<Ordering> {
        require_same_currency(self.currency, other.currency)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Splits this value by `ratios` in units of `10^-fraction_digits`.
    ///
    /// Shares keep this value's fraction digits; each share's cent amount
    /// is rounded under `mode`.
    pub fn partition(&self, ratios: &[u32], mode: RoundingMode) -> MoneyResult<Vec<Self>> {
        partition_units(self.amount.mantissa(), ratios)?
            .into_iter()
            .map(|share| self.with_amount(from_units(share, self.fraction_digits)?, mode))
            .collect()
    }

    fn with_amount(&self, amount: Decimal, mode: RoundingMode) -> MoneyResult<Self> {
        Self::from_decimal_amount(amount, self.fraction_digits, self.currency, mode)
    }

    fn exact(&self, amount: Decimal) -> MoneyResult<Self> {
        let amount = set_scale(amount, self.fraction_digits, RoundingMode::Unnecessary)?;
        let cent_amount = round_to_cents(
            amount,
            self.currency,
            MoneyConfig::current().precise_amount_rounding,
        )?;
        Self::from_parts(amount, self.fraction_digits, cent_amount, self.currency)
    }

    /// Lifts a same-currency cent value to this value's fraction digits.
    fn promote(&self, money: &Money) -> MoneyResult<Self> {
        require_same_currency(self.currency, money.currency())?;
        money.to_high_precision(self.fraction_digits)
    }
}

// ============================================================================
// Capability
// ============================================================================

impl BaseMoney for HighPrecisionMoney {
    fn money_type(&self) -> MoneyType {
        MoneyType::HighPrecision
    }

    fn currency(&self) -> Currency {
        self.currency
    }

    fn amount(&self) -> Decimal {
        self.amount
    }

    fn cent_amount(&self) -> i64 {
        self.cent_amount
    }

    fn fraction_digits(&self) -> u32 {
        self.fraction_digits
    }

    fn to_money_with_precision_loss(&self) -> MoneyResult<Money> {
        Money::from_cent_amount(self.cent_amount, self.currency)
    }

    fn to_any(&self) -> AnyMoney {
        AnyMoney::HighPrecision(*self)
    }
}

// ============================================================================
// Arithmetic Operators
// ============================================================================

impl MoneyOps<&HighPrecisionMoney> for HighPrecisionMoney {
    type Output = HighPrecisionMoney;

    fn plus(&self, rhs: &HighPrecisionMoney, mode: RoundingMode) -> MoneyResult<Self> {
        calc(self, rhs, BinaryOp::Add, mode)
    }

    fn minus(&self, rhs: &HighPrecisionMoney, mode: RoundingMode) -> MoneyResult<Self> {
        calc(self, rhs, BinaryOp::Sub, mode)
    }

    fn times(&self, rhs: &HighPrecisionMoney, mode: RoundingMode) -> MoneyResult<Self> {
        calc(self, rhs, BinaryOp::Mul, mode)
    }

    fn remainder(&self, rhs: &HighPrecisionMoney, mode: RoundingMode) -> MoneyResult<Self> {
        calc(self, rhs, BinaryOp::Rem, mode)
    }
}

impl MoneyOps<&Money> for HighPrecisionMoney {
    type Output = HighPrecisionMoney;

    fn plus(&self, rhs: &Money, mode: RoundingMode) -> MoneyResult<Self> {
        self.plus(&self.promote(rhs)?, mode)
    }

    fn minus(&self, rhs: &Money, mode: RoundingMode) -> MoneyResult<Self> {
        self.minus(&self.promote(rhs)?, mode)
    }

    fn times(&self, rhs: &Money, mode: RoundingMode) -> MoneyResult<Self> {
        self.times(&self.promote(rhs)?, mode)
    }

    fn remainder(&self, rhs: &Money, mode: RoundingMode) -> MoneyResult<Self> {
        self.remainder(&self.promote(rhs)?, mode)
    }
}

impl MoneyOps<Decimal> for HighPrecisionMoney {
    type Output = HighPrecisionMoney;

    fn plus(&self, rhs: Decimal, mode: RoundingMode) -> MoneyResult<Self> {
        self.plus(&self.with_amount(rhs, mode)?, mode)
    }

    fn minus(&self, rhs: Decimal, mode: RoundingMode) -> MoneyResult<Self> {
        self.minus(&self.with_amount(rhs, mode)?, mode)
    }

    fn times(&self, rhs: Decimal, mode: RoundingMode) -> MoneyResult<Self> {
        self.with_amount(BinaryOp::Mul.apply(self.amount, rhs)?, mode)
    }

    fn remainder(&self, rhs: Decimal, mode: RoundingMode) -> MoneyResult<Self> {
        self.with_amount(BinaryOp::Rem.apply(self.amount, rhs)?, mode)
    }
}

impl MoneyOps<&AnyMoney> for HighPrecisionMoney {
    type Output = HighPrecisionMoney;

    fn plus(&self, rhs: &AnyMoney, mode: RoundingMode) -> MoneyResult<Self> {
        match rhs {
            AnyMoney::CentPrecision(money) => self.plus(money, mode),
            AnyMoney::HighPrecision(money) => self.plus(money, mode),
        }
    }

    fn minus(&self, rhs: &AnyMoney, mode: RoundingMode) -> MoneyResult<Self> {
        match rhs {
            AnyMoney::CentPrecision(money) => self.minus(money, mode),
            AnyMoney::HighPrecision(money) => self.minus(money, mode),
        }
    }

    fn times(&self, rhs: &AnyMoney, mode: RoundingMode) -> MoneyResult<Self> {
        match rhs {
            AnyMoney::CentPrecision(money) => self.times(money, mode),
            AnyMoney::HighPrecision(money) => self.times(money, mode),
        }
    }

    fn remainder(&self, rhs: &AnyMoney, mode: RoundingMode) -> MoneyResult<Self> {
        match rhs {
            AnyMoney::CentPrecision(money) => self.remainder(money, mode),
            AnyMoney::HighPrecision(money) => self.remainder(money, mode),
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialOrd for HighPrecisionMoney {
    /// `None` across currencies. Equal amounts order by fraction digits and
    /// then cent amount so the ordering agrees with `==`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        Some(
            self.amount
                .cmp(&other.amount)
                .then(self.fraction_digits.cmp(&other.fraction_digits))
                .then(self.cent_amount.cmp(&other.cent_amount)),
        )
    }
}

impl Neg for HighPrecisionMoney {
    type Output = HighPrecisionMoney;

    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl fmt::Display for HighPrecisionMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn hp(amount: &str, fraction_digits: u32) -> HighPrecisionMoney {
        HighPrecisionMoney::from_decimal_amount(
            d(amount),
            fraction_digits,
            Currency::EUR,
            RoundingMode::HalfEven,
        )
        .unwrap()
    }

    fn eur(amount: &str) -> Money {
        Money::from_decimal_amount(d(amount), Currency::EUR, RoundingMode::HalfEven).unwrap()
    }

    #[test]
    fn test_from_decimal_amount() {
        let money = HighPrecisionMoney::from_decimal_amount(
            d("1.23456"),
            4,
            Currency::EUR,
            RoundingMode::HalfUp,
        )
        .unwrap();
        assert_eq!(money.amount().to_string(), "1.2346");
        assert_eq!(money.fraction_digits(), 4);
        assert_eq!(money.cent_amount(), 123);
        assert_eq!(money.money_type(), MoneyType::HighPrecision);
    }

    #[test]
    fn test_cent_amount_uses_construction_mode() {
        let floor =
            HighPrecisionMoney::from_decimal_amount(d("0.019"), 3, Currency::EUR, RoundingMode::Floor)
                .unwrap();
        let ceiling = HighPrecisionMoney::from_decimal_amount(
            d("0.011"),
            3,
            Currency::EUR,
            RoundingMode::Ceiling,
        )
        .unwrap();
        assert_eq!(floor.cent_amount(), 1);
        assert_eq!(ceiling.cent_amount(), 2);
    }

    #[test]
    fn test_from_parts_checks_invariants() {
        assert_eq!(
            HighPrecisionMoney::from_parts(d("1.00"), 3, 100, Currency::EUR),
            Err(MoneyError::ScaleMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            HighPrecisionMoney::from_parts(d("1.0"), 1, 100, Currency::EUR),
            Err(MoneyError::FractionDigitsBelowDefault {
                fraction_digits: 1,
                currency_default: 2,
                currency: "EUR"
            })
        );
        assert!(HighPrecisionMoney::from_parts(d("1.00"), 2, 100, Currency::EUR).is_ok());
    }

    #[test]
    fn test_from_cent_amount() {
        let money = HighPrecisionMoney::from_cent_amount(1234, 5, Currency::EUR).unwrap();
        assert_eq!(money.amount().to_string(), "12.34000");
        assert_eq!(money.cent_amount(), 1234);
        assert_eq!(money.precise_amount().unwrap(), 1_234_000);
    }

    #[test]
    fn test_from_money_pads_and_keeps_cents() {
        let money = eur("12.34");
        assert_eq!(money.cent_amount(), 1234);

        let precise = HighPrecisionMoney::from_money(&money, 4).unwrap();
        assert_eq!(precise.amount().to_string(), "12.3400");
        assert_eq!(precise.cent_amount(), 1234);
        assert_eq!(precise.to_money_with_precision_loss().unwrap(), money);
    }

    #[test]
    fn test_from_money_never_narrows() {
        assert!(matches!(
            HighPrecisionMoney::from_money(&eur("12.34"), 1),
            Err(MoneyError::DownscaleNotAllowed { .. })
        ));
    }

    #[test]
    fn test_mixed_addition_promotes_cent_operand() {
        let precise = hp("1.005", 3);
        let cents = eur("2.00");

        let sum = cents.plus(&precise, RoundingMode::HalfEven).unwrap();
        assert_eq!(sum.amount().to_string(), "3.005");
        assert_eq!(sum.fraction_digits(), 3);
        // 300.5 cents rounds to the even neighbour
        assert_eq!(sum.cent_amount(), 300);

        let reversed = precise.plus(&cents, RoundingMode::HalfEven).unwrap();
        assert_eq!(reversed, sum);

        let half_up = cents.plus(&precise, RoundingMode::HalfUp).unwrap();
        assert_eq!(half_up.cent_amount(), 301);
    }

    #[test]
    fn test_differing_fraction_digits_use_the_larger() {
        let sum = hp("0.001", 3)
            .plus(&hp("0.00001", 5), RoundingMode::HalfEven)
            .unwrap();
        assert_eq!(sum.fraction_digits(), 5);
        assert_eq!(sum.amount().to_string(), "0.00101");
    }

    #[test]
    fn test_minus_times_remainder() {
        let mode = RoundingMode::HalfEven;
        assert_eq!(hp("5.125", 3).minus(&hp("0.125", 3), mode).unwrap(), hp("5.000", 3));
        assert_eq!(hp("1.5", 3).times(&hp("2.5", 3), mode).unwrap(), hp("3.750", 3));
        assert_eq!(hp("10.005", 3).remainder(&hp("3", 3), mode).unwrap(), hp("1.005", 3));
        assert_eq!(
            hp("10.005", 3).remainder(Decimal::ZERO, mode),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_decimal_operands() {
        let mode = RoundingMode::HalfEven;
        let base = hp("1.000", 3);
        assert_eq!(base.plus(d("0.0005"), mode).unwrap(), hp("1.000", 3));
        assert_eq!(base.plus(d("0.0015"), mode).unwrap(), hp("1.002", 3));
        assert_eq!(base.minus(d("0.25"), mode).unwrap(), hp("0.750", 3));
        assert_eq!(hp("0.333", 3).times(d("3"), mode).unwrap(), hp("0.999", 3));
        assert_eq!(hp("0.125", 3).times(d("0.5"), mode).unwrap(), hp("0.062", 3));
    }

    #[test]
    fn test_currency_mismatch_on_every_operator() {
        let usd = HighPrecisionMoney::from_decimal_amount(
            d("1.000"),
            3,
            Currency::USD,
            RoundingMode::HalfEven,
        )
        .unwrap();
        let eur = hp("1.000", 3);
        let mode = RoundingMode::HalfEven;
        assert!(matches!(eur.plus(&usd, mode), Err(MoneyError::CurrencyMismatch { .. })));
        assert!(matches!(eur.minus(&usd, mode), Err(MoneyError::CurrencyMismatch { .. })));
        assert!(matches!(eur.times(&usd, mode), Err(MoneyError::CurrencyMismatch { .. })));
        assert!(matches!(eur.remainder(&usd, mode), Err(MoneyError::CurrencyMismatch { .. })));
        assert!(eur.try_cmp(&usd).is_err());
        assert_eq!(eur.partial_cmp(&usd), None);
    }

    #[test]
    fn test_with_fraction_digits() {
        let money = hp("1.23456", 5);
        let narrowed = money.with_fraction_digits(3, RoundingMode::HalfUp).unwrap();
        assert_eq!(narrowed.amount().to_string(), "1.235");
        assert_eq!(narrowed.cent_amount(), 124);

        let widened = money.with_fraction_digits(7, RoundingMode::HalfEven).unwrap();
        assert_eq!(widened.amount().to_string(), "1.2345600");
        assert_eq!(widened.cent_amount(), 123);

        assert!(money.with_fraction_digits(3, RoundingMode::Unnecessary).is_err());
    }

    #[test]
    fn test_update_cent_amount_with_rounding_mode() {
        let money = hp("0.015", 3);
        assert_eq!(money.cent_amount(), 2);

        let floored = money
            .update_cent_amount_with_rounding_mode(RoundingMode::Floor)
            .unwrap();
        assert_eq!(floored.cent_amount(), 1);
        assert_eq!(floored.amount(), money.amount());
        assert_eq!(floored.fraction_digits(), 3);
    }

    fn assert_div_rem_restores(money: HighPrecisionMoney, divisor: Decimal) {
        let (quotient, remainder) = money.div_rem(divisor).unwrap();
        assert_eq!(quotient.fraction_digits(), money.fraction_digits());
        assert_eq!(remainder.amount().scale(), money.fraction_digits());
        assert_eq!(quotient.amount() * divisor + remainder.amount(), money.amount());
    }

    #[test]
    fn test_div_rem() {
        let (quotient, remainder) = hp("10.005", 3).div_rem(d("3")).unwrap();
        assert_eq!(quotient.amount().to_string(), "3.000");
        assert_eq!(quotient.cent_amount(), 300);
        assert_eq!(remainder.amount().to_string(), "1.005");
        // 100.5 cents rounds half-even
        assert_eq!(remainder.cent_amount(), 100);
        assert_div_rem_restores(hp("10.005", 3), d("3"));
    }

    #[test]
    fn test_div_rem_negative_and_fractional() {
        let (quotient, remainder) = hp("-10.005", 3).div_rem(d("0.4")).unwrap();
        assert_eq!(quotient.amount().to_string(), "-25.000");
        assert_eq!(remainder.amount().to_string(), "-0.005");
        assert_div_rem_restores(hp("-10.005", 3), d("0.4"));
        assert_div_rem_restores(hp("10.000", 3), d("0.0004"));
    }

    #[test]
    fn test_div_rem_rejects_remainder_finer_than_fraction_digits() {
        // 10.000 = 33333 * 0.0003 + 0.0001
        assert_eq!(
            hp("10.000", 3).div_rem(d("0.0003")),
            Err(MoneyError::RoundingNecessary {
                value: d("0.0001"),
                scale: 3
            })
        );
        assert_eq!(
            hp("1.000", 3).div_rem(Decimal::ZERO),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_negate() {
        let money = hp("1.005", 3);
        let negated = -money;
        assert_eq!(negated.amount().to_string(), "-1.005");
        assert_eq!(negated.cent_amount(), -money.cent_amount());
        assert_eq!(-negated, money);
        assert_eq!(negated.abs(), money);
    }

    #[test]
    fn test_partition() {
        let parts = hp("0.005", 3).partition(&[3, 7], RoundingMode::HalfEven).unwrap();
        assert_eq!(parts, vec![hp("0.002", 3), hp("0.003", 3)]);

        let total = parts
            .iter()
            .try_fold(hp("0.000", 3), |acc, part| acc.plus(part, RoundingMode::HalfEven))
            .unwrap();
        assert_eq!(total.amount(), d("0.005"));
    }

    #[test]
    fn test_comparison() {
        assert!(hp("1.001", 3) < hp("1.002", 3));
        assert_eq!(
            hp("1.000", 3).try_cmp(&hp("1.00000", 5)).unwrap(),
            Ordering::Equal
        );
        assert_ne!(hp("1.000", 3), hp("1.00000", 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(hp("12.3", 4).to_string(), "12.3000 EUR");
    }

    #[test]
    fn test_currency_checked_before_promotion() {
        let clf = Money::from_cent_amount(10_000, Currency::CLF).unwrap();
        let precise = hp("1.005", 3);
        assert!(matches!(
            precise.plus(&clf, RoundingMode::HalfEven),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
        assert!(matches!(
            clf.plus(&precise, RoundingMode::HalfEven),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }
}

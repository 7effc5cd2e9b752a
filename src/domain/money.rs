// ============================================================================
// Cent-Precision Money
// Amounts fixed to the currency's default fraction digits
// ============================================================================

use super::config::MoneyConfig;
use super::currency::Currency;
use super::high_precision::HighPrecisionMoney;
use super::AnyMoney;
use crate::engine::partition::partition_units;
use crate::engine::promotion::{div_rem, require_same_currency, BinaryOp};
use crate::interfaces::{BaseMoney, MoneyOps, MoneyType};
use crate::numeric::scale::{cent_factor, from_units, set_scale, unscaled_i64};
use crate::numeric::{MoneyError, MoneyResult, RoundingMode};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::sync::LazyLock;

/// Currencies whose zero value is built once and shared.
const CACHED_ZERO_CURRENCIES: [Currency; 5] = [
    Currency::EUR,
    Currency::USD,
    Currency::GBP,
    Currency::JPY,
    Currency::CHF,
];

static CACHED_ZEROES: LazyLock<Vec<Money>> = LazyLock::new(|| {
    tracing::trace!(count = CACHED_ZERO_CURRENCIES.len(), "populating zero money cache");
    CACHED_ZERO_CURRENCIES
        .iter()
        .map(|currency| Money::zero_uncached(*currency))
        .collect()
});

/// Monetary amount at cent precision.
///
/// The amount's scale always equals the currency's default fraction digits,
/// so `12.34 EUR` is stored as `12.34` and never as `12.340`.
///
/// # Example
/// ```
/// use precise_money::prelude::*;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let price = Money::from_decimal_amount(
///     Decimal::from_str("12.345").unwrap(),
///     Currency::EUR,
///     RoundingMode::HalfUp,
/// ).unwrap();
/// assert_eq!(price.to_string(), "12.35 EUR");
/// assert_eq!(price.cent_amount(), 1235);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Money {
    amount: Decimal,
    cent_amount: i64,
    currency: Currency,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Wraps an amount that already has the currency's scale.
    ///
    /// # Errors
    /// - `ScaleMismatch` if the scale differs from the currency default
    /// - `Overflow` if the cent amount does not fit an `i64`
    pub fn try_new(amount: Decimal, currency: Currency) -> MoneyResult<Self> {
        let expected = currency.default_fraction_digits();
        if amount.scale() != expected {
            return Err(MoneyError::ScaleMismatch {
                expected,
                actual: amount.scale(),
            });
        }
        Ok(Self {
            amount,
            cent_amount: unscaled_i64(amount)?,
            currency,
        })
    }

    /// Rescales `amount` to the currency's default digits under `mode`.
    pub fn from_decimal_amount(
        amount: Decimal,
        currency: Currency,
        mode: RoundingMode,
    ) -> MoneyResult<Self> {
        let scaled = set_scale(amount, currency.default_fraction_digits(), mode)?;
        Self::try_new(scaled, currency)
    }

    /// Builds a value from a count of the currency's smallest unit.
    pub fn from_cent_amount(cent_amount: i64, currency: Currency) -> MoneyResult<Self> {
        let fraction_digits = currency.default_fraction_digits();
        let amount = Decimal::from(cent_amount)
            .checked_mul(cent_factor(fraction_digits)?)
            .ok_or(MoneyError::Overflow)?;
        let amount = set_scale(amount, fraction_digits, RoundingMode::Unnecessary)?;
        Self::try_new(amount, currency)
    }

    /// Zero in `currency`, shared for the most common currencies.
    pub fn zero(currency: Currency) -> Self {
        CACHED_ZEROES
            .iter()
            .find(|zero| zero.currency == currency)
            .copied()
            .unwrap_or_else(|| Self::zero_uncached(currency))
    }

    fn zero_uncached(currency: Currency) -> Self {
        Self {
            amount: Decimal::from_parts(0, 0, 0, false, currency.default_fraction_digits()),
            cent_amount: 0,
            currency,
        }
    }

    /// Sums same-currency values, starting from zero.
    pub fn sum<'a, I>(values: I, currency: Currency) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        values
            .into_iter()
            .try_fold(Self::zero(currency), |total, value| {
                total.plus(value, RoundingMode::Unnecessary)
            })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Lifts this value to `fraction_digits` by zero padding.
    pub fn to_high_precision(&self, fraction_digits: u32) -> MoneyResult<HighPrecisionMoney> {
        HighPrecisionMoney::from_money(self, fraction_digits)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Integral quotient and remainder of dividing by `divisor`, both in
    /// this currency, with `quotient * divisor + remainder == self`.
    ///
    /// Neither output is rounded.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero divisor
    /// - `RoundingNecessary` if the remainder needs more digits than the
    ///   currency carries, as with a divisor finer than one cent
    pub fn div_rem(&self, divisor: Decimal) -> MoneyResult<(Money, Money)> {
        let (quotient, remainder) = div_rem(self.amount, divisor)?;
        Ok((self.exact(quotient)?, self.exact(remainder)?))
    }

    pub fn negate(&self) -> Money {
        let mut amount = -self.amount;
        if amount.is_zero() {
            amount.set_sign_positive(true);
        }
        Self {
            amount,
            cent_amount: -self.cent_amount,
            currency: self.currency,
        }
    }

    pub fn abs(&self) -> Money {
        if self.is_negative() {
            self.negate()
        } else {
            *self
        }
    }

    /// Numeric comparison; only defined within one currency.
    pub fn try_cmp(&self, other: &Money) -> MoneyResult<Ordering> {
        require_same_currency(self.currency, other.currency)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Splits this value by `ratios` without losing or creating a cent.
    ///
    /// The first ratios in input order absorb the truncation remainder.
    pub fn partition(&self, ratios: &[u32]) -> MoneyResult<Vec<Money>> {
        let fraction_digits = self.currency.default_fraction_digits();
        partition_units(i128::from(self.cent_amount), ratios)?
            .into_iter()
            .map(|share| Self::try_new(from_units(share, fraction_digits)?, self.currency))
            .collect()
    }

    fn with_amount(&self, amount: Decimal, mode: RoundingMode) -> MoneyResult<Money> {
        Self::from_decimal_amount(amount, self.currency, mode)
    }

    fn exact(&self, amount: Decimal) -> MoneyResult<Money> {
        let fraction_digits = self.currency.default_fraction_digits();
        Self::try_new(set_scale(amount, fraction_digits, RoundingMode::Unnecessary)?, self.currency)
    }

    /// Lifts this value to the fraction digits of a same-currency operand.
    fn promote_to(&self, other: &HighPrecisionMoney) -> MoneyResult<HighPrecisionMoney> {
        require_same_currency(self.currency, other.currency())?;
        self.to_high_precision(other.fraction_digits())
    }
}

// ============================================================================
// Capability
// ============================================================================

impl BaseMoney for Money {
    fn money_type(&self) -> MoneyType {
        MoneyType::CentPrecision
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
        self.currency.default_fraction_digits()
    }

    fn to_money_with_precision_loss(&self) -> MoneyResult<Money> {
        Ok(*self)
    }

    fn to_any(&self) -> AnyMoney {
        AnyMoney::CentPrecision(*self)
    }
}

// ============================================================================
// Arithmetic Operators
// ============================================================================

impl MoneyOps<&Money> for Money {
    type Output = Money;

    /// Addition rounds with the configured addition mode, not `mode`.
    fn plus(&self, rhs: &Money, _mode: RoundingMode) -> MoneyResult<Money> {
        require_same_currency(self.currency, rhs.currency)?;
        let sum = BinaryOp::Add.apply(self.amount, rhs.amount)?;
        self.with_amount(sum, MoneyConfig::current().addition_rounding)
    }

    fn minus(&self, rhs: &Money, mode: RoundingMode) -> MoneyResult<Money> {
        require_same_currency(self.currency, rhs.currency)?;
        let difference = BinaryOp::Sub.apply(self.amount, rhs.amount)?;
        self.with_amount(difference, mode)
    }

    fn times(&self, rhs: &Money, mode: RoundingMode) -> MoneyResult<Money> {
        require_same_currency(self.currency, rhs.currency)?;
        self.times(rhs.amount, mode)
    }

    fn remainder(&self, rhs: &Money, mode: RoundingMode) -> MoneyResult<Money> {
        require_same_currency(self.currency, rhs.currency)?;
        self.remainder(rhs.amount, mode)
    }
}

impl MoneyOps<Decimal> for Money {
    type Output = Money;

    fn plus(&self, rhs: Decimal, mode: RoundingMode) -> MoneyResult<Money> {
        self.plus(&self.with_amount(rhs, mode)?, mode)
    }

    fn minus(&self, rhs: Decimal, mode: RoundingMode) -> MoneyResult<Money> {
        self.minus(&self.with_amount(rhs, mode)?, mode)
    }

    fn times(&self, rhs: Decimal, mode: RoundingMode) -> MoneyResult<Money> {
        self.with_amount(BinaryOp::Mul.apply(self.amount, rhs)?, mode)
    }

    fn remainder(&self, rhs: Decimal, mode: RoundingMode) -> MoneyResult<Money> {
        self.with_amount(BinaryOp::Rem.apply(self.amount, rhs)?, mode)
    }
}

impl MoneyOps<&HighPrecisionMoney> for Money {
    type Output = HighPrecisionMoney;

    fn plus(&self, rhs: &HighPrecisionMoney, mode: RoundingMode) -> MoneyResult<Self::Output> {
        self.promote_to(rhs)?.plus(rhs, mode)
    }

    fn minus(&self, rhs: &HighPrecisionMoney, mode: RoundingMode) -> MoneyResult<Self::Output> {
        self.promote_to(rhs)?.minus(rhs, mode)
    }

    fn times(&self, rhs: &HighPrecisionMoney, mode: RoundingMode) -> MoneyResult<Self::Output> {
        self.promote_to(rhs)?.times(rhs, mode)
    }

    fn remainder(
        &self,
        rhs: &HighPrecisionMoney,
        mode: RoundingMode,
    ) -> MoneyResult<Self::Output> {
        self.promote_to(rhs)?.remainder(rhs, mode)
    }
}

impl MoneyOps<&AnyMoney> for Money {
    type Output = AnyMoney;

    fn plus(&self, rhs: &AnyMoney, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        self.to_any().plus(rhs, mode)
    }

    fn minus(&self, rhs: &AnyMoney, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        self.to_any().minus(rhs, mode)
    }

    fn times(&self, rhs: &AnyMoney, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        self.to_any().times(rhs, mode)
    }

    fn remainder(&self, rhs: &AnyMoney, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        self.to_any().remainder(rhs, mode)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialOrd for Money {
    /// `None` across currencies.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        Some(self.amount.cmp(&other.amount))
    }
}

impl Neg for Money {
    type Output = Money;

    #[inline]
    fn neg(self) -> Money {
        self.negate()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency.code())
    }
}

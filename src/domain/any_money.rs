// ============================================================================
// Money Union
// Either representation behind one type, dispatching by discriminant
// ============================================================================

use super::currency::Currency;
use super::high_precision::HighPrecisionMoney;
use super::money::Money;
use crate::engine::promotion::require_same_currency;
use crate::interfaces::{BaseMoney, MoneyOps, MoneyType};
use crate::numeric::{MoneyResult, RoundingMode};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

/// A money value of either representation.
///
/// Mixed operations promote the cent-precision side to the other operand's
/// fraction digits; the result is high precision whenever either side is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyMoney {
    CentPrecision(Money),
    HighPrecision(HighPrecisionMoney),
}

impl AnyMoney {
    pub fn as_money(&self) -> Option<&Money> {
        match self {
            AnyMoney::CentPrecision(money) => Some(money),
            AnyMoney::HighPrecision(_) => None,
        }
    }

    pub fn as_high_precision(&self) -> Option<&HighPrecisionMoney> {
        match self {
            AnyMoney::CentPrecision(_) => None,
            AnyMoney::HighPrecision(money) => Some(money),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            AnyMoney::CentPrecision(money) => money.is_zero(),
            AnyMoney::HighPrecision(money) => money.is_zero(),
        }
    }

    pub fn negate(&self) -> AnyMoney {
        match self {
            AnyMoney::CentPrecision(money) => AnyMoney::CentPrecision(money.negate()),
            AnyMoney::HighPrecision(money) => AnyMoney::HighPrecision(money.negate()),
        }
    }

    /// Exact integral quotient and remainder, in this value's
    /// representation.
    pub fn div_rem(&self, divisor: Decimal) -> MoneyResult<(AnyMoney, AnyMoney)> {
        match self {
            AnyMoney::CentPrecision(money) => {
                let (quotient, remainder) = money.div_rem(divisor)?;
                Ok((quotient.into(), remainder.into()))
            }
            AnyMoney::HighPrecision(money) => {
                let (quotient, remainder) = money.div_rem(divisor)?;
                Ok((quotient.into(), remainder.into()))
            }
        }
    }

    /// Value-conserving split; `mode` only rounds high precision cent
    /// amounts.
    pub fn partition(&self, ratios: &[u32], mode: RoundingMode) -> MoneyResult<Vec<AnyMoney>> {
        match self {
            AnyMoney::CentPrecision(money) => Ok(money
                .partition(ratios)?
                .into_iter()
                .map(AnyMoney::from)
                .collect()),
            AnyMoney::HighPrecision(money) => Ok(money
                .partition(ratios, mode)?
                .into_iter()
                .map(AnyMoney::from)
                .collect()),
        }
    }

    /// Numeric comparison across representations of one currency.
    pub fn try_cmp(&self, other: &AnyMoney) -> MoneyResult<Ordering> {
        require_same_currency(self.currency(), other.currency())?;
        Ok(self.amount().cmp(&other.amount()))
    }

    fn dispatch<F, G>(&self, rhs: &AnyMoney, cent: F, high: G) -> MoneyResult<AnyMoney>
    where
        F: FnOnce(&Money, &Money) -> MoneyResult<Money>,
        G: FnOnce(&HighPrecisionMoney, &AnyMoney) -> MoneyResult<HighPrecisionMoney>,
    {
        match (self, rhs) {
            (AnyMoney::CentPrecision(left), AnyMoney::CentPrecision(right)) => {
                cent(left, right).map(AnyMoney::from)
            }
            (AnyMoney::CentPrecision(left), AnyMoney::HighPrecision(right)) => {
                require_same_currency(left.currency(), right.currency())?;
                let promoted = left.to_high_precision(right.fraction_digits())?;
                high(&promoted, rhs).map(AnyMoney::from)
            }
            (AnyMoney::HighPrecision(left), _) => high(left, rhs).map(AnyMoney::from),
        }
    }
}

// ============================================================================
// Capability
// ============================================================================

impl BaseMoney for AnyMoney {
    fn money_type(&self) -> MoneyType {
        match self {
            AnyMoney::CentPrecision(money) => money.money_type(),
            AnyMoney::HighPrecision(money) => money.money_type(),
        }
    }

    fn currency(&self) -> Currency {
        match self {
            AnyMoney::CentPrecision(money) => money.currency(),
            AnyMoney::HighPrecision(money) => money.currency(),
        }
    }

    fn amount(&self) -> Decimal {
        match self {
            AnyMoney::CentPrecision(money) => money.amount(),
            AnyMoney::HighPrecision(money) => money.amount(),
        }
    }

    fn cent_amount(&self) -> i64 {
        match self {
            AnyMoney::CentPrecision(money) => money.cent_amount(),
            AnyMoney::HighPrecision(money) => money.cent_amount(),
        }
    }

    fn fraction_digits(&self) -> u32 {
        match self {
            AnyMoney::CentPrecision(money) => money.fraction_digits(),
            AnyMoney::HighPrecision(money) => money.fraction_digits(),
        }
    }

    fn to_money_with_precision_loss(&self) -> MoneyResult<Money> {
        match self {
            AnyMoney::CentPrecision(money) => money.to_money_with_precision_loss(),
            AnyMoney::HighPrecision(money) => money.to_money_with_precision_loss(),
        }
    }

    fn to_any(&self) -> AnyMoney {
        *self
    }
}

// ============================================================================
// Arithmetic Operators
// ============================================================================

impl MoneyOps<&AnyMoney> for AnyMoney {
    type Output = AnyMoney;

    fn plus(&self, rhs: &AnyMoney, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        self.dispatch(rhs, |l, r| l.plus(r, mode), |l, r| l.plus(r, mode))
    }

    fn minus(&self, rhs: &AnyMoney, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        self.dispatch(rhs, |l, r| l.minus(r, mode), |l, r| l.minus(r, mode))
    }

    fn times(&self, rhs: &AnyMoney, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        self.dispatch(rhs, |l, r| l.times(r, mode), |l, r| l.times(r, mode))
    }

    fn remainder(&self, rhs: &AnyMoney, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        self.dispatch(rhs, |l, r| l.remainder(r, mode), |l, r| l.remainder(r, mode))
    }
}

impl MoneyOps<&Money> for AnyMoney {
    type Output = AnyMoney;

    fn plus(&self, rhs: &Money, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        self.plus(&rhs.to_any(), mode)
    }

    fn minus(&self, rhs: &Money, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        self.minus(&rhs.to_any(), mode)
    }

    fn times(&self, rhs: &Money, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        self.times(&rhs.to_any(), mode)
    }

    fn remainder(&self, rhs: &Money, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        self.remainder(&rhs.to_any(), mode)
    }
}

impl MoneyOps<&HighPrecisionMoney> for AnyMoney {
    type Output = AnyMoney;

    fn plus(&self, rhs: &HighPrecisionMoney, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        self.plus(&rhs.to_any(), mode)
    }

    fn minus(&self, rhs: &HighPrecisionMoney, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        self.minus(&rhs.to_any(), mode)
    }

    fn times(&self, rhs: &HighPrecisionMoney, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        self.times(&rhs.to_any(), mode)
    }

    fn remainder(&self, rhs: &HighPrecisionMoney, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        self.remainder(&rhs.to_any(), mode)
    }
}

impl MoneyOps<Decimal> for AnyMoney {
    type Output = AnyMoney;

    fn plus(&self, rhs: Decimal, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        match self {
            AnyMoney::CentPrecision(money) => money.plus(rhs, mode).map(AnyMoney::from),
            AnyMoney::HighPrecision(money) => money.plus(rhs, mode).map(AnyMoney::from),
        }
    }

    fn minus(&self, rhs: Decimal, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        match self {
            AnyMoney::CentPrecision(money) => money.minus(rhs, mode).map(AnyMoney::from),
            AnyMoney::HighPrecision(money) => money.minus(rhs, mode).map(AnyMoney::from),
        }
    }

    fn times(&self, rhs: Decimal, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        match self {
            AnyMoney::CentPrecision(money) => money.times(rhs, mode).map(AnyMoney::from),
            AnyMoney::HighPrecision(money) => money.times(rhs, mode).map(AnyMoney::from),
        }
    }

    fn remainder(&self, rhs: Decimal, mode: RoundingMode) -> MoneyResult<AnyMoney> {
        match self {
            AnyMoney::CentPrecision(money) => money.remainder(rhs, mode).map(AnyMoney::from),
            AnyMoney::HighPrecision(money) => money.remainder(rhs, mode).map(AnyMoney::from),
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl From<Money> for AnyMoney {
    fn from(money: Money) -> Self {
        AnyMoney::CentPrecision(money)
    }
}

impl From<HighPrecisionMoney> for AnyMoney {
    fn from(money: HighPrecisionMoney) -> Self {
        AnyMoney::HighPrecision(money)
    }
}

impl Neg for AnyMoney {
    type Output = AnyMoney;

    fn neg(self) -> AnyMoney {
        self.negate()
    }
}

impl fmt::Display for AnyMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyMoney::CentPrecision(money) => money.fmt(f),
            AnyMoney::HighPrecision(money) => money.fmt(f),
        }
    }
}

// ============================================================================
// Base Money Interface
// The capability every money representation exposes
// ============================================================================

use crate::domain::{AnyMoney, Currency, Money};
use crate::numeric::MoneyResult;
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discriminant of a money representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum MoneyType {
    /// Scale fixed to the currency's default fraction digits
    CentPrecision,
    /// Scale wider than the currency default, with a stored cent amount
    HighPrecision,
}

impl MoneyType {
    pub const CENT_PRECISION: &'static str = "centPrecision";
    pub const HIGH_PRECISION: &'static str = "highPrecision";

    pub const fn as_str(self) -> &'static str {
        match self {
            MoneyType::CentPrecision => Self::CENT_PRECISION,
            MoneyType::HighPrecision => Self::HIGH_PRECISION,
        }
    }
}

impl fmt::Display for MoneyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-side contract shared by cent-precision and high-precision money.
///
/// Arithmetic lives in [`MoneyOps`](super::MoneyOps) so each operand
/// combination can pick its own output type.
pub trait BaseMoney {
    /// Representation discriminant
    fn money_type(&self) -> MoneyType;

    fn currency(&self) -> Currency;

    /// Decimal amount; its scale always equals `fraction_digits()`
    fn amount(&self) -> Decimal;

    /// Amount in the currency's smallest unit
    fn cent_amount(&self) -> i64;

    fn fraction_digits(&self) -> u32;

    /// Cent-precision view, built from `cent_amount()`.
    fn to_money_with_precision_loss(&self) -> MoneyResult<Money>;

    /// Wraps a copy of this value in the money union.
    fn to_any(&self) -> AnyMoney;
}

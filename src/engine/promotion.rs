// ============================================================================
// Promotion and Scale Alignment
// Shared rules for combining money values of differing precision
// ============================================================================

use crate::domain::{Currency, HighPrecisionMoney};
use crate::interfaces::BaseMoney;
use crate::numeric::scale::widen;
use crate::numeric::{MoneyError, MoneyResult, RoundingMode};
use rust_decimal::Decimal;

/// Decimal operator applied to two aligned amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Rem,
}

impl BinaryOp {
    /// Applies the operator exactly; only overflow and a zero divisor fail.
    pub fn apply(self, left: Decimal, right: Decimal) -> MoneyResult<Decimal> {
        let result = match self {
            BinaryOp::Add => left.checked_add(right),
            BinaryOp::Sub => left.checked_sub(right),
            BinaryOp::Mul => left.checked_mul(right),
            BinaryOp::Rem => {
                if right.is_zero() {
                    return Err(MoneyError::DivisionByZero);
                }
                left.checked_rem(right)
            }
        };
        result.ok_or(MoneyError::Overflow)
    }
}

/// Fails unless both operands use the identical currency.
pub fn require_same_currency(left: Currency, right: Currency) -> MoneyResult<()> {
    if left == right {
        return Ok(());
    }
    tracing::debug!(%left, %right, "rejected money operation across currencies");
    Err(MoneyError::CurrencyMismatch {
        left: left.code(),
        right: right.code(),
    })
}

/// Widens both amounts to the larger of the two fraction digit counts.
///
/// Returns the aligned amounts and the shared count. Alignment only ever
/// pads; a narrowing step surfaces as `DownscaleNotAllowed`.
pub fn same_scale(
    left: &HighPrecisionMoney,
    right: &HighPrecisionMoney,
) -> MoneyResult<(Decimal, Decimal, u32)> {
    let fraction_digits = left.fraction_digits().max(right.fraction_digits());
    let left_amount = widen(left.amount(), fraction_digits)?;
    let right_amount = widen(right.amount(), fraction_digits)?;
    Ok((left_amount, right_amount, fraction_digits))
}

/// Applies `op` to two high precision values at their aligned scale.
///
/// The result carries the aligned fraction digits and a cent amount
/// recomputed under `mode`.
pub fn calc(
    left: &HighPrecisionMoney,
    right: &HighPrecisionMoney,
    op: BinaryOp,
    mode: RoundingMode,
) -> MoneyResult<HighPrecisionMoney> {
    require_same_currency(left.currency(), right.currency())?;
    let (left_amount, right_amount, fraction_digits) = same_scale(left, right)?;
    let result = op.apply(left_amount, right_amount)?;
    HighPrecisionMoney::from_decimal_amount(result, fraction_digits, left.currency(), mode)
}

/// Integer quotient and remainder of `amount / divisor`.
///
/// The remainder keeps the sign of `amount`; the quotient is truncated
/// toward zero.
pub fn div_rem(amount: Decimal, divisor: Decimal) -> MoneyResult<(Decimal, Decimal)> {
    if divisor.is_zero() {
        return Err(MoneyError::DivisionByZero);
    }
    let remainder = amount.checked_rem(divisor).ok_or(MoneyError::Overflow)?;
    let quotient = amount
        .checked_sub(remainder)
        .and_then(|whole| whole.checked_div(divisor))
        .ok_or(MoneyError::Overflow)?;
    Ok((quotient.trunc(), remainder))
}

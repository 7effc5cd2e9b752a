// ============================================================================
// Money Arithmetic Interface
// Binary operators over money values and raw decimals
// ============================================================================

use crate::numeric::{MoneyResult, RoundingMode};

/// Arithmetic between a money value and an operand of type `Rhs`.
///
/// Implemented for every receiver/operand pair of cent-precision money,
/// high-precision money, the money union and raw decimals. `Output` follows
/// the promotion rule: any pairing that involves high precision yields high
/// precision, two cent-precision values stay cent precision.
///
/// Money operands must share the receiver's currency; a mismatch fails with
/// `CurrencyMismatch`. Raw decimal operands are taken in the receiver's
/// currency for `plus`/`minus`, as a factor for `times` and as a divisor
/// for `remainder`.
///
/// `mode` is used wherever a result must be rescaled to the target
/// precision.
pub trait MoneyOps<Rhs> {
    type Output;

    fn plus(&self, rhs: Rhs, mode: RoundingMode) -> MoneyResult<Self::Output>;

    fn minus(&self, rhs: Rhs, mode: RoundingMode) -> MoneyResult<Self::Output>;

    fn times(&self, rhs: Rhs, mode: RoundingMode) -> MoneyResult<Self::Output>;

    fn remainder(&self, rhs: Rhs, mode: RoundingMode) -> MoneyResult<Self::Output>;
}

// ============================================================================
// Partition Algorithm
// Value-conserving split of an amount by integer ratios
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult};

/// Splits `units` smallest units into one share per ratio.
///
/// Each share starts as `units * ratio / total`, truncated toward zero. The
/// truncation loss is then handed out one unit at a time to the first
/// shares in input order, so the shares always sum to `units`. For a
/// negative amount the loss is negative and the first shares each take one
/// extra negative unit.
///
/// # Example
/// ```text
/// units = 5, ratios = [3, 7]
/// floor shares: 5*3/10 = 1, 5*7/10 = 3   (sum 4, leftover 1)
/// result:       [2, 3]
/// ```
///
/// # Errors
/// - `InvalidRatios` for an empty list or a zero ratio
/// - `Overflow` if `units * ratio` does not fit an `i128`
pub fn partition_units(units: i128, ratios: &[u32]) -> MoneyResult<Vec<i128>> {
    if ratios.is_empty() {
        return Err(MoneyError::InvalidRatios("at least one ratio is required"));
    }
    if ratios.contains(&0) {
        return Err(MoneyError::InvalidRatios("ratios must be positive"));
    }

    let total: i128 = ratios.iter().map(|&ratio| i128::from(ratio)).sum();

    let shares = ratios
        .iter()
        .map(|&ratio| {
            units
                .checked_mul(i128::from(ratio))
                .map(|scaled| scaled / total)
                .ok_or(MoneyError::Overflow)
        })
        .collect::<MoneyResult<Vec<i128>>>()?;

    let mut leftover = units - shares.iter().sum::<i128>();
    let step = leftover.signum();

    Ok(shares
        .into_iter()
        .map(|share| {
            if leftover == 0 {
                share
            } else {
                leftover -= step;
                share + step
            }
        })
        .collect())
}

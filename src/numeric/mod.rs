// ============================================================================
// Numeric Module
// Decimal primitives shared by every money representation
// ============================================================================
//
// This module provides:
// - RoundingMode: caller-selected rounding policies
// - Scale helpers: cached 10^-n factors and the one rescaling path
// - MoneyError / ValidationErrors: fatal and accumulated failures
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Widening is always exact, narrowing always names its rounding mode

mod errors;
mod rounding;
pub mod scale;

pub use errors::{MoneyError, MoneyResult, Validated, ValidationErrors};
pub use rounding::RoundingMode;
pub use scale::{cent_factor, MAX_DECIMAL_SCALE};

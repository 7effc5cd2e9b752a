// ============================================================================
// Engine Module
// Arithmetic promotion, partitioning and construction validation
// ============================================================================

pub mod partition;
pub mod promotion;
pub mod validation;

pub use partition::partition_units;
pub use promotion::BinaryOp;
pub use validation::validate_precise_amount;

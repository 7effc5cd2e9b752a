// ============================================================================
// Utilities Module
// Process-level helpers that sit outside the money model
// ============================================================================

#[cfg(feature = "logging")]
pub mod logging;

// ============================================================================
// Money Configuration
// Process-wide rounding defaults, installed once at startup
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult, RoundingMode};
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding mode cent-precision addition has always used.
pub const BACKWARDS_COMPATIBLE_ROUNDING_MODE: RoundingMode = RoundingMode::HalfEven;

static INSTALLED: OnceLock<MoneyConfig> = OnceLock::new();

/// Rounding defaults that are not chosen per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MoneyConfig {
    /// Mode applied by cent-precision addition instead of the caller's mode
    pub addition_rounding: RoundingMode,

    /// Mode used to derive a cent amount for externally supplied precise
    /// amounts that arrive without one
    pub precise_amount_rounding: RoundingMode,
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            addition_rounding: BACKWARDS_COMPATIBLE_ROUNDING_MODE,
            precise_amount_rounding: RoundingMode::HalfEven,
        }
    }
}

impl MoneyConfig {
    pub fn new(addition_rounding: RoundingMode, precise_amount_rounding: RoundingMode) -> Self {
        Self {
            addition_rounding,
            precise_amount_rounding,
        }
    }

    /// Cent addition follows the caller's mode like every other operation.
    pub fn caller_driven(mode: RoundingMode) -> Self {
        Self {
            addition_rounding: mode,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> MoneyResult<()> {
        if self.precise_amount_rounding == RoundingMode::Unnecessary {
            return Err(MoneyError::InvalidConfig(
                "precise amount rounding must be able to round to cents".to_string(),
            ));
        }
        Ok(())
    }

    /// Publishes this configuration for the rest of the process.
    ///
    /// # Errors
    /// - `InvalidConfig` if validation fails
    /// - `ConfigAlreadyInstalled` if a configuration was installed or read before
    pub fn install(self) -> MoneyResult<()> {
        self.validate()?;
        INSTALLED
            .set(self)
            .map_err(|_| MoneyError::ConfigAlreadyInstalled)?;
        tracing::info!(
            addition_rounding = %self.addition_rounding,
            precise_amount_rounding = %self.precise_amount_rounding,
            "money configuration installed"
        );
        Ok(())
    }

    /// The installed configuration, or the default if none was installed.
    pub fn current() -> &'static MoneyConfig {
        INSTALLED.get_or_init(MoneyConfig::default)
    }
}

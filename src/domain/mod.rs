// ============================================================================
// Domain Models Module
// Currencies, money representations and their configuration
// ============================================================================

pub mod any_money;
pub mod config;
pub mod currency;
pub mod format;
pub mod high_precision;
pub mod money;

pub use any_money::AnyMoney;
pub use config::{MoneyConfig, BACKWARDS_COMPATIBLE_ROUNDING_MODE};
pub use currency::{Currency, MAX_FRACTION_DIGITS};
pub use format::CurrencyFormat;
pub use high_precision::HighPrecisionMoney;
pub use money::Money;

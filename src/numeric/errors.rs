// ============================================================================
// Money Errors
// Fatal precondition violations and accumulated validation failures
// ============================================================================

use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

/// Errors raised when a money operation violates one of its preconditions.
///
/// None of these are expected in correct calling code. Operations that fail
/// with a `MoneyError` produce no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Operands reference different currencies
    #[error("currency mismatch: {left} != {right}")]
    CurrencyMismatch {
        left: &'static str,
        right: &'static str,
    },

    /// Amount scale does not match the declared fraction digits
    #[error("scale mismatch: amount has {actual} fraction digits, expected {expected}")]
    ScaleMismatch { expected: u32, actual: u32 },

    /// High precision value with fewer digits than its currency default
    #[error("fraction digits {fraction_digits} are below the {currency_default} default digits of {currency}")]
    FractionDigitsBelowDefault {
        fraction_digits: u32,
        currency_default: u32,
        currency: &'static str,
    },

    /// Scale alignment tried to drop digits
    #[error("downscale from {from} to {to} fraction digits is not allowed during alignment")]
    DownscaleNotAllowed { from: u32, to: u32 },

    /// An exact conversion would have to round
    #[error("rounding necessary: {value} cannot be represented exactly with {scale} fraction digits")]
    RoundingNecessary { value: Decimal, scale: u32 },

    /// Result exceeds the representable range
    #[error("arithmetic overflow: result exceeded the representable range")]
    Overflow,

    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,

    /// Requested scale is beyond what a decimal can carry
    #[error("scale {0} exceeds the maximum supported decimal scale")]
    ScaleOutOfRange(u32),

    /// Currency code not present in the ISO table
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    /// Custom currency definition rejected
    #[error("invalid currency: {0}")]
    InvalidCurrency(String),

    /// Partition ratios empty or containing zero
    #[error("invalid partition ratios: {0}")]
    InvalidRatios(&'static str),

    /// Configuration rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration can only be installed once per process
    #[error("configuration already installed")]
    ConfigAlreadyInstalled,
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Non-empty list of human-readable validation messages.
///
/// Produced by constructors that check externally supplied data. Every check
/// runs, so the list holds one message per failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(SmallVec<[String; 2]>);

impl ValidationErrors {
    pub fn new(first: impl Into<String>) -> Self {
        let mut messages = SmallVec::new();
        messages.push(first.into());
        Self(messages)
    }

    /// Collects the failed checks, returning `None` when every check passed.
    pub fn collect<I>(failures: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let messages: SmallVec<[String; 2]> = failures.into_iter().flatten().collect();
        if messages.is_empty() {
            None
        } else {
            Some(Self(messages))
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a value built by `new` or `collect`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into_vec()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Result of a validating constructor
pub type Validated<T> = Result<T, ValidationErrors>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MoneyError::CurrencyMismatch {
            left: "EUR",
            right: "USD",
        };
        assert_eq!(err.to_string(), "currency mismatch: EUR != USD");
        assert_eq!(MoneyError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(MoneyError::Overflow, MoneyError::Overflow);
        assert_ne!(MoneyError::Overflow, MoneyError::DivisionByZero);
    }

    #[test]
    fn test_validation_errors_collect() {
        assert!(ValidationErrors::collect([None, None]).is_none());

        let errors =
            ValidationErrors::collect([Some("first".to_string()), None, Some("second".to_string())])
                .unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.messages(), ["first", "second"]);
        assert_eq!(errors.to_string(), "first; second");
    }

    #[test]
    fn test_validation_errors_push() {
        let mut errors = ValidationErrors::new("a");
        errors.push("b");
        assert!(!errors.is_empty());
        assert_eq!(errors.into_vec(), vec!["a".to_string(), "b".to_string()]);
    }
}

// ============================================================================
// Currency Formatting
// Human-readable rendering with grouping and currency symbols
// ============================================================================

use super::currency::Currency;
use crate::engine::promotion::require_same_currency;
use crate::interfaces::BaseMoney;
use crate::numeric::MoneyResult;
use rust_decimal::Decimal;

/// Formatter bound to one currency.
///
/// Renders `<grouped amount> <symbol>`, keeping every fraction digit the
/// value carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    currency: Currency,
    symbol: String,
    decimal_separator: char,
    group_separator: Option<char>,
}

impl CurrencyFormat {
    /// Formatter with the currency's table symbol, `.` decimals and `,`
    /// groups.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            symbol: currency.symbol().to_string(),
            decimal_separator: '.',
            group_separator: Some(','),
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// `None` disables digit grouping.
    pub fn with_group_separator(mut self, separator: Option<char>) -> Self {
        self.group_separator = separator;
        self
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Renders `money`.
    ///
    /// # Errors
    /// `CurrencyMismatch` if `money` is not in this formatter's currency.
    pub fn format<M: BaseMoney>(&self, money: &M) -> MoneyResult<String> {
        require_same_currency(self.currency, money.currency())?;
        Ok(format!("{} {}", self.format_amount(money.amount()), self.symbol))
    }

    /// Renders a bare amount with this formatter's separators.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rendered = amount.abs().to_string();
        let (integer, fraction) = match rendered.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (rendered.as_str(), None),
        };

        let mut out = String::with_capacity(rendered.len() + integer.len() / 3 + 2);
        if amount.is_sign_negative() && !amount.is_zero() {
            out.push('-');
        }

        let len = integer.len();
        for (i, digit) in integer.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                if let Some(group) = self.group_separator {
                    out.push(group);
                }
            }
            out.push(digit);
        }

        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

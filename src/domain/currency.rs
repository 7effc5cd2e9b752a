// ============================================================================
// Currency
// ISO 4217 currency descriptors and default fraction digit lookup
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult};
use std::fmt;
use std::str::FromStr;

/// Highest fraction digit count any money value may declare.
pub const MAX_FRACTION_DIGITS: u32 = 20;

/// A currency identified by its code, with its standard fraction digits.
///
/// Two currencies are the same currency only if both code and default
/// fraction digits match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    code: &'static str,
    default_fraction_digits: u32,
}

impl Currency {
    pub const EUR: Currency = Currency::iso("EUR", 2);
    pub const USD: Currency = Currency::iso("USD", 2);
    pub const GBP: Currency = Currency::iso("GBP", 2);
    pub const JPY: Currency = Currency::iso("JPY", 0);
    pub const CHF: Currency = Currency::iso("CHF", 2);
    pub const CAD: Currency = Currency::iso("CAD", 2);
    pub const AUD: Currency = Currency::iso("AUD", 2);
    pub const CNY: Currency = Currency::iso("CNY", 2);
    pub const SEK: Currency = Currency::iso("SEK", 2);
    pub const NOK: Currency = Currency::iso("NOK", 2);
    pub const DKK: Currency = Currency::iso("DKK", 2);
    pub const PLN: Currency = Currency::iso("PLN", 2);
    pub const CZK: Currency = Currency::iso("CZK", 2);
    pub const HUF: Currency = Currency::iso("HUF", 2);
    pub const KRW: Currency = Currency::iso("KRW", 0);
    pub const INR: Currency = Currency::iso("INR", 2);
    pub const BRL: Currency = Currency::iso("BRL", 2);
    pub const MXN: Currency = Currency::iso("MXN", 2);
    pub const BHD: Currency = Currency::iso("BHD", 3);
    pub const KWD: Currency = Currency::iso("KWD", 3);
    pub const JOD: Currency = Currency::iso("JOD", 3);
    pub const OMR: Currency = Currency::iso("OMR", 3);
    pub const TND: Currency = Currency::iso("TND", 3);
    pub const CLF: Currency = Currency::iso("CLF", 4);
    pub const UYW: Currency = Currency::iso("UYW", 4);
    pub const IDR: Currency = Currency::iso("IDR", 2);
    pub const SGD: Currency = Currency::iso("SGD", 2);
    pub const HKD: Currency = Currency::iso("HKD", 2);
    pub const NZD: Currency = Currency::iso("NZD", 2);
    pub const ZAR: Currency = Currency::iso("ZAR", 2);
    pub const TRY: Currency = Currency::iso("TRY", 2);
    pub const ISK: Currency = Currency::iso("ISK", 0);
    pub const VND: Currency = Currency::iso("VND", 0);

    const fn iso(code: &'static str, default_fraction_digits: u32) -> Self {
        Self {
            code,
            default_fraction_digits,
        }
    }

    /// Defines a currency outside the ISO table.
    ///
    /// # Errors
    /// Returns `InvalidCurrency` for an empty code or more default fraction
    /// digits than `MAX_FRACTION_DIGITS`.
    pub fn new(code: &'static str, default_fraction_digits: u32) -> MoneyResult<Self> {
        if code.trim().is_empty() {
            return Err(MoneyError::InvalidCurrency(
                "currency code must not be empty".to_string(),
            ));
        }
        if default_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(MoneyError::InvalidCurrency(format!(
                "{code} declares {default_fraction_digits} fraction digits, maximum is {MAX_FRACTION_DIGITS}"
            )));
        }
        Ok(Self::iso(code, default_fraction_digits))
    }

    /// Looks up an ISO currency by code, ignoring ASCII case.
    pub fn from_code(code: &str) -> MoneyResult<Self> {
        ISO_CURRENCIES
            .iter()
            .find(|(currency, _)| currency.code.eq_ignore_ascii_case(code.trim()))
            .map(|(currency, _)| *currency)
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline]
    pub const fn default_fraction_digits(&self) -> u32 {
        self.default_fraction_digits
    }

    /// Display symbol, falling back to the code.
    pub fn symbol(&self) -> &'static str {
        ISO_CURRENCIES
            .iter()
            .find(|(currency, _)| currency == self)
            .map_or(self.code, |(_, symbol)| *symbol)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

const ISO_CURRENCIES: &[(Currency, &str)] = &[
    (Currency::EUR, "€"),
    (Currency::USD, "$"),
    (Currency::GBP, "£"),
    (Currency::JPY, "¥"),
    (Currency::CHF, "CHF"),
    (Currency::CAD, "CA$"),
    (Currency::AUD, "A$"),
    (Currency::CNY, "CN¥"),
    (Currency::SEK, "kr"),
    (Currency::NOK, "kr"),
    (Currency::DKK, "kr."),
    (Currency::PLN, "zł"),
    (Currency::CZK, "Kč"),
    (Currency::HUF, "Ft"),
    (Currency::KRW, "₩"),
    (Currency::INR, "₹"),
    (Currency::BRL, "R$"),
    (Currency::MXN, "MX$"),
    (Currency::BHD, "BHD"),
    (Currency::KWD, "KWD"),
    (Currency::JOD, "JOD"),
    (Currency::OMR, "OMR"),
    (Currency::TND, "TND"),
    (Currency::CLF, "CLF"),
    (Currency::UYW, "UYW"),
    (Currency::IDR, "Rp"),
    (Currency::SGD, "S$"),
    (Currency::HKD, "HK$"),
    (Currency::NZD, "NZ$"),
    (Currency::ZAR, "R"),
    (Currency::TRY, "₺"),
    (Currency::ISK, "kr"),
    (Currency::VND, "₫"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Currency::from_code("EUR").unwrap(), Currency::EUR);
        assert_eq!(Currency::from_code("usd").unwrap(), Currency::USD);
        assert_eq!(Currency::from_code(" jpy ").unwrap(), Currency::JPY);
        assert_eq!(
            Currency::from_code("XXX"),
            Err(MoneyError::UnknownCurrency("XXX".to_string()))
        );
        assert!("".parse::<Currency>().is_err());
    }

    #[test]
    fn test_default_fraction_digits() {
        assert_eq!(Currency::EUR.default_fraction_digits(), 2);
        assert_eq!(Currency::JPY.default_fraction_digits(), 0);
        assert_eq!(Currency::KWD.default_fraction_digits(), 3);
        assert_eq!(Currency::CLF.default_fraction_digits(), 4);
    }

    #[test]
    fn test_custom_currency() {
        let points = Currency::new("PTS", 1).unwrap();
        assert_eq!(points.code(), "PTS");
        assert_eq!(points.symbol(), "PTS");
        assert_ne!(points, Currency::EUR);

        assert!(Currency::new("", 2).is_err());
        assert!(Currency::new("BIG", 21).is_err());
    }

    #[test]
    fn test_symbol_and_display() {
        assert_eq!(Currency::EUR.symbol(), "€");
        assert_eq!(Currency::USD.symbol(), "$");
        assert_eq!(Currency::EUR.to_string(), "EUR");
    }

    #[test]
    fn test_identity_requires_matching_digits() {
        let odd_euro = Currency::new("EUR", 3).unwrap();
        assert_ne!(odd_euro, Currency::EUR);
    }
}

// ============================================================================
// Precise Money Library
// Exact decimal money with cent and high precision representations
// ============================================================================

//! # Precise Money
//!
//! Monetary arithmetic on exact decimals with explicit rounding.
//!
//! ## Features
//!
//! - **Two representations**: cent precision [`Money`](domain::Money) and
//!   [`HighPrecisionMoney`](domain::HighPrecisionMoney) with its own
//!   fraction digits and a stored cent amount
//! - **Automatic promotion**: mixing the two yields high precision at the
//!   wider operand's digits
//! - **Explicit rounding** on every operation that can lose digits
//! - **Value-conserving partition** by integer ratios
//! - **Accumulating validation** for externally supplied amounts
//!
//! ## Example
//!
//! ```rust
//! use precise_money::prelude::*;
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let price = Money::from_decimal_amount(
//!     Decimal::from_str("2.00").unwrap(),
//!     Currency::EUR,
//!     RoundingMode::HalfEven,
//! ).unwrap();
//! let fee = HighPrecisionMoney::from_decimal_amount(
//!     Decimal::from_str("1.005").unwrap(),
//!     3,
//!     Currency::EUR,
//!     RoundingMode::HalfEven,
//! ).unwrap();
//!
//! // Cent precision plus high precision is high precision
//! let total = price.plus(&fee, RoundingMode::HalfEven).unwrap();
//! assert_eq!(total.to_string(), "3.005 EUR");
//! assert_eq!(total.cent_amount(), 300);
//!
//! // Splitting never loses a cent
//! let shares = Money::from_cent_amount(5, Currency::EUR)
//!     .unwrap()
//!     .partition(&[3, 7])
//!     .unwrap();
//! assert_eq!(shares[0].cent_amount(), 2);
//! assert_eq!(shares[1].cent_amount(), 3);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        AnyMoney, Currency, CurrencyFormat, HighPrecisionMoney, Money, MoneyConfig,
        MAX_FRACTION_DIGITS,
    };
    pub use crate::interfaces::{BaseMoney, MoneyOps, MoneyType};
    pub use crate::numeric::{MoneyError, MoneyResult, RoundingMode, Validated, ValidationErrors};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn eur(cents: i64) -> Money {
        Money::from_cent_amount(cents, Currency::EUR).unwrap()
    }

    fn eur_precise(units: i64, fraction_digits: u32) -> HighPrecisionMoney {
        HighPrecisionMoney::from_decimal_amount(
            Decimal::new(units, fraction_digits),
            fraction_digits,
            Currency::EUR,
            RoundingMode::HalfEven,
        )
        .unwrap()
    }

    #[test]
    fn test_end_to_end_invoice() {
        let mode = RoundingMode::HalfEven;
        let unit_price = HighPrecisionMoney::from_decimal_amount(
            d("0.0125"),
            4,
            Currency::EUR,
            mode,
        )
        .unwrap();

        let line = unit_price.times(d("1000"), mode).unwrap();
        assert_eq!(line.amount().to_string(), "12.5000");
        assert_eq!(line.cent_amount(), 1250);

        let shipping = Money::from_decimal_amount(d("4.99"), Currency::EUR, mode).unwrap();
        let total = line.plus(&shipping, mode).unwrap();
        assert_eq!(total.to_string(), "17.4900 EUR");

        let billed = total.to_money_with_precision_loss().unwrap();
        assert_eq!(billed, eur(1749));

        let shares = billed.partition(&[1, 1, 1]).unwrap();
        assert_eq!(
            shares.iter().map(Money::cent_amount).collect::<Vec<_>>(),
            vec![583, 583, 583]
        );
        assert_eq!(Money::sum(&shares, Currency::EUR).unwrap(), billed);

        let rendered = CurrencyFormat::new(Currency::EUR).format(&total).unwrap();
        assert_eq!(rendered, "17.4900 €");
    }

    #[test]
    fn test_mixed_addition_cent_rounding() {
        let cent = Money::from_decimal_amount(d("2.00"), Currency::EUR, RoundingMode::HalfEven)
            .unwrap();
        let high = eur_precise(1005, 3);

        let half_even = cent.plus(&high, RoundingMode::HalfEven).unwrap();
        assert_eq!(half_even.amount().to_string(), "3.005");
        assert_eq!(half_even.cent_amount(), 300);

        let half_up = cent.plus(&high, RoundingMode::HalfUp).unwrap();
        assert_eq!(half_up.cent_amount(), 301);
    }

    fn is_mismatch(result: MoneyResult<AnyMoney>) -> bool {
        matches!(result, Err(MoneyError::CurrencyMismatch { .. }))
    }

    #[test]
    fn test_currency_mismatch_everywhere() {
        let mode = RoundingMode::HalfEven;
        let euros = eur(100);
        let dollars = Money::from_cent_amount(100, Currency::USD).unwrap();
        let precise_dollars = dollars.to_high_precision(3).unwrap();

        assert!(is_mismatch(euros.plus(&dollars.to_any(), mode)));
        assert!(is_mismatch(euros.minus(&precise_dollars.to_any(), mode)));
        assert!(is_mismatch(euros.to_any().times(&dollars, mode)));
        assert!(is_mismatch(euros.to_any().remainder(&precise_dollars, mode)));
        assert!(euros.partial_cmp(&dollars).is_none());
        assert!(euros.try_cmp(&dollars).is_err());
    }

    #[test]
    fn test_prelude_reports_validation_failures() {
        let errors: ValidationErrors = HighPrecisionMoney::from_precise_amount(
            12345,
            MAX_FRACTION_DIGITS + 1,
            Currency::EUR,
            Some(1),
        )
        .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.to_string().contains("; "));
    }

    fn negation_is_involution(cents: i64) -> bool {
        let Some(negated) = cents.checked_neg() else {
            return true;
        };
        let money = eur(cents);
        money.negate().negate() == money && (-money).cent_amount() == negated
    }

    #[test]
    fn test_negation_involution() {
        quickcheck::QuickCheck::new()
            .tests(500)
            .quickcheck(negation_is_involution as fn(i64) -> bool);
    }

    proptest! {
        #[test]
        fn prop_add_then_subtract_restores(
            a in -1_000_000_000i64..1_000_000_000,
            b in -1_000_000_000i64..1_000_000_000,
        ) {
            let mode = RoundingMode::HalfEven;
            let sum = eur(a).plus(&eur(b), mode).unwrap();
            prop_assert_eq!(sum.cent_amount(), a + b);
            prop_assert_eq!(sum.minus(&eur(b), mode).unwrap(), eur(a));
        }

        #[test]
        fn prop_mixed_addition_commutes(
            cents in -1_000_000_000i64..1_000_000_000,
            units in -1_000_000_000_000i64..1_000_000_000_000,
            fraction_digits in 3u32..=8,
        ) {
            let mode = RoundingMode::HalfEven;
            let cent = eur(cents);
            let high = eur_precise(units, fraction_digits);

            let left = cent.plus(&high, mode).unwrap();
            let right = high.plus(&cent, mode).unwrap();
            prop_assert_eq!(left, right);
            prop_assert_eq!(left.fraction_digits(), fraction_digits);

            let any_left = cent.to_any().plus(&high.to_any(), mode).unwrap();
            prop_assert_eq!(any_left.money_type(), MoneyType::HighPrecision);
            prop_assert_eq!(any_left.amount(), left.amount());
        }

        #[test]
        fn prop_widening_round_trip(
            cents in -100_000_000i64..100_000_000,
            fraction_digits in 3u32..=MAX_FRACTION_DIGITS,
        ) {
            let money = eur(cents);
            let widened = money.to_high_precision(fraction_digits).unwrap();
            prop_assert_eq!(widened.amount(), money.amount());
            prop_assert_eq!(widened.amount().scale(), fraction_digits);
            prop_assert_eq!(widened.to_money_with_precision_loss().unwrap(), money);
        }

        #[test]
        fn prop_scale_matches_fraction_digits(
            units in -1_000_000_000i64..1_000_000_000,
            factor in -1_000i64..1_000,
            fraction_digits in 3u32..=10,
            mode_index in 0usize..7,
        ) {
            // every mode except Unnecessary
            let mode = RoundingMode::ALL[mode_index];
            let high = eur_precise(units, fraction_digits);
            let product = high.times(Decimal::new(factor, 2), mode).unwrap();
            prop_assert_eq!(product.amount().scale(), product.fraction_digits());

            let cent = eur(units).times(Decimal::new(factor, 3), mode).unwrap();
            prop_assert_eq!(cent.amount().scale(), Currency::EUR.default_fraction_digits());
        }

        #[test]
        fn prop_partition_conserves_value(
            cents in -1_000_000_000i64..1_000_000_000,
            ratios in prop::collection::vec(1u32..100, 1..10),
        ) {
            let money = eur(cents);
            let shares = money.partition(&ratios).unwrap();
            prop_assert_eq!(shares.len(), ratios.len());
            prop_assert_eq!(Money::sum(&shares, Currency::EUR).unwrap(), money);
        }

        #[test]
        fn prop_high_precision_partition_conserves_value(
            units in -1_000_000_000_000i64..1_000_000_000_000,
            fraction_digits in 3u32..=12,
            ratios in prop::collection::vec(1u32..100, 1..10),
            mode_index in 0usize..7,
        ) {
            let mode = RoundingMode::ALL[mode_index];
            let high = eur_precise(units, fraction_digits);
            let shares = high.partition(&ratios, mode).unwrap();
            prop_assert_eq!(shares.len(), ratios.len());
            for share in &shares {
                prop_assert_eq!(share.fraction_digits(), fraction_digits);
                prop_assert_eq!(share.amount().scale(), fraction_digits);
            }
            let total: Decimal = shares.iter().map(|share| share.amount()).sum();
            prop_assert_eq!(total, high.amount());

            let any_shares = high.to_any().partition(&ratios, mode).unwrap();
            prop_assert_eq!(
                any_shares,
                shares.into_iter().map(AnyMoney::from).collect::<Vec<_>>()
            );
        }

        #[test]
        fn prop_div_rem_restores_amount(
            cents in -1_000_000_000i64..1_000_000_000,
            divisor_units in 1i64..100_000,
            divisor_scale in 0u32..=3,
            negative_divisor in any::<bool>(),
        ) {
            let magnitude = Decimal::new(divisor_units, divisor_scale);
            let divisor = if negative_divisor { -magnitude } else { magnitude };
            let high = eur(cents).to_high_precision(3).unwrap();
            let (quotient, remainder) = high.div_rem(divisor).unwrap();
            prop_assert_eq!(quotient.amount() * divisor + remainder.amount(), high.amount());
            prop_assert!(remainder.amount().abs() < divisor.abs());

            if divisor_scale <= 2 {
                let money = eur(cents);
                let (quotient, remainder) = money.div_rem(divisor).unwrap();
                prop_assert_eq!(quotient.amount() * divisor + remainder.amount(), money.amount());
            }
        }
    }
}

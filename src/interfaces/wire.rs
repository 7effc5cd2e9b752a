// ============================================================================
// Wire Contract
// Field names and serde mapping for money values exchanged with other systems
// ============================================================================

/// Field names of the serialized money object.
pub mod fields {
    pub const TYPE: &str = "type";
    pub const CURRENCY_CODE: &str = "currencyCode";
    pub const CENT_AMOUNT: &str = "centAmount";
    pub const PRECISE_AMOUNT: &str = "preciseAmount";
    pub const FRACTION_DIGITS: &str = "fractionDigits";
}

#[cfg(feature = "serde")]
mod codec {
    use super::super::{BaseMoney, MoneyType};
    use crate::domain::{AnyMoney, Currency, HighPrecisionMoney, Money};
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct MoneyRepr {
        #[serde(rename = "type")]
        money_type: MoneyType,
        currency_code: String,
        cent_amount: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        precise_amount: Option<i64>,
        fraction_digits: u32,
    }

    impl MoneyRepr {
        fn of<M: BaseMoney>(money: &M, precise_amount: Option<i64>) -> Self {
            Self {
                money_type: money.money_type(),
                currency_code: money.currency().code().to_string(),
                cent_amount: money.cent_amount(),
                precise_amount,
                fraction_digits: money.fraction_digits(),
            }
        }

        fn currency(&self) -> Result<Currency, String> {
            Currency::from_code(&self.currency_code).map_err(|err| err.to_string())
        }

        fn into_money(self) -> Result<Money, String> {
            if self.money_type != MoneyType::CentPrecision {
                return Err(format!("expected {} money", MoneyType::CentPrecision));
            }
            let currency = self.currency()?;
            if self.fraction_digits != currency.default_fraction_digits() {
                return Err(format!(
                    "fractionDigits must be {} for {} cent precision money.",
                    currency.default_fraction_digits(),
                    currency.code()
                ));
            }
            Money::from_cent_amount(self.cent_amount, currency).map_err(|err| err.to_string())
        }

        /// Cent-precision input is accepted as a high precision value at the
        /// currency's default digits, the form such values serialize to.
        fn into_high_precision(self) -> Result<HighPrecisionMoney, String> {
            if self.money_type == MoneyType::CentPrecision {
                let money = self.into_money()?;
                return money
                    .to_high_precision(money.currency().default_fraction_digits())
                    .map_err(|err| err.to_string());
            }
            let currency = self.currency()?;
            let precise_amount = self
                .precise_amount
                .ok_or_else(|| format!("missing field `{}`", super::fields::PRECISE_AMOUNT))?;
            HighPrecisionMoney::from_precise_amount(
                precise_amount,
                self.fraction_digits,
                currency,
                Some(self.cent_amount),
            )
            .map_err(|errors| errors.to_string())
        }

        fn into_any(self) -> Result<AnyMoney, String> {
            match self.money_type {
                MoneyType::CentPrecision => self.into_money().map(AnyMoney::from),
                MoneyType::HighPrecision => self.into_high_precision().map(AnyMoney::from),
            }
        }
    }

    impl Serialize for Money {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            MoneyRepr::of(self, None).serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Money {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            MoneyRepr::deserialize(deserializer)?
                .into_money()
                .map_err(D::Error::custom)
        }
    }

    impl Serialize for HighPrecisionMoney {
        /// Values without extra digits are written as cent precision, since
        /// the high precision form requires more digits than the default.
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if self.fraction_digits() == self.currency().default_fraction_digits() {
                let money = self.to_money_with_precision_loss().map_err(S::Error::custom)?;
                return MoneyRepr::of(&money, None).serialize(serializer);
            }
            let precise_amount = self.precise_amount().map_err(S::Error::custom)?;
            MoneyRepr::of(self, Some(precise_amount)).serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for HighPrecisionMoney {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            MoneyRepr::deserialize(deserializer)?
                .into_high_precision()
                .map_err(D::Error::custom)
        }
    }

    impl Serialize for AnyMoney {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                AnyMoney::CentPrecision(money) => money.serialize(serializer),
                AnyMoney::HighPrecision(money) => money.serialize(serializer),
            }
        }
    }

    impl<'de> Deserialize<'de> for AnyMoney {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            MoneyRepr::deserialize(deserializer)?
                .into_any()
                .map_err(D::Error::custom)
        }
    }
}

//! Monetary price value object.

use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

/// Currency label substituted when the caller does not supply one.
pub const DEFAULT_CURRENCY: &str = "Euro";

/// A monetary amount with a currency label.
///
/// Immutable once constructed; compared structurally. The amount is
/// deliberately not range-checked: negative and zero amounts are accepted
/// as-is and it is the caller's business rules that decide whether they mean
/// anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    amount: i64,
    currency: String,
}

impl Price {
    /// Create a price in an explicit currency.
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Create a price in [`DEFAULT_CURRENCY`].
    pub fn in_default_currency(amount: i64) -> Self {
        Self::new(amount, DEFAULT_CURRENCY)
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_currency_is_kept() {
        let price = Price::new(250, "USD");
        assert_eq!(price.amount(), 250);
        assert_eq!(price.currency(), "USD");
    }

    #[test]
    fn omitted_currency_defaults_to_euro() {
        let price = Price::in_default_currency(100);
        assert_eq!(price.amount(), 100);
        assert_eq!(price.currency(), "Euro");
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Price::new(100, "Euro"), Price::in_default_currency(100));
        assert_ne!(Price::new(100, "Euro"), Price::new(100, "USD"));
        assert_ne!(Price::new(100, "Euro"), Price::new(101, "Euro"));
    }

    #[test]
    fn negative_and_zero_amounts_are_accepted() {
        assert_eq!(Price::in_default_currency(0).amount(), 0);
        assert_eq!(Price::in_default_currency(-50).amount(), -50);
    }

    #[test]
    fn display_shows_amount_and_currency() {
        assert_eq!(Price::new(42, "USD").to_string(), "42 USD");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: construction preserves any amount and currency verbatim.
            #[test]
            fn construction_preserves_attributes(
                amount in any::<i64>(),
                currency in "[A-Za-z]{1,12}"
            ) {
                let price = Price::new(amount, currency.clone());
                prop_assert_eq!(price.amount(), amount);
                prop_assert_eq!(price.currency(), currency.as_str());
            }

            /// Property: the default-currency constructor agrees with the
            /// explicit one given [`DEFAULT_CURRENCY`].
            #[test]
            fn default_constructor_matches_explicit(amount in any::<i64>()) {
                prop_assert_eq!(
                    Price::in_default_currency(amount),
                    Price::new(amount, DEFAULT_CURRENCY)
                );
            }
        }
    }
}

//! Money amounts in minor currency units.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::value_object::ValueObject;

/// A non-negative amount in minor currency units (e.g. cents).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct MinorUnits(u64);

impl MinorUnits {
    pub const ZERO: MinorUnits = MinorUnits(0);

    /// Validate a raw amount. Negative amounts are rejected.
    pub fn new(amount: i64) -> CatalogResult<Self> {
        u64::try_from(amount).map(Self).map_err(|_| {
            CatalogError::invalid_input(format!("amount must be non-negative, got {amount}"))
        })
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Split into whole and fractional parts for the given number of fraction digits.
    pub fn split(self, fraction_digits: u32) -> (u64, u64) {
        let scale = 10u64.pow(fraction_digits);
        (self.0 / scale, self.0 % scale)
    }
}

impl ValueObject for MinorUnits {}

impl From<u64> for MinorUnits {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for MinorUnits {
    type Error = CatalogError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MinorUnits> for i64 {
    fn from(value: MinorUnits) -> Self {
        // Saturates at i64::MAX.
        i64::try_from(value.0).unwrap_or(i64::MAX)
    }
}

impl core::fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn negative_amount_is_invalid_input() {
        let err = MinorUnits::new(-1).unwrap_err();
        match err {
            CatalogError::InvalidInput(msg) => assert!(msg.contains("-1")),
            _ => panic!("Expected InvalidInput for negative amount"),
        }
    }

    #[test]
    fn zero_is_accepted() {
        assert_eq!(MinorUnits::new(0).unwrap(), MinorUnits::ZERO);
    }

    #[test]
    fn split_separates_whole_and_fraction() {
        let amount = MinorUnits::new(1999).unwrap();
        assert_eq!(amount.split(2), (19, 99));
        assert_eq!(amount.split(0), (1999, 0));
    }

    #[test]
    fn deserialize_rejects_negative_amounts() {
        let ok: MinorUnits = serde_json::from_str("250").unwrap();
        assert_eq!(ok.get(), 250);
        assert!(serde_json::from_str::<MinorUnits>("-250").is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: every non-negative amount is accepted and preserved.
        #[test]
        fn non_negative_amounts_are_preserved(amount in 0i64..i64::MAX) {
            let value = MinorUnits::new(amount).unwrap();
            prop_assert_eq!(i64::from(value), amount);
        }

        /// Property: every negative amount is rejected.
        #[test]
        fn negative_amounts_are_rejected(amount in i64::MIN..0i64) {
            prop_assert!(MinorUnits::new(amount).is_err());
        }
    }
}

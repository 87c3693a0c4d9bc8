//! Kitchen-layout quick estimator.
//!
//! A direct two-dimensional lookup: kitchen shape × fit-out grade → lakh
//! range. No dimension input and no additive adjustments.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use estimate_core::calculations::{KitchenLayout, KitchenLayoutEstimator, QuoteQuality};
//!
//! let range =
//!     KitchenLayoutEstimator::new().estimate(KitchenLayout::UShaped, QuoteQuality::Premium);
//!
//! assert_eq!(range.min, dec!(5.0));
//! assert_eq!(range.max, dec!(8.0));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{LakhRange, QuoteQuality};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KitchenLayout {
    Straight,
    #[serde(rename = "lshaped")]
    LShaped,
    #[serde(rename = "ushaped")]
    UShaped,
    Parallel,
}

impl KitchenLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::LShaped => "lshaped",
            Self::UShaped => "ushaped",
            Self::Parallel => "parallel",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "straight" => Some(Self::Straight),
            "lshaped" => Some(Self::LShaped),
            "ushaped" => Some(Self::UShaped),
            "parallel" => Some(Self::Parallel),
            _ => None,
        }
    }

    pub const ALL: [Self; 4] = [
        Self::Straight,
        Self::LShaped,
        Self::UShaped,
        Self::Parallel,
    ];
}

#[derive(Debug, Clone, Default)]
pub struct KitchenLayoutEstimator;

impl KitchenLayoutEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Looks up the lakh range for one (layout, quality) pair. Total over
    /// its whole input domain.
    pub fn estimate(&self, layout: KitchenLayout, quality: QuoteQuality) -> LakhRange {
        // Table values are tenths of a lakh.
        let lakh = |min: i64, max: i64| LakhRange::new(Decimal::new(min, 1), Decimal::new(max, 1));
        match (layout, quality) {
            (KitchenLayout::Straight, QuoteQuality::Basic) => lakh(18, 28),
            (KitchenLayout::Straight, QuoteQuality::Premium) => lakh(25, 40),
            (KitchenLayout::LShaped, QuoteQuality::Basic) => lakh(22, 32),
            (KitchenLayout::LShaped, QuoteQuality::Premium) => lakh(32, 50),
            (KitchenLayout::UShaped, QuoteQuality::Basic) => lakh(30, 45),
            (KitchenLayout::UShaped, QuoteQuality::Premium) => lakh(50, 80),
            (KitchenLayout::Parallel, QuoteQuality::Basic) => lakh(26, 38),
            (KitchenLayout::Parallel, QuoteQuality::Premium) => lakh(38, 60),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn every_layout_and_quality_matches_the_table() {
        let expected = [
            (KitchenLayout::Straight, QuoteQuality::Basic, dec!(1.8), dec!(2.8)),
            (KitchenLayout::Straight, QuoteQuality::Premium, dec!(2.5), dec!(4.0)),
            (KitchenLayout::LShaped, QuoteQuality::Basic, dec!(2.2), dec!(3.2)),
            (KitchenLayout::LShaped, QuoteQuality::Premium, dec!(3.2), dec!(5.0)),
            (KitchenLayout::UShaped, QuoteQuality::Basic, dec!(3.0), dec!(4.5)),
            (KitchenLayout::UShaped, QuoteQuality::Premium, dec!(5.0), dec!(8.0)),
            (KitchenLayout::Parallel, QuoteQuality::Basic, dec!(2.6), dec!(3.8)),
            (KitchenLayout::Parallel, QuoteQuality::Premium, dec!(3.8), dec!(6.0)),
        ];

        let estimator = KitchenLayoutEstimator::new();
        for (layout, quality, min, max) in expected {
            let range = estimator.estimate(layout, quality);
            assert_eq!(range, LakhRange::new(min, max), "{layout:?} {quality:?}");
        }
    }

    #[test]
    fn ushaped_premium_is_five_to_eight_lakhs() {
        let range =
            KitchenLayoutEstimator::new().estimate(KitchenLayout::UShaped, QuoteQuality::Premium);

        assert_eq!(range, LakhRange::new(dec!(5.0), dec!(8.0)));
    }

    #[test]
    fn premium_never_quotes_below_basic() {
        let estimator = KitchenLayoutEstimator::new();

        for layout in KitchenLayout::ALL {
            let basic = estimator.estimate(layout, QuoteQuality::Basic);
            let premium = estimator.estimate(layout, QuoteQuality::Premium);
            assert!(premium.min >= basic.min, "{layout:?}");
            assert!(premium.max >= basic.max, "{layout:?}");
        }
    }

    #[test]
    fn layout_keys_round_trip() {
        for layout in KitchenLayout::ALL {
            assert_eq!(KitchenLayout::parse(layout.as_str()), Some(layout));
        }
        assert_eq!(KitchenLayout::parse("island"), None);
    }
}

//! BHK whole-home quick estimator.
//!
//! Prices a whole home from its BHK configuration against a fixed base
//! table, then adjusts for carpet-area size and rooms added beyond the
//! configuration's expected counts.
//!
//! # Model
//!
//! | Step | Rule |
//! |------|------|
//! | 1    | Base range from the (BHK, quality) table, in lakhs |
//! | 2    | Large size: min × 1.20, max × 1.25 |
//! | 3    | Each room beyond the expected count adds a flat per-kind amount to both ends |
//! | 4    | Round both ends to one decimal place |
//!
//! Room counts are taken as given. The quick flow's UI clamps bedroom
//! counts to the BHK number for 4BHK and below, while 5BHK has no cap; that
//! normalization is deliberately kept out of the pricing rule and offered
//! separately as [`BhkQuickEstimator::normalize_room_counts`] so the
//! asymmetry stays a caller-side choice.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use estimate_core::calculations::{BhkInput, BhkQuickEstimator, HomeSize, QuoteQuality};
//!
//! let estimator = BhkQuickEstimator::new();
//! let input = BhkInput::with_expected_rooms(2, HomeSize::Small, QuoteQuality::Premium).unwrap();
//!
//! let range = estimator.estimate(&input).unwrap();
//!
//! assert_eq!(range.min, dec!(2.8));
//! assert_eq!(range.max, dec!(3.0));
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{LakhRange, QuoteQuality};
use crate::calculations::common::round_lakh;

/// Errors from the BHK quick estimator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BhkEstimateError {
    /// Only 1 through 5 BHK configurations are priced.
    #[error("unsupported BHK configuration: {0}")]
    UnsupportedBhk(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeSize {
    Small,
    Large,
}

impl HomeSize {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "small" => Some(Self::Small),
            "large" => Some(Self::Large),
            _ => None,
        }
    }
}

/// Room categories the quick flow lets the user increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    Bedroom,
    Kitchen,
    Living,
    Dining,
    Bathroom,
}

impl RoomKind {
    pub const ALL: [Self; 5] = [
        Self::Bedroom,
        Self::Kitchen,
        Self::Living,
        Self::Dining,
        Self::Bathroom,
    ];
}

/// Input to one BHK quick estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BhkInput {
    pub bhk: u8,
    pub size: HomeSize,
    pub quality: QuoteQuality,
    pub room_counts: BTreeMap<RoomKind, u32>,
}

impl BhkInput {
    /// Builds an input whose room counts match the configuration's expected
    /// counts, so the estimate equals the base table entry.
    pub fn with_expected_rooms(
        bhk: u8,
        size: HomeSize,
        quality: QuoteQuality,
    ) -> Result<Self, BhkEstimateError> {
        Ok(Self {
            bhk,
            size,
            quality,
            room_counts: BhkQuickEstimator::expected_room_counts(bhk)?,
        })
    }
}

/// The BHK lookup-table estimator.
#[derive(Debug, Clone, Default)]
pub struct BhkQuickEstimator;

impl BhkQuickEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Base price range in lakhs keyed by (BHK, quality).
    fn base_range(bhk: u8, quality: QuoteQuality) -> Result<LakhRange, BhkEstimateError> {
        let lakh = |min: i64, max: i64| {
            // Table values are tenths of a lakh.
            LakhRange::new(Decimal::new(min, 1), Decimal::new(max, 1))
        };
        let range = match (bhk, quality) {
            (1, QuoteQuality::Basic) => lakh(12, 15),
            (1, QuoteQuality::Premium) => lakh(18, 20),
            (2, QuoteQuality::Basic) => lakh(20, 22),
            (2, QuoteQuality::Premium) => lakh(28, 30),
            (3, QuoteQuality::Basic) => lakh(28, 31),
            (3, QuoteQuality::Premium) => lakh(38, 42),
            (4, QuoteQuality::Basic) => lakh(36, 40),
            (4, QuoteQuality::Premium) => lakh(48, 54),
            (5, QuoteQuality::Basic) => lakh(45, 50),
            (5, QuoteQuality::Premium) => lakh(60, 68),
            (other, _) => return Err(BhkEstimateError::UnsupportedBhk(other)),
        };
        Ok(range)
    }

    /// Room counts baked into each BHK configuration. Rooms beyond these
    /// counts are priced as additions.
    pub fn expected_room_counts(bhk: u8) -> Result<BTreeMap<RoomKind, u32>, BhkEstimateError> {
        if !(1..=5).contains(&bhk) {
            return Err(BhkEstimateError::UnsupportedBhk(bhk));
        }
        let bathrooms = match bhk {
            1 => 1,
            2 | 3 => 2,
            _ => 3,
        };
        Ok(BTreeMap::from([
            (RoomKind::Bedroom, u32::from(bhk)),
            (RoomKind::Kitchen, 1),
            (RoomKind::Living, 1),
            (RoomKind::Dining, 1),
            (RoomKind::Bathroom, bathrooms),
        ]))
    }

    /// Flat per-room addition in lakhs for rooms beyond the expected count.
    ///
    /// Extra bedrooms are priced rather than left free: a bigger home must
    /// never quote the same as a smaller one.
    fn excess_room_rate(kind: RoomKind) -> Decimal {
        match kind {
            RoomKind::Kitchen => Decimal::new(11, 1),
            RoomKind::Living | RoomKind::Dining => Decimal::new(3, 1),
            RoomKind::Bathroom => Decimal::new(2, 1),
            RoomKind::Bedroom => Decimal::new(4, 1),
        }
    }

    /// Clamps the bedroom count to the BHK number for configurations of
    /// 4BHK and below. 5BHK is left uncapped, matching the quick flow's
    /// original behavior; the asymmetry is intentional and preserved.
    pub fn normalize_room_counts(
        bhk: u8,
        mut counts: BTreeMap<RoomKind, u32>,
    ) -> BTreeMap<RoomKind, u32> {
        if bhk <= 4 {
            if let Some(bedrooms) = counts.get_mut(&RoomKind::Bedroom) {
                *bedrooms = (*bedrooms).min(u32::from(bhk));
            }
        }
        counts
    }

    /// Runs the full quick estimate. Output ends are rounded to one decimal
    /// place in lakhs.
    pub fn estimate(&self, input: &BhkInput) -> Result<LakhRange, BhkEstimateError> {
        let base = Self::base_range(input.bhk, input.quality)?;
        let expected = Self::expected_room_counts(input.bhk)?;

        let (mut min, mut max) = match input.size {
            HomeSize::Small => (base.min, base.max),
            HomeSize::Large => (
                base.min * Decimal::new(120, 2),
                base.max * Decimal::new(125, 2),
            ),
        };

        for kind in RoomKind::ALL {
            let have = input.room_counts.get(&kind).copied().unwrap_or(0);
            let baseline = expected.get(&kind).copied().unwrap_or(0);
            if have > baseline {
                let addition = Decimal::from(have - baseline) * Self::excess_room_rate(kind);
                min += addition;
                max += addition;
            }
        }

        Ok(LakhRange::new(round_lakh(min), round_lakh(max)))
    }
}

//! Quick-estimate scenario models.
//!
//! Unlike the detailed room-by-room flow, these estimators are driven by a
//! discrete choice (BHK configuration, kitchen shape) against small fixed
//! tables, and they quote a range in lakhs rather than a single total.

pub mod bhk;
pub mod kitchen_layout;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fit-out grade offered in the quick-estimate flow. Coarser than the
/// three-tier [`crate::models::QualityTier`] used by the detailed flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteQuality {
    Basic,
    Premium,
}

impl QuoteQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Premium => "premium",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(Self::Basic),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }

    pub const ALL: [Self; 2] = [Self::Basic, Self::Premium];
}

/// A min/max price range in lakhs of rupees, one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LakhRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl LakhRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }
}

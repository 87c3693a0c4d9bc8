use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::SurchargeKind;

/// Itemized cost for one room. All amounts are unrounded rupees; rounding
/// happens only at display time.
///
/// Generic rooms leave `counter_cost` and `appliance_cost` at zero; the
/// kitchen-specialized model leaves `finish_cost` at zero (cabinet pricing
/// replaces the wall-finish line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomBreakdown {
    pub floor_area: Decimal,
    pub wall_area: Decimal,
    /// Wood cost: floor-area based for generic rooms, cabinet-run based for
    /// kitchens.
    pub material_cost: Decimal,
    pub finish_cost: Decimal,
    pub counter_cost: Decimal,
    pub appliance_cost: Decimal,
    pub hardware_cost: Decimal,
    pub labor_cost: Decimal,
    pub subtotal: Decimal,
}

/// Full estimate for a session: per-room breakdowns plus percentage
/// surcharges over the room total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub per_room: BTreeMap<String, RoomBreakdown>,
    pub additional_costs: BTreeMap<SurchargeKind, Decimal>,
    pub pre_surcharge_total: Decimal,
    pub total: Decimal,
}

impl CostBreakdown {
    pub fn empty() -> Self {
        Self {
            per_room: BTreeMap::new(),
            additional_costs: BTreeMap::new(),
            pre_surcharge_total: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Presentation-only ±15% sensitivity band around the authoritative total.
///
/// The scenario estimators already emit their own min/max range; this band
/// applies only to the single-total detailed flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBand {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceBand {
    pub fn around(total: Decimal) -> Self {
        Self {
            min: total * Decimal::new(85, 2),
            max: total * Decimal::new(115, 2),
        }
    }
}

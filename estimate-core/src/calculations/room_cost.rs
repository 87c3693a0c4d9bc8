//! Per-room cost calculation.
//!
//! Two models share one entry point: the generic room model (wood by floor
//! area, finish by wall area, flat hardware, labor by floor area) and the
//! kitchen-specialized model used by the kitchen-only flow (cabinet runs,
//! counter, optional appliance package).
//!
//! A room with missing or non-positive dimensions is not an error; it simply
//! produces no breakdown and is excluded from aggregation. The estimate
//! updates live while the user is still typing, so partial rooms are the
//! normal case, not the exceptional one.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use estimate_core::calculations::compute_room_cost;
//! use estimate_core::catalog::PricingCatalog;
//! use estimate_core::models::{ResolvedSelection, Room};
//!
//! let catalog = PricingCatalog::default();
//! let room = Room::with_dimensions("bedroom", dec!(12), dec!(10), dec!(9));
//!
//! let breakdown = compute_room_cost(&room, &ResolvedSelection::default(), None, &catalog)
//!     .expect("complete dimensions");
//!
//! // 120 sqft × 1200 wood + 396 sqft × 80 paint + 15000 hardware + 120 × 100 labor
//! assert_eq!(breakdown.subtotal, dec!(202680));
//! ```

use tracing::debug;

use crate::catalog::PricingCatalog;
use crate::models::{ResolvedSelection, Room, RoomBreakdown};
use rust_decimal::Decimal;

/// Options for the kitchen-specialized model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KitchenOptions {
    /// Whether the flat appliance package line is included. This is the one
    /// legitimate zero-by-default cost in the engine.
    pub include_appliances: bool,
}

/// Computes the cost breakdown for one room.
///
/// Pass `Some(KitchenOptions)` to price with the kitchen-specialized model;
/// `None` prices generically. Returns `None` when the room's dimensions are
/// incomplete or non-positive.
pub fn compute_room_cost(
    room: &Room,
    selection: &ResolvedSelection,
    kitchen: Option<&KitchenOptions>,
    catalog: &PricingCatalog,
) -> Option<RoomBreakdown> {
    let Some(dims) = room.dimensions() else {
        debug!(room_type = %room.room_type, "room skipped: incomplete dimensions");
        return None;
    };

    let floor_area = dims.floor_area();
    let wall_area = dims.wall_area();

    let wood_rate = catalog.wood(selection.wood).price_per_sqft;
    let hardware_cost = catalog.hardware(selection.hardware).price_flat;
    let labor_cost = floor_area * catalog.labor(selection.quality).rate_per_sqft;

    let breakdown = match kitchen {
        Some(options) => {
            let cabinet_area = floor_area * catalog.cabinet_area_factor;
            let material_cost = cabinet_area * wood_rate;
            let counter_cost = floor_area * catalog.counter_rate_per_sqft;
            let appliance_cost = if options.include_appliances {
                catalog.appliance_package_cost
            } else {
                Decimal::ZERO
            };
            RoomBreakdown {
                floor_area,
                wall_area,
                material_cost,
                finish_cost: Decimal::ZERO,
                counter_cost,
                appliance_cost,
                hardware_cost,
                labor_cost,
                subtotal: material_cost + counter_cost + appliance_cost + hardware_cost + labor_cost,
            }
        }
        None => {
            let material_cost = floor_area * wood_rate;
            let finish_cost = wall_area * catalog.finish(selection.finish).price_per_sqft;
            RoomBreakdown {
                floor_area,
                wall_area,
                material_cost,
                finish_cost,
                counter_cost: Decimal::ZERO,
                appliance_cost: Decimal::ZERO,
                hardware_cost,
                labor_cost,
                subtotal: material_cost + finish_cost + hardware_cost + labor_cost,
            }
        }
    };

    Some(breakdown)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::{FinishType, HardwareTier, QualityTier, WoodType};

    use super::*;

    fn selection() -> ResolvedSelection {
        ResolvedSelection::default()
    }

    fn premium_selection() -> ResolvedSelection {
        ResolvedSelection {
            wood: WoodType::Solid,
            finish: FinishType::Veneer,
            hardware: HardwareTier::Premium,
            quality: QualityTier::Premium,
        }
    }

    #[test]
    fn generic_room_lines_follow_the_rate_card() {
        let catalog = PricingCatalog::default();
        let room = Room::with_dimensions("bedroom", dec!(12), dec!(10), dec!(9));

        let b = compute_room_cost(&room, &selection(), None, &catalog).unwrap();

        assert_eq!(b.floor_area, dec!(120));
        assert_eq!(b.wall_area, dec!(396));
        assert_eq!(b.material_cost, dec!(144000)); // 120 × 1200
        assert_eq!(b.finish_cost, dec!(31680)); // 396 × 80
        assert_eq!(b.hardware_cost, dec!(15000));
        assert_eq!(b.labor_cost, dec!(12000)); // 120 × 100
        assert_eq!(b.subtotal, dec!(202680));
    }

    #[test]
    fn subtotal_is_the_sum_of_all_lines() {
        let catalog = PricingCatalog::default();
        let room = Room::with_dimensions("living", dec!(18), dec!(14), dec!(10));

        let b = compute_room_cost(&room, &premium_selection(), None, &catalog).unwrap();

        assert_eq!(
            b.subtotal,
            b.material_cost + b.finish_cost + b.hardware_cost + b.labor_cost
        );
    }

    #[test]
    fn incomplete_room_produces_no_breakdown() {
        let catalog = PricingCatalog::default();
        let mut room = Room::new("bedroom");
        room.length = Some(dec!(12));

        assert_eq!(compute_room_cost(&room, &selection(), None, &catalog), None);
    }

    #[test]
    fn kitchen_model_prices_cabinets_counter_and_appliances() {
        let catalog = PricingCatalog::default();
        let room = Room::with_dimensions("kitchen", dec!(10), dec!(8), dec!(9));
        let options = KitchenOptions {
            include_appliances: true,
        };

        let b = compute_room_cost(&room, &selection(), Some(&options), &catalog).unwrap();

        // cabinet area 80 × 1.5 = 120 sqft at 1200/sqft
        assert_eq!(b.material_cost, dec!(144000.0));
        assert_eq!(b.counter_cost, dec!(16000)); // 80 × 200
        assert_eq!(b.appliance_cost, dec!(150000));
        assert_eq!(b.finish_cost, dec!(0));
        assert_eq!(
            b.subtotal,
            b.material_cost + b.counter_cost + b.appliance_cost + b.hardware_cost + b.labor_cost
        );
    }

    #[test]
    fn kitchen_without_appliances_has_zero_appliance_line() {
        let catalog = PricingCatalog::default();
        let room = Room::with_dimensions("kitchen", dec!(10), dec!(8), dec!(9));

        let b =
            compute_room_cost(&room, &selection(), Some(&KitchenOptions::default()), &catalog)
                .unwrap();

        assert_eq!(b.appliance_cost, dec!(0));
    }

    #[test]
    fn cost_is_monotone_in_each_dimension() {
        let catalog = PricingCatalog::default();
        let base = Room::with_dimensions("study", dec!(10), dec!(10), dec!(9));
        let base_cost = compute_room_cost(&base, &selection(), None, &catalog)
            .unwrap()
            .subtotal;

        for grown in [
            Room::with_dimensions("study", dec!(11), dec!(10), dec!(9)),
            Room::with_dimensions("study", dec!(10), dec!(11), dec!(9)),
            Room::with_dimensions("study", dec!(10), dec!(10), dec!(10)),
        ] {
            let grown_cost = compute_room_cost(&grown, &selection(), None, &catalog)
                .unwrap()
                .subtotal;
            assert!(grown_cost >= base_cost);
        }
    }

    #[test]
    fn no_mid_calculation_rounding() {
        let catalog = PricingCatalog::default();
        // Fractional feet keep exact products through to the subtotal.
        let room = Room::with_dimensions("balcony", dec!(7.25), dec!(4.4), dec!(8.1));

        let b = compute_room_cost(&room, &selection(), None, &catalog).unwrap();

        let floor = dec!(7.25) * dec!(4.4);
        let wall = dec!(2) * (dec!(7.25) + dec!(4.4)) * dec!(8.1);
        assert_eq!(
            b.subtotal,
            floor * dec!(1200) + wall * dec!(80) + dec!(15000) + floor * dec!(100)
        );
    }
}

//! Session-level aggregation.
//!
//! `compute_estimate` is a full deterministic pass over the session: it never
//! caches or mutates incrementally, so recomputing after any input change
//! always reproduces the same totals for the same session state.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use estimate_core::calculations::compute_estimate;
//! use estimate_core::catalog::PricingCatalog;
//! use estimate_core::models::{EstimationSession, ProjectType, Room, SessionEvent};
//!
//! let session = EstimationSession::new(ProjectType::EntireHome).apply(
//!     SessionEvent::UpsertRoom {
//!         key: "bedroom-1".into(),
//!         room: Room::with_dimensions("bedroom", dec!(12), dec!(10), dec!(9)),
//!     },
//! );
//!
//! let breakdown = compute_estimate(&session, &PricingCatalog::default());
//!
//! assert_eq!(breakdown.pre_surcharge_total, dec!(202680));
//! // design 10% + transport 3% + installation 5% + warranty 2% = 20%
//! assert_eq!(breakdown.total, dec!(243216.0));
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::catalog::PricingCatalog;
use crate::models::{CostBreakdown, EstimationSession, FEATURE_APPLIANCES};

use super::common::percent_of;
use super::room_cost::{compute_room_cost, KitchenOptions};

/// Computes the full cost breakdown for a session.
///
/// Rooms with incomplete dimensions are skipped and absent from
/// `per_room`; an all-incomplete (or empty) session yields a zero total
/// rather than an error.
pub fn compute_estimate(session: &EstimationSession, catalog: &PricingCatalog) -> CostBreakdown {
    let kitchen_options = KitchenOptions {
        include_appliances: session.feature_selected(FEATURE_APPLIANCES),
    };
    let kitchen = session.is_kitchen_flow().then_some(&kitchen_options);

    let mut per_room = BTreeMap::new();
    let mut pre_surcharge_total = Decimal::ZERO;

    for (key, room) in &session.rooms {
        let selection = session.selection_for(key);
        if let Some(breakdown) = compute_room_cost(room, &selection, kitchen, catalog) {
            pre_surcharge_total += breakdown.subtotal;
            per_room.insert(key.clone(), breakdown);
        }
    }

    let mut additional_costs = BTreeMap::new();
    let mut additional_total = Decimal::ZERO;
    for entry in catalog.surcharges() {
        let amount = percent_of(pre_surcharge_total, entry.percentage);
        additional_total += amount;
        additional_costs.insert(entry.surcharge, amount);
    }

    CostBreakdown {
        per_room,
        additional_costs,
        pre_surcharge_total,
        total: pre_surcharge_total + additional_total,
    }
}

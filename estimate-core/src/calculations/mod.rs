//! Pricing calculators for the estimation wizard.
//!
//! The detailed flow prices each room from its dimensions and resolved
//! materials, then aggregates with percentage surcharges; the scenario
//! estimators in [`scenarios`] are coarser lookup-table models for the
//! quick-estimate flow.

pub mod common;
pub mod estimate;
pub mod room_cost;
pub mod scenarios;

pub use estimate::compute_estimate;
pub use room_cost::{compute_room_cost, KitchenOptions};
pub use scenarios::{
    bhk::{BhkEstimateError, BhkInput, BhkQuickEstimator, HomeSize, RoomKind},
    kitchen_layout::{KitchenLayout, KitchenLayoutEstimator},
    LakhRange, QuoteQuality,
};

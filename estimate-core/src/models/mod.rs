mod breakdown;
mod materials;
mod room;
mod session;

pub use breakdown::{CostBreakdown, PriceBand, RoomBreakdown};
pub use materials::{
    FinishType, HardwareTier, MaterialSelection, QualityTier, ResolvedSelection, WoodType,
};
pub use room::{Room, RoomDimensions};
pub use session::{ContactInfo, EstimationSession, ProjectType, SessionEvent, FEATURE_APPLIANCES};

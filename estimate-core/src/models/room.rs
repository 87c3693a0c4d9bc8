use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One user-defined space, dimensions in feet.
///
/// Dimensions arrive incrementally as the user types, so each one is
/// optional. A room only participates in pricing once [`Room::dimensions`]
/// returns `Some`; until then it is silently excluded from totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room category key. May be a free-form custom label.
    #[serde(rename = "type")]
    pub room_type: String,
    #[serde(default)]
    pub length: Option<Decimal>,
    #[serde(default)]
    pub width: Option<Decimal>,
    #[serde(default)]
    pub height: Option<Decimal>,
}

impl Room {
    pub fn new(room_type: impl Into<String>) -> Self {
        Self {
            room_type: room_type.into(),
            length: None,
            width: None,
            height: None,
        }
    }

    pub fn with_dimensions(
        room_type: impl Into<String>,
        length: Decimal,
        width: Decimal,
        height: Decimal,
    ) -> Self {
        Self {
            room_type: room_type.into(),
            length: Some(length),
            width: Some(width),
            height: Some(height),
        }
    }

    /// Returns the complete dimension set, or `None` when any dimension is
    /// missing or not strictly positive.
    pub fn dimensions(&self) -> Option<RoomDimensions> {
        let (length, width, height) = (self.length?, self.width?, self.height?);
        if length <= Decimal::ZERO || width <= Decimal::ZERO || height <= Decimal::ZERO {
            return None;
        }
        Some(RoomDimensions {
            length,
            width,
            height,
        })
    }
}

/// A validated, complete set of room dimensions (all strictly positive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub length: Decimal,
    pub width: Decimal,
    pub height: Decimal,
}

impl RoomDimensions {
    pub fn floor_area(&self) -> Decimal {
        self.length * self.width
    }

    /// Wall area over all four walls: `2 × (length + width) × height`.
    pub fn wall_area(&self) -> Decimal {
        Decimal::TWO * (self.length + self.width) * self.height
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn dimensions_present_when_all_three_positive() {
        let room = Room::with_dimensions("bedroom", dec!(12), dec!(10), dec!(9));

        let dims = room.dimensions().unwrap();

        assert_eq!(dims.floor_area(), dec!(120));
        assert_eq!(dims.wall_area(), dec!(396));
    }

    #[test]
    fn dimensions_absent_when_any_missing() {
        let mut room = Room::new("bedroom");
        room.length = Some(dec!(12));
        room.width = Some(dec!(10));

        assert_eq!(room.dimensions(), None);
    }

    #[test]
    fn dimensions_absent_when_zero_or_negative() {
        let zero = Room::with_dimensions("study", dec!(12), dec!(0), dec!(9));
        let negative = Room::with_dimensions("study", dec!(12), dec!(-3), dec!(9));

        assert_eq!(zero.dimensions(), None);
        assert_eq!(negative.dimensions(), None);
    }

    #[test]
    fn fractional_dimensions_are_exact() {
        let room = Room::with_dimensions("balcony", dec!(7.5), dec!(4.2), dec!(8));

        let dims = room.dimensions().unwrap();

        assert_eq!(dims.floor_area(), dec!(31.50));
        assert_eq!(dims.wall_area(), dec!(187.2));
    }
}

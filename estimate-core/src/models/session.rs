use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::materials::{MaterialSelection, ResolvedSelection};
use super::room::Room;

/// Feature toggle enabling the fixed kitchen appliance package.
pub const FEATURE_APPLIANCES: &str = "appliances";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProjectType {
    #[serde(rename = "kitchen")]
    Kitchen,
    #[default]
    #[serde(rename = "entire-home")]
    EntireHome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Root aggregate for one wizard traversal.
///
/// The session is a plain value: each wizard step produces a fresh session
/// via [`EstimationSession::apply`], so the estimator never observes
/// partially-mutated state. Room and override maps are ordered so that
/// recomputation and payload building are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationSession {
    #[serde(default)]
    pub project_type: ProjectType,
    #[serde(default)]
    pub rooms: BTreeMap<String, Room>,
    /// Session-global material selection, the middle level of the override
    /// chain.
    #[serde(default)]
    pub materials: MaterialSelection,
    /// Per-room overrides, keyed like `rooms`.
    #[serde(default)]
    pub room_materials: BTreeMap<String, MaterialSelection>,
    #[serde(default)]
    pub additional_features: BTreeSet<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub contact: Option<ContactInfo>,
    /// Set once the phone-OTP handshake has succeeded. Gates submission.
    #[serde(default)]
    pub phone_verified: bool,
}

impl EstimationSession {
    pub fn new(project_type: ProjectType) -> Self {
        Self {
            project_type,
            rooms: BTreeMap::new(),
            materials: MaterialSelection::default(),
            room_materials: BTreeMap::new(),
            additional_features: BTreeSet::new(),
            deadline: None,
            contact: None,
            phone_verified: false,
        }
    }

    /// Applies one wizard-step event, returning the next session value.
    pub fn apply(mut self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::SetProjectType(project_type) => self.project_type = project_type,
            SessionEvent::UpsertRoom { key, room } => {
                self.rooms.insert(key, room);
            }
            SessionEvent::RemoveRoom { key } => {
                self.rooms.remove(&key);
                self.room_materials.remove(&key);
            }
            SessionEvent::SetMaterials(selection) => self.materials = selection,
            SessionEvent::SetRoomMaterials { key, selection } => {
                self.room_materials.insert(key, selection);
            }
            SessionEvent::ToggleFeature(feature) => {
                if !self.additional_features.remove(&feature) {
                    self.additional_features.insert(feature);
                }
            }
            SessionEvent::SetDeadline(deadline) => self.deadline = deadline,
            SessionEvent::SetContact(contact) => self.contact = Some(contact),
            SessionEvent::MarkPhoneVerified => self.phone_verified = true,
            SessionEvent::Reset => return Self::new(self.project_type),
        }
        self
    }

    /// Resolves the material selection for one room through the override
    /// chain: room-specific, then session-global, then catalog defaults.
    pub fn selection_for(&self, room_key: &str) -> ResolvedSelection {
        ResolvedSelection::resolve(self.room_materials.get(room_key), Some(&self.materials))
    }

    /// Resolves the session-global selection without any room override.
    pub fn global_selection(&self) -> ResolvedSelection {
        ResolvedSelection::resolve(None, Some(&self.materials))
    }

    pub fn feature_selected(&self, feature: &str) -> bool {
        self.additional_features.contains(feature)
    }

    /// The kitchen-specialized cost model applies only in the kitchen-only
    /// flow; the room-by-room whole-home flow prices every room generically.
    pub fn is_kitchen_flow(&self) -> bool {
        self.project_type == ProjectType::Kitchen
    }
}

impl Default for EstimationSession {
    fn default() -> Self {
        Self::new(ProjectType::EntireHome)
    }
}

/// One wizard-step update. See [`EstimationSession::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SetProjectType(ProjectType),
    UpsertRoom { key: String, room: Room },
    RemoveRoom { key: String },
    SetMaterials(MaterialSelection),
    SetRoomMaterials {
        key: String,
        selection: MaterialSelection,
    },
    ToggleFeature(String),
    SetDeadline(Option<NaiveDate>),
    SetContact(ContactInfo),
    MarkPhoneVerified,
    Reset,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::super::materials::{QualityTier, WoodType};
    use super::*;

    fn session_with_room() -> EstimationSession {
        EstimationSession::new(ProjectType::EntireHome).apply(SessionEvent::UpsertRoom {
            key: "bedroom-1".into(),
            room: Room::with_dimensions("bedroom", dec!(12), dec!(10), dec!(9)),
        })
    }

    #[test]
    fn apply_returns_fresh_value_per_step() {
        let before = session_with_room();
        let after = before.clone().apply(SessionEvent::ToggleFeature(
            FEATURE_APPLIANCES.to_string(),
        ));

        assert!(!before.feature_selected(FEATURE_APPLIANCES));
        assert!(after.feature_selected(FEATURE_APPLIANCES));
    }

    #[test]
    fn toggle_feature_twice_removes_it() {
        let session = session_with_room()
            .apply(SessionEvent::ToggleFeature(FEATURE_APPLIANCES.to_string()))
            .apply(SessionEvent::ToggleFeature(FEATURE_APPLIANCES.to_string()));

        assert!(!session.feature_selected(FEATURE_APPLIANCES));
    }

    #[test]
    fn remove_room_also_drops_its_material_override() {
        let session = session_with_room()
            .apply(SessionEvent::SetRoomMaterials {
                key: "bedroom-1".into(),
                selection: MaterialSelection {
                    wood: Some(WoodType::Solid),
                    ..Default::default()
                },
            })
            .apply(SessionEvent::RemoveRoom {
                key: "bedroom-1".into(),
            });

        assert!(session.rooms.is_empty());
        assert!(session.room_materials.is_empty());
    }

    #[test]
    fn selection_for_walks_the_override_chain() {
        let session = session_with_room()
            .apply(SessionEvent::SetMaterials(MaterialSelection {
                quality: Some(QualityTier::Premium),
                ..Default::default()
            }))
            .apply(SessionEvent::SetRoomMaterials {
                key: "bedroom-1".into(),
                selection: MaterialSelection {
                    wood: Some(WoodType::Solid),
                    ..Default::default()
                },
            });

        let resolved = session.selection_for("bedroom-1");

        assert_eq!(resolved.wood, WoodType::Solid);
        assert_eq!(resolved.quality, QualityTier::Premium);
    }

    #[test]
    fn reset_keeps_project_type_but_clears_everything_else() {
        let session = session_with_room()
            .apply(SessionEvent::MarkPhoneVerified)
            .apply(SessionEvent::Reset);

        assert_eq!(session.project_type, ProjectType::EntireHome);
        assert!(session.rooms.is_empty());
        assert!(!session.phone_verified);
    }

    #[test]
    fn session_round_trips_through_json() {
        let session = session_with_room();

        let json = serde_json::to_string(&session).unwrap();
        let parsed: EstimationSession = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, session);
    }
}

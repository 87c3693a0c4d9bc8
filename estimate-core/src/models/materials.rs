use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WoodType {
    #[default]
    Plywood,
    Mdf,
    Particle,
    Solid,
}

impl WoodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plywood => "plywood",
            Self::Mdf => "mdf",
            Self::Particle => "particle",
            Self::Solid => "solid",
        }
    }

    /// Display name expected by the order-submission backend.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Plywood => "Plywood",
            Self::Mdf => "MDF",
            Self::Particle => "Particle Board",
            Self::Solid => "Solid Wood",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "plywood" => Some(Self::Plywood),
            "mdf" => Some(Self::Mdf),
            "particle" => Some(Self::Particle),
            "solid" => Some(Self::Solid),
            _ => None,
        }
    }

    /// Parses a key, falling back to the category default with a warning
    /// for unknown values. A stale or mistyped id must never surface as a
    /// missing price.
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            let fallback = Self::default();
            warn!(key = s, fallback = fallback.as_str(), "unknown wood key");
            fallback
        })
    }

    pub const ALL: [Self; 4] = [Self::Plywood, Self::Mdf, Self::Particle, Self::Solid];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FinishType {
    Laminate,
    Veneer,
    #[default]
    Paint,
    Lacquer,
}

impl FinishType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Laminate => "laminate",
            Self::Veneer => "veneer",
            Self::Paint => "paint",
            Self::Lacquer => "lacquer",
        }
    }

    /// Display name expected by the order-submission backend.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Laminate => "Laminate",
            Self::Veneer => "Veneer",
            Self::Paint => "Paint",
            Self::Lacquer => "Lacquer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "laminate" => Some(Self::Laminate),
            "veneer" => Some(Self::Veneer),
            "paint" => Some(Self::Paint),
            "lacquer" => Some(Self::Lacquer),
            _ => None,
        }
    }

    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            let fallback = Self::default();
            warn!(key = s, fallback = fallback.as_str(), "unknown finish key");
            fallback
        })
    }

    pub const ALL: [Self; 4] = [Self::Laminate, Self::Veneer, Self::Paint, Self::Lacquer];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HardwareTier {
    #[default]
    Basic,
    Premium,
    Luxury,
}

impl HardwareTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Premium => "premium",
            Self::Luxury => "luxury",
        }
    }

    /// Display name expected by the order-submission backend.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Premium => "Premium",
            Self::Luxury => "Luxury",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(Self::Basic),
            "premium" => Some(Self::Premium),
            "luxury" => Some(Self::Luxury),
            _ => None,
        }
    }

    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            let fallback = Self::default();
            warn!(key = s, fallback = fallback.as_str(), "unknown hardware key");
            fallback
        })
    }

    pub const ALL: [Self; 3] = [Self::Basic, Self::Premium, Self::Luxury];
}

/// Labor grade. Mirrors the hardware tiers but priced per square foot
/// rather than as a flat set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    #[default]
    Basic,
    Premium,
    Luxury,
}

impl QualityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Premium => "premium",
            Self::Luxury => "luxury",
        }
    }

    /// Display name expected by the order-submission backend
    /// (the `workmanship` field).
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Premium => "Premium",
            Self::Luxury => "Luxury",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(Self::Basic),
            "premium" => Some(Self::Premium),
            "luxury" => Some(Self::Luxury),
            _ => None,
        }
    }

    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            let fallback = Self::default();
            warn!(key = s, fallback = fallback.as_str(), "unknown quality key");
            fallback
        })
    }

    pub const ALL: [Self; 3] = [Self::Basic, Self::Premium, Self::Luxury];
}

/// One set of material choices. Every field is optional; unset fields fall
/// through the override chain (room-specific → session-global → catalog
/// default) when resolved.
///
/// Deserialization is lenient: an unknown key in a session file warns and
/// lands on the category default rather than failing the whole parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MaterialSelection {
    #[serde(default, deserialize_with = "lenient_wood")]
    pub wood: Option<WoodType>,
    #[serde(default, deserialize_with = "lenient_finish")]
    pub finish: Option<FinishType>,
    #[serde(default, deserialize_with = "lenient_hardware")]
    pub hardware: Option<HardwareTier>,
    #[serde(default, deserialize_with = "lenient_quality")]
    pub quality: Option<QualityTier>,
}

fn lenient_wood<'de, D>(deserializer: D) -> Result<Option<WoodType>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let key: Option<String> = Option::deserialize(deserializer)?;
    Ok(key.as_deref().map(WoodType::parse_or_default))
}

fn lenient_finish<'de, D>(deserializer: D) -> Result<Option<FinishType>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let key: Option<String> = Option::deserialize(deserializer)?;
    Ok(key.as_deref().map(FinishType::parse_or_default))
}

fn lenient_hardware<'de, D>(deserializer: D) -> Result<Option<HardwareTier>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let key: Option<String> = Option::deserialize(deserializer)?;
    Ok(key.as_deref().map(HardwareTier::parse_or_default))
}

fn lenient_quality<'de, D>(deserializer: D) -> Result<Option<QualityTier>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let key: Option<String> = Option::deserialize(deserializer)?;
    Ok(key.as_deref().map(QualityTier::parse_or_default))
}

/// A fully resolved material selection. Produced by [`ResolvedSelection::resolve`],
/// which is the single place the override chain is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSelection {
    pub wood: WoodType,
    pub finish: FinishType,
    pub hardware: HardwareTier,
    pub quality: QualityTier,
}

impl Default for ResolvedSelection {
    /// The documented catalog defaults: plywood, paint, basic hardware,
    /// basic workmanship.
    fn default() -> Self {
        Self {
            wood: WoodType::Plywood,
            finish: FinishType::Paint,
            hardware: HardwareTier::Basic,
            quality: QualityTier::Basic,
        }
    }
}

impl ResolvedSelection {
    /// Resolves the three-level override chain for one room:
    /// room-specific selection, then the session-global selection, then the
    /// catalog defaults. Field by field, so a room may override only its
    /// wood while inheriting everything else.
    pub fn resolve(
        room: Option<&MaterialSelection>,
        global: Option<&MaterialSelection>,
    ) -> Self {
        let defaults = Self::default();

        Self {
            wood: room
                .and_then(|s| s.wood)
                .or_else(|| global.and_then(|s| s.wood))
                .unwrap_or(defaults.wood),
            finish: room
                .and_then(|s| s.finish)
                .or_else(|| global.and_then(|s| s.finish))
                .unwrap_or(defaults.finish),
            hardware: room
                .and_then(|s| s.hardware)
                .or_else(|| global.and_then(|s| s.hardware))
                .unwrap_or(defaults.hardware),
            quality: room
                .and_then(|s| s.quality)
                .or_else(|| global.and_then(|s| s.quality))
                .unwrap_or(defaults.quality),
        }
    }
}

//! Static pricing reference data.
//!
//! The catalog is the single source of truth for every rate the estimators
//! use: wood and finish prices per square foot, flat hardware-set prices,
//! labor rates, percentage surcharges, and the fixed kitchen constants.
//! It is built once at startup ([`PricingCatalog::default`] bakes in the
//! standard rate card) and never mutated at runtime; `estimate-data` can
//! overlay a custom rate card before the catalog is handed to the engine.
//!
//! String lookups are lenient by design: an unknown key resolves to the
//! category default and logs a warning, so a stale or mistyped id can never
//! surface as a missing price or a zero total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{FinishType, HardwareTier, QualityTier, WoodType};

/// Per-square-foot wood pricing, with the indicative range shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WoodEntry {
    pub wood: WoodType,
    pub price_per_sqft: Decimal,
    pub quality_label: String,
    pub price_range_min: Decimal,
    pub price_range_max: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishEntry {
    pub finish: FinishType,
    pub price_per_sqft: Decimal,
    pub price_range_min: Decimal,
    pub price_range_max: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareEntry {
    pub tier: HardwareTier,
    pub price_flat: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborEntry {
    pub tier: QualityTier,
    pub rate_per_sqft: Decimal,
}

/// Percentage-of-subtotal overheads applied by the aggregate estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurchargeKind {
    Design,
    Transportation,
    Installation,
    Warranty,
}

impl SurchargeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Design => "design",
            Self::Transportation => "transportation",
            Self::Installation => "installation",
            Self::Warranty => "warranty",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "design" => Some(Self::Design),
            "transportation" => Some(Self::Transportation),
            "installation" => Some(Self::Installation),
            "warranty" => Some(Self::Warranty),
            _ => None,
        }
    }

    pub const ALL: [Self; 4] = [
        Self::Design,
        Self::Transportation,
        Self::Installation,
        Self::Warranty,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeEntry {
    pub surcharge: SurchargeKind,
    pub percentage: Decimal,
}

/// Immutable rate card for one estimation run.
///
/// Entry arrays keep the category default at index 0 so lenient lookups can
/// fall back without a panic path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingCatalog {
    woods: [WoodEntry; 4],
    finishes: [FinishEntry; 4],
    hardware: [HardwareEntry; 3],
    labor: [LaborEntry; 3],
    surcharges: [SurchargeEntry; 4],
    /// Fixed kitchen counter rate per square foot of floor area.
    pub counter_rate_per_sqft: Decimal,
    /// Flat price of the optional kitchen appliance package.
    pub appliance_package_cost: Decimal,
    /// Upper plus lower cabinet runs expressed as a multiple of floor area.
    pub cabinet_area_factor: Decimal,
}

impl Default for PricingCatalog {
    fn default() -> Self {
        let wood = |wood, price: i64, label: &str, min: i64, max: i64| WoodEntry {
            wood,
            price_per_sqft: Decimal::from(price),
            quality_label: label.to_string(),
            price_range_min: Decimal::from(min),
            price_range_max: Decimal::from(max),
        };
        let finish = |finish, price: i64, min: i64, max: i64| FinishEntry {
            finish,
            price_per_sqft: Decimal::from(price),
            price_range_min: Decimal::from(min),
            price_range_max: Decimal::from(max),
        };

        Self {
            // Default (plywood) first.
            woods: [
                wood(WoodType::Plywood, 1200, "Standard", 1000, 1400),
                wood(WoodType::Mdf, 900, "Economy", 800, 1000),
                wood(WoodType::Particle, 700, "Budget", 600, 800),
                wood(WoodType::Solid, 2500, "Premium", 2200, 2800),
            ],
            // Default (paint) first.
            finishes: [
                finish(FinishType::Paint, 80, 60, 100),
                finish(FinishType::Laminate, 150, 120, 180),
                finish(FinishType::Veneer, 250, 220, 300),
                finish(FinishType::Lacquer, 350, 300, 400),
            ],
            hardware: [
                HardwareEntry {
                    tier: HardwareTier::Basic,
                    price_flat: Decimal::from(15_000),
                },
                HardwareEntry {
                    tier: HardwareTier::Premium,
                    price_flat: Decimal::from(40_000),
                },
                HardwareEntry {
                    tier: HardwareTier::Luxury,
                    price_flat: Decimal::from(90_000),
                },
            ],
            labor: [
                LaborEntry {
                    tier: QualityTier::Basic,
                    rate_per_sqft: Decimal::from(100),
                },
                LaborEntry {
                    tier: QualityTier::Premium,
                    rate_per_sqft: Decimal::from(180),
                },
                LaborEntry {
                    tier: QualityTier::Luxury,
                    rate_per_sqft: Decimal::from(300),
                },
            ],
            surcharges: [
                SurchargeEntry {
                    surcharge: SurchargeKind::Design,
                    percentage: Decimal::from(10),
                },
                SurchargeEntry {
                    surcharge: SurchargeKind::Transportation,
                    percentage: Decimal::from(3),
                },
                SurchargeEntry {
                    surcharge: SurchargeKind::Installation,
                    percentage: Decimal::from(5),
                },
                SurchargeEntry {
                    surcharge: SurchargeKind::Warranty,
                    percentage: Decimal::from(2),
                },
            ],
            counter_rate_per_sqft: Decimal::from(200),
            appliance_package_cost: Decimal::from(150_000),
            cabinet_area_factor: Decimal::new(15, 1),
        }
    }
}

impl PricingCatalog {
    pub fn wood(&self, wood: WoodType) -> &WoodEntry {
        self.woods
            .iter()
            .find(|e| e.wood == wood)
            .unwrap_or(&self.woods[0])
    }

    pub fn finish(&self, finish: FinishType) -> &FinishEntry {
        self.finishes
            .iter()
            .find(|e| e.finish == finish)
            .unwrap_or(&self.finishes[0])
    }

    pub fn hardware(&self, tier: HardwareTier) -> &HardwareEntry {
        self.hardware
            .iter()
            .find(|e| e.tier == tier)
            .unwrap_or(&self.hardware[0])
    }

    pub fn labor(&self, tier: QualityTier) -> &LaborEntry {
        self.labor
            .iter()
            .find(|e| e.tier == tier)
            .unwrap_or(&self.labor[0])
    }

    pub fn surcharge(&self, kind: SurchargeKind) -> &SurchargeEntry {
        self.surcharges
            .iter()
            .find(|e| e.surcharge == kind)
            .unwrap_or(&self.surcharges[0])
    }

    pub fn surcharges(&self) -> &[SurchargeEntry] {
        &self.surcharges
    }

    /// Resolves a string wood key. Unknown keys fall back to the category
    /// default (plywood) with a warning, never to a missing price.
    pub fn resolve_wood(&self, key: &str) -> &WoodEntry {
        self.wood(WoodType::parse_or_default(key))
    }

    pub fn resolve_finish(&self, key: &str) -> &FinishEntry {
        self.finish(FinishType::parse_or_default(key))
    }

    pub fn resolve_hardware(&self, key: &str) -> &HardwareEntry {
        self.hardware(HardwareTier::parse_or_default(key))
    }

    pub fn resolve_labor(&self, key: &str) -> &LaborEntry {
        self.labor(QualityTier::parse_or_default(key))
    }

    // Mutable accessors for rate-card overlays. Runtime code only ever sees
    // the catalog behind a shared reference.

    pub fn wood_mut(&mut self, wood: WoodType) -> &mut WoodEntry {
        let idx = self.woods.iter().position(|e| e.wood == wood).unwrap_or(0);
        &mut self.woods[idx]
    }

    pub fn finish_mut(&mut self, finish: FinishType) -> &mut FinishEntry {
        let idx = self
            .finishes
            .iter()
            .position(|e| e.finish == finish)
            .unwrap_or(0);
        &mut self.finishes[idx]
    }

    pub fn hardware_mut(&mut self, tier: HardwareTier) -> &mut HardwareEntry {
        let idx = self
            .hardware
            .iter()
            .position(|e| e.tier == tier)
            .unwrap_or(0);
        &mut self.hardware[idx]
    }

    pub fn labor_mut(&mut self, tier: QualityTier) -> &mut LaborEntry {
        let idx = self.labor.iter().position(|e| e.tier == tier).unwrap_or(0);
        &mut self.labor[idx]
    }

    pub fn surcharge_mut(&mut self, kind: SurchargeKind) -> &mut SurchargeEntry {
        let idx = self
            .surcharges
            .iter()
            .position(|e| e.surcharge == kind)
            .unwrap_or(0);
        &mut self.surcharges[idx]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn every_wood_key_has_an_entry() {
        let catalog = PricingCatalog::default();

        for wood in WoodType::ALL {
            assert_eq!(catalog.wood(wood).wood, wood);
        }
    }

    #[test]
    fn every_surcharge_kind_has_an_entry() {
        let catalog = PricingCatalog::default();

        for kind in SurchargeKind::ALL {
            assert_eq!(catalog.surcharge(kind).surcharge, kind);
        }
    }

    #[test]
    fn surcharge_percentages_match_the_rate_card() {
        let catalog = PricingCatalog::default();

        assert_eq!(catalog.surcharge(SurchargeKind::Design).percentage, dec!(10));
        assert_eq!(
            catalog.surcharge(SurchargeKind::Transportation).percentage,
            dec!(3)
        );
        assert_eq!(
            catalog.surcharge(SurchargeKind::Installation).percentage,
            dec!(5)
        );
        assert_eq!(catalog.surcharge(SurchargeKind::Warranty).percentage, dec!(2));
    }

    #[test]
    fn unknown_wood_key_falls_back_to_plywood_price() {
        let catalog = PricingCatalog::default();

        let entry = catalog.resolve_wood("teak");

        assert_eq!(entry.wood, WoodType::Plywood);
        assert_eq!(entry.price_per_sqft, catalog.wood(WoodType::Plywood).price_per_sqft);
    }

    #[test]
    fn unknown_finish_key_falls_back_to_paint_price() {
        let catalog = PricingCatalog::default();

        let entry = catalog.resolve_finish("wallpaper");

        assert_eq!(entry.finish, FinishType::Paint);
        assert!(entry.price_per_sqft > Decimal::ZERO);
    }

    #[test]
    fn known_keys_resolve_without_fallback() {
        let catalog = PricingCatalog::default();

        assert_eq!(catalog.resolve_wood("solid").wood, WoodType::Solid);
        assert_eq!(
            catalog.resolve_hardware("luxury").tier,
            HardwareTier::Luxury
        );
        assert_eq!(catalog.resolve_labor("premium").tier, QualityTier::Premium);
    }

    #[test]
    fn kitchen_constants_match_the_rate_card() {
        let catalog = PricingCatalog::default();

        assert_eq!(catalog.counter_rate_per_sqft, dec!(200));
        assert_eq!(catalog.appliance_package_cost, dec!(150000));
        assert_eq!(catalog.cabinet_area_factor, dec!(1.5));
    }

    #[test]
    fn overlay_mutators_target_the_right_entry() {
        let mut catalog = PricingCatalog::default();

        catalog.wood_mut(WoodType::Solid).price_per_sqft = dec!(2600);

        assert_eq!(catalog.wood(WoodType::Solid).price_per_sqft, dec!(2600));
        assert_eq!(catalog.wood(WoodType::Plywood).price_per_sqft, dec!(1200));
    }
}

//! Integration tests: a full rate card flowing from CSV into live pricing.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use estimate_core::calculations::compute_estimate;
use estimate_core::catalog::PricingCatalog;
use estimate_core::models::{
    EstimationSession, ProjectType, QualityTier, Room, SessionEvent, WoodType,
};
use estimate_data::RateCardLoader;

const RATE_CARD_2026: &str = include_str!("../test-data/rate_card_2026.csv");

#[test]
fn full_rate_card_parses_and_applies() {
    let records = RateCardLoader::parse(RATE_CARD_2026.as_bytes()).expect("parse failed");

    assert_eq!(records.len(), 20);

    let catalog = RateCardLoader::apply(&records, PricingCatalog::default()).expect("apply failed");

    assert_eq!(catalog.wood(WoodType::Plywood).price_per_sqft, dec!(1250));
    assert_eq!(catalog.wood(WoodType::Solid).quality_label, "Premium");
    assert_eq!(catalog.labor(QualityTier::Luxury).rate_per_sqft, dec!(310));
    assert_eq!(catalog.counter_rate_per_sqft, dec!(210));
    assert_eq!(catalog.appliance_package_cost, dec!(160000));
    // Not listed in the card: stays at the built-in value.
    assert_eq!(catalog.cabinet_area_factor, dec!(1.5));
}

#[test]
fn estimates_pick_up_the_loaded_rates() {
    let records = RateCardLoader::parse(RATE_CARD_2026.as_bytes()).expect("parse failed");
    let catalog = RateCardLoader::apply(&records, PricingCatalog::default()).expect("apply failed");

    let session = EstimationSession::new(ProjectType::EntireHome).apply(SessionEvent::UpsertRoom {
        key: "bedroom-1".into(),
        room: Room::with_dimensions("bedroom", dec!(10), dec!(10), dec!(10)),
    });

    let breakdown = compute_estimate(&session, &catalog);

    // 100 sqft × 1250 wood + 400 sqft × 85 paint + 16000 hardware + 100 × 110 labor
    assert_eq!(breakdown.pre_surcharge_total, dec!(186000));
    // Surcharges unchanged at 20% combined.
    assert_eq!(breakdown.total, dec!(223200.00));
}

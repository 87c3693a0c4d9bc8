use std::io::Read;

use estimate_core::catalog::{PricingCatalog, SurchargeKind};
use estimate_core::models::{FinishType, HardwareTier, QualityTier, WoodType};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Errors that can occur when loading a rate card.
///
/// Loading is strict even though runtime lookups are lenient: a typo in a
/// rate card should fail loudly at load time, not silently fall back to
/// default pricing for the rest of the process lifetime.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateCardLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("unknown key '{key}' in category '{category}'")]
    UnknownKey { category: String, key: String },

    #[error("rate for {category}/{key} must be non-negative, got {rate}")]
    NegativeRate {
        category: String,
        key: String,
        rate: Decimal,
    },
}

impl From<csv::Error> for RateCardLoaderError {
    fn from(err: csv::Error) -> Self {
        RateCardLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a rate-card CSV file.
///
/// Columns:
/// - `category`: wood, finish, hardware, labor, surcharge, or kitchen
/// - `key`: the entry key within the category (e.g. `plywood`, `design`)
/// - `rate`: price per sqft, flat price, percentage, or kitchen constant,
///   depending on the category
/// - `range_min`/`range_max`: optional indicative range (wood and finish)
/// - `label`: optional quality label (wood only)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RateCardRecord {
    pub category: String,
    pub key: String,
    pub rate: Decimal,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub range_min: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub range_max: Option<Decimal>,
    #[serde(default)]
    pub label: Option<String>,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for rate-card CSV files.
///
/// Parsed records are overlaid on a base catalog (normally
/// [`PricingCatalog::default`]), so a rate card only needs to list the
/// entries it changes.
pub struct RateCardLoader;

impl RateCardLoader {
    /// Parses rate-card records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<RateCardRecord>, RateCardLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: RateCardRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Overlays records on a base catalog, returning the updated catalog.
    ///
    /// Applying is idempotent: overlaying the same records twice produces
    /// the same catalog.
    pub fn apply(
        records: &[RateCardRecord],
        mut catalog: PricingCatalog,
    ) -> Result<PricingCatalog, RateCardLoaderError> {
        for record in records {
            if record.rate < Decimal::ZERO {
                return Err(RateCardLoaderError::NegativeRate {
                    category: record.category.clone(),
                    key: record.key.clone(),
                    rate: record.rate,
                });
            }

            let unknown_key = || RateCardLoaderError::UnknownKey {
                category: record.category.clone(),
                key: record.key.clone(),
            };

            match record.category.as_str() {
                "wood" => {
                    let wood = WoodType::parse(&record.key).ok_or_else(unknown_key)?;
                    let entry = catalog.wood_mut(wood);
                    entry.price_per_sqft = record.rate;
                    if let Some(min) = record.range_min {
                        entry.price_range_min = min;
                    }
                    if let Some(max) = record.range_max {
                        entry.price_range_max = max;
                    }
                    if let Some(label) = &record.label {
                        entry.quality_label = label.clone();
                    }
                }
                "finish" => {
                    let finish = FinishType::parse(&record.key).ok_or_else(unknown_key)?;
                    let entry = catalog.finish_mut(finish);
                    entry.price_per_sqft = record.rate;
                    if let Some(min) = record.range_min {
                        entry.price_range_min = min;
                    }
                    if let Some(max) = record.range_max {
                        entry.price_range_max = max;
                    }
                }
                "hardware" => {
                    let tier = HardwareTier::parse(&record.key).ok_or_else(unknown_key)?;
                    catalog.hardware_mut(tier).price_flat = record.rate;
                }
                "labor" => {
                    let tier = QualityTier::parse(&record.key).ok_or_else(unknown_key)?;
                    catalog.labor_mut(tier).rate_per_sqft = record.rate;
                }
                "surcharge" => {
                    let kind = SurchargeKind::parse(&record.key).ok_or_else(unknown_key)?;
                    catalog.surcharge_mut(kind).percentage = record.rate;
                }
                "kitchen" => match record.key.as_str() {
                    "counter_rate" => catalog.counter_rate_per_sqft = record.rate,
                    "appliance_package" => catalog.appliance_package_cost = record.rate,
                    "cabinet_factor" => catalog.cabinet_area_factor = record.rate,
                    _ => return Err(unknown_key()),
                },
                other => {
                    return Err(RateCardLoaderError::UnknownCategory(other.to_string()));
                }
            }
        }

        info!(overrides = records.len(), "rate card applied");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const HEADER: &str = "category,key,rate,range_min,range_max,label\n";

    #[test]
    fn parse_single_record() {
        let csv = format!("{HEADER}wood,plywood,1250,1050,1450,Standard");

        let records = RateCardLoader::parse(csv.as_bytes()).expect("parse failed");

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            RateCardRecord {
                category: "wood".into(),
                key: "plywood".into(),
                rate: dec!(1250),
                range_min: Some(dec!(1050)),
                range_max: Some(dec!(1450)),
                label: Some("Standard".into()),
            }
        );
    }

    #[test]
    fn parse_allows_empty_optional_columns() {
        let csv = format!("{HEADER}surcharge,design,12,,,");

        let records = RateCardLoader::parse(csv.as_bytes()).expect("parse failed");

        assert_eq!(records[0].range_min, None);
        assert_eq!(records[0].range_max, None);
        assert_eq!(records[0].label, None);
    }

    #[test]
    fn parse_rejects_bad_decimal() {
        let csv = format!("{HEADER}wood,plywood,abc,,,");

        let err = RateCardLoader::parse(csv.as_bytes()).expect_err("should fail");

        let RateCardLoaderError::CsvParse(msg) = err else {
            panic!("expected CsvParse, got {err:?}");
        };
        assert!(msg.to_lowercase().contains("invalid"), "unexpected message: {msg}");
    }

    #[test]
    fn apply_overlays_only_listed_entries() {
        let csv = format!("{HEADER}wood,solid,2600,,,\nlabor,premium,200,,,");
        let records = RateCardLoader::parse(csv.as_bytes()).unwrap();

        let catalog = RateCardLoader::apply(&records, PricingCatalog::default()).unwrap();

        assert_eq!(catalog.wood(WoodType::Solid).price_per_sqft, dec!(2600));
        assert_eq!(catalog.labor(QualityTier::Premium).rate_per_sqft, dec!(200));
        // Untouched entries keep the built-in card.
        assert_eq!(catalog.wood(WoodType::Plywood).price_per_sqft, dec!(1200));
    }

    #[test]
    fn apply_updates_kitchen_constants() {
        let csv = format!("{HEADER}kitchen,counter_rate,220,,,\nkitchen,appliance_package,175000,,,");
        let records = RateCardLoader::parse(csv.as_bytes()).unwrap();

        let catalog = RateCardLoader::apply(&records, PricingCatalog::default()).unwrap();

        assert_eq!(catalog.counter_rate_per_sqft, dec!(220));
        assert_eq!(catalog.appliance_package_cost, dec!(175000));
    }

    #[test]
    fn apply_is_strict_about_unknown_keys() {
        let csv = format!("{HEADER}wood,teak,3000,,,");
        let records = RateCardLoader::parse(csv.as_bytes()).unwrap();

        let err = RateCardLoader::apply(&records, PricingCatalog::default()).unwrap_err();

        assert_eq!(
            err,
            RateCardLoaderError::UnknownKey {
                category: "wood".into(),
                key: "teak".into(),
            }
        );
    }

    #[test]
    fn apply_is_strict_about_unknown_categories() {
        let csv = format!("{HEADER}flooring,marble,450,,,");
        let records = RateCardLoader::parse(csv.as_bytes()).unwrap();

        let err = RateCardLoader::apply(&records, PricingCatalog::default()).unwrap_err();

        assert_eq!(err, RateCardLoaderError::UnknownCategory("flooring".into()));
    }

    #[test]
    fn apply_rejects_negative_rates() {
        let csv = format!("{HEADER}hardware,basic,-1,,,");
        let records = RateCardLoader::parse(csv.as_bytes()).unwrap();

        let err = RateCardLoader::apply(&records, PricingCatalog::default()).unwrap_err();

        assert_eq!(
            err,
            RateCardLoaderError::NegativeRate {
                category: "hardware".into(),
                key: "basic".into(),
                rate: dec!(-1),
            }
        );
    }

    #[test]
    fn apply_twice_is_idempotent() {
        let csv = format!("{HEADER}surcharge,design,12,,,");
        let records = RateCardLoader::parse(csv.as_bytes()).unwrap();

        let once = RateCardLoader::apply(&records, PricingCatalog::default()).unwrap();
        let twice = RateCardLoader::apply(&records, once.clone()).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn parse_empty_rate_card() {
        let records = RateCardLoader::parse(HEADER.as_bytes()).expect("parse failed");

        assert!(records.is_empty());
    }
}

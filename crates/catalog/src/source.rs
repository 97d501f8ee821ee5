//! Boundary type for the external catalog source.
//!
//! The engine never fetches catalog data itself; a collaborator (backend REST
//! endpoint or static configuration) delivers a JSON snapshot which is
//! validated here before anything enters the enumeration and pricing logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use haberdash_core::{CatalogId, DomainResult};

use crate::family::ColorFamily;
use crate::index::CatalogIndex;
use crate::width::{Width, validate_widths};

/// The payload shape the catalog source delivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub catalog_id: CatalogId,
    pub published_at: DateTime<Utc>,
    pub families: Vec<ColorFamily>,
    pub widths: Vec<Width>,
}

impl CatalogSnapshot {
    /// Validate the snapshot and hand back engine-ready values.
    ///
    /// All snapshot problems surface as [`haberdash_core::DomainError::Configuration`]
    /// here, before any index or matrix is built on top of them.
    pub fn into_engine(self) -> DomainResult<(CatalogIndex, Vec<Width>)> {
        validate_widths(&self.widths)?;
        let index = CatalogIndex::build(self.families)?;
        Ok((index, self.widths))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "catalog_id": "0190f1e4-1111-7000-8000-000000000001",
        "published_at": "2026-03-01T09:00:00Z",
        "families": [
            {"name": "Blues", "slug": "blues", "colors": ["Navy Blue", "Royal Blue"], "total": 2},
            {"name": "Reds", "slug": "reds", "colors": ["Burgundy"], "total": 1}
        ],
        "widths": [
            {"width": "3.25\"", "name": "Classic", "slug": "classic",
             "base_price": 2999, "compare_at_price": 2999},
            {"width": "2.25\"", "name": "Skinny", "slug": "skinny",
             "base_price": 2999, "compare_at_price": 3499}
        ]
    }"#;

    #[test]
    fn snapshot_deserializes_and_builds_the_engine_inputs() {
        let snapshot: CatalogSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
        let (index, widths) = snapshot.into_engine().unwrap();
        assert_eq!(index.total_colors(), 3);
        assert_eq!(widths.len(), 2);
        assert!(widths[1].is_marked_down());
    }

    #[test]
    fn snapshot_with_inconsistent_total_is_rejected() {
        let mut snapshot: CatalogSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
        snapshot.families[0].total = 7;
        assert!(snapshot.into_engine().is_err());
    }

    #[test]
    fn snapshot_with_bad_width_pricing_is_rejected() {
        let mut snapshot: CatalogSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
        snapshot.widths[0].compare_at_price = haberdash_core::Money::from_cents(999);
        assert!(snapshot.into_engine().is_err());
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot: CatalogSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: CatalogSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}

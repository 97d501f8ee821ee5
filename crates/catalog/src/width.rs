//! Tie widths: the physical dimension axis of the variant matrix.

use serde::{Deserialize, Serialize};

use haberdash_core::{DomainError, DomainResult, Entity, Money};

/// A physical product dimension variant (necktie width) that, combined with a
/// color, defines a purchasable variant.
///
/// `width` is the display value (e.g. `2.25"` or `adjustable`); `slug` is the
/// unique key within a product's width set. A width not on sale carries
/// `compare_at_price == base_price`; the invariant is `compare_at_price >=
/// base_price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Width {
    pub width: String,
    pub name: String,
    pub slug: String,
    pub base_price: Money,
    pub compare_at_price: Money,
}

impl Width {
    pub fn is_marked_down(&self) -> bool {
        self.compare_at_price > self.base_price
    }
}

impl Entity for Width {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.slug
    }
}

/// Validate a product's width set: non-empty slugs and names, unique slugs,
/// and `compare_at_price >= base_price` on every record.
pub(crate) fn validate_widths(widths: &[Width]) -> DomainResult<()> {
    let mut seen = std::collections::HashSet::new();
    for w in widths {
        if w.slug.trim().is_empty() {
            return Err(DomainError::configuration(format!(
                "width {:?} has an empty slug",
                w.name
            )));
        }
        if w.name.trim().is_empty() {
            return Err(DomainError::configuration(format!(
                "width {:?} has an empty name",
                w.slug
            )));
        }
        if !seen.insert(w.slug.as_str()) {
            return Err(DomainError::configuration(format!(
                "duplicate width slug {:?}",
                w.slug
            )));
        }
        if w.compare_at_price < w.base_price {
            return Err(DomainError::configuration(format!(
                "width {:?} has compare_at_price {} below base_price {}",
                w.slug, w.compare_at_price, w.base_price
            )));
        }
    }
    Ok(())
}

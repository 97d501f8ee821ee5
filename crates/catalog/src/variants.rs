//! Lazy width × color variant enumeration.
//!
//! Variants are derived, never stored: four widths over a 63-color catalog
//! would mean 252 variant records, so the cross product is generated on
//! demand instead of being persisted per combination.

use serde::Serialize;

use haberdash_core::{DomainResult, ProductId};

use crate::index::CatalogIndex;
use crate::width::{Width, validate_widths};

/// One concrete purchasable (width, color) combination.
///
/// Borrows from the width set and catalog it was enumerated from; callers
/// that need owned data (serialization into a page of results) get it via
/// the `Serialize` derive or plain `to_string` on the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variant<'a> {
    pub width_slug: &'a str,
    pub color: &'a str,
}

/// Enumerate the full cross product of widths and catalog colors.
///
/// The order is deterministic and stable: widths in the order given, then
/// families in catalog order, then colors in family order. The iterator is a
/// pure function of its inputs with no hidden state, so enumerating twice
/// yields the identical sequence (pagination and display rely on this).
pub fn enumerate_variants<'a>(
    widths: &'a [Width],
    catalog: &'a CatalogIndex,
) -> impl Iterator<Item = Variant<'a>> {
    widths.iter().flat_map(move |width| {
        catalog.families().iter().flat_map(move |family| {
            family.colors().iter().map(move |color| Variant {
                width_slug: width.slug.as_str(),
                color: color.as_str(),
            })
        })
    })
}

/// Number of variants [`enumerate_variants`] will yield, without enumerating.
pub fn variant_count(widths: &[Width], catalog: &CatalogIndex) -> usize {
    widths.len() * catalog.total_colors()
}

/// The browse model for a configurable product: its widths, the color
/// families, and the derived variant space.
///
/// Constructed once per catalog snapshot and handed to the configurator UI;
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantMatrix {
    product_id: ProductId,
    widths: Vec<Width>,
    index: CatalogIndex,
}

impl VariantMatrix {
    /// Validate the width set and bind it to a catalog index.
    ///
    /// Width validation (unique slugs, `compare_at_price >= base_price`)
    /// fails with [`haberdash_core::DomainError::Configuration`].
    pub fn build(
        product_id: ProductId,
        widths: Vec<Width>,
        index: CatalogIndex,
    ) -> DomainResult<Self> {
        validate_widths(&widths)?;
        Ok(Self {
            product_id,
            widths,
            index,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn widths(&self) -> &[Width] {
        &self.widths
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn total_variants(&self) -> usize {
        variant_count(&self.widths, &self.index)
    }

    pub fn iter(&self) -> impl Iterator<Item = Variant<'_>> {
        enumerate_variants(&self.widths, &self.index)
    }
}

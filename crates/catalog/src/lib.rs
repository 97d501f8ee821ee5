//! Catalog domain module: color families, widths, variant enumeration.
//!
//! This crate contains business rules for the tie catalog, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage). Catalog data
//! arrives as plain values from an external catalog source; nothing here
//! fetches or persists anything.

pub mod family;
pub mod index;
pub mod source;
pub mod variants;
pub mod width;

pub use family::ColorFamily;
pub use index::CatalogIndex;
pub use source::CatalogSnapshot;
pub use variants::{Variant, VariantMatrix, enumerate_variants, variant_count};
pub use width::Width;

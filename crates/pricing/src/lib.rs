//! Bundle pricing domain module.
//!
//! This crate contains the volume-discount business rules for multi-item
//! bundles (a wedding party's ties priced together), implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). The discount
//! schedule is data, not control flow: every screen and caller consumes the
//! same [`DiscountSchedule`], never a re-implemented tier table.

pub mod bundle;
pub mod schedule;

pub use bundle::{BundlePricing, BundleSelection, price_bundle, validate_selections};
pub use schedule::{DiscountSchedule, DiscountTier};

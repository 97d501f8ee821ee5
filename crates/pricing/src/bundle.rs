//! Bundle selections and volume-discount pricing.

use serde::{Deserialize, Serialize};

use haberdash_catalog::CatalogIndex;
use haberdash_core::{DomainError, DomainResult, Money, ValueObject};

use crate::schedule::DiscountSchedule;

/// One line of a bundle: a chosen (width, color) variant with a quantity and
/// the unit price quoted for it.
///
/// Selections are transient per pricing request; persisting them belongs to
/// an order-management collaborator, not this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleSelection {
    pub width_slug: String,
    pub color: String,
    pub quantity: u32,
    pub unit_price: Money,
}

/// A fully derived pricing result. Immutable once computed; recomputed from
/// scratch on every selection change.
///
/// `savings` always equals `discount`; it is kept as a separate field for
/// display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundlePricing {
    pub subtotal: Money,
    pub discount_percentage: u8,
    pub discount: Money,
    pub total: Money,
    pub savings: Money,
}

impl ValueObject for BundlePricing {}

impl BundlePricing {
    pub const ZERO: BundlePricing = BundlePricing {
        subtotal: Money::ZERO,
        discount_percentage: 0,
        discount: Money::ZERO,
        total: Money::ZERO,
        savings: Money::ZERO,
    };
}

/// Price a bundle of selections under a discount schedule.
///
/// Steps: validate every item (`quantity >= 1`), total the quantities and
/// the subtotal, pick the schedule rate for the total quantity, round the
/// discount half-up to the cent, subtract. An empty selection prices to
/// [`BundlePricing::ZERO`]; it is not an error.
///
/// Either a complete, internally consistent result comes back or the whole
/// call fails with [`DomainError::InvalidSelection`] naming the offending
/// item. Nothing is retried or logged here; that belongs to the caller.
pub fn price_bundle(
    items: &[BundleSelection],
    schedule: &DiscountSchedule,
) -> DomainResult<BundlePricing> {
    let mut total_quantity = 0u64;
    let mut subtotal = Money::ZERO;

    for (line_no, item) in items.iter().enumerate() {
        if item.quantity == 0 {
            return Err(DomainError::invalid_selection(format!(
                "item {} ({} / {}) has quantity 0",
                line_no, item.width_slug, item.color
            )));
        }
        let line_total = item
            .unit_price
            .checked_mul(item.quantity)
            .and_then(|line| subtotal.checked_add(line))
            .ok_or_else(|| {
                DomainError::invalid_selection(format!(
                    "item {} ({} / {}) overflows the bundle subtotal",
                    line_no, item.width_slug, item.color
                ))
            })?;
        subtotal = line_total;
        total_quantity += u64::from(item.quantity);
    }

    let discount_percentage = schedule.rate_for(total_quantity);
    let discount = subtotal.percent_of(discount_percentage);
    let total = subtotal.saturating_sub(discount);

    tracing::debug!(
        items = items.len(),
        total_quantity,
        discount_percentage,
        %subtotal,
        %total,
        "bundle priced"
    );

    Ok(BundlePricing {
        subtotal,
        discount_percentage,
        discount,
        total,
        savings: discount,
    })
}

/// Check every selection's color against the catalog before pricing.
///
/// Callers run this when selections originate from untrusted input (URL
/// parameters, stale carts); a color absent from the catalog fails with
/// [`DomainError::UnknownColor`].
pub fn validate_selections(
    catalog: &CatalogIndex,
    items: &[BundleSelection],
) -> DomainResult<()> {
    for item in items {
        catalog.family_of(&item.color)?;
    }
    Ok(())
}

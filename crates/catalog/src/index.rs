//! Catalog index: validated color-name lookup over a set of families.

use std::collections::HashMap;

use haberdash_core::{DomainError, DomainResult};

use crate::family::ColorFamily;

/// Validated index over the full color catalog.
///
/// Built once from the catalog source's family definitions and passed by
/// reference into every call that needs it; there is no hidden global. The
/// index is immutable after construction, owns its data, and is safe to share
/// across threads.
///
/// Families partition the catalog: a color name belongs to exactly one
/// family. Lookup is case-sensitive exact match, so color selection stays
/// deterministic for pricing and URL encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIndex {
    families: Vec<ColorFamily>,
    family_by_color: HashMap<String, usize>,
    total_colors: usize,
}

impl CatalogIndex {
    /// Build the index, validating the family definitions.
    ///
    /// Rejected with [`DomainError::Configuration`]: an empty family list,
    /// empty names or slugs, a family whose `total` disagrees with its color
    /// list, and a color name appearing twice anywhere in the catalog. A
    /// duplicate across families is flagged rather than silently assigned to
    /// one of them.
    pub fn build(families: Vec<ColorFamily>) -> DomainResult<Self> {
        if families.is_empty() {
            return Err(DomainError::configuration("catalog has no color families"));
        }

        let mut family_by_color = HashMap::new();
        let mut total_colors = 0usize;

        for (idx, family) in families.iter().enumerate() {
            if family.name.trim().is_empty() {
                return Err(DomainError::configuration(format!(
                    "family {:?} has an empty name",
                    family.slug
                )));
            }
            if family.slug.trim().is_empty() {
                return Err(DomainError::configuration(format!(
                    "family {:?} has an empty slug",
                    family.name
                )));
            }
            if !family.is_consistent() {
                return Err(DomainError::configuration(format!(
                    "family {:?} declares total {} but lists {} colors",
                    family.slug,
                    family.total,
                    family.colors.len()
                )));
            }
            for color in &family.colors {
                if color.trim().is_empty() {
                    return Err(DomainError::configuration(format!(
                        "family {:?} contains an empty color name",
                        family.slug
                    )));
                }
                if let Some(&prior) = family_by_color.get(color) {
                    let prior: &ColorFamily = &families[prior];
                    return Err(DomainError::configuration(format!(
                        "color {:?} appears in both {:?} and {:?}",
                        color, prior.slug, family.slug
                    )));
                }
                family_by_color.insert(color.clone(), idx);
            }
            total_colors += family.colors.len();
        }

        tracing::debug!(
            families = families.len(),
            colors = total_colors,
            "catalog index built"
        );

        Ok(Self {
            families,
            family_by_color,
            total_colors,
        })
    }

    /// The owning family of a color, for validation and display.
    ///
    /// Case-sensitive exact match; an absent name fails with
    /// [`DomainError::UnknownColor`].
    pub fn family_of(&self, color: &str) -> DomainResult<&ColorFamily> {
        self.family_by_color
            .get(color)
            .map(|&idx| &self.families[idx])
            .ok_or_else(|| DomainError::unknown_color(color))
    }

    pub fn contains(&self, color: &str) -> bool {
        self.family_by_color.contains_key(color)
    }

    /// Families in the order the catalog source supplied them.
    pub fn families(&self) -> &[ColorFamily] {
        &self.families
    }

    /// Sum of per-family color counts.
    pub fn total_colors(&self) -> usize {
        self.total_colors
    }
}

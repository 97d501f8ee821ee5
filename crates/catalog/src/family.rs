//! Color families: named groupings of related colors.

use serde::{Deserialize, Serialize};

use haberdash_core::Entity;

/// A named grouping of related colors (e.g. "Blues"), used for browsing and
/// gradient display.
///
/// `colors` is ordered: the sequence is the display order and the variant
/// enumeration order. The backend supplies `total` redundantly alongside the
/// list; [`CatalogIndex::build`](crate::CatalogIndex::build) verifies that
/// `total == colors.len()` and rejects the snapshot otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorFamily {
    pub name: String,
    pub slug: String,
    pub colors: Vec<String>,
    pub total: usize,
}

impl ColorFamily {
    /// Build a family with a consistent `total`. Test and fixture helper;
    /// snapshots from the backend carry their own `total`.
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        colors: Vec<String>,
    ) -> Self {
        let total = colors.len();
        Self {
            name: name.into(),
            slug: slug.into(),
            colors,
            total,
        }
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn is_consistent(&self) -> bool {
        self.total == self.colors.len()
    }
}

impl Entity for ColorFamily {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.slug
    }
}

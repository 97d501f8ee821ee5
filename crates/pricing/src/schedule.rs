//! Quantity-tiered discount schedules.

use serde::{Deserialize, Serialize};

use haberdash_core::{DomainError, DomainResult, ValueObject};

/// One tier of a discount schedule: at `min_quantity` items or more, the
/// bundle earns `percentage` off. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTier {
    pub min_quantity: u32,
    pub percentage: u8,
}

impl ValueObject for DiscountTier {}

/// An ordered set of quantity thresholds mapping to discount percentages.
///
/// Operators adjust tiers by supplying different data; the step function is
/// never re-implemented per screen. Validation happens at construction (and
/// therefore at deserialization), so a schedule in hand is always sorted and
/// monotone:
///
/// - tiers sorted strictly ascending by `min_quantity`, each `>= 1`
/// - percentages non-decreasing and `<= 100`
///
/// An empty schedule is legal and discounts nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DiscountTier>", into = "Vec<DiscountTier>")]
pub struct DiscountSchedule {
    tiers: Vec<DiscountTier>,
}

impl DiscountSchedule {
    pub fn new(tiers: Vec<DiscountTier>) -> DomainResult<Self> {
        let mut prev: Option<&DiscountTier> = None;
        for tier in &tiers {
            if tier.min_quantity == 0 {
                return Err(DomainError::configuration(
                    "discount tier min_quantity must be at least 1",
                ));
            }
            if tier.percentage > 100 {
                return Err(DomainError::configuration(format!(
                    "discount tier at quantity {} has percentage {} > 100",
                    tier.min_quantity, tier.percentage
                )));
            }
            if let Some(prev) = prev {
                if tier.min_quantity <= prev.min_quantity {
                    return Err(DomainError::configuration(format!(
                        "discount tiers not strictly ascending: quantity {} follows {}",
                        tier.min_quantity, prev.min_quantity
                    )));
                }
                if tier.percentage < prev.percentage {
                    return Err(DomainError::configuration(format!(
                        "discount percentage decreases from {}% to {}% at quantity {}",
                        prev.percentage, tier.percentage, tier.min_quantity
                    )));
                }
            }
            prev = Some(tier);
        }
        Ok(Self { tiers })
    }

    /// The canonical wedding-bundle schedule: 2+ ties 5%, 4+ 10%, 6+ 15%, 10+ 20%.
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                DiscountTier { min_quantity: 2, percentage: 5 },
                DiscountTier { min_quantity: 4, percentage: 10 },
                DiscountTier { min_quantity: 6, percentage: 15 },
                DiscountTier { min_quantity: 10, percentage: 20 },
            ],
        }
    }

    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }

    /// The rate earned by a bundle of `total_quantity` items: the highest
    /// tier whose threshold is met, or 0 if none qualifies. A step function,
    /// never interpolated; ties at an exact threshold qualify for that
    /// threshold's rate.
    pub fn rate_for(&self, total_quantity: u64) -> u8 {
        self.tiers
            .iter()
            .rev()
            .find(|tier| u64::from(tier.min_quantity) <= total_quantity)
            .map(|tier| tier.percentage)
            .unwrap_or(0)
    }
}

impl TryFrom<Vec<DiscountTier>> for DiscountSchedule {
    type Error = DomainError;

    fn try_from(tiers: Vec<DiscountTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<DiscountSchedule> for Vec<DiscountTier> {
    fn from(schedule: DiscountSchedule) -> Self {
        schedule.tiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_schedule_steps_at_documented_thresholds() {
        let schedule = DiscountSchedule::standard();
        assert_eq!(schedule.rate_for(0), 0);
        assert_eq!(schedule.rate_for(1), 0);
        assert_eq!(schedule.rate_for(2), 5);
        assert_eq!(schedule.rate_for(3), 5);
        assert_eq!(schedule.rate_for(4), 10);
        assert_eq!(schedule.rate_for(5), 10);
        assert_eq!(schedule.rate_for(6), 15);
        assert_eq!(schedule.rate_for(9), 15);
        assert_eq!(schedule.rate_for(10), 20);
        assert_eq!(schedule.rate_for(250), 20);
    }

    #[test]
    fn empty_schedule_discounts_nothing() {
        let schedule = DiscountSchedule::new(Vec::new()).unwrap();
        assert_eq!(schedule.rate_for(100), 0);
    }

    #[test]
    fn unsorted_tiers_are_rejected() {
        let err = DiscountSchedule::new(vec![
            DiscountTier { min_quantity: 4, percentage: 10 },
            DiscountTier { min_quantity: 2, percentage: 5 },
        ])
        .unwrap_err();
        assert!(matches!(err, DomainError::Configuration(_)));
    }

    #[test]
    fn duplicate_thresholds_are_rejected() {
        let err = DiscountSchedule::new(vec![
            DiscountTier { min_quantity: 2, percentage: 5 },
            DiscountTier { min_quantity: 2, percentage: 10 },
        ])
        .unwrap_err();
        assert!(matches!(err, DomainError::Configuration(_)));
    }

    #[test]
    fn decreasing_percentages_are_rejected() {
        let err = DiscountSchedule::new(vec![
            DiscountTier { min_quantity: 2, percentage: 10 },
            DiscountTier { min_quantity: 4, percentage: 5 },
        ])
        .unwrap_err();
        match err {
            DomainError::Configuration(msg) => assert!(msg.contains("decreases")),
            other => panic!("expected Configuration, got {other:?}"),
        }
    }

    #[test]
    fn zero_threshold_and_overlarge_percentage_are_rejected() {
        assert!(
            DiscountSchedule::new(vec![DiscountTier { min_quantity: 0, percentage: 5 }]).is_err()
        );
        assert!(
            DiscountSchedule::new(vec![DiscountTier { min_quantity: 2, percentage: 101 }])
                .is_err()
        );
    }

    #[test]
    fn deserialization_validates_tiers() {
        let ok: DiscountSchedule = serde_json::from_str(
            r#"[{"min_quantity": 2, "percentage": 5}, {"min_quantity": 4, "percentage": 10}]"#,
        )
        .unwrap();
        assert_eq!(ok.rate_for(4), 10);

        let bad = serde_json::from_str::<DiscountSchedule>(
            r#"[{"min_quantity": 4, "percentage": 10}, {"min_quantity": 2, "percentage": 5}]"#,
        );
        assert!(bad.is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        /// Valid schedules: strictly ascending thresholds, non-decreasing rates.
        fn arb_schedule() -> impl Strategy<Value = DiscountSchedule> {
            proptest::collection::vec((1u32..=50, 0u8..=30), 0..=6).prop_map(|raw| {
                let mut quantity = 0u32;
                let mut percentage = 0u8;
                let tiers = raw
                    .into_iter()
                    .map(|(q_step, p_step)| {
                        quantity += q_step;
                        percentage = percentage.saturating_add(p_step).min(100);
                        DiscountTier { min_quantity: quantity, percentage }
                    })
                    .collect();
                DiscountSchedule::new(tiers).unwrap()
            })
        }

        proptest! {
            /// Property: more items never earn a lower rate.
            #[test]
            fn rate_is_monotone_in_quantity(
                schedule in arb_schedule(),
                a in 0u64..=200,
                b in 0u64..=200,
            ) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(schedule.rate_for(lo) <= schedule.rate_for(hi));
            }

            /// Property: the selected rate is exactly the best qualifying tier.
            #[test]
            fn rate_matches_best_qualifying_tier(schedule in arb_schedule(), qty in 0u64..=200) {
                let expected = schedule
                    .tiers()
                    .iter()
                    .filter(|t| u64::from(t.min_quantity) <= qty)
                    .map(|t| t.percentage)
                    .max()
                    .unwrap_or(0);
                prop_assert_eq!(schedule.rate_for(qty), expected);
            }
        }
    }
}

//! Comparison result models for the Income Insights Engine.
//!
//! This module contains the [`ComparisonResult`] type produced for each of
//! the four reference populations a user's income is compared against.

use serde::{Deserialize, Serialize};

/// The reference population a comparison was made against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComparisonCategory {
    /// All earners in the user's region.
    Region {
        /// The region's human-readable name.
        name: String,
    },
    /// All earners in the country.
    National,
    /// All workers in the user's occupation nationwide.
    Occupation {
        /// The occupation title.
        title: String,
    },
    /// Workers in the user's occupation of similar age, in the user's region
    /// where data permits.
    Peers,
}

impl ComparisonCategory {
    /// Display ordering: region, national, occupation, peers.
    pub fn sort_order(&self) -> u8 {
        match self {
            ComparisonCategory::Region { .. } => 0,
            ComparisonCategory::National => 1,
            ComparisonCategory::Occupation { .. } => 2,
            ComparisonCategory::Peers => 3,
        }
    }
}

/// The outcome of comparing the user's income against one reference
/// population. Produced fresh per calculation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// The reference population.
    pub category: ComparisonCategory,
    /// The user income figure the comparison used (personal income for
    /// occupation/peer comparisons, comparison income for region/national).
    pub user_income: f64,
    /// The reference population's median income.
    pub median_income: f64,
    /// The reference population's mean income.
    pub mean_income: f64,
    /// The income level separating the population's top decile.
    pub top10_threshold: f64,
    /// The user's estimated percentile within the population, in [0, 99.5].
    pub percentile: f64,
    /// The user's income relative to the median, as a percentage.
    pub percentage_difference: f64,
    /// Approximate number of people in the reference sample, when known.
    pub sample_size: Option<u64>,
    /// Household income per member; present for region/national comparisons.
    pub per_capita_income: Option<f64>,
    /// Household size; present for region/national comparisons.
    pub household_size: Option<u32>,
}

impl ComparisonResult {
    /// Whether the user's income is at or above the population median.
    pub fn is_above_median(&self) -> bool {
        self.user_income >= self.median_income
    }

    /// Whether the user's income reaches the population's top decile.
    pub fn is_in_top10(&self) -> bool {
        self.user_income >= self.top10_threshold
    }

    /// Whether the comparison carries meaningful household-level data.
    pub fn has_household_data(&self) -> bool {
        self.household_size.is_some_and(|size| size > 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(user_income: f64, median: f64, top10: f64) -> ComparisonResult {
        ComparisonResult {
            category: ComparisonCategory::National,
            user_income,
            median_income: median,
            mean_income: median * 1.3,
            top10_threshold: top10,
            percentile: 50.0,
            percentage_difference: 0.0,
            sample_size: None,
            per_capita_income: None,
            household_size: None,
        }
    }

    #[test]
    fn test_is_above_median_inclusive() {
        assert!(result(50_000.0, 50_000.0, 100_000.0).is_above_median());
        assert!(!result(49_999.0, 50_000.0, 100_000.0).is_above_median());
    }

    #[test]
    fn test_is_in_top10_inclusive() {
        assert!(result(100_000.0, 50_000.0, 100_000.0).is_in_top10());
        assert!(!result(99_999.0, 50_000.0, 100_000.0).is_in_top10());
    }

    #[test]
    fn test_has_household_data_requires_multi_person_household() {
        let mut r = result(50_000.0, 50_000.0, 100_000.0);
        assert!(!r.has_household_data());
        r.household_size = Some(1);
        assert!(!r.has_household_data());
        r.household_size = Some(2);
        assert!(r.has_household_data());
    }

    #[test]
    fn test_sort_order() {
        let region = ComparisonCategory::Region {
            name: "California".to_string(),
        };
        assert!(region.sort_order() < ComparisonCategory::National.sort_order());
        assert!(ComparisonCategory::National.sort_order() < ComparisonCategory::Peers.sort_order());
    }
}

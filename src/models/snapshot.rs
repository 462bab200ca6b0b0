//! The statistics snapshot — the engine's single output artifact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::after_tax::AfterTaxIncome;
use super::comparison::ComparisonResult;
use super::insight::{
    CareerForecast, FunFacts, GenderComparison, PathToTop10, PurchasingPower, RegionRanking,
    SimilarOccupation,
};
use super::profile::UserProfile;

/// One immutable snapshot of every statistic the engine computes for a
/// profile: the four mandatory comparisons, the after-tax breakdown, and the
/// optional derived metrics (absent when their reference data could not be
/// resolved).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    /// Unique id for this snapshot.
    pub id: Uuid,
    /// The profile the snapshot was generated for.
    pub profile: UserProfile,
    /// Comparison against all earners in the user's region.
    pub region_comparison: ComparisonResult,
    /// Comparison against all earners in the country.
    pub national_comparison: ComparisonResult,
    /// Comparison against the user's occupation nationwide.
    pub occupation_comparison: ComparisonResult,
    /// Comparison against occupation peers of similar age and region.
    pub peer_comparison: ComparisonResult,
    /// Itemized after-tax income breakdown.
    pub after_tax: AfterTaxIncome,
    /// Gap to the region's top decile.
    pub path_to_top10_region: Option<PathToTop10>,
    /// Gap to the occupation's top decile.
    pub path_to_top10_occupation: Option<PathToTop10>,
    /// Income trajectory over the occupation's age buckets.
    pub career_forecast: Option<CareerForecast>,
    /// Regional gender pay comparison.
    pub gender_comparison: Option<GenderComparison>,
    /// Highest-paying regions for the occupation.
    pub region_ranking: Option<RegionRanking>,
    /// Best-paying occupations in the same category.
    pub similar_occupations: Option<Vec<SimilarOccupation>>,
    /// Assorted headline numbers.
    pub fun_facts: Option<FunFacts>,
    /// Cost-of-living-adjusted purchasing power.
    pub purchasing_power: Option<PurchasingPower>,
    /// When the snapshot was generated.
    pub generated_at: DateTime<Utc>,
    /// Attribution for the reference datasets used.
    pub data_source: String,
}

impl StatisticsSnapshot {
    /// The four comparisons in display order (region, national, occupation,
    /// peers).
    pub fn all_comparisons(&self) -> [&ComparisonResult; 4] {
        let mut comparisons = [
            &self.region_comparison,
            &self.national_comparison,
            &self.occupation_comparison,
            &self.peer_comparison,
        ];
        comparisons.sort_by_key(|c| c.category.sort_order());
        comparisons
    }

    /// The mean of the four comparison percentiles.
    pub fn overall_percentile(&self) -> f64 {
        let sum = self.region_comparison.percentile
            + self.national_comparison.percentile
            + self.occupation_comparison.percentile
            + self.peer_comparison.percentile;
        sum / 4.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComparisonCategory;

    fn comparison(category: ComparisonCategory, percentile: f64) -> ComparisonResult {
        ComparisonResult {
            category,
            user_income: 50_000.0,
            median_income: 50_000.0,
            mean_income: 60_000.0,
            top10_threshold: 108_000.0,
            percentile,
            percentage_difference: 0.0,
            sample_size: None,
            per_capita_income: None,
            household_size: None,
        }
    }

    fn snapshot() -> StatisticsSnapshot {
        StatisticsSnapshot {
            id: Uuid::new_v4(),
            profile: UserProfile::default(),
            region_comparison: comparison(
                ComparisonCategory::Region {
                    name: "California".to_string(),
                },
                60.0,
            ),
            national_comparison: comparison(ComparisonCategory::National, 50.0),
            occupation_comparison: comparison(
                ComparisonCategory::Occupation {
                    title: "Software Developers".to_string(),
                },
                40.0,
            ),
            peer_comparison: comparison(ComparisonCategory::Peers, 30.0),
            after_tax: AfterTaxIncome::unresolved(50_000.0, "us", "CA"),
            path_to_top10_region: None,
            path_to_top10_occupation: None,
            career_forecast: None,
            gender_comparison: None,
            region_ranking: None,
            similar_occupations: None,
            fun_facts: None,
            purchasing_power: None,
            generated_at: Utc::now(),
            data_source: "test".to_string(),
        }
    }

    #[test]
    fn test_overall_percentile_is_mean_of_four() {
        assert!((snapshot().overall_percentile() - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_comparisons_in_display_order() {
        let snap = snapshot();
        let ordered = snap.all_comparisons();
        assert_eq!(ordered[0].category.sort_order(), 0);
        assert_eq!(ordered[3].category.sort_order(), 3);
    }
}

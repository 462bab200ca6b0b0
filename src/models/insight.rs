//! Derived-metric result models.
//!
//! Each struct here is the output of one optional secondary analysis. A
//! metric whose reference data cannot be resolved is simply absent from the
//! snapshot; these types therefore never carry error states of their own.

use serde::{Deserialize, Serialize};

use super::profile::Gender;

/// How far the user is from the top decile of a reference population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathToTop10 {
    /// The user income figure used.
    pub current_income: f64,
    /// The top-decile income threshold.
    pub top10_threshold: f64,
    /// Label of the reference population (region name or occupation title).
    pub category: String,
    /// Income still missing to reach the threshold (0 when already there).
    pub gap_amount: f64,
    /// The gap as a percentage of current income (100 when income is 0).
    pub gap_percentage: f64,
    /// Whether the user's income already reaches the threshold.
    pub is_already_top10: bool,
}

impl PathToTop10 {
    /// Progress toward the threshold as a percentage, capped at 100.
    pub fn progress_percentage(&self) -> f64 {
        if self.top10_threshold > 0.0 {
            (self.current_income / self.top10_threshold * 100.0).min(100.0)
        } else {
            0.0
        }
    }
}

/// Median and mean income for one age bucket of an occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeGroupIncome {
    /// The age bucket label (e.g., "25-34").
    pub age_range: String,
    /// Median income within the bucket.
    pub median: f64,
    /// Mean income within the bucket.
    pub mean: f64,
}

/// Expected income trajectory over a career within the user's occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerForecast {
    /// The user's current age.
    pub current_age: u32,
    /// The user's gross personal income.
    pub user_income: f64,
    /// Income by age bucket, ordered ascending by bucket.
    pub age_groups: Vec<AgeGroupIncome>,
    /// The age bucket with the highest median income.
    pub peak_age: String,
    /// The median income of the peak bucket.
    pub peak_income: f64,
}

/// Male/female median incomes in the user's region and the resulting pay gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderComparison {
    /// The region name the comparison covers.
    pub category: String,
    /// Median male income, when the dataset carries it.
    pub male_median: Option<f64>,
    /// Median female income, when the dataset carries it.
    pub female_median: Option<f64>,
    /// The user's gender (informational).
    pub user_gender: Gender,
    /// The user's comparison income.
    pub user_income: f64,
    /// `(male − female) / male × 100`, when both medians are present.
    pub pay_gap: Option<f64>,
}

impl GenderComparison {
    /// Whether both gender medians were available.
    pub fn has_data(&self) -> bool {
        self.male_median.is_some() && self.female_median.is_some()
    }
}

/// One region's median income for an occupation, with its rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionIncomeInfo {
    /// The region's human-readable name.
    pub region_name: String,
    /// The region code.
    pub region_code: String,
    /// Median income for the occupation in this region.
    pub median: f64,
    /// 1-based rank among all regions with data for the occupation.
    pub rank: usize,
}

/// Where the user's occupation pays best, and where the user's region ranks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRanking {
    /// The occupation title.
    pub occupation: String,
    /// The five highest-paying regions for the occupation.
    pub top_regions: Vec<RegionIncomeInfo>,
    /// The user's region's 1-based rank, when it has data for the occupation.
    pub user_region_rank: Option<usize>,
    /// The user's region name.
    pub user_region: String,
}

/// An occupation in the same category as the user's, with its pay relative
/// to the user's occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarOccupation {
    /// The occupation title.
    pub title: String,
    /// The occupation classification code.
    pub soc_code: String,
    /// National median income for the occupation.
    pub median: f64,
    /// Median relative to the user's occupation median, as a percentage.
    pub percentage_difference: f64,
}

/// Assorted headline numbers about the user's income and occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunFacts {
    /// National percentile of the user's personal income.
    pub national_rank_percentile: f64,
    /// Total employment in the occupation across all regions.
    pub occupation_employment: u64,
    /// Employment in the occupation within the user's region, when known.
    pub region_employment: Option<u64>,
    /// 1-based rank of the occupation among all occupations by national
    /// median income, when the occupation appears in the full listing.
    pub occupation_rank: Option<usize>,
    /// Total number of occupations in the dataset.
    pub total_occupations: usize,
}

/// Cost-of-living-adjusted view of the user's income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchasingPower {
    /// The user's comparison income, unadjusted.
    pub actual_income: f64,
    /// Income adjusted to an average-cost region: `actual × 100 / col`.
    pub adjusted_income: f64,
    /// The region's cost-of-living index (100 = national average).
    pub cost_of_living_index: f64,
    /// The region's human-readable name.
    pub region_name: String,
    /// The national individual median adjusted by the same factor.
    pub national_median_adjusted: f64,
    /// The user's national percentile at the adjusted income.
    pub adjusted_percentile: f64,
    /// Purchasing-power gain (positive: cheaper-than-average region) or loss
    /// (negative): `actual × (100 − col) / 100`.
    pub savings_impact: f64,
}

impl PurchasingPower {
    /// The adjustment as a percentage of the unadjusted income.
    pub fn adjustment_percentage(&self) -> f64 {
        (self.adjusted_income - self.actual_income) / self.actual_income * 100.0
    }
}

//! Typed reference-dataset tables.
//!
//! These structures are deserialized from the per-country JSON dataset
//! files. Field names mirror the files' `snake_case` keys. All tables are
//! immutable after load.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The minimal reference unit: median and mean income for one population
/// slice. Appears at every granularity (overall, by age bucket, by gender,
/// by marital status).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeStats {
    /// Median income of the slice.
    pub median: f64,
    /// Mean income of the slice.
    pub mean: f64,
}

/// Occupation statistics within one region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionOccupationStats {
    /// Median income for the occupation in the region.
    pub median: f64,
    /// Mean income for the occupation in the region.
    pub mean: f64,
    /// Number of people employed in the occupation in the region.
    pub employment: u64,
}

/// National and regional statistics for one occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationStats {
    /// The occupation classification code.
    pub soc_code: String,
    /// The occupation title.
    pub title: String,
    /// The broad occupation category.
    pub category: String,
    /// National median income.
    pub national_median: f64,
    /// National mean income.
    pub national_mean: f64,
    /// National top-decile income threshold.
    pub top_10_percent: f64,
    /// Per-region breakdown, keyed by region code.
    #[serde(default)]
    pub by_region: HashMap<String, RegionOccupationStats>,
    /// Per-age-bucket breakdown, keyed by age band.
    #[serde(default)]
    pub age_distribution: HashMap<String, IncomeStats>,
}

/// Income statistics for one region of a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionStats {
    /// The region code.
    pub code: String,
    /// The region's human-readable name.
    pub name: String,
    /// Overall income statistics for the region.
    pub overall: IncomeStats,
    /// Top-decile threshold, when the dataset carries one.
    #[serde(default)]
    pub top_10_percent: Option<f64>,
    /// Survey sample size, when known.
    #[serde(default)]
    pub sample_size: Option<u64>,
    /// Breakdown by age band.
    #[serde(default)]
    pub by_age: HashMap<String, IncomeStats>,
    /// Breakdown by gender.
    #[serde(default)]
    pub by_gender: HashMap<String, IncomeStats>,
    /// Breakdown by marital status.
    #[serde(default)]
    pub by_marital_status: HashMap<String, IncomeStats>,
    /// Cost-of-living index where 100 = national average.
    pub cost_of_living_index: f64,
}

/// Country-level income statistics distinguishing household and individual
/// figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetailedIncomeStats {
    /// Median household income.
    pub median_household_income: f64,
    /// Median individual income.
    pub median_individual_income: f64,
    /// Mean household income.
    pub mean_household_income: f64,
    /// Mean individual income, when the dataset carries it.
    #[serde(default)]
    pub mean_individual_income: Option<f64>,
    /// Top-decile income threshold.
    pub top_10_percent: f64,
}

/// Country-level statistics with demographic breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalStats {
    /// Overall household/individual statistics.
    pub overall: DetailedIncomeStats,
    /// Breakdown by age band.
    #[serde(default)]
    pub by_age: HashMap<String, IncomeStats>,
    /// Breakdown by gender.
    #[serde(default)]
    pub by_gender: HashMap<String, IncomeStats>,
    /// Breakdown by marital status.
    #[serde(default)]
    pub by_marital_status: HashMap<String, IncomeStats>,
}

/// Automation/AI risk figures for one occupation. Pass-through data for the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskInfo {
    /// The occupation classification code.
    pub soc_code: String,
    /// The occupation title.
    pub title: String,
    /// The broad occupation category.
    pub category: String,
    /// Risk of displacement by AI, in [0, 1].
    pub ai_risk: f64,
    /// Risk of displacement by robotics, in [0, 1].
    pub robotics_risk: f64,
    /// Combined displacement risk, in [0, 1].
    pub overall_risk: f64,
}

/// Provenance metadata carried by every dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataMetadata {
    /// Dataset version.
    pub version: String,
    /// When the dataset was last updated.
    pub last_updated: String,
    /// Attribution for the dataset's sources.
    pub source: String,
}

/// The occupations dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationDataFile {
    /// All occupations with data for the country.
    pub occupations: Vec<OccupationStats>,
    /// Dataset provenance.
    pub metadata: DataMetadata,
}

/// The regions dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionDataFile {
    /// All regions with data for the country.
    pub regions: Vec<RegionStats>,
    /// Dataset provenance.
    pub metadata: DataMetadata,
}

/// The national-statistics dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalDataFile {
    /// The country-level statistics.
    pub national: NationalStats,
    /// Dataset provenance.
    pub metadata: DataMetadata,
}

/// The automation-risk dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskDataFile {
    /// Risk figures per occupation.
    pub automation_risks: Vec<RiskInfo>,
    /// Dataset provenance.
    pub metadata: DataMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_stats_deserializes_with_defaults() {
        let json = r#"{
            "code": "CA",
            "name": "California",
            "overall": {"median": 84000.0, "mean": 112000.0},
            "cost_of_living_index": 134.5
        }"#;
        let stats: RegionStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.code, "CA");
        assert!(stats.by_age.is_empty());
        assert!(stats.top_10_percent.is_none());
        assert_eq!(stats.cost_of_living_index, 134.5);
    }

    #[test]
    fn test_occupation_stats_roundtrip() {
        let json = r#"{
            "soc_code": "15-1252",
            "title": "Software Developers",
            "category": "Computer and Mathematical",
            "national_median": 130160.0,
            "national_mean": 138110.0,
            "top_10_percent": 208620.0,
            "by_region": {
                "CA": {"median": 173780.0, "mean": 180520.0, "employment": 270830}
            },
            "age_distribution": {
                "25-34": {"median": 110000.0, "mean": 118000.0}
            }
        }"#;
        let stats: OccupationStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.by_region["CA"].employment, 270_830);
        assert_eq!(stats.age_distribution["25-34"].median, 110_000.0);
    }

    #[test]
    fn test_detailed_stats_optional_individual_mean() {
        let json = r#"{
            "median_household_income": 74580.0,
            "median_individual_income": 42220.0,
            "mean_household_income": 105555.0,
            "top_10_percent": 216000.0
        }"#;
        let stats: DetailedIncomeStats = serde_json::from_str(json).unwrap();
        assert!(stats.mean_individual_income.is_none());
    }
}

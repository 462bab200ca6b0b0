//! Dataset loading functionality.
//!
//! This module provides the [`DataStore`] type: the bundled
//! [`ReferenceDataStore`] implementation, loading per-country JSON dataset
//! files into immutable in-memory tables.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};

use super::types::{
    NationalDataFile, NationalStats, OccupationDataFile, OccupationStats, RegionDataFile,
    RegionStats, RiskDataFile, RiskInfo,
};
use super::ReferenceDataStore;

/// The loaded datasets for one country.
#[derive(Debug, Clone, Default)]
pub struct CountryDataSet {
    /// Occupation statistics, when loaded.
    pub occupations: Option<OccupationDataFile>,
    /// Region statistics, when loaded.
    pub regions: Option<RegionDataFile>,
    /// National statistics, when loaded.
    pub national: Option<NationalDataFile>,
    /// Automation-risk figures, when loaded.
    pub automation_risk: Option<RiskDataFile>,
}

/// Loads and provides access to the reference statistics datasets.
///
/// Each country's data lives in its own directory of JSON files. Countries
/// are loaded once, up front or on demand, and are immutable thereafter.
///
/// # Directory Structure
///
/// ```text
/// data/us/
/// ├── occupations.json         # Occupation statistics
/// ├── regions.json             # Region statistics and cost-of-living
/// ├── national_statistics.json # Country-level statistics
/// └── automation_risk.json     # Optional automation-risk figures
/// ```
///
/// # Example
///
/// ```no_run
/// use income_insights::store::{DataStore, ReferenceDataStore};
///
/// let mut store = DataStore::new();
/// store.load_country("./data/us", "us").unwrap();
///
/// let national = store.national_stats("us").unwrap();
/// println!("Median household income: {}", national.overall.median_household_income);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    countries: HashMap<String, CountryDataSet>,
}

impl DataStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads all dataset files for one country from a directory.
    ///
    /// The occupations, regions, and national-statistics files are required;
    /// the automation-risk file is optional and its absence is only logged.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing
    /// (`DataFileNotFound`) or contains invalid JSON (`DataParseError`).
    pub fn load_country<P: AsRef<Path>>(&mut self, path: P, country: &str) -> EngineResult<()> {
        let path = path.as_ref();

        let occupations: OccupationDataFile = Self::load_json(&path.join("occupations.json"))?;
        let regions: RegionDataFile = Self::load_json(&path.join("regions.json"))?;
        let national: NationalDataFile = Self::load_json(&path.join("national_statistics.json"))?;

        let risk_path = path.join("automation_risk.json");
        let automation_risk = if risk_path.exists() {
            Some(Self::load_json::<RiskDataFile>(&risk_path)?)
        } else {
            warn!(country, "no automation risk dataset; risk lookups will be empty");
            None
        };

        debug!(
            country,
            occupations = occupations.occupations.len(),
            regions = regions.regions.len(),
            "loaded reference datasets"
        );

        self.countries.insert(
            country.to_string(),
            CountryDataSet {
                occupations: Some(occupations),
                regions: Some(regions),
                national: Some(national),
                automation_risk,
            },
        );
        Ok(())
    }

    /// Inserts an already-built dataset for a country. Intended for tests
    /// and for callers that assemble data from another source.
    pub fn insert_country(&mut self, country: &str, data_set: CountryDataSet) {
        self.countries.insert(country.to_string(), data_set);
    }

    /// Whether all required datasets for a country are present.
    pub fn is_country_loaded(&self, country: &str) -> bool {
        self.countries.get(country).is_some_and(|data_set| {
            data_set.occupations.is_some() && data_set.regions.is_some() && data_set.national.is_some()
        })
    }

    /// Loads and parses a JSON file.
    fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::DataFileNotFound {
            path: path_str.clone(),
        })?;

        serde_json::from_str(&content).map_err(|e| EngineError::DataParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn country(&self, country: &str) -> Option<&CountryDataSet> {
        self.countries.get(country)
    }
}

impl ReferenceDataStore for DataStore {
    fn occupation_stats(&self, soc_code: &str, country: &str) -> Option<OccupationStats> {
        self.country(country)?
            .occupations
            .as_ref()?
            .occupations
            .iter()
            .find(|o| o.soc_code == soc_code)
            .cloned()
    }

    fn region_stats(&self, region_code: &str, country: &str) -> Option<RegionStats> {
        self.country(country)?
            .regions
            .as_ref()?
            .regions
            .iter()
            .find(|r| r.code == region_code)
            .cloned()
    }

    fn national_stats(&self, country: &str) -> Option<NationalStats> {
        Some(self.country(country)?.national.as_ref()?.national.clone())
    }

    fn all_occupations(&self, country: &str) -> Vec<OccupationStats> {
        let Some(file) = self.country(country).and_then(|c| c.occupations.as_ref()) else {
            return Vec::new();
        };

        // US aggregate SOC codes end in "0" and duplicate their members.
        if country == "us" {
            file.occupations
                .iter()
                .filter(|o| !o.soc_code.ends_with('0'))
                .cloned()
                .collect()
        } else {
            file.occupations.clone()
        }
    }

    fn all_regions(&self, country: &str) -> Vec<RegionStats> {
        self.country(country)
            .and_then(|c| c.regions.as_ref())
            .map(|file| file.regions.clone())
            .unwrap_or_default()
    }

    fn automation_risk(&self, soc_code: &str, country: &str) -> Option<RiskInfo> {
        self.country(country)?
            .automation_risk
            .as_ref()?
            .automation_risks
            .iter()
            .find(|r| r.soc_code == soc_code)
            .cloned()
    }

    fn data_source(&self, country: &str) -> Option<String> {
        Some(
            self.country(country)?
                .occupations
                .as_ref()?
                .metadata
                .source
                .clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::types::{DataMetadata, DetailedIncomeStats, IncomeStats};
    use std::collections::HashMap;

    fn metadata() -> DataMetadata {
        DataMetadata {
            version: "1.0".to_string(),
            last_updated: "2024-05-01".to_string(),
            source: "BLS OEWS, Census ACS".to_string(),
        }
    }

    fn occupation(soc_code: &str, median: f64) -> OccupationStats {
        OccupationStats {
            soc_code: soc_code.to_string(),
            title: format!("Occupation {soc_code}"),
            category: "Test".to_string(),
            national_median: median,
            national_mean: median * 1.1,
            top_10_percent: median * 1.9,
            by_region: HashMap::new(),
            age_distribution: HashMap::new(),
        }
    }

    fn store_with_occupations(country: &str, codes: &[&str]) -> DataStore {
        let mut store = DataStore::new();
        store.insert_country(
            country,
            CountryDataSet {
                occupations: Some(OccupationDataFile {
                    occupations: codes.iter().map(|c| occupation(c, 60_000.0)).collect(),
                    metadata: metadata(),
                }),
                regions: None,
                national: None,
                automation_risk: None,
            },
        );
        store
    }

    #[test]
    fn test_occupation_lookup_by_code() {
        let store = store_with_occupations("us", &["15-1252", "29-1141"]);
        assert!(store.occupation_stats("15-1252", "us").is_some());
        assert!(store.occupation_stats("15-9999", "us").is_none());
        assert!(store.occupation_stats("15-1252", "uk").is_none());
    }

    #[test]
    fn test_all_occupations_filters_us_aggregates() {
        let store = store_with_occupations("us", &["15-1252", "15-1250", "15-0000"]);
        let all = store.all_occupations("us");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].soc_code, "15-1252");
    }

    #[test]
    fn test_all_occupations_keeps_aggregates_elsewhere() {
        let store = store_with_occupations("de", &["1110", "2920"]);
        assert_eq!(store.all_occupations("de").len(), 2);
    }

    #[test]
    fn test_data_source_from_metadata() {
        let store = store_with_occupations("us", &["15-1252"]);
        assert_eq!(store.data_source("us").unwrap(), "BLS OEWS, Census ACS");
    }

    #[test]
    fn test_is_country_loaded_requires_all_three() {
        let mut store = store_with_occupations("us", &["15-1252"]);
        assert!(!store.is_country_loaded("us"));

        store.insert_country(
            "uk",
            CountryDataSet {
                occupations: Some(OccupationDataFile {
                    occupations: vec![],
                    metadata: metadata(),
                }),
                regions: Some(RegionDataFile {
                    regions: vec![],
                    metadata: metadata(),
                }),
                national: Some(NationalDataFile {
                    national: NationalStats {
                        overall: DetailedIncomeStats {
                            median_household_income: 34_000.0,
                            median_individual_income: 28_000.0,
                            mean_household_income: 41_000.0,
                            mean_individual_income: None,
                            top_10_percent: 66_000.0,
                        },
                        by_age: HashMap::new(),
                        by_gender: HashMap::new(),
                        by_marital_status: HashMap::new(),
                    },
                    metadata: metadata(),
                }),
                automation_risk: None,
            },
        );
        assert!(store.is_country_loaded("uk"));
    }

    #[test]
    fn test_load_country_missing_file_errors() {
        let mut store = DataStore::new();
        let result = store.load_country("/nonexistent/data/us", "us");
        assert!(matches!(result, Err(EngineError::DataFileNotFound { .. })));
    }

    #[test]
    fn test_age_range_key_default_method() {
        let store = DataStore::new();
        assert_eq!(store.age_range_key(30, "us"), "25-34");
        assert_eq!(store.age_range_key(25, "uk"), "22-29");
    }

    #[test]
    fn test_income_stats_copy_semantics() {
        let stats = IncomeStats {
            median: 1.0,
            mean: 2.0,
        };
        let copy = stats;
        assert_eq!(stats, copy);
    }
}

//! Reference-data access for the Income Insights Engine.
//!
//! The engine consumes all reference statistics through the read-only
//! [`ReferenceDataStore`] trait; [`DataStore`] is the bundled implementation
//! backed by per-country JSON dataset files.

mod data_store;
#[cfg(test)]
pub(crate) mod test_fixtures;
mod types;

pub use data_store::{CountryDataSet, DataStore};
pub use types::{
    DataMetadata, DetailedIncomeStats, IncomeStats, NationalDataFile, NationalStats,
    OccupationDataFile, OccupationStats, RegionDataFile, RegionOccupationStats, RegionStats,
    RiskDataFile, RiskInfo,
};

/// Read-only access to the loaded reference statistics, keyed by lowercase
/// country code.
///
/// Lookups return owned copies so that results can move freely into spawned
/// calculation tasks; the underlying tables are immutable after load.
pub trait ReferenceDataStore: Send + Sync {
    /// Statistics for one occupation, by classification code.
    fn occupation_stats(&self, soc_code: &str, country: &str) -> Option<OccupationStats>;

    /// Statistics for one region, by region code.
    fn region_stats(&self, region_code: &str, country: &str) -> Option<RegionStats>;

    /// Country-level statistics.
    fn national_stats(&self, country: &str) -> Option<NationalStats>;

    /// All occupations with data for the country.
    ///
    /// For the US, aggregate SOC codes ending in `0` are excluded so that
    /// parent groupings are not double-counted against their members.
    fn all_occupations(&self, country: &str) -> Vec<OccupationStats>;

    /// All regions with data for the country.
    fn all_regions(&self, country: &str) -> Vec<RegionStats>;

    /// Automation-risk figures for one occupation. Pass-through for the
    /// presentation layer; not used in any calculation.
    fn automation_risk(&self, soc_code: &str, country: &str) -> Option<RiskInfo>;

    /// Attribution string for the country's datasets.
    fn data_source(&self, country: &str) -> Option<String>;

    /// The dataset age-bucket key an age falls into for a country.
    fn age_range_key(&self, age: u32, country: &str) -> String {
        age_band_key(age, country)
    }
}

/// Maps an age to the dataset bucket key used by a country's statistics.
///
/// Three bucket schemes are in use: the UK's, the Australian/New Zealand
/// one, and a generic scheme shared by the US and every unrecognized
/// country.
pub fn age_band_key(age: u32, country: &str) -> String {
    let key = match country {
        "uk" => match age {
            18..=21 => "18-21",
            22..=29 => "22-29",
            30..=39 => "30-39",
            40..=49 => "40-49",
            50..=59 => "50-59",
            _ => "60+",
        },
        "au" | "nz" => match age {
            15..=24 => "15-24",
            25..=34 => "25-34",
            35..=44 => "35-44",
            45..=54 => "45-54",
            55..=64 => "55-64",
            _ => "65+",
        },
        _ => match age {
            16..=19 => "16-19",
            20..=24 => "20-24",
            25..=34 => "25-34",
            35..=44 => "35-44",
            45..=54 => "45-54",
            55..=64 => "55-64",
            _ => "65+",
        },
    };
    key.to_string()
}

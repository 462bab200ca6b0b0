//! Shared in-memory dataset fixtures for unit tests.

use std::collections::HashMap;

use crate::models::{Gender, MaritalStatus, Occupation, Region, UserProfile};

use super::data_store::{CountryDataSet, DataStore};
use super::types::{
    DataMetadata, DetailedIncomeStats, IncomeStats, NationalDataFile, NationalStats,
    OccupationDataFile, OccupationStats, RegionDataFile, RegionOccupationStats, RegionStats,
    RiskDataFile, RiskInfo,
};

pub(crate) fn stats(median: f64, mean: f64) -> IncomeStats {
    IncomeStats { median, mean }
}

fn metadata() -> DataMetadata {
    DataMetadata {
        version: "2024.1".to_string(),
        last_updated: "2024-05-01".to_string(),
        source: "BLS OEWS, Census ACS, MERIC Cost of Living (2024)".to_string(),
    }
}

fn california() -> RegionStats {
    RegionStats {
        code: "CA".to_string(),
        name: "California".to_string(),
        overall: stats(84_000.0, 112_000.0),
        top_10_percent: Some(210_000.0),
        sample_size: Some(155_000),
        by_age: HashMap::from([("25-34".to_string(), stats(78_000.0, 96_000.0))]),
        by_gender: HashMap::from([
            ("Male".to_string(), stats(88_000.0, 115_000.0)),
            ("Female".to_string(), stats(72_000.0, 95_000.0)),
        ]),
        by_marital_status: HashMap::from([("Married".to_string(), stats(95_000.0, 125_000.0))]),
        cost_of_living_index: 134.5,
    }
}

fn texas() -> RegionStats {
    RegionStats {
        code: "TX".to_string(),
        name: "Texas".to_string(),
        overall: stats(64_000.0, 82_000.0),
        top_10_percent: None,
        sample_size: None,
        by_age: HashMap::new(),
        // Lowercase keys, as some datasets ship them.
        by_gender: HashMap::from([
            ("male".to_string(), stats(70_000.0, 86_000.0)),
            ("female".to_string(), stats(58_000.0, 74_000.0)),
        ]),
        by_marital_status: HashMap::new(),
        cost_of_living_index: 92.0,
    }
}

fn washington() -> RegionStats {
    RegionStats {
        code: "WA".to_string(),
        name: "Washington".to_string(),
        overall: stats(72_000.0, 95_000.0),
        top_10_percent: None,
        sample_size: None,
        by_age: HashMap::new(),
        by_gender: HashMap::new(),
        by_marital_status: HashMap::new(),
        cost_of_living_index: 108.0,
    }
}

fn occupation(
    soc_code: &str,
    title: &str,
    category: &str,
    median: f64,
    mean: f64,
    top10: f64,
) -> OccupationStats {
    OccupationStats {
        soc_code: soc_code.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        national_median: median,
        national_mean: mean,
        top_10_percent: top10,
        by_region: HashMap::new(),
        age_distribution: HashMap::new(),
    }
}

fn software_developers() -> OccupationStats {
    let mut occ = occupation(
        "15-1252",
        "Software Developers",
        "Computer and Mathematical",
        130_160.0,
        138_110.0,
        208_620.0,
    );
    occ.by_region = HashMap::from([
        (
            "CA".to_string(),
            RegionOccupationStats {
                median: 173_780.0,
                mean: 180_520.0,
                employment: 270_830,
            },
        ),
        (
            "WA".to_string(),
            RegionOccupationStats {
                median: 158_000.0,
                mean: 164_000.0,
                employment: 95_000,
            },
        ),
    ]);
    occ.age_distribution = HashMap::from([
        ("20-24".to_string(), stats(65_000.0, 70_000.0)),
        ("25-34".to_string(), stats(110_000.0, 118_000.0)),
        ("35-44".to_string(), stats(135_000.0, 142_000.0)),
        ("45-54".to_string(), stats(142_000.0, 150_000.0)),
    ]);
    occ
}

/// A US dataset with enough shape to exercise every fallback path.
pub(crate) fn fixture_store() -> DataStore {
    let occupations = vec![
        software_developers(),
        occupation(
            "15-1251",
            "Computer Programmers",
            "Computer and Mathematical",
            97_800.0,
            107_610.0,
            167_230.0,
        ),
        occupation(
            "15-1299",
            "Computer Occupations, All Other",
            "Computer and Mathematical",
            108_000.0,
            115_000.0,
            180_000.0,
        ),
        occupation(
            "29-1141",
            "Registered Nurses",
            "Healthcare Practitioners",
            86_070.0,
            94_480.0,
            132_680.0,
        ),
        // Aggregate grouping; excluded from all-occupation listings.
        occupation(
            "15-1250",
            "Software and Web Developers",
            "Computer and Mathematical",
            120_000.0,
            128_000.0,
            200_000.0,
        ),
    ];

    let national = NationalStats {
        overall: DetailedIncomeStats {
            median_household_income: 74_580.0,
            median_individual_income: 42_220.0,
            mean_household_income: 105_555.0,
            mean_individual_income: None,
            top_10_percent: 216_000.0,
        },
        by_age: HashMap::from([("25-34".to_string(), stats(52_000.0, 61_000.0))]),
        by_gender: HashMap::new(),
        by_marital_status: HashMap::from([("Married".to_string(), stats(81_000.0, 101_000.0))]),
    };

    let mut store = DataStore::new();
    store.insert_country(
        "us",
        CountryDataSet {
            occupations: Some(OccupationDataFile {
                occupations,
                metadata: metadata(),
            }),
            regions: Some(RegionDataFile {
                regions: vec![california(), texas(), washington()],
                metadata: metadata(),
            }),
            national: Some(NationalDataFile {
                national,
                metadata: metadata(),
            }),
            automation_risk: Some(RiskDataFile {
                automation_risks: vec![RiskInfo {
                    soc_code: "15-1252".to_string(),
                    title: "Software Developers".to_string(),
                    category: "Computer and Mathematical".to_string(),
                    ai_risk: 0.35,
                    robotics_risk: 0.10,
                    overall_risk: 0.30,
                }],
                metadata: metadata(),
            }),
        },
    );
    store
}

/// A single 30-year-old software developer in California.
pub(crate) fn fixture_profile() -> UserProfile {
    UserProfile {
        country_code: "us".to_string(),
        region: Region {
            code: "CA".to_string(),
            name: "California".to_string(),
            country_code: "us".to_string(),
        },
        age: 30,
        annual_income: 130_160.0,
        household_income: 0.0,
        dependents: 0,
        gender: Gender::Female,
        marital_status: MaritalStatus::Single,
        occupation: Occupation {
            soc_code: "15-1252".to_string(),
            title: "Software Developers".to_string(),
            category: "Computer and Mathematical".to_string(),
            country_code: "us".to_string(),
        },
    }
}

//! Regional gender pay comparison.

use crate::error::{EngineError, EngineResult};
use crate::models::{GenderComparison, UserProfile};
use crate::store::{IncomeStats, ReferenceDataStore, RegionStats};

/// Looks up a gender's stats tolerating both key capitalizations
/// ("Male"/"male"), since datasets are inconsistent about it.
fn gender_stats(region: &RegionStats, key: &str) -> Option<IncomeStats> {
    region
        .by_gender
        .get(key)
        .or_else(|| region.by_gender.get(&key.to_lowercase()))
        .copied()
}

/// Compares male and female median incomes in the user's region.
///
/// The pay gap is `(male − female) / male × 100` and is absent when either
/// median is missing or the male median is zero.
pub fn gender_comparison(
    profile: &UserProfile,
    store: &dyn ReferenceDataStore,
) -> EngineResult<GenderComparison> {
    let region = store
        .region_stats(&profile.region.code, &profile.country_code)
        .ok_or_else(|| EngineError::DataUnavailable {
            message: format!("region income data not available for {}", profile.region.code),
        })?;

    let male_median = gender_stats(&region, "Male").map(|s| s.median);
    let female_median = gender_stats(&region, "Female").map(|s| s.median);

    let pay_gap = match (male_median, female_median) {
        (Some(male), Some(female)) if male > 0.0 => Some((male - female) / male * 100.0),
        _ => None,
    };

    Ok(GenderComparison {
        category: region.name,
        male_median,
        female_median,
        user_gender: profile.gender,
        user_income: profile.comparison_income(),
        pay_gap,
    })
}

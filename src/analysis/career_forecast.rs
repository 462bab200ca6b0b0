//! Career income forecast from an occupation's age-bucket statistics.

use crate::error::{EngineError, EngineResult};
use crate::models::{AgeGroupIncome, CareerForecast, UserProfile};
use crate::store::ReferenceDataStore;

/// Builds the expected income trajectory over the occupation's age buckets.
///
/// Buckets are ordered ascending by their label; the peak is the bucket
/// with the highest median. Fewer than two buckets cannot describe a
/// trajectory and leave the metric unavailable.
pub fn career_forecast(
    profile: &UserProfile,
    store: &dyn ReferenceDataStore,
) -> EngineResult<CareerForecast> {
    let occupation = store
        .occupation_stats(&profile.occupation.soc_code, &profile.country_code)
        .ok_or_else(|| EngineError::DataUnavailable {
            message: format!(
                "occupation data not available for {}",
                profile.occupation.soc_code
            ),
        })?;

    let mut age_groups: Vec<AgeGroupIncome> = occupation
        .age_distribution
        .iter()
        .map(|(age_range, stats)| AgeGroupIncome {
            age_range: age_range.clone(),
            median: stats.median,
            mean: stats.mean,
        })
        .collect();
    age_groups.sort_by(|a, b| a.age_range.cmp(&b.age_range));

    if age_groups.len() < 2 {
        return Err(EngineError::DataUnavailable {
            message: format!(
                "not enough age buckets to forecast {}",
                profile.occupation.soc_code
            ),
        });
    }

    let peak = age_groups
        .iter()
        .max_by(|a, b| a.median.total_cmp(&b.median))
        .cloned()
        .ok_or_else(|| EngineError::DataUnavailable {
            message: "empty age distribution".to_string(),
        })?;

    Ok(CareerForecast {
        current_age: profile.age,
        user_income: profile.annual_income,
        age_groups,
        peak_age: peak.age_range,
        peak_income: peak.median,
    })
}

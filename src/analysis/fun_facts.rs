//! Headline statistics about the user's income and occupation.

use crate::error::{EngineError, EngineResult};
use crate::models::{FunFacts, UserProfile};
use crate::store::ReferenceDataStore;

use super::comparisons::national_individual_stats;
use super::percentile::estimate_percentile;

/// Computes assorted headline numbers: the user's national percentile,
/// employment counts for the occupation, and the occupation's pay rank
/// among all occupations.
pub fn fun_facts(profile: &UserProfile, store: &dyn ReferenceDataStore) -> EngineResult<FunFacts> {
    let occupation = store
        .occupation_stats(&profile.occupation.soc_code, &profile.country_code)
        .ok_or_else(|| EngineError::DataUnavailable {
            message: format!(
                "occupation data not available for {}",
                profile.occupation.soc_code
            ),
        })?;
    let national = store.national_stats(&profile.country_code).ok_or_else(|| {
        EngineError::DataUnavailable {
            message: format!("national statistics not available for {}", profile.country_code),
        }
    })?;

    let individual = national_individual_stats(&national.overall);
    let national_rank_percentile =
        estimate_percentile(profile.annual_income, individual.median, individual.mean);

    let occupation_employment = occupation.by_region.values().map(|s| s.employment).sum();
    let region_employment = occupation
        .by_region
        .get(&profile.region.code)
        .map(|s| s.employment);

    let mut all = store.all_occupations(&profile.country_code);
    all.sort_by(|a, b| b.national_median.total_cmp(&a.national_median));
    let occupation_rank = all
        .iter()
        .position(|o| o.soc_code == occupation.soc_code)
        .map(|index| index + 1);

    Ok(FunFacts {
        national_rank_percentile,
        occupation_employment,
        region_employment,
        occupation_rank,
        total_occupations: all.len(),
    })
}

//! Similar-occupation listing.

use crate::error::{EngineError, EngineResult};
use crate::models::{SimilarOccupation, UserProfile};
use crate::store::ReferenceDataStore;

const SIMILAR_OCCUPATION_COUNT: usize = 5;

/// Lists the best-paying occupations sharing the user's category.
///
/// The user's own occupation is excluded; each entry carries its median's
/// percentage difference from the user's occupation median. Sorted by
/// median descending, top five.
pub fn similar_occupations(
    profile: &UserProfile,
    store: &dyn ReferenceDataStore,
) -> EngineResult<Vec<SimilarOccupation>> {
    let current = store
        .occupation_stats(&profile.occupation.soc_code, &profile.country_code)
        .ok_or_else(|| EngineError::DataUnavailable {
            message: format!(
                "occupation data not available for {}",
                profile.occupation.soc_code
            ),
        })?;

    let mut similar: Vec<SimilarOccupation> = store
        .all_occupations(&profile.country_code)
        .into_iter()
        .filter(|o| o.category == current.category && o.soc_code != current.soc_code)
        .map(|o| SimilarOccupation {
            percentage_difference: (o.national_median - current.national_median)
                / current.national_median
                * 100.0,
            title: o.title,
            soc_code: o.soc_code,
            median: o.national_median,
        })
        .collect();

    similar.sort_by(|a, b| b.median.total_cmp(&a.median));
    similar.truncate(SIMILAR_OCCUPATION_COUNT);
    Ok(similar)
}

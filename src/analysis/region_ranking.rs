//! Region ranking for an occupation.

use crate::error::{EngineError, EngineResult};
use crate::models::{RegionIncomeInfo, RegionRanking, UserProfile};
use crate::store::ReferenceDataStore;

const TOP_REGION_COUNT: usize = 5;

/// Ranks every region with data for the user's occupation by median income.
///
/// Returns the top five regions with 1-based ranks, plus the user's own
/// region's rank (absent when the region has no data for the occupation).
pub fn region_ranking(
    profile: &UserProfile,
    store: &dyn ReferenceDataStore,
) -> EngineResult<RegionRanking> {
    let occupation = store
        .occupation_stats(&profile.occupation.soc_code, &profile.country_code)
        .ok_or_else(|| EngineError::DataUnavailable {
            message: format!(
                "occupation data not available for {}",
                profile.occupation.soc_code
            ),
        })?;

    let mut region_incomes: Vec<(String, f64)> = occupation
        .by_region
        .iter()
        .map(|(code, stats)| (code.clone(), stats.median))
        .collect();
    region_incomes.sort_by(|a, b| b.1.total_cmp(&a.1));

    let top_regions = region_incomes
        .iter()
        .take(TOP_REGION_COUNT)
        .enumerate()
        .map(|(index, (code, median))| RegionIncomeInfo {
            region_name: store
                .region_stats(code, &profile.country_code)
                .map(|r| r.name)
                .unwrap_or_else(|| code.clone()),
            region_code: code.clone(),
            median: *median,
            rank: index + 1,
        })
        .collect();

    let user_region_rank = region_incomes
        .iter()
        .position(|(code, _)| *code == profile.region.code)
        .map(|index| index + 1);

    Ok(RegionRanking {
        occupation: occupation.title,
        top_regions,
        user_region_rank,
        user_region: profile.region.name.clone(),
    })
}

//! Cost-of-living-adjusted purchasing power.

use crate::error::{EngineError, EngineResult};
use crate::models::{PurchasingPower, UserProfile};
use crate::store::ReferenceDataStore;

use super::percentile::estimate_percentile;

/// Adjusts the user's income by their region's cost-of-living index and
/// re-ranks it nationally.
///
/// `adjusted = income × 100 / col`; the savings impact is
/// `income × (100 − col) / 100` (positive in cheaper-than-average regions,
/// negative in more expensive ones). Requires a positive index.
pub fn purchasing_power(
    profile: &UserProfile,
    store: &dyn ReferenceDataStore,
) -> EngineResult<PurchasingPower> {
    let region = store
        .region_stats(&profile.region.code, &profile.country_code)
        .ok_or_else(|| EngineError::DataUnavailable {
            message: format!("region income data not available for {}", profile.region.code),
        })?;
    let national = store.national_stats(&profile.country_code).ok_or_else(|| {
        EngineError::DataUnavailable {
            message: format!("national statistics not available for {}", profile.country_code),
        }
    })?;

    let col_index = region.cost_of_living_index;
    if col_index <= 0.0 {
        return Err(EngineError::DataUnavailable {
            message: format!("invalid cost-of-living index for {}", region.code),
        });
    }

    let actual_income = profile.comparison_income();
    let adjusted_income = actual_income * (100.0 / col_index);

    let national_median = national.overall.median_individual_income;
    let national_median_adjusted = national_median * (100.0 / col_index);

    let adjusted_percentile = estimate_percentile(
        adjusted_income,
        national_median,
        national.overall.mean_household_income,
    );

    let savings_impact = actual_income * ((100.0 - col_index) / 100.0);

    Ok(PurchasingPower {
        actual_income,
        adjusted_income,
        cost_of_living_index: col_index,
        region_name: region.name,
        national_median_adjusted,
        adjusted_percentile,
        savings_impact,
    })
}

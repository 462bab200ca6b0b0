//! Path-to-top-10% calculation.
//!
//! Computed twice per snapshot: once against the user's region and once
//! against their occupation.

use crate::error::{EngineError, EngineResult};
use crate::models::{PathToTop10, UserProfile};
use crate::store::{IncomeStats, ReferenceDataStore};

use super::comparisons::TOP10_MEAN_RATIO;
use super::resolve::{resolve_with_fallback, Resolver};

fn build(current_income: f64, threshold: f64, category: String) -> PathToTop10 {
    let gap = (threshold - current_income).max(0.0);
    let gap_percentage = if current_income > 0.0 {
        gap / current_income * 100.0
    } else {
        100.0
    };

    PathToTop10 {
        current_income,
        top10_threshold: threshold,
        category,
        gap_amount: gap,
        gap_percentage,
        is_already_top10: current_income >= threshold,
    }
}

/// How far the user is from their region's top decile.
///
/// The threshold is the region's dataset top-10% figure when present, else
/// 1.8 times the (marital-status-aware) mean.
pub fn path_to_top10_region(
    profile: &UserProfile,
    store: &dyn ReferenceDataStore,
) -> EngineResult<PathToTop10> {
    let region = store
        .region_stats(&profile.region.code, &profile.country_code)
        .ok_or_else(|| EngineError::DataUnavailable {
            message: format!("region income data not available for {}", profile.region.code),
        })?;

    let marital_key = profile.marital_status.as_key();
    let resolvers: Vec<Resolver<'_, IncomeStats>> =
        vec![Box::new(|| region.by_marital_status.get(marital_key).copied())];
    let stats = resolve_with_fallback(resolvers, || region.overall);

    let threshold = region.top_10_percent.unwrap_or(stats.mean * TOP10_MEAN_RATIO);

    Ok(build(profile.comparison_income(), threshold, region.name))
}

/// How far the user is from their occupation's top decile.
pub fn path_to_top10_occupation(
    profile: &UserProfile,
    store: &dyn ReferenceDataStore,
) -> EngineResult<PathToTop10> {
    let occupation = store
        .occupation_stats(&profile.occupation.soc_code, &profile.country_code)
        .ok_or_else(|| EngineError::DataUnavailable {
            message: format!(
                "occupation data not available for {}",
                profile.occupation.soc_code
            ),
        })?;

    Ok(build(
        profile.annual_income,
        occupation.top_10_percent,
        occupation.title,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_fixtures::{fixture_profile, fixture_store};

    #[test]
    fn test_region_path_uses_dataset_threshold() {
        let store = fixture_store();
        let path = path_to_top10_region(&fixture_profile(), &store).unwrap();
        assert_eq!(path.top10_threshold, 210_000.0);
        assert_eq!(path.category, "California");
        assert!(!path.is_already_top10);
        assert!((path.gap_amount - (210_000.0 - 130_160.0)).abs() < 1e-9);
    }

    #[test]
    fn test_region_path_mean_ratio_fallback() {
        let store = fixture_store();
        let mut profile = fixture_profile();
        profile.region.code = "TX".to_string(); // no dataset top-10% figure
        let path = path_to_top10_region(&profile, &store).unwrap();
        assert!((path.top10_threshold - 82_000.0 * 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_occupation_path_already_top10_has_zero_gap() {
        let store = fixture_store();
        let mut profile = fixture_profile();
        profile.annual_income = 250_000.0; // above the 208,620 threshold
        let path = path_to_top10_occupation(&profile, &store).unwrap();
        assert!(path.is_already_top10);
        assert_eq!(path.gap_amount, 0.0);
        assert_eq!(path.progress_percentage(), 100.0);
    }

    #[test]
    fn test_occupation_path_at_threshold_counts_as_top10() {
        let store = fixture_store();
        let mut profile = fixture_profile();
        profile.annual_income = 208_620.0;
        let path = path_to_top10_occupation(&profile, &store).unwrap();
        assert!(path.is_already_top10);
        assert_eq!(path.gap_amount, 0.0);
    }

    #[test]
    fn test_zero_income_gap_percentage_is_100() {
        let store = fixture_store();
        let mut profile = fixture_profile();
        profile.annual_income = 0.0;
        let path = path_to_top10_occupation(&profile, &store).unwrap();
        assert_eq!(path.gap_percentage, 100.0);
    }

    #[test]
    fn test_missing_occupation_is_data_unavailable() {
        let store = fixture_store();
        let mut profile = fixture_profile();
        profile.occupation.soc_code = "99-9999".to_string();
        assert!(matches!(
            path_to_top10_occupation(&profile, &store),
            Err(EngineError::DataUnavailable { .. })
        ));
    }
}

//! The four reference-population comparison builders.
//!
//! Each builder resolves the most specific statistics available for its
//! population through an explicit fallback chain, estimates the user's
//! percentile, and produces an immutable [`ComparisonResult`]. A missing
//! backing dataset is a [`EngineError::DataUnavailable`]: the four
//! comparisons are the engine's core promise, and none of them may be
//! silently substituted.

use crate::error::{EngineError, EngineResult};
use crate::models::{ComparisonCategory, ComparisonResult, UserProfile};
use crate::store::{DetailedIncomeStats, IncomeStats, ReferenceDataStore};

use super::percentile::estimate_percentile;
use super::resolve::{resolve_with_fallback, Resolver};

/// Top-decile approximation used whenever a dataset carries no true
/// top-10% figure: 1.8 times the population mean.
pub const TOP10_MEAN_RATIO: f64 = 1.8;

/// Household means are converted to individual level by this divisor when
/// the dataset's household and individual medians diverge.
const HOUSEHOLD_TO_INDIVIDUAL_MEAN: f64 = 2.5;

/// Household and individual medians are considered divergent when the
/// household figure exceeds the individual one by more than 20%.
const MEDIAN_DIVERGENCE_RATIO: f64 = 1.2;

/// Peer sample sizes assume one fifth of a region's occupation employment
/// falls in a similar age range.
const PEER_SAMPLE_DIVISOR: u64 = 5;

fn percentage_difference(income: f64, median: f64) -> f64 {
    (income - median) / median * 100.0
}

/// Estimates the individual-level mean from national overall statistics.
///
/// Uses the individual mean when the dataset carries one. Otherwise the
/// household mean stands in: divided by a fixed conversion ratio when the
/// household and individual medians diverge significantly, or taken as
/// already individual-level when they are nearly equal.
fn individual_mean(overall: &DetailedIncomeStats) -> f64 {
    if let Some(mean) = overall.mean_individual_income {
        mean
    } else if overall.median_household_income
        > overall.median_individual_income * MEDIAN_DIVERGENCE_RATIO
    {
        overall.mean_household_income / HOUSEHOLD_TO_INDIVIDUAL_MEAN
    } else {
        overall.mean_household_income
    }
}

/// National overall statistics reduced to individual-level median/mean.
pub(crate) fn national_individual_stats(overall: &DetailedIncomeStats) -> IncomeStats {
    IncomeStats {
        median: overall.median_individual_income,
        mean: individual_mean(overall),
    }
}

/// Compares the user against all earners in their region.
///
/// Resolution priority: marital-status-specific stats, then the region's
/// overall stats. (There is deliberately no age fallback here, unlike the
/// national comparison.)
pub fn region_comparison(
    profile: &UserProfile,
    store: &dyn ReferenceDataStore,
) -> EngineResult<ComparisonResult> {
    let region = store
        .region_stats(&profile.region.code, &profile.country_code)
        .ok_or_else(|| EngineError::DataUnavailable {
            message: format!("region income data not available for {}", profile.region.code),
        })?;

    let marital_key = profile.marital_status.as_key();
    let resolvers: Vec<Resolver<'_, IncomeStats>> =
        vec![Box::new(|| region.by_marital_status.get(marital_key).copied())];
    let stats = resolve_with_fallback(resolvers, || region.overall);

    let income = profile.comparison_income();

    Ok(ComparisonResult {
        category: ComparisonCategory::Region {
            name: region.name.clone(),
        },
        user_income: income,
        median_income: stats.median,
        mean_income: stats.mean,
        top10_threshold: region.top_10_percent.unwrap_or(stats.mean * TOP10_MEAN_RATIO),
        percentile: estimate_percentile(income, stats.median, stats.mean),
        percentage_difference: percentage_difference(income, stats.median),
        sample_size: region.sample_size,
        per_capita_income: Some(profile.per_capita_income()),
        household_size: Some(profile.household_size()),
    })
}

/// Compares the user against all earners in the country.
///
/// Resolution priority: marital-status-specific stats, then the age-bucket
/// stats, then the overall individual-level stats (with the household mean
/// converted when needed).
pub fn national_comparison(
    profile: &UserProfile,
    store: &dyn ReferenceDataStore,
) -> EngineResult<ComparisonResult> {
    let national = store.national_stats(&profile.country_code).ok_or_else(|| {
        EngineError::DataUnavailable {
            message: format!("national statistics not available for {}", profile.country_code),
        }
    })?;

    let marital_key = profile.marital_status.as_key();
    let age_key = store.age_range_key(profile.age, &profile.country_code);
    let resolvers: Vec<Resolver<'_, IncomeStats>> = vec![
        Box::new(|| national.by_marital_status.get(marital_key).copied()),
        Box::new(|| national.by_age.get(&age_key).copied()),
    ];
    let stats = resolve_with_fallback(resolvers, || {
        national_individual_stats(&national.overall)
    });

    let income = profile.comparison_income();

    Ok(ComparisonResult {
        category: ComparisonCategory::National,
        user_income: income,
        median_income: stats.median,
        mean_income: stats.mean,
        top10_threshold: national.overall.top_10_percent,
        percentile: estimate_percentile(income, stats.median, stats.mean),
        percentage_difference: percentage_difference(income, stats.median),
        sample_size: None,
        per_capita_income: Some(profile.per_capita_income()),
        household_size: Some(profile.household_size()),
    })
}

/// Compares the user against everyone in their occupation nationwide.
pub fn occupation_comparison(
    profile: &UserProfile,
    store: &dyn ReferenceDataStore,
) -> EngineResult<ComparisonResult> {
    let occupation = store
        .occupation_stats(&profile.occupation.soc_code, &profile.country_code)
        .ok_or_else(|| EngineError::DataUnavailable {
            message: format!(
                "occupation data not available for {}",
                profile.occupation.soc_code
            ),
        })?;

    let income = profile.annual_income;

    Ok(ComparisonResult {
        category: ComparisonCategory::Occupation {
            title: occupation.title.clone(),
        },
        user_income: income,
        median_income: occupation.national_median,
        mean_income: occupation.national_mean,
        top10_threshold: occupation.top_10_percent,
        percentile: estimate_percentile(income, occupation.national_median, occupation.national_mean),
        percentage_difference: percentage_difference(income, occupation.national_median),
        sample_size: None,
        per_capita_income: None,
        household_size: None,
    })
}

/// Compares the user against occupation peers: same occupation, similar
/// age, same region where data permits.
///
/// Resolution priority: region-specific occupation stats, then the
/// occupation's age-bucket stats, then its flat national stats.
pub fn peer_comparison(
    profile: &UserProfile,
    store: &dyn ReferenceDataStore,
) -> EngineResult<ComparisonResult> {
    let occupation = store
        .occupation_stats(&profile.occupation.soc_code, &profile.country_code)
        .ok_or_else(|| EngineError::DataUnavailable {
            message: format!(
                "occupation data not available for {}",
                profile.occupation.soc_code
            ),
        })?;

    let region_stats = occupation.by_region.get(&profile.region.code).copied();
    let age_key = store.age_range_key(profile.age, &profile.country_code);

    let resolvers: Vec<Resolver<'_, IncomeStats>> = vec![
        Box::new(|| {
            region_stats.map(|s| IncomeStats {
                median: s.median,
                mean: s.mean,
            })
        }),
        Box::new(|| occupation.age_distribution.get(&age_key).copied()),
    ];
    let stats = resolve_with_fallback(resolvers, || IncomeStats {
        median: occupation.national_median,
        mean: occupation.national_mean,
    });

    let income = profile.annual_income;

    Ok(ComparisonResult {
        category: ComparisonCategory::Peers,
        user_income: income,
        median_income: stats.median,
        mean_income: stats.mean,
        top10_threshold: stats.mean * TOP10_MEAN_RATIO,
        percentile: estimate_percentile(income, stats.median, stats.mean),
        percentage_difference: percentage_difference(income, stats.median),
        sample_size: region_stats.map(|s| s.employment / PEER_SAMPLE_DIVISOR),
        per_capita_income: None,
        household_size: None,
    })
}

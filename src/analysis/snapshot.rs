//! Snapshot orchestration.
//!
//! [`StatisticsEngine`] fans the four mandatory comparisons, the tax
//! computation, and the seven optional derived metrics out as independent
//! tokio tasks over the shared read-only store, then joins them into one
//! immutable [`StatisticsSnapshot`]. A mandatory task failure aborts the
//! in-flight siblings and surfaces a single error; optional failures are
//! recorded as absent fields.

use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{StatisticsSnapshot, UserProfile};
use crate::store::ReferenceDataStore;
use crate::tax::{FilingStatus, TaxEngine};

use super::career_forecast::career_forecast;
use super::comparisons::{
    national_comparison, occupation_comparison, peer_comparison, region_comparison,
};
use super::fun_facts::fun_facts;
use super::gender_comparison::gender_comparison;
use super::path_to_top10::{path_to_top10_occupation, path_to_top10_region};
use super::purchasing_power::purchasing_power;
use super::region_ranking::region_ranking;
use super::similar_occupations::similar_occupations;

/// Attribution used when the store carries no dataset metadata.
const DEFAULT_DATA_SOURCE: &str =
    "BLS OEWS, Census ACS, MERIC Cost of Living (2024), AI/Automation Risk Data";

/// Builds statistics snapshots over a reference-data store.
///
/// All computation is pure over the immutable store, so the engine is
/// cheaply cloneable and safe to share across tasks.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use income_insights::analysis::StatisticsEngine;
/// use income_insights::models::UserProfile;
/// use income_insights::store::DataStore;
///
/// # async fn example() {
/// let mut store = DataStore::new();
/// store.load_country("./data/us", "us").unwrap();
///
/// let engine = StatisticsEngine::new(Arc::new(store));
/// let snapshot = engine.build_snapshot(&UserProfile::default()).await.unwrap();
/// println!("overall percentile: {:.1}", snapshot.overall_percentile());
/// # }
/// ```
pub struct StatisticsEngine<S> {
    store: Arc<S>,
    tax: Arc<TaxEngine>,
}

impl<S> Clone for StatisticsEngine<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            tax: Arc::clone(&self.tax),
        }
    }
}

impl<S: ReferenceDataStore + 'static> StatisticsEngine<S> {
    /// Creates an engine over a store, with all eight tax jurisdictions
    /// registered.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_tax_engine(store, TaxEngine::default())
    }

    /// Creates an engine with a custom tax engine (for example with extra
    /// jurisdictions registered).
    pub fn with_tax_engine(store: Arc<S>, tax: TaxEngine) -> Self {
        Self {
            store,
            tax: Arc::new(tax),
        }
    }

    /// Builds the complete statistics snapshot for a profile.
    ///
    /// The four comparisons, the tax computation, and the derived metrics
    /// run as concurrent tasks over the shared store. When any of the four
    /// mandatory comparisons fails, the in-flight siblings are aborted and
    /// the failure propagates; a failed derived metric only leaves its
    /// field absent. Callers needing a deadline can wrap the returned
    /// future in `tokio::time::timeout` — cancellation is honored at the
    /// await points between task dispatch and join.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidProfile`] when the profile violates its
    /// invariants, [`EngineError::DataUnavailable`] when a mandatory
    /// lookup's dataset is missing.
    pub async fn build_snapshot(&self, profile: &UserProfile) -> EngineResult<StatisticsSnapshot> {
        profile.validate()?;
        debug!(
            country = %profile.country_code,
            region = %profile.region.code,
            occupation = %profile.occupation.soc_code,
            "building statistics snapshot"
        );

        // Mandatory comparisons.
        let region_task = self.spawn(profile, region_comparison);
        let national_task = self.spawn(profile, national_comparison);
        let occupation_task = self.spawn(profile, occupation_comparison);
        let peer_task = self.spawn(profile, peer_comparison);

        // Tax breakdown (never fails; unknown jurisdictions degrade).
        let tax_task = {
            let tax = Arc::clone(&self.tax);
            let profile = profile.clone();
            tokio::spawn(async move {
                tax.compute_tax(
                    profile.effective_income(),
                    &profile.country_code,
                    &profile.region.code,
                    FilingStatus::from(profile.marital_status),
                )
            })
        };

        // Optional derived metrics.
        let path_region_task = self.spawn(profile, path_to_top10_region);
        let path_occupation_task = self.spawn(profile, path_to_top10_occupation);
        let career_task = self.spawn(profile, career_forecast);
        let gender_task = self.spawn(profile, gender_comparison);
        let ranking_task = self.spawn(profile, region_ranking);
        let similar_task = self.spawn(profile, similar_occupations);
        let facts_task = self.spawn(profile, fun_facts);
        let power_task = self.spawn(profile, purchasing_power);

        let sibling_aborts = [
            tax_task.abort_handle(),
            path_region_task.abort_handle(),
            path_occupation_task.abort_handle(),
            career_task.abort_handle(),
            gender_task.abort_handle(),
            ranking_task.abort_handle(),
            similar_task.abort_handle(),
            facts_task.abort_handle(),
            power_task.abort_handle(),
        ];

        let mandatory = tokio::try_join!(
            flatten(region_task),
            flatten(national_task),
            flatten(occupation_task),
            flatten(peer_task),
        );
        let (region, national, occupation, peer) = match mandatory {
            Ok(comparisons) => comparisons,
            Err(err) => {
                warn!(error = %err, "mandatory comparison failed; aborting snapshot");
                for handle in sibling_aborts {
                    handle.abort();
                }
                return Err(err);
            }
        };

        let after_tax = tax_task.await.map_err(|err| EngineError::Internal {
            message: err.to_string(),
        })?;

        let data_source = self
            .store
            .data_source(&profile.country_code)
            .unwrap_or_else(|| DEFAULT_DATA_SOURCE.to_string());

        Ok(StatisticsSnapshot {
            id: Uuid::new_v4(),
            profile: profile.clone(),
            region_comparison: region,
            national_comparison: national,
            occupation_comparison: occupation,
            peer_comparison: peer,
            after_tax,
            path_to_top10_region: optional(path_region_task).await,
            path_to_top10_occupation: optional(path_occupation_task).await,
            career_forecast: optional(career_task).await,
            gender_comparison: optional(gender_task).await,
            region_ranking: optional(ranking_task).await,
            similar_occupations: optional(similar_task).await,
            fun_facts: optional(facts_task).await,
            purchasing_power: optional(power_task).await,
            generated_at: Utc::now(),
            data_source,
        })
    }

    /// Spawns one calculation as an independent task over the shared store.
    fn spawn<T, F>(&self, profile: &UserProfile, calc: F) -> JoinHandle<EngineResult<T>>
    where
        T: Send + 'static,
        F: FnOnce(&UserProfile, &dyn ReferenceDataStore) -> EngineResult<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let profile = profile.clone();
        tokio::spawn(async move { calc(&profile, store.as_ref()) })
    }
}

/// Collapses a join error into the engine's error type.
async fn flatten<T>(handle: JoinHandle<EngineResult<T>>) -> EngineResult<T> {
    match handle.await {
        Ok(result) => result,
        Err(err) => Err(EngineError::Internal {
            message: err.to_string(),
        }),
    }
}

/// Optional-metric join: any failure, including a join error, is absent.
async fn optional<T>(handle: JoinHandle<EngineResult<T>>) -> Option<T> {
    handle.await.ok().and_then(Result::ok)
}

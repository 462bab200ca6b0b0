//! Statistical analysis for the Income Insights Engine.
//!
//! This module contains the percentile estimation model, the four reference
//! population comparison builders, the optional derived-metric calculations
//! (path to the top decile, career forecast, gender comparison, region
//! ranking, similar occupations, fun facts, purchasing power), and the
//! snapshot orchestrator that fans them out concurrently.

mod career_forecast;
mod comparisons;
mod fun_facts;
mod gender_comparison;
mod path_to_top10;
mod percentile;
mod purchasing_power;
mod region_ranking;
mod resolve;
mod similar_occupations;
mod snapshot;

pub use career_forecast::career_forecast;
pub use comparisons::{
    national_comparison, occupation_comparison, peer_comparison, region_comparison,
    TOP10_MEAN_RATIO,
};
pub use fun_facts::fun_facts;
pub use gender_comparison::gender_comparison;
pub use path_to_top10::{path_to_top10_occupation, path_to_top10_region};
pub use percentile::estimate_percentile;
pub use purchasing_power::purchasing_power;
pub use region_ranking::region_ranking;
pub use resolve::{first_available, resolve_with_fallback, Resolver};
pub use similar_occupations::similar_occupations;
pub use snapshot::StatisticsEngine;

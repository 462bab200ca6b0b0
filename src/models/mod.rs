//! Core data models for the Income Insights Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod after_tax;
mod comparison;
mod insight;
mod profile;
mod snapshot;

pub use after_tax::{AfterTaxIncome, TaxComponent};
pub use comparison::{ComparisonCategory, ComparisonResult};
pub use insight::{
    AgeGroupIncome, CareerForecast, FunFacts, GenderComparison, PathToTop10, PurchasingPower,
    RegionIncomeInfo, RegionRanking, SimilarOccupation,
};
pub use profile::{Gender, MaritalStatus, Occupation, Region, UserProfile};
pub use snapshot::StatisticsSnapshot;

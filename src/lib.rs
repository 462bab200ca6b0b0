//! Income Insights Engine
//!
//! This crate compares a user's income against regional, national, occupational,
//! and peer reference statistics and computes an itemized after-tax income
//! breakdown for eight tax jurisdictions. The sole entry point is
//! [`analysis::StatisticsEngine`], whose `build_snapshot` fans the component
//! calculations out concurrently and assembles one immutable
//! [`models::StatisticsSnapshot`].

#![warn(missing_docs)]

pub mod analysis;
pub mod error;
pub mod models;
pub mod store;
pub mod tax;

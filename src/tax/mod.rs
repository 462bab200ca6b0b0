//! After-tax income calculation for the Income Insights Engine.
//!
//! This module contains the jurisdiction calculators for the eight supported
//! countries and the [`TaxEngine`] that dispatches between them. Each
//! calculator is a pure function of (gross income, region, filing status)
//! composed from the shared bracket evaluator and payroll-levy helpers in
//! [`bracket`].

pub mod bracket;

mod australia;
mod canada;
mod france;
mod germany;
mod new_zealand;
mod spain;
mod united_kingdom;
mod united_states;

use std::collections::HashMap;

use tracing::warn;

use crate::models::{AfterTaxIncome, MaritalStatus};

pub use australia::Australia;
pub use canada::Canada;
pub use france::France;
pub use germany::Germany;
pub use new_zealand::NewZealand;
pub use spain::Spain;
pub use united_kingdom::UnitedKingdom;
pub use united_states::UnitedStates;

/// The filing status a tax calculation runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilingStatus {
    /// Single filer (also divorced, widowed, or unset marital status).
    Single,
    /// Married filing jointly.
    Joint,
}

impl From<MaritalStatus> for FilingStatus {
    fn from(status: MaritalStatus) -> Self {
        match status {
            MaritalStatus::Married => FilingStatus::Joint,
            _ => FilingStatus::Single,
        }
    }
}

/// One jurisdiction's after-tax calculation.
///
/// Implementations are pure: the same inputs always produce the same
/// itemized [`AfterTaxIncome`]. New jurisdictions are added by registering
/// another implementation with [`TaxEngine::register`], not by editing a
/// central switch.
pub trait JurisdictionCalculator: Send + Sync {
    /// The lowercase country code this calculator handles.
    fn country_code(&self) -> &'static str;

    /// Computes the itemized after-tax breakdown for a gross income.
    ///
    /// `region_code` selects regional tax where the jurisdiction has one and
    /// is ignored elsewhere. Calculators never fail: a region the
    /// jurisdiction cannot map degrades to the documented fallback for that
    /// jurisdiction.
    fn compute(&self, gross_income: f64, region_code: &str, filing_status: FilingStatus)
    -> AfterTaxIncome;
}

/// Dispatches after-tax calculations to the registered jurisdiction
/// calculators.
pub struct TaxEngine {
    calculators: HashMap<&'static str, Box<dyn JurisdictionCalculator>>,
}

impl Default for TaxEngine {
    /// An engine with all eight supported jurisdictions registered.
    fn default() -> Self {
        let mut engine = Self {
            calculators: HashMap::new(),
        };
        engine.register(Box::new(UnitedStates));
        engine.register(Box::new(UnitedKingdom));
        engine.register(Box::new(Canada));
        engine.register(Box::new(Australia));
        engine.register(Box::new(NewZealand));
        engine.register(Box::new(Germany));
        engine.register(Box::new(France));
        engine.register(Box::new(Spain));
        engine
    }
}

impl TaxEngine {
    /// Registers a jurisdiction calculator, replacing any existing one for
    /// the same country code.
    pub fn register(&mut self, calculator: Box<dyn JurisdictionCalculator>) {
        self.calculators.insert(calculator.country_code(), calculator);
    }

    /// Computes the after-tax breakdown for a gross income in a jurisdiction.
    ///
    /// An unknown country code yields the zero-tax fallback with
    /// `resolved = false` rather than an error, so that callers can always
    /// render a result; the `resolved` flag distinguishes "zero tax owed"
    /// from "jurisdiction not recognized".
    pub fn compute_tax(
        &self,
        gross_income: f64,
        country_code: &str,
        region_code: &str,
        filing_status: FilingStatus,
    ) -> AfterTaxIncome {
        let country = country_code.to_lowercase();
        match self.calculators.get(country.as_str()) {
            Some(calculator) => calculator.compute(gross_income, region_code, filing_status),
            None => {
                warn!(country = %country, "unknown tax jurisdiction; returning zero-tax result");
                AfterTaxIncome::unresolved(gross_income, &country, region_code)
            }
        }
    }
}

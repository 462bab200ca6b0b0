//! After-tax income models.
//!
//! This module contains the [`AfterTaxIncome`] type produced by the tax
//! engine: an itemized, jurisdiction-specific breakdown of a gross income
//! into named tax components.

use serde::{Deserialize, Serialize};

/// One named tax line in an after-tax breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxComponent {
    /// The component name (e.g., "Federal income tax", "Medicare levy").
    pub name: String,
    /// The amount owed for this component.
    pub amount: f64,
    /// The amount as a percentage of gross income.
    pub rate_of_gross: f64,
}

/// The itemized result of an after-tax income calculation for one
/// jurisdiction. Never mutated after construction.
///
/// Component amounts always sum to `total_tax`, and
/// `after_tax_income + total_tax == gross_income`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AfterTaxIncome {
    /// The gross income the calculation started from.
    pub gross_income: f64,
    /// The lowercase country code of the jurisdiction.
    pub country_code: String,
    /// The region code used for regional tax, if any.
    pub region_code: String,
    /// The ordered list of tax components.
    pub components: Vec<TaxComponent>,
    /// The sum of all component amounts.
    pub total_tax: f64,
    /// Gross income minus total tax.
    pub after_tax_income: f64,
    /// Total tax as a percentage of gross income.
    pub effective_tax_rate: f64,
    /// False when the country/region combination was not recognized and the
    /// zero-tax fallback was taken. Lets callers distinguish "zero tax owed"
    /// from "jurisdiction not recognized".
    pub resolved: bool,
}

impl AfterTaxIncome {
    /// Builds a resolved result from an ordered component list.
    pub fn from_components(
        gross_income: f64,
        country_code: &str,
        region_code: &str,
        components: Vec<TaxComponent>,
    ) -> Self {
        let total_tax: f64 = components.iter().map(|c| c.amount).sum();
        Self {
            gross_income,
            country_code: country_code.to_string(),
            region_code: region_code.to_string(),
            components,
            total_tax,
            after_tax_income: gross_income - total_tax,
            effective_tax_rate: if gross_income > 0.0 {
                total_tax / gross_income * 100.0
            } else {
                0.0
            },
            resolved: true,
        }
    }

    /// Builds the zero-tax fallback for an unrecognized jurisdiction.
    pub fn unresolved(gross_income: f64, country_code: &str, region_code: &str) -> Self {
        Self {
            resolved: false,
            ..Self::from_components(gross_income, country_code, region_code, Vec::new())
        }
    }

    /// Builds one component, deriving its rate-of-gross.
    pub fn component(name: &str, amount: f64, gross_income: f64) -> TaxComponent {
        TaxComponent {
            name: name.to_string(),
            amount,
            rate_of_gross: if gross_income > 0.0 {
                amount / gross_income * 100.0
            } else {
                0.0
            },
        }
    }
}

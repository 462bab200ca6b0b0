//! France tax calculation.
//!
//! Income tax applies the 2024 barème under the quotient familial: taxable
//! income (after the capped 10% professional-expenses deduction) is divided
//! by the household's parts count, taxed per part, and multiplied back.
//! CSG and CRDS are flat levies on 98.25% of gross income.

use crate::models::AfterTaxIncome;

use super::bracket::{bracket, tax_from_brackets, TaxBracket};
use super::{FilingStatus, JurisdictionCalculator};

const BRACKETS: [TaxBracket; 5] = [
    bracket(0.0, 0.0, 0.0),
    bracket(11_294.0, 0.11, 0.0),
    bracket(28_797.0, 0.30, 1_925.33),
    bracket(82_341.0, 0.41, 17_988.53),
    bracket(177_106.0, 0.45, 56_842.18),
];

const PROFESSIONAL_EXPENSES_RATE: f64 = 0.10;
const PROFESSIONAL_EXPENSES_CAP: f64 = 14_171.0;

const CSG_RATE: f64 = 0.092;
const CRDS_RATE: f64 = 0.005;
const SOCIAL_LEVY_BASE_SHARE: f64 = 0.9825;

/// The France jurisdiction calculator.
pub struct France;

impl JurisdictionCalculator for France {
    fn country_code(&self) -> &'static str {
        "fr"
    }

    fn compute(
        &self,
        gross_income: f64,
        region_code: &str,
        filing_status: FilingStatus,
    ) -> AfterTaxIncome {
        let parts = match filing_status {
            FilingStatus::Single => 1.0,
            FilingStatus::Joint => 2.0,
        };

        let deduction =
            (gross_income * PROFESSIONAL_EXPENSES_RATE).min(PROFESSIONAL_EXPENSES_CAP);
        let taxable = (gross_income - deduction).max(0.0);

        // Quotient familial: tax one part, scale back up.
        let income_tax = parts * tax_from_brackets(&BRACKETS, taxable / parts);

        let levy_base = gross_income.max(0.0) * SOCIAL_LEVY_BASE_SHARE;
        let csg = levy_base * CSG_RATE;
        let crds = levy_base * CRDS_RATE;

        AfterTaxIncome::from_components(
            gross_income,
            "fr",
            region_code,
            vec![
                AfterTaxIncome::component("Income tax", income_tax, gross_income),
                AfterTaxIncome::component("CSG", csg, gross_income),
                AfterTaxIncome::component("CRDS", crds, gross_income),
            ],
        )
    }
}

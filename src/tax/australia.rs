//! Australia tax calculation.
//!
//! Income tax uses the 2024-25 resident brackets, which include the tax-free
//! threshold directly in the table, so there is no separate deduction step.
//! The Medicare levy is a flat 2% of gross income (the low-income reduction
//! is not modeled). Australia taxes individuals, so filing status does not
//! change the calculation.

use crate::models::AfterTaxIncome;

use super::bracket::{bracket, capped_levy, tax_from_brackets, TaxBracket};
use super::{FilingStatus, JurisdictionCalculator};

const BRACKETS: [TaxBracket; 5] = [
    bracket(0.0, 0.0, 0.0),
    bracket(18_200.0, 0.16, 0.0),
    bracket(45_000.0, 0.30, 4_288.0),
    bracket(135_000.0, 0.37, 31_288.0),
    bracket(190_000.0, 0.45, 51_638.0),
];

const MEDICARE_LEVY_RATE: f64 = 0.02;

/// The Australia jurisdiction calculator.
pub struct Australia;

impl JurisdictionCalculator for Australia {
    fn country_code(&self) -> &'static str {
        "au"
    }

    fn compute(
        &self,
        gross_income: f64,
        region_code: &str,
        _filing_status: FilingStatus,
    ) -> AfterTaxIncome {
        let income_tax = tax_from_brackets(&BRACKETS, gross_income);
        let medicare = capped_levy(gross_income, MEDICARE_LEVY_RATE, None);

        AfterTaxIncome::from_components(
            gross_income,
            "au",
            region_code,
            vec![
                AfterTaxIncome::component("Income tax", income_tax, gross_income),
                AfterTaxIncome::component("Medicare levy", medicare, gross_income),
            ],
        )
    }
}

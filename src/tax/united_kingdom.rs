//! United Kingdom tax calculation.
//!
//! Income tax uses the 2024/25 personal allowance and the basic/higher/
//! additional rate bands; employee National Insurance applies 8% in the main
//! band and 2% above it. The UK taxes individuals, so filing status does not
//! change the calculation.

use crate::models::AfterTaxIncome;

use super::bracket::{banded_levy, bracket, tax_from_brackets, TaxBracket};
use super::{FilingStatus, JurisdictionCalculator};

const PERSONAL_ALLOWANCE: f64 = 12_570.0;

// Bands over taxable income (after the allowance).
const BANDS: [TaxBracket; 3] = [
    bracket(0.0, 0.20, 0.0),
    bracket(37_700.0, 0.40, 7_540.0),
    bracket(125_140.0, 0.45, 42_516.0),
];

const NI_PRIMARY_THRESHOLD: f64 = 12_570.0;
const NI_UPPER_EARNINGS_LIMIT: f64 = 50_270.0;
const NI_MAIN_RATE: f64 = 0.08;
const NI_UPPER_RATE: f64 = 0.02;

/// The United Kingdom jurisdiction calculator.
pub struct UnitedKingdom;

impl JurisdictionCalculator for UnitedKingdom {
    fn country_code(&self) -> &'static str {
        "uk"
    }

    fn compute(
        &self,
        gross_income: f64,
        region_code: &str,
        _filing_status: FilingStatus,
    ) -> AfterTaxIncome {
        let taxable = (gross_income - PERSONAL_ALLOWANCE).max(0.0);
        let income_tax = tax_from_brackets(&BANDS, taxable);

        let national_insurance = banded_levy(
            gross_income,
            NI_PRIMARY_THRESHOLD,
            NI_UPPER_EARNINGS_LIMIT,
            NI_MAIN_RATE,
        ) + (gross_income - NI_UPPER_EARNINGS_LIMIT).max(0.0) * NI_UPPER_RATE;

        AfterTaxIncome::from_components(
            gross_income,
            "uk",
            region_code,
            vec![
                AfterTaxIncome::component("Income tax", income_tax, gross_income),
                AfterTaxIncome::component("National Insurance", national_insurance, gross_income),
            ],
        )
    }
}

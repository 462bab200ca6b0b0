//! New Zealand tax calculation.
//!
//! PAYE income tax uses the progressive brackets with no tax-free threshold;
//! the ACC earner's levy is a capped flat levy on gross income. New Zealand
//! taxes individuals, so filing status does not change the calculation.

use crate::models::AfterTaxIncome;

use super::bracket::{bracket, capped_levy, tax_from_brackets, TaxBracket};
use super::{FilingStatus, JurisdictionCalculator};

const BRACKETS: [TaxBracket; 5] = [
    bracket(0.0, 0.105, 0.0),
    bracket(14_000.0, 0.175, 1_470.0),
    bracket(48_000.0, 0.30, 7_420.0),
    bracket(70_000.0, 0.33, 14_020.0),
    bracket(180_000.0, 0.39, 50_320.0),
];

const ACC_LEVY_RATE: f64 = 0.016;
const ACC_MAX_EARNINGS: f64 = 142_283.0;

/// The New Zealand jurisdiction calculator.
pub struct NewZealand;

impl JurisdictionCalculator for NewZealand {
    fn country_code(&self) -> &'static str {
        "nz"
    }

    fn compute(
        &self,
        gross_income: f64,
        region_code: &str,
        _filing_status: FilingStatus,
    ) -> AfterTaxIncome {
        let income_tax = tax_from_brackets(&BRACKETS, gross_income);
        let acc = capped_levy(gross_income, ACC_LEVY_RATE, Some(ACC_MAX_EARNINGS));

        AfterTaxIncome::from_components(
            gross_income,
            "nz",
            region_code,
            vec![
                AfterTaxIncome::component("Income tax (PAYE)", income_tax, gross_income),
                AfterTaxIncome::component("ACC earner's levy", acc, gross_income),
            ],
        )
    }
}

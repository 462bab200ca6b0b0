//! Spain tax calculation.
//!
//! IRPF uses the combined state-plus-autonomic general scale over the
//! personal allowance. Joint declarations keep the same bracket table but
//! add a fixed additional allowance. Social Security contributions are a
//! capped levy on gross income.

use crate::models::AfterTaxIncome;

use super::bracket::{bracket, capped_levy, tax_from_brackets, TaxBracket};
use super::{FilingStatus, JurisdictionCalculator};

const BRACKETS: [TaxBracket; 6] = [
    bracket(0.0, 0.19, 0.0),
    bracket(12_450.0, 0.24, 2_365.50),
    bracket(20_200.0, 0.30, 4_225.50),
    bracket(35_200.0, 0.37, 8_725.50),
    bracket(60_000.0, 0.45, 17_901.50),
    bracket(300_000.0, 0.47, 125_901.50),
];

const PERSONAL_ALLOWANCE: f64 = 5_550.0;
const JOINT_DECLARATION_ALLOWANCE: f64 = 3_400.0;

const SOCIAL_SECURITY_RATE: f64 = 0.0635;
const SOCIAL_SECURITY_CAP: f64 = 56_646.0;

/// The Spain jurisdiction calculator.
pub struct Spain;

impl JurisdictionCalculator for Spain {
    fn country_code(&self) -> &'static str {
        "es"
    }

    fn compute(
        &self,
        gross_income: f64,
        region_code: &str,
        filing_status: FilingStatus,
    ) -> AfterTaxIncome {
        let allowance = match filing_status {
            FilingStatus::Single => PERSONAL_ALLOWANCE,
            FilingStatus::Joint => PERSONAL_ALLOWANCE + JOINT_DECLARATION_ALLOWANCE,
        };
        let taxable = (gross_income - allowance).max(0.0);
        let income_tax = tax_from_brackets(&BRACKETS, taxable);

        let social_security =
            capped_levy(gross_income, SOCIAL_SECURITY_RATE, Some(SOCIAL_SECURITY_CAP));

        AfterTaxIncome::from_components(
            gross_income,
            "es",
            region_code,
            vec![
                AfterTaxIncome::component("Income tax (IRPF)", income_tax, gross_income),
                AfterTaxIncome::component(
                    "Social Security contributions",
                    social_security,
                    gross_income,
                ),
            ],
        )
    }
}

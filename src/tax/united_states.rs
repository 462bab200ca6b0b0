//! United States tax calculation.
//!
//! Federal income tax uses the 2024 bracket tables with an entirely separate
//! table for married-filing-jointly, over a filing-status-dependent standard
//! deduction. State income tax is a simplified effective rate per state
//! (exact for the flat-tax states, a median-income-range approximation for
//! the progressive ones). FICA adds Social Security (capped), Medicare
//! (uncapped), and the additional Medicare levy on income above 200,000.

use crate::models::AfterTaxIncome;

use super::bracket::{bracket, capped_levy, tax_from_brackets, TaxBracket};
use super::{FilingStatus, JurisdictionCalculator};

const SINGLE_BRACKETS: [TaxBracket; 7] = [
    bracket(0.0, 0.10, 0.0),
    bracket(11_000.0, 0.12, 1_100.0),
    bracket(44_725.0, 0.22, 5_147.0),
    bracket(95_375.0, 0.24, 16_290.0),
    bracket(182_100.0, 0.32, 37_104.0),
    bracket(231_250.0, 0.35, 52_832.0),
    bracket(578_125.0, 0.37, 174_238.0),
];

const JOINT_BRACKETS: [TaxBracket; 7] = [
    bracket(0.0, 0.10, 0.0),
    bracket(22_000.0, 0.12, 2_200.0),
    bracket(89_075.0, 0.22, 10_249.0),
    bracket(190_750.0, 0.24, 32_617.0),
    bracket(364_200.0, 0.32, 74_208.0),
    bracket(462_500.0, 0.35, 105_664.0),
    bracket(693_750.0, 0.37, 186_601.0),
];

const STANDARD_DEDUCTION_SINGLE: f64 = 14_600.0;
const STANDARD_DEDUCTION_JOINT: f64 = 29_200.0;

const SOCIAL_SECURITY_WAGE_BASE: f64 = 168_600.0;
const SOCIAL_SECURITY_RATE: f64 = 0.062;
const MEDICARE_RATE: f64 = 0.0145;
const ADDITIONAL_MEDICARE_THRESHOLD: f64 = 200_000.0;
const ADDITIONAL_MEDICARE_RATE: f64 = 0.009;

/// The United States jurisdiction calculator.
pub struct UnitedStates;

impl JurisdictionCalculator for UnitedStates {
    fn country_code(&self) -> &'static str {
        "us"
    }

    fn compute(
        &self,
        gross_income: f64,
        region_code: &str,
        filing_status: FilingStatus,
    ) -> AfterTaxIncome {
        let state = region_code.to_uppercase();
        let Some(state_rate) = state_rate(&state, gross_income) else {
            return AfterTaxIncome::unresolved(gross_income, "us", region_code);
        };

        let federal = federal_tax(gross_income, filing_status);
        let state_tax = gross_income.max(0.0) * state_rate;
        let social_security = capped_levy(
            gross_income,
            SOCIAL_SECURITY_RATE,
            Some(SOCIAL_SECURITY_WAGE_BASE),
        );
        let medicare = medicare_tax(gross_income);

        AfterTaxIncome::from_components(
            gross_income,
            "us",
            &state,
            vec![
                AfterTaxIncome::component("Federal income tax", federal, gross_income),
                AfterTaxIncome::component("State income tax", state_tax, gross_income),
                AfterTaxIncome::component("Social Security", social_security, gross_income),
                AfterTaxIncome::component("Medicare", medicare, gross_income),
            ],
        )
    }
}

fn federal_tax(gross_income: f64, filing_status: FilingStatus) -> f64 {
    let (brackets, deduction): (&[TaxBracket], f64) = match filing_status {
        FilingStatus::Single => (&SINGLE_BRACKETS, STANDARD_DEDUCTION_SINGLE),
        FilingStatus::Joint => (&JOINT_BRACKETS, STANDARD_DEDUCTION_JOINT),
    };
    let taxable = (gross_income - deduction).max(0.0);
    tax_from_brackets(brackets, taxable)
}

fn medicare_tax(gross_income: f64) -> f64 {
    let mut tax = capped_levy(gross_income, MEDICARE_RATE, None);
    if gross_income > ADDITIONAL_MEDICARE_THRESHOLD {
        tax += (gross_income - ADDITIONAL_MEDICARE_THRESHOLD) * ADDITIONAL_MEDICARE_RATE;
    }
    tax
}

/// Simplified effective state income tax rate.
///
/// Flat-tax states carry their statutory rate; progressive states use an
/// effective rate for the 50k-150k income range. Returns `None` for codes
/// that are not US states, which the caller turns into the unresolved
/// zero-tax result.
fn state_rate(state: &str, income: f64) -> Option<f64> {
    let rate = match state {
        // No state income tax.
        "AK" | "FL" | "NV" | "SD" | "TN" | "TX" | "WA" | "WY" => 0.0,
        // New Hampshire taxes dividends and interest only.
        "NH" => 0.0,

        // Flat tax states.
        "CO" => 0.044,
        "IL" => 0.0495,
        "IN" => 0.0315,
        "KY" => 0.045,
        "MA" => 0.05,
        "MI" => 0.0425,
        "NC" => 0.0475,
        "PA" => 0.0307,
        "UT" => 0.0485,

        // Progressive states, effective rates.
        "AL" => 0.04,
        "AZ" => {
            if income > 100_000.0 {
                0.045
            } else {
                0.035
            }
        }
        "AR" => {
            if income > 100_000.0 {
                0.055
            } else {
                0.04
            }
        }
        "CA" => {
            if income > 150_000.0 {
                0.093
            } else if income > 100_000.0 {
                0.08
            } else if income > 75_000.0 {
                0.065
            } else {
                0.04
            }
        }
        "CT" => {
            if income > 100_000.0 {
                0.065
            } else {
                0.05
            }
        }
        "DE" => {
            if income > 100_000.0 {
                0.066
            } else {
                0.055
            }
        }
        "GA" => {
            if income > 100_000.0 {
                0.0575
            } else {
                0.05
            }
        }
        "HI" => {
            if income > 100_000.0 {
                0.09
            } else {
                0.07
            }
        }
        "ID" => {
            if income > 100_000.0 {
                0.058
            } else {
                0.05
            }
        }
        "IA" => {
            if income > 100_000.0 {
                0.06
            } else {
                0.048
            }
        }
        "KS" => {
            if income > 100_000.0 {
                0.057
            } else {
                0.046
            }
        }
        "LA" => 0.04,
        "ME" => {
            if income > 100_000.0 {
                0.075
            } else {
                0.06
            }
        }
        "MD" => {
            if income > 100_000.0 {
                0.0575
            } else {
                0.0475
            }
        }
        "MN" => {
            if income > 100_000.0 {
                0.0985
            } else {
                0.07
            }
        }
        "MS" => 0.05,
        "MO" => 0.048,
        "MT" => {
            if income > 100_000.0 {
                0.0675
            } else {
                0.055
            }
        }
        "NE" => {
            if income > 100_000.0 {
                0.0684
            } else {
                0.05
            }
        }
        "NJ" => {
            if income > 100_000.0 {
                0.0897
            } else {
                0.065
            }
        }
        "NM" => {
            if income > 100_000.0 {
                0.059
            } else {
                0.045
            }
        }
        "NY" => {
            if income > 150_000.0 {
                0.0882
            } else if income > 100_000.0 {
                0.065
            } else {
                0.055
            }
        }
        "ND" => 0.029,
        "OH" => 0.038,
        "OK" => 0.0475,
        "OR" => {
            if income > 100_000.0 {
                0.099
            } else {
                0.075
            }
        }
        "RI" => {
            if income > 100_000.0 {
                0.0599
            } else {
                0.0475
            }
        }
        "SC" => {
            if income > 100_000.0 {
                0.065
            } else {
                0.055
            }
        }
        "VT" => {
            if income > 100_000.0 {
                0.0875
            } else {
                0.065
            }
        }
        "VA" => {
            if income > 100_000.0 {
                0.0575
            } else {
                0.05
            }
        }
        "WV" => {
            if income > 100_000.0 {
                0.065
            } else {
                0.055
            }
        }
        "WI" => {
            if income > 100_000.0 {
                0.0765
            } else {
                0.06
            }
        }
        "DC" => {
            if income > 100_000.0 {
                0.0895
            } else {
                0.07
            }
        }
        _ => return None,
    };
    Some(rate)
}

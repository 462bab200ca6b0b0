//! Germany tax calculation.
//!
//! Income tax uses a piecewise-linear encoding of the 2024 progressive
//! zones (the statutory formula is quadratic; the table approximates it
//! with fixed marginal rates) over the basic allowance. Married couples are
//! assessed by income splitting: the single formula runs on half the income
//! and the result is doubled. The solidarity surcharge applies above a tax
//! threshold (doubled for joint filing) with a steeper phase-in band before
//! settling at its flat rate. Pension, health/care, and unemployment
//! insurance are capped levies on gross income.

use crate::models::AfterTaxIncome;

use super::bracket::{bracket, capped_levy, tax_from_brackets, TaxBracket};
use super::{FilingStatus, JurisdictionCalculator};

const BASIC_ALLOWANCE: f64 = 11_604.0;

// Marginal rates over taxable income (after the allowance), linearized from
// the 14-45% progressive zones.
const BRACKETS: [TaxBracket; 5] = [
    bracket(0.0, 0.14, 0.0),
    bracket(6_000.0, 0.24, 840.0),
    bracket(17_000.0, 0.30, 3_480.0),
    bracket(51_000.0, 0.42, 13_680.0),
    bracket(265_000.0, 0.45, 103_560.0),
];

const SOLIDARITY_RATE: f64 = 0.055;
const SOLIDARITY_PHASE_IN_RATE: f64 = 0.119;
const SOLIDARITY_TAX_THRESHOLD_SINGLE: f64 = 18_130.0;

const PENSION_RATE: f64 = 0.093;
const PENSION_CAP: f64 = 90_600.0;
const HEALTH_CARE_RATE: f64 = 0.0855;
const HEALTH_CARE_CAP: f64 = 62_100.0;
const UNEMPLOYMENT_RATE: f64 = 0.013;
const UNEMPLOYMENT_CAP: f64 = 90_600.0;

/// The Germany jurisdiction calculator.
pub struct Germany;

impl JurisdictionCalculator for Germany {
    fn country_code(&self) -> &'static str {
        "de"
    }

    fn compute(
        &self,
        gross_income: f64,
        region_code: &str,
        filing_status: FilingStatus,
    ) -> AfterTaxIncome {
        let income_tax = match filing_status {
            FilingStatus::Single => single_tax(gross_income),
            // Splittingverfahren: assess half the income, double the result.
            FilingStatus::Joint => 2.0 * single_tax(gross_income / 2.0),
        };

        let solidarity = solidarity_surcharge(income_tax, filing_status);

        let pension = capped_levy(gross_income, PENSION_RATE, Some(PENSION_CAP));
        let health_care = capped_levy(gross_income, HEALTH_CARE_RATE, Some(HEALTH_CARE_CAP));
        let unemployment = capped_levy(gross_income, UNEMPLOYMENT_RATE, Some(UNEMPLOYMENT_CAP));

        AfterTaxIncome::from_components(
            gross_income,
            "de",
            region_code,
            vec![
                AfterTaxIncome::component("Income tax", income_tax, gross_income),
                AfterTaxIncome::component("Solidarity surcharge", solidarity, gross_income),
                AfterTaxIncome::component("Pension insurance", pension, gross_income),
                AfterTaxIncome::component("Health and care insurance", health_care, gross_income),
                AfterTaxIncome::component("Unemployment insurance", unemployment, gross_income),
            ],
        )
    }
}

fn single_tax(gross_income: f64) -> f64 {
    tax_from_brackets(&BRACKETS, (gross_income - BASIC_ALLOWANCE).max(0.0))
}

/// Surcharge on the income tax itself: nothing up to the threshold, then a
/// steep 11.9% marginal phase-in that meets the flat 5.5%-of-tax line.
fn solidarity_surcharge(income_tax: f64, filing_status: FilingStatus) -> f64 {
    let threshold = match filing_status {
        FilingStatus::Single => SOLIDARITY_TAX_THRESHOLD_SINGLE,
        FilingStatus::Joint => 2.0 * SOLIDARITY_TAX_THRESHOLD_SINGLE,
    };
    if income_tax <= threshold {
        return 0.0;
    }
    (SOLIDARITY_PHASE_IN_RATE * (income_tax - threshold)).min(SOLIDARITY_RATE * income_tax)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn income_tax(gross: f64, filing: FilingStatus) -> f64 {
        Germany.compute(gross, "", filing).components[0].amount
    }

    #[test]
    fn test_income_below_allowance_owes_nothing() {
        assert_eq!(income_tax(11_000.0, FilingStatus::Single), 0.0);
    }

    #[test]
    fn test_single_50k() {
        // Taxable 38,396: 3,480 + (38,396 - 17,000) * 0.30 = 9,898.80.
        assert!(close(income_tax(50_000.0, FilingStatus::Single), 9_898.80));
    }

    /// The splitting invariant: married tax equals twice the single formula
    /// applied to half the income.
    #[test]
    fn test_splitting_married_100k_equals_twice_single_50k() {
        let married = income_tax(100_000.0, FilingStatus::Joint);
        let single_half = income_tax(50_000.0, FilingStatus::Single);
        assert!(close(married, 2.0 * single_half));
        assert!(close(married, 19_797.60));
    }

    #[test]
    fn test_splitting_advantage_over_single_assessment() {
        assert!(
            income_tax(100_000.0, FilingStatus::Joint)
                < income_tax(100_000.0, FilingStatus::Single)
        );
    }

    #[test]
    fn test_solidarity_zero_below_threshold() {
        // Single 60,000: income tax 12,898.80, below the 18,130 threshold.
        let low = Germany.compute(60_000.0, "", FilingStatus::Single);
        assert_eq!(low.components[1].amount, 0.0);

        // Single 100,000: income tax 29,386.32, above it.
        let high = Germany.compute(100_000.0, "", FilingStatus::Single);
        assert!(high.components[1].amount > 0.0);
    }

    #[test]
    fn test_solidarity_phase_in_band() {
        // Single 80,000: taxable 68,396; tax = 13,680 + 17,396 * 0.42
        // = 20,986.32. Phase-in: 0.119 * (20,986.32 - 18,130) = 339.90,
        // below the flat 5.5% line (1,154.25).
        let result = Germany.compute(80_000.0, "", FilingStatus::Single);
        let tax = result.components[0].amount;
        assert!(close(result.components[1].amount, 0.119 * (tax - 18_130.0)));
    }

    #[test]
    fn test_solidarity_flat_region() {
        let result = Germany.compute(350_000.0, "", FilingStatus::Single);
        let tax = result.components[0].amount;
        assert!(close(result.components[1].amount, 0.055 * tax));
    }

    #[test]
    fn test_solidarity_threshold_doubles_for_joint() {
        // Joint 160,000: income tax = 2 * single(80,000) = 41,972.64, which
        // is above the single threshold but only just above the doubled one.
        let result = Germany.compute(160_000.0, "", FilingStatus::Joint);
        let tax = result.components[0].amount;
        assert!(close(
            result.components[1].amount,
            0.119 * (tax - 36_260.0)
        ));
    }

    #[test]
    fn test_social_levies_capped() {
        let result = Germany.compute(200_000.0, "", FilingStatus::Single);
        let pension = &result.components[2];
        let health = &result.components[3];
        let unemployment = &result.components[4];
        assert!(close(pension.amount, 90_600.0 * 0.093));
        assert!(close(health.amount, 62_100.0 * 0.0855));
        assert!(close(unemployment.amount, 90_600.0 * 0.013));
    }
}

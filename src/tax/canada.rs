//! Canada tax calculation.
//!
//! Federal income tax uses the 2024 brackets over the federal basic personal
//! amount. Provincial income tax re-runs the bracket evaluator with a
//! province-specific table and basic amount, selected by a case-insensitive
//! province-code lookup; an unrecognized province takes a flat default rate
//! and allowance rather than failing. CPP and EI are capped payroll levies
//! on gross income.

use crate::models::AfterTaxIncome;

use super::bracket::{bracket, capped_levy, tax_from_brackets, TaxBracket};
use super::{FilingStatus, JurisdictionCalculator};

const FEDERAL_BASIC_AMOUNT: f64 = 15_705.0;

const FEDERAL_BRACKETS: [TaxBracket; 5] = [
    bracket(0.0, 0.15, 0.0),
    bracket(55_867.0, 0.205, 8_380.05),
    bracket(111_733.0, 0.26, 19_832.58),
    bracket(173_205.0, 0.29, 35_815.30),
    bracket(246_752.0, 0.33, 57_143.93),
];

const CPP_EXEMPTION: f64 = 3_500.0;
const CPP_MAX_PENSIONABLE: f64 = 68_500.0;
const CPP_RATE: f64 = 0.0595;

const EI_MAX_INSURABLE: f64 = 63_200.0;
const EI_RATE: f64 = 0.0166;

/// One province's income tax rules: a basic amount and a bracket table.
struct ProvinceTax {
    basic_amount: f64,
    brackets: &'static [TaxBracket],
}

const ONTARIO: [TaxBracket; 5] = [
    bracket(0.0, 0.0505, 0.0),
    bracket(51_446.0, 0.0915, 2_598.02),
    bracket(102_894.0, 0.1116, 7_305.51),
    bracket(150_000.0, 0.1216, 12_562.54),
    bracket(220_000.0, 0.1316, 21_074.54),
];

const QUEBEC: [TaxBracket; 4] = [
    bracket(0.0, 0.14, 0.0),
    bracket(51_780.0, 0.19, 7_249.20),
    bracket(103_545.0, 0.24, 17_084.55),
    bracket(126_000.0, 0.2575, 22_473.75),
];

const BRITISH_COLUMBIA: [TaxBracket; 7] = [
    bracket(0.0, 0.0506, 0.0),
    bracket(47_937.0, 0.077, 2_425.61),
    bracket(95_875.0, 0.105, 6_116.84),
    bracket(110_076.0, 0.1229, 7_607.95),
    bracket(133_664.0, 0.147, 10_506.92),
    bracket(181_232.0, 0.168, 17_499.42),
    bracket(252_752.0, 0.205, 29_514.78),
];

const ALBERTA: [TaxBracket; 5] = [
    bracket(0.0, 0.10, 0.0),
    bracket(148_269.0, 0.12, 14_826.90),
    bracket(177_922.0, 0.13, 18_385.26),
    bracket(237_230.0, 0.14, 26_095.30),
    bracket(355_845.0, 0.15, 42_701.40),
];

const MANITOBA: [TaxBracket; 3] = [
    bracket(0.0, 0.108, 0.0),
    bracket(47_000.0, 0.1275, 5_076.00),
    bracket(100_000.0, 0.174, 11_833.50),
];

const SASKATCHEWAN: [TaxBracket; 3] = [
    bracket(0.0, 0.105, 0.0),
    bracket(52_057.0, 0.125, 5_465.99),
    bracket(148_734.0, 0.145, 17_550.62),
];

const NOVA_SCOTIA: [TaxBracket; 5] = [
    bracket(0.0, 0.0879, 0.0),
    bracket(29_590.0, 0.1495, 2_600.96),
    bracket(59_180.0, 0.1667, 7_024.67),
    bracket(93_000.0, 0.175, 12_662.46),
    bracket(150_000.0, 0.21, 22_637.46),
];

const NEW_BRUNSWICK: [TaxBracket; 4] = [
    bracket(0.0, 0.094, 0.0),
    bracket(49_958.0, 0.14, 4_696.05),
    bracket(99_916.0, 0.16, 11_690.17),
    bracket(185_064.0, 0.195, 25_313.85),
];

// Territories and any unrecognized code degrade to this.
const DEFAULT_PROVINCIAL: [TaxBracket; 1] = [bracket(0.0, 0.10, 0.0)];
const DEFAULT_BASIC_AMOUNT: f64 = 12_000.0;

fn province_tax(province: &str) -> ProvinceTax {
    let (basic_amount, brackets): (f64, &'static [TaxBracket]) = match province {
        "ON" => (12_399.0, &ONTARIO),
        "QC" => (18_056.0, &QUEBEC),
        "BC" => (12_580.0, &BRITISH_COLUMBIA),
        "AB" => (21_885.0, &ALBERTA),
        "MB" => (15_780.0, &MANITOBA),
        "SK" => (18_491.0, &SASKATCHEWAN),
        "NS" => (8_481.0, &NOVA_SCOTIA),
        "NB" => (13_044.0, &NEW_BRUNSWICK),
        _ => (DEFAULT_BASIC_AMOUNT, &DEFAULT_PROVINCIAL),
    };
    ProvinceTax {
        basic_amount,
        brackets,
    }
}

/// The Canada jurisdiction calculator.
pub struct Canada;

impl JurisdictionCalculator for Canada {
    fn country_code(&self) -> &'static str {
        "ca"
    }

    fn compute(
        &self,
        gross_income: f64,
        region_code: &str,
        _filing_status: FilingStatus,
    ) -> AfterTaxIncome {
        let province = region_code.to_uppercase();

        let federal =
            tax_from_brackets(&FEDERAL_BRACKETS, (gross_income - FEDERAL_BASIC_AMOUNT).max(0.0));

        let rules = province_tax(&province);
        let provincial =
            tax_from_brackets(rules.brackets, (gross_income - rules.basic_amount).max(0.0));

        let cpp = CPP_RATE * (gross_income.min(CPP_MAX_PENSIONABLE) - CPP_EXEMPTION).max(0.0);
        let ei = capped_levy(gross_income, EI_RATE, Some(EI_MAX_INSURABLE));

        AfterTaxIncome::from_components(
            gross_income,
            "ca",
            &province,
            vec![
                AfterTaxIncome::component("Federal income tax", federal, gross_income),
                AfterTaxIncome::component("Provincial income tax", provincial, gross_income),
                AfterTaxIncome::component("CPP contributions", cpp, gross_income),
                AfterTaxIncome::component("EI premiums", ei, gross_income),
            ],
        )
    }
}

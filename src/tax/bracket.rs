//! The progressive-bracket evaluator and payroll-levy helpers shared by all
//! jurisdiction calculators.

/// One row of a progressive tax table: the bracket's inclusive lower
/// threshold, its marginal rate, and the cumulative tax owed at the
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBracket {
    /// Inclusive lower bound of taxable income for this bracket.
    pub threshold: f64,
    /// Marginal rate applied to income above the threshold.
    pub rate: f64,
    /// Cumulative tax owed on income exactly at the threshold.
    pub base: f64,
}

/// Convenience constructor used by the jurisdiction tables.
pub const fn bracket(threshold: f64, rate: f64, base: f64) -> TaxBracket {
    TaxBracket {
        threshold,
        rate,
        base,
    }
}

/// Evaluates a progressive bracket table against a taxable income.
///
/// Walks the ascending table and settles on the last bracket whose
/// threshold is at or below the taxable income; the tax is that bracket's
/// cumulative base plus the marginal rate applied to the excess over its
/// threshold. A non-positive taxable income owes nothing.
pub fn tax_from_brackets(brackets: &[TaxBracket], taxable_income: f64) -> f64 {
    if taxable_income <= 0.0 {
        return 0.0;
    }

    let mut tax = 0.0;
    for b in brackets {
        if taxable_income >= b.threshold {
            tax = b.base + (taxable_income - b.threshold) * b.rate;
        } else {
            break;
        }
    }
    tax
}

/// A flat payroll levy on gross income, optionally capped at a base amount.
pub fn capped_levy(gross_income: f64, rate: f64, cap: Option<f64>) -> f64 {
    let base = match cap {
        Some(cap) => gross_income.min(cap),
        None => gross_income,
    };
    base.max(0.0) * rate
}

/// A levy applied only to the slice of gross income between two bounds.
pub fn banded_levy(gross_income: f64, lower: f64, upper: f64, rate: f64) -> f64 {
    let banded = (gross_income.min(upper) - lower).max(0.0);
    banded * rate
}

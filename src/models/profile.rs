//! User profile models for the Income Insights Engine.
//!
//! This module contains the [`UserProfile`] type and its supporting enums,
//! along with the derived income figures (household, per-capita, effective,
//! equivalised, comparison) used by the comparison and tax calculations.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A subdivision of a country (US state, Canadian province, German Land, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// The region code (e.g., "CA" for California, "ON" for Ontario).
    pub code: String,
    /// The human-readable region name.
    pub name: String,
    /// The lowercase country code this region belongs to.
    pub country_code: String,
}

/// The user's occupation, identified by a SOC-like code.
///
/// Country-local classification systems (NOC, ANZSCO, KldB, FAP, CNO) all
/// flow through the same `soc_code` field; the cross-mapping between systems
/// is handled outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupation {
    /// The occupation classification code.
    pub soc_code: String,
    /// The occupation title.
    pub title: String,
    /// The broad occupation category used for similar-occupation grouping.
    pub category: String,
    /// The lowercase country code whose classification system the code uses.
    pub country_code: String,
}

/// The user's gender. Informational only; never used in a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// No selection made.
    #[serde(rename = "")]
    NotSelected,
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other.
    Other,
}

/// The user's marital status, which doubles as the tax filing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaritalStatus {
    /// No selection made.
    #[serde(rename = "")]
    NotSelected,
    /// Single.
    Single,
    /// Married.
    Married,
    /// Divorced.
    Divorced,
    /// Widowed.
    Widowed,
}

impl MaritalStatus {
    /// The dataset breakdown key for this status ("Single", "Married", ...).
    ///
    /// `NotSelected` maps to the empty string, which matches no dataset key
    /// and therefore falls through to the next resolver in a fallback chain.
    pub fn as_key(&self) -> &'static str {
        match self {
            MaritalStatus::NotSelected => "",
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widowed => "Widowed",
        }
    }
}

/// A user's financial and demographic profile.
///
/// All income figures are gross annual amounts in the country's currency.
///
/// # Example
///
/// ```
/// use income_insights::models::{MaritalStatus, UserProfile};
///
/// let mut profile = UserProfile::default();
/// profile.annual_income = 75_000.0;
/// profile.marital_status = MaritalStatus::Single;
/// assert_eq!(profile.household_size(), 1);
/// assert_eq!(profile.effective_income(), 75_000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The lowercase country code (e.g., "us", "de").
    pub country_code: String,
    /// The user's region within the country.
    pub region: Region,
    /// The user's age in years. Valid range is 18 to 100 inclusive.
    pub age: u32,
    /// The user's gross personal annual income.
    pub annual_income: f64,
    /// The gross household annual income (0 if not recorded).
    pub household_income: f64,
    /// The number of dependent children in the household.
    pub dependents: u32,
    /// The user's gender (informational only).
    pub gender: Gender,
    /// The user's marital status.
    pub marital_status: MaritalStatus,
    /// The user's occupation.
    pub occupation: Occupation,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            country_code: "us".to_string(),
            region: Region {
                code: "CA".to_string(),
                name: "California".to_string(),
                country_code: "us".to_string(),
            },
            age: 30,
            annual_income: 0.0,
            household_income: 0.0,
            dependents: 0,
            gender: Gender::NotSelected,
            marital_status: MaritalStatus::NotSelected,
            occupation: Occupation {
                soc_code: String::new(),
                title: String::new(),
                category: String::new(),
                country_code: "us".to_string(),
            },
        }
    }
}

impl UserProfile {
    /// Whether the user is married.
    pub fn is_married(&self) -> bool {
        self.marital_status == MaritalStatus::Married
    }

    /// The number of people in the household: the user, plus a spouse when
    /// married, plus dependents (counted only for married households).
    pub fn household_size(&self) -> u32 {
        if self.is_married() {
            2 + self.dependents
        } else {
            1
        }
    }

    /// Household income per household member; personal income for singles.
    pub fn per_capita_income(&self) -> f64 {
        if self.is_married() {
            self.household_income / f64::from(self.household_size())
        } else {
            self.annual_income
        }
    }

    /// The income figure most representative of the user's situation:
    /// household income when married (falling back to personal income if no
    /// household figure was recorded), personal income otherwise.
    pub fn effective_income(&self) -> f64 {
        if self.is_married() && self.household_income > 0.0 {
            self.household_income
        } else {
            self.annual_income
        }
    }

    /// OECD-modified equivalence scale for the household:
    /// 1.0 for the user, plus 0.5 for a spouse, plus 0.3 per dependent.
    pub fn equivalence_scale(&self) -> f64 {
        if self.is_married() {
            1.0 + 0.5 + 0.3 * f64::from(self.dependents)
        } else {
            1.0
        }
    }

    /// Household income divided by the equivalence scale, enabling fair
    /// comparison across household sizes. Personal income for singles and
    /// for married households with no recorded household income.
    pub fn equivalised_income(&self) -> f64 {
        if self.is_married() && self.household_income > 0.0 {
            self.household_income / self.equivalence_scale()
        } else {
            self.annual_income
        }
    }

    /// The income used for region and national statistical comparisons.
    ///
    /// Australian married households compare on equivalised income (the
    /// standard ABS methodology); everywhere else the effective income is
    /// used.
    pub fn comparison_income(&self) -> f64 {
        if self.country_code == "au" && self.is_married() && self.household_income > 0.0 {
            self.equivalised_income()
        } else {
            self.effective_income()
        }
    }

    /// Validates the profile invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidProfile`] when the age is outside
    /// [18, 100] or either income figure is negative.
    pub fn validate(&self) -> EngineResult<()> {
        if !(18..=100).contains(&self.age) {
            return Err(EngineError::InvalidProfile {
                field: "age".to_string(),
                message: "must be between 18 and 100".to_string(),
            });
        }
        if self.annual_income < 0.0 {
            return Err(EngineError::InvalidProfile {
                field: "annual_income".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.household_income < 0.0 {
            return Err(EngineError::InvalidProfile {
                field: "household_income".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}

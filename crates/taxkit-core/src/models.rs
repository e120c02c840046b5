//! Shared typed models used across the catalog, calculator, orchestrator,
//! proficiency, and explanation layers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TaxkitError;

// ---------------------------------------------------------------------------
// FilingStatus
// ---------------------------------------------------------------------------

/// The four supported federal filing statuses.
///
/// Matching on this enum is exhaustive, so the bracket catalog cannot
/// silently miss a status at runtime; an unknown status can only appear at
/// the string-parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
    MarriedFilingSeparately,
    HeadOfHousehold,
}

impl FilingStatus {
    pub const ALL: [FilingStatus; 4] = [
        FilingStatus::Single,
        FilingStatus::MarriedFilingJointly,
        FilingStatus::MarriedFilingSeparately,
        FilingStatus::HeadOfHousehold,
    ];

    /// Canonical snake_case key, as serialized on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilingStatus::Single => "single",
            FilingStatus::MarriedFilingJointly => "married_filing_jointly",
            FilingStatus::MarriedFilingSeparately => "married_filing_separately",
            FilingStatus::HeadOfHousehold => "head_of_household",
        }
    }

    /// Human-readable label used in explanation prose.
    pub fn label(&self) -> &'static str {
        match self {
            FilingStatus::Single => "single",
            FilingStatus::MarriedFilingJointly => "married filing jointly",
            FilingStatus::MarriedFilingSeparately => "married filing separately",
            FilingStatus::HeadOfHousehold => "head of household",
        }
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilingStatus {
    type Err = TaxkitError;

    /// Accepts the canonical keys plus the short aliases (`married_joint`,
    /// `married_separate`) used by the legacy backend.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(FilingStatus::Single),
            "married_filing_jointly" | "married_joint" => Ok(FilingStatus::MarriedFilingJointly),
            "married_filing_separately" | "married_separate" => {
                Ok(FilingStatus::MarriedFilingSeparately)
            }
            "head_of_household" => Ok(FilingStatus::HeadOfHousehold),
            other => Err(TaxkitError::UnknownFilingStatus(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ProficiencyLevel
// ---------------------------------------------------------------------------

/// User-facing proficiency tier controlling explanation verbosity.
///
/// Ordering matters: promotions only ever move rightward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyLevel {
    Novice,
    Intermediate,
    Expert,
}

impl ProficiencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLevel::Novice => "novice",
            ProficiencyLevel::Intermediate => "intermediate",
            ProficiencyLevel::Expert => "expert",
        }
    }

    /// Lenient parse used on the explanation path, where an unrecognized
    /// level degrades to novice instead of failing.
    pub fn parse_or_novice(s: &str) -> ProficiencyLevel {
        s.parse().unwrap_or(ProficiencyLevel::Novice)
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProficiencyLevel {
    type Err = TaxkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "novice" => Ok(ProficiencyLevel::Novice),
            "intermediate" => Ok(ProficiencyLevel::Intermediate),
            "expert" => Ok(ProficiencyLevel::Expert),
            other => Err(TaxkitError::InvalidInput(format!(
                "unknown proficiency level: {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tax computation records
// ---------------------------------------------------------------------------

/// Raw inputs for one tax computation. Constructed fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxComputationInput {
    pub gross_income: f64,
    pub filing_status: FilingStatus,
    pub dependents: i64,
    pub additional_deductions: f64,
}

/// Derived result of one tax computation. Never mutated after construction.
///
/// Monetary fields carry two decimal places; `effective_rate` and
/// `marginal_rate` are on the 0-100 percentage scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxComputationResult {
    pub gross_income: f64,
    pub taxable_income: f64,
    pub total_tax: f64,
    pub effective_rate: f64,
    pub marginal_rate: f64,
    pub bracket_label: String,
    pub standard_deduction: f64,
    pub total_deductions_applied: f64,
    pub explanation_text: String,
}

/// One slab of the per-bracket tax decomposition. `rate` is on the 0-100
/// scale; amounts are unrounded so the contributions sum exactly to the
/// unrounded total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketContribution {
    pub rate: f64,
    pub income_in_bracket: f64,
    pub tax_in_bracket: f64,
    pub bracket_range: String,
}

// ---------------------------------------------------------------------------
// Proficiency records
// ---------------------------------------------------------------------------

/// Per-user interaction counters plus the stored proficiency level.
///
/// Storage is owned by the caller (persisted per user elsewhere); this core
/// only reads the counters and advances the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProficiencyProfile {
    pub interaction_count: i64,
    pub help_request_count: i64,
    pub proficiency_level: ProficiencyLevel,
}

impl Default for ProficiencyProfile {
    fn default() -> Self {
        Self {
            interaction_count: 0,
            help_request_count: 0,
            proficiency_level: ProficiencyLevel::Novice,
        }
    }
}

// ---------------------------------------------------------------------------
// Explanation record
// ---------------------------------------------------------------------------

/// One explanation, either resolved from the static topic table or
/// synthesized from a computed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub title: String,
    pub body: String,
    pub key_points: Vec<String>,
    pub related_topics: Vec<String>,
    pub proficiency_level: ProficiencyLevel,
}

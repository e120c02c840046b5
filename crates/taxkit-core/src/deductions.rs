//! Deduction arbitration: standard versus itemized.
//!
//! The two figures compete, they never combine: an itemized aggregate
//! replaces the standard deduction only when it is larger, mirroring the
//! real-world election between the two.

use pyo3::prelude::*;

/// Which deduction won the arbitration, for explanation prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeductionKind {
    Standard,
    Itemized,
}

impl DeductionKind {
    pub fn label(&self) -> &'static str {
        match self {
            DeductionKind::Standard => "standard deduction",
            DeductionKind::Itemized => "itemized deductions",
        }
    }
}

/// The deduction actually applied: the larger of the standard deduction and
/// the caller's aggregate itemized figure.
#[pyfunction]
pub fn select_deduction(standard_deduction: f64, additional_deductions: f64) -> f64 {
    standard_deduction.max(additional_deductions)
}

/// Ties go to the standard deduction, matching `select_deduction`.
pub fn applied_deduction_kind(standard_deduction: f64, additional_deductions: f64) -> DeductionKind {
    if additional_deductions > standard_deduction {
        DeductionKind::Itemized
    } else {
        DeductionKind::Standard
    }
}

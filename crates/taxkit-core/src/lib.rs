//! Taxkit core library — Rust backend for the Taxkit assisted-filing server.
//!
//! This crate provides high-performance implementations of the tax engine:
//! the statutory bracket catalog, the progressive calculator, deduction
//! arbitration, the computation orchestrator, proficiency tracking, and the
//! adaptive explanation selector.  It is compiled as a Python extension
//! module (`_taxkit_core`) via PyO3 and can be used as a drop-in replacement
//! for the pure-Python implementations.  The surrounding HTTP routing,
//! authentication, and form persistence stay in the Python layer.

pub mod calculator;
pub mod catalog;
pub mod deductions;
pub mod errors;
pub mod explain;
pub mod models;
pub mod money;
pub mod orchestrator;
pub mod proficiency;

use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

// ---------------------------------------------------------------------------
// Top-level Python module: _taxkit_core
// ---------------------------------------------------------------------------

#[pymodule]
fn _taxkit_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // -- Catalog constants and lookups --------------------------------------
    m.add("DEFAULT_TAX_YEAR", catalog::DEFAULT_TAX_YEAR)?;
    m.add_function(wrap_pyfunction!(catalog::get_standard_deduction, m)?)?;

    // -- Calculator ---------------------------------------------------------
    m.add_function(wrap_pyfunction!(calculator::calculate_progressive_tax, m)?)?;
    m.add_function(wrap_pyfunction!(calculator::bracket_breakdown, m)?)?;

    // -- Deductions ---------------------------------------------------------
    m.add_function(wrap_pyfunction!(deductions::select_deduction, m)?)?;

    // -- Orchestrator -------------------------------------------------------
    m.add("MAX_GROSS_INCOME", orchestrator::MAX_GROSS_INCOME)?;
    m.add_function(wrap_pyfunction!(orchestrator::compute_tax, m)?)?;

    // -- Proficiency (policy constants + transition + ledger) ---------------
    m.add(
        "PROMOTION_MIN_INTERACTIONS",
        proficiency::PROMOTION_MIN_INTERACTIONS,
    )?;
    m.add(
        "INTERMEDIATE_MAX_HELP_RATE",
        proficiency::INTERMEDIATE_MAX_HELP_RATE,
    )?;
    m.add("EXPERT_MAX_HELP_RATE", proficiency::EXPERT_MAX_HELP_RATE)?;
    m.add_function(wrap_pyfunction!(proficiency::record_interaction, m)?)?;
    m.add_function(wrap_pyfunction!(proficiency::advance_proficiency, m)?)?;
    m.add_class::<proficiency::ProficiencyLedger>()?;

    // -- Explanation selector -----------------------------------------------
    m.add("MAX_RELATED_TOPICS", explain::MAX_RELATED_TOPICS)?;
    m.add_function(wrap_pyfunction!(explain::explain_topic, m)?)?;
    m.add_function(wrap_pyfunction!(explain::explain_result, m)?)?;
    m.add_function(wrap_pyfunction!(explain::available_topics, m)?)?;

    Ok(())
}

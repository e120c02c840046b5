//! Progressive tax calculator: ascending slab walk over a bracket schedule.
//!
//! All arithmetic is carried out in unrounded floating-point monetary units;
//! rounding happens once, at the orchestrator boundary, so rounding error
//! cannot compound across brackets.

use pyo3::prelude::*;

use crate::catalog::{schedule_for, Bracket, DEFAULT_TAX_YEAR};
use crate::errors::{TaxkitError, TaxkitResult};
use crate::models::{BracketContribution, FilingStatus};
use crate::money::format_usd;

/// Bracket label reported when taxable income is zero.
pub const ZERO_TAX_BRACKET_LABEL: &str = "No tax (zero income)";

fn bracket_label(lower: f64, upper: f64) -> String {
    if upper.is_infinite() {
        format!("{}+ (Top bracket)", format_usd(lower, 0))
    } else {
        format!("{} - {}", format_usd(lower, 0), format_usd(upper, 0))
    }
}

fn bracket_range(lower: f64, upper: f64) -> String {
    if upper.is_infinite() {
        format!("{}+", format_usd(lower, 0))
    } else {
        format!("{} - {}", format_usd(lower, 0), format_usd(upper, 0))
    }
}

/// Compute total tax, marginal rate, and the terminal bracket label for the
/// given taxable income.
///
/// The marginal rate is returned as a fraction (0-1); the orchestrator
/// rescales it to the 0-100 convention. Zero income short-circuits without
/// touching the schedule.
pub fn compute_progressive_tax_impl(
    taxable_income: f64,
    filing_status: FilingStatus,
    year: i64,
) -> TaxkitResult<(f64, f64, String)> {
    if taxable_income < 0.0 {
        return Err(TaxkitError::InvalidInput(
            "taxable income cannot be negative".to_string(),
        ));
    }
    if taxable_income == 0.0 {
        return Ok((0.0, 0.0, ZERO_TAX_BRACKET_LABEL.to_string()));
    }

    let schedule = schedule_for(year, filing_status)?;
    let mut total_tax = 0.0;
    let mut previous_threshold = 0.0;

    for Bracket { threshold, rate } in schedule {
        let amount_in_bracket = (taxable_income.min(*threshold) - previous_threshold).max(0.0);
        total_tax += amount_in_bracket * rate;
        if taxable_income <= *threshold {
            return Ok((total_tax, *rate, bracket_label(previous_threshold, *threshold)));
        }
        previous_threshold = *threshold;
    }

    // The catalog invariant (unbounded top bracket) makes the walk terminate
    // inside the loop.
    Err(TaxkitError::Catalog(
        "bracket schedule is not terminated by an unbounded bracket".to_string(),
    ))
}

/// Decompose the tax into per-bracket contributions.
///
/// Contributions are unrounded and sum exactly to the total produced by
/// [`compute_progressive_tax_impl`]. Rates are reported on the 0-100 scale.
pub fn bracket_breakdown_impl(
    taxable_income: f64,
    filing_status: FilingStatus,
    year: i64,
) -> TaxkitResult<Vec<BracketContribution>> {
    if taxable_income < 0.0 {
        return Err(TaxkitError::InvalidInput(
            "taxable income cannot be negative".to_string(),
        ));
    }

    let schedule = schedule_for(year, filing_status)?;
    let mut contributions = Vec::new();
    let mut previous_threshold = 0.0;

    for Bracket { threshold, rate } in schedule {
        if taxable_income <= previous_threshold {
            break;
        }
        let amount_in_bracket = (taxable_income.min(*threshold) - previous_threshold).max(0.0);
        if amount_in_bracket > 0.0 {
            contributions.push(BracketContribution {
                rate: rate * 100.0,
                income_in_bracket: amount_in_bracket,
                tax_in_bracket: amount_in_bracket * rate,
                bracket_range: bracket_range(previous_threshold, *threshold),
            });
        }
        previous_threshold = *threshold;
    }

    Ok(contributions)
}

#[pyfunction]
#[pyo3(signature = (taxable_income, filing_status, year=DEFAULT_TAX_YEAR))]
pub fn calculate_progressive_tax(
    taxable_income: f64,
    filing_status: &str,
    year: i64,
) -> PyResult<(f64, f64, String)> {
    let status = filing_status.parse::<FilingStatus>()?;
    Ok(compute_progressive_tax_impl(taxable_income, status, year)?)
}

#[pyfunction]
#[pyo3(signature = (taxable_income, filing_status, year=DEFAULT_TAX_YEAR))]
pub fn bracket_breakdown(
    py: Python<'_>,
    taxable_income: f64,
    filing_status: &str,
    year: i64,
) -> PyResult<PyObject> {
    let status = filing_status.parse::<FilingStatus>()?;
    let breakdown = bracket_breakdown_impl(taxable_income, status, year)?;
    let json_str = serde_json::to_string(&breakdown).map_err(TaxkitError::from)?;
    let json_module = py.import("json")?;
    json_module
        .call_method1("loads", (json_str,))
        .map(|o| o.into())
}

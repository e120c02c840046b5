//! Tax computation orchestrator: validates inputs, arbitrates deductions,
//! runs the progressive calculator, and assembles the rounded result record
//! with its generated explanation paragraph.

use pyo3::prelude::*;
use tracing::debug;

use crate::calculator::compute_progressive_tax_impl;
use crate::catalog::{standard_deduction_for, DEFAULT_TAX_YEAR};
use crate::deductions::{applied_deduction_kind, select_deduction};
use crate::errors::{TaxkitError, TaxkitResult};
use crate::models::{FilingStatus, TaxComputationInput, TaxComputationResult};
use crate::money::{format_usd, round2};

/// Upper bound on gross income accepted by the orchestrator.
pub const MAX_GROSS_INCOME: f64 = 10_000_000.0;

/// Fail-fast checks over the raw numeric fields, in reporting order:
/// negative income, negative dependents, negative deductions, income cap.
/// Runs in the Python wrapper before the filing status is even parsed, so a
/// request that is wrong in several ways reports the income problem first.
fn validate_raw(
    gross_income: f64,
    dependents: i64,
    additional_deductions: f64,
) -> TaxkitResult<()> {
    if gross_income < 0.0 {
        return Err(TaxkitError::InvalidInput(
            "gross_income cannot be negative".to_string(),
        ));
    }
    if dependents < 0 {
        return Err(TaxkitError::InvalidInput(
            "dependents cannot be negative".to_string(),
        ));
    }
    if additional_deductions < 0.0 {
        return Err(TaxkitError::InvalidInput(
            "additional_deductions cannot be negative".to_string(),
        ));
    }
    if gross_income > MAX_GROSS_INCOME {
        return Err(TaxkitError::InvalidInput(
            "gross_income exceeds supported maximum".to_string(),
        ));
    }
    Ok(())
}

fn validate(input: &TaxComputationInput) -> TaxkitResult<()> {
    validate_raw(
        input.gross_income,
        input.dependents,
        input.additional_deductions,
    )
}

fn explanation_paragraph(
    input: &TaxComputationInput,
    taxable_income: f64,
    total_tax: f64,
    total_deductions: f64,
    deduction_label: &str,
    marginal_rate: f64,
) -> String {
    format!(
        "For filing status '{}', starting with gross income of {}, we applied {} in {}. \
         This results in taxable income of {}. Using {} progressive tax brackets, your \
         federal tax is {}. Your marginal rate (rate on next dollar) is {:.0}%.",
        input.filing_status.label(),
        format_usd(input.gross_income, 2),
        format_usd(total_deductions, 2),
        deduction_label,
        format_usd(taxable_income, 2),
        DEFAULT_TAX_YEAR,
        format_usd(total_tax, 2),
        marginal_rate * 100.0,
    )
}

/// Compute a full tax result from validated raw inputs.
///
/// Pure with respect to shared state: the only collaborators are the static
/// catalog and the calculator. Monetary outputs are rounded to two decimal
/// places here, and both rate fields are rescaled to the 0-100 convention.
pub fn compute_tax_impl(input: &TaxComputationInput) -> TaxkitResult<TaxComputationResult> {
    validate(input)?;

    let standard_deduction = standard_deduction_for(DEFAULT_TAX_YEAR, input.filing_status)?;
    let total_deductions = select_deduction(standard_deduction, input.additional_deductions);
    let deduction_kind = applied_deduction_kind(standard_deduction, input.additional_deductions);
    let taxable_income = (input.gross_income - total_deductions).max(0.0);

    let (total_tax, marginal_rate, bracket_label) =
        compute_progressive_tax_impl(taxable_income, input.filing_status, DEFAULT_TAX_YEAR)?;

    let effective_rate = if input.gross_income > 0.0 {
        total_tax / input.gross_income * 100.0
    } else {
        0.0
    };

    let explanation_text = explanation_paragraph(
        input,
        taxable_income,
        total_tax,
        total_deductions,
        deduction_kind.label(),
        marginal_rate,
    );

    debug!(
        "computed tax: status={} gross={:.2} taxable={:.2} tax={:.2} marginal={:.0}%",
        input.filing_status,
        input.gross_income,
        taxable_income,
        total_tax,
        marginal_rate * 100.0
    );

    Ok(TaxComputationResult {
        gross_income: round2(input.gross_income),
        taxable_income: round2(taxable_income),
        total_tax: round2(total_tax),
        effective_rate: round2(effective_rate),
        marginal_rate: round2(marginal_rate * 100.0),
        bracket_label,
        standard_deduction: round2(standard_deduction),
        total_deductions_applied: round2(total_deductions),
        explanation_text,
    })
}

#[pyfunction]
#[pyo3(signature = (income, filing_status="single", dependents=0, additional_deductions=0.0))]
pub fn compute_tax(
    py: Python<'_>,
    income: f64,
    filing_status: &str,
    dependents: i64,
    additional_deductions: f64,
) -> PyResult<PyObject> {
    validate_raw(income, dependents, additional_deductions)?;
    let input = TaxComputationInput {
        gross_income: income,
        filing_status: filing_status.parse::<FilingStatus>()?,
        dependents,
        additional_deductions,
    };
    let result = compute_tax_impl(&input)?;
    let json_str = serde_json::to_string(&result).map_err(TaxkitError::from)?;
    let json_module = py.import("json")?;
    json_module
        .call_method1("loads", (json_str,))
        .map(|o| o.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(
        gross_income: f64,
        filing_status: FilingStatus,
        additional_deductions: f64,
    ) -> TaxComputationInput {
        TaxComputationInput {
            gross_income,
            filing_status,
            dependents: 0,
            additional_deductions,
        }
    }

    #[test]
    fn test_single_50k_standard_deduction() {
        let result = compute_tax_impl(&input(50_000.0, FilingStatus::Single, 0.0)).unwrap();
        assert_eq!(result.standard_deduction, 14_600.0);
        assert_eq!(result.total_deductions_applied, 14_600.0);
        assert_eq!(result.taxable_income, 35_400.0);
        // 10% of 11,600 + 12% of 23,800.
        assert_eq!(result.total_tax, 4_016.0);
        assert_eq!(result.marginal_rate, 12.0);
        assert_eq!(result.effective_rate, 8.03);
        assert_eq!(result.bracket_label, "$11,600 - $47,150");
    }

    #[test]
    fn test_zero_income_idempotence() {
        for status in FilingStatus::ALL {
            let result = compute_tax_impl(&input(0.0, status, 0.0)).unwrap();
            assert_eq!(result.total_tax, 0.0);
            assert_eq!(result.marginal_rate, 0.0);
            assert_eq!(result.effective_rate, 0.0);
            assert_eq!(result.taxable_income, 0.0);
        }
    }

    #[test]
    fn test_married_jointly_1m_top_bracket() {
        let result =
            compute_tax_impl(&input(1_000_000.0, FilingStatus::MarriedFilingJointly, 0.0))
                .unwrap();
        assert_eq!(result.taxable_income, 970_800.0);
        assert_eq!(result.total_tax, 285_321.5);
        assert_eq!(result.marginal_rate, 37.0);
        assert_eq!(result.effective_rate, 28.53);
    }

    #[test]
    fn test_income_below_deduction_owes_nothing() {
        let result = compute_tax_impl(&input(10_000.0, FilingStatus::Single, 0.0)).unwrap();
        assert_eq!(result.taxable_income, 0.0);
        assert_eq!(result.total_tax, 0.0);
    }

    #[test]
    fn test_itemized_replaces_standard_when_larger() {
        let result = compute_tax_impl(&input(100_000.0, FilingStatus::Single, 30_000.0)).unwrap();
        assert_eq!(result.total_deductions_applied, 30_000.0);
        assert_eq!(result.taxable_income, 70_000.0);
        assert!(result.explanation_text.contains("itemized deductions"));
    }

    #[test]
    fn test_smaller_itemized_does_not_stack_with_standard() {
        let result = compute_tax_impl(&input(100_000.0, FilingStatus::Single, 10_000.0)).unwrap();
        assert_eq!(result.total_deductions_applied, 14_600.0);
        assert_eq!(result.taxable_income, 85_400.0);
        assert!(result.explanation_text.contains("standard deduction"));
    }

    #[test]
    fn test_validation_order_first_violation_wins() {
        let bad = TaxComputationInput {
            gross_income: -1.0,
            filing_status: FilingStatus::Single,
            dependents: -1,
            additional_deductions: -1.0,
        };
        let err = compute_tax_impl(&bad).unwrap_err();
        assert!(err.to_string().contains("gross_income"));
    }

    #[test]
    fn test_negative_income_reported_before_status_parse() {
        // A request carrying both a negative income and an unrecognized
        // filing status must report the income problem: the wrapper runs the
        // raw numeric checks before parsing the status string.
        let raw_err = validate_raw(-1.0, 0, 0.0).unwrap_err();
        assert!(raw_err.to_string().contains("gross_income"));
        // The status would have failed too, had the checks not come first.
        assert!("bogus".parse::<FilingStatus>().is_err());
    }

    #[test]
    fn test_negative_dependents_rejected() {
        let mut bad = input(50_000.0, FilingStatus::Single, 0.0);
        bad.dependents = -2;
        let err = compute_tax_impl(&bad).unwrap_err();
        assert!(err.to_string().contains("dependents"));
    }

    #[test]
    fn test_negative_deductions_rejected() {
        let err =
            compute_tax_impl(&input(50_000.0, FilingStatus::Single, -0.01)).unwrap_err();
        assert!(err.to_string().contains("additional_deductions"));
    }

    #[test]
    fn test_income_above_maximum_rejected() {
        let err = compute_tax_impl(&input(MAX_GROSS_INCOME + 1.0, FilingStatus::Single, 0.0))
            .unwrap_err();
        assert!(err.to_string().contains("maximum"));
    }

    #[test]
    fn test_explanation_names_the_inputs() {
        let result = compute_tax_impl(&input(50_000.0, FilingStatus::HeadOfHousehold, 0.0))
            .unwrap();
        let text = &result.explanation_text;
        assert!(text.contains("head of household"));
        assert!(text.contains("$50,000.00"));
        assert!(text.contains("$21,900.00"));
        assert!(text.contains("standard deduction"));
        assert!(text.contains("12%"));
    }

    #[test]
    fn test_effective_never_exceeds_marginal() {
        for income in [20_000.0, 75_000.0, 300_000.0, 2_000_000.0] {
            let result = compute_tax_impl(&input(income, FilingStatus::Single, 0.0)).unwrap();
            assert!(result.effective_rate <= result.marginal_rate);
        }
    }

    #[test]
    fn test_effective_rate_monotonic_once_deductions_saturate() {
        let mut previous = 0.0;
        let mut income = 14_600.0;
        while income <= 1_500_000.0 {
            let result = compute_tax_impl(&input(income, FilingStatus::Single, 0.0)).unwrap();
            assert!(result.effective_rate + 0.011 >= previous);
            previous = result.effective_rate;
            income += 49_999.0;
        }
    }

    #[test]
    fn test_serialized_field_names_and_rounding() {
        let result = compute_tax_impl(&input(50_000.0, FilingStatus::Single, 0.0)).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        let obj = value.as_object().unwrap();
        for field in [
            "gross_income",
            "taxable_income",
            "total_tax",
            "effective_rate",
            "marginal_rate",
            "bracket_label",
            "standard_deduction",
            "total_deductions_applied",
            "explanation_text",
        ] {
            assert!(obj.contains_key(field), "missing field {field}");
        }
        assert_eq!(obj.len(), 9);
        assert_eq!(obj["total_tax"], serde_json::json!(4016.0));
        assert_eq!(obj["effective_rate"], serde_json::json!(8.03));
    }
}

//! Proficiency-tiered narratives synthesized from a computed tax result.

use crate::explain::entries::DEFAULT_RELATED;
use crate::models::{Explanation, ProficiencyLevel, TaxComputationResult};
use crate::money::format_usd;

/// Synthesize an explanation from the headline numbers of a computation.
///
/// `effective_rate` and `marginal_rate` are expected on the 0-100 scale, as
/// the orchestrator reports them. One fixed template per proficiency level.
pub fn synthesize_result_explanation(
    gross_income: f64,
    total_tax: f64,
    effective_rate: f64,
    marginal_rate: f64,
    level: ProficiencyLevel,
) -> Explanation {
    let income = format_usd(gross_income, 2);
    let tax = format_usd(total_tax, 2);

    let (title, body) = match level {
        ProficiencyLevel::Novice => (
            "Your Tax Result",
            format!(
                "Your federal tax is {tax} on income of {income}. That's an effective \
                 rate of {effective_rate:.1}%, meaning that percentage of your income \
                 goes to federal taxes. Your marginal rate is {marginal_rate:.0}%, \
                 which is the rate on your next dollar earned."
            ),
        ),
        ProficiencyLevel::Intermediate => (
            "Tax Calculation Summary",
            format!(
                "Tax calculation: {income} gross income resulted in {tax} federal tax \
                 liability. Effective rate: {effective_rate:.1}% (total tax / gross \
                 income). Marginal rate: {marginal_rate:.0}% (bracket for next \
                 dollar). The difference illustrates the progressive bracket \
                 structure."
            ),
        ),
        ProficiencyLevel::Expert => (
            "Tax Liability Analysis",
            format!(
                "Tax liability: {tax} on gross income {income} (effective rate: \
                 {effective_rate:.1}%). Marginal bracket: {marginal_rate:.0}%. The \
                 spread between the two reflects income absorbed by lower brackets \
                 and deductions; bracket-boundary positioning moves the marginal \
                 figure first."
            ),
        ),
    };

    Explanation {
        title: title.to_string(),
        body,
        key_points: vec![
            format!("Total tax: {tax}"),
            format!("Effective rate: {effective_rate:.1}%"),
            format!("Marginal rate: {marginal_rate:.0}%"),
        ],
        related_topics: DEFAULT_RELATED.iter().map(|t| t.to_string()).collect(),
        proficiency_level: level,
    }
}

/// Convenience wrapper over [`synthesize_result_explanation`] for a full
/// result record.
pub fn explain_result_impl(result: &TaxComputationResult, level: ProficiencyLevel) -> Explanation {
    synthesize_result_explanation(
        result.gross_income,
        result.total_tax,
        result.effective_rate,
        result.marginal_rate,
        level,
    )
}

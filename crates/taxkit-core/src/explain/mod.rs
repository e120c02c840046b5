//! Explanation selector: resolves a topic key (or a computed result) and a
//! proficiency level to one pre-authored or synthesized explanation.
//!
//! Lookup never fails: an unrecognized topic degrades to a per-level generic
//! fallback, because explanation is a best-effort affordance rather than a
//! correctness-critical computation.

pub mod entries;
pub mod narrative;

use std::sync::LazyLock;

use pyo3::prelude::*;
use regex::Regex;
use tracing::debug;

use crate::errors::TaxkitError;
use crate::models::{Explanation, ProficiencyLevel};

pub use entries::MAX_RELATED_TOPICS;
pub use narrative::{explain_result_impl, synthesize_result_explanation};

static NON_KEY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Normalize a caller-supplied topic or term into a table key: lowercase,
/// with every run of non-alphanumerics collapsed to a single underscore.
pub fn normalize_topic(topic: &str) -> String {
    let lowered = topic.trim().to_lowercase();
    NON_KEY_RE
        .replace_all(&lowered, "_")
        .trim_matches('_')
        .to_string()
}

/// Spellings the backend has historically used for table topics.
fn resolve_alias(key: &str) -> &str {
    match key {
        "tax_brackets" | "brackets" => "progressive_brackets",
        "adjusted_gross_income" => "agi",
        key => key,
    }
}

fn fallback_explanation(topic: &str, level: ProficiencyLevel) -> Explanation {
    let shown = topic.trim();
    let (title, body, key_points) = match level {
        ProficiencyLevel::Novice => (
            format!("About {shown}"),
            format!(
                "We don't have a detailed entry for {shown} yet. This is a tax-related \
                 topic that can affect your return. Try asking about tax brackets, \
                 deductions, credits, filing status, or AGI - those are explained in \
                 simple terms."
            ),
            vec![
                "Topic may affect your tax calculation".to_string(),
                "Consult IRS Publication 17 for details".to_string(),
                "Consider speaking with a tax professional".to_string(),
            ],
        ),
        ProficiencyLevel::Intermediate => (
            format!("Tax Topic: {shown}"),
            format!(
                "No dedicated entry exists for {shown}. Detailed explanations are \
                 available for progressive brackets, itemized vs standard deductions, \
                 tax credits, filing status, and tax planning strategies."
            ),
            vec![
                "Check the available topic list".to_string(),
                "Review the relevant IRS publication".to_string(),
                "Related topics may cover the same ground".to_string(),
            ],
        ),
        ProficiencyLevel::Expert => (
            format!("{} - Tax Topic", shown.to_uppercase()),
            format!(
                "Tax topic: {shown}. Refer to the relevant IRC sections and Treasury \
                 Regulations; review current IRS guidance for interpretation."
            ),
            vec![
                "Check applicable IRC sections".to_string(),
                "Review Treasury Regulations".to_string(),
                "Verify current IRS guidance".to_string(),
            ],
        ),
    };

    Explanation {
        title,
        body,
        key_points,
        related_topics: entries::DEFAULT_RELATED
            .iter()
            .map(|t| t.to_string())
            .collect(),
        proficiency_level: level,
    }
}

/// Resolve a topic to its authored entry at the requested level, or the
/// generic fallback when the topic is unknown.
pub fn explain_topic_impl(topic: &str, level: ProficiencyLevel) -> Explanation {
    let key = normalize_topic(topic);
    let canonical = resolve_alias(&key);

    match entries::TOPIC_TABLE.get(canonical) {
        Some(spec) => {
            let entry = spec.for_level(level);
            Explanation {
                title: entry.title.to_string(),
                body: entry.body.to_string(),
                key_points: entry.key_points.iter().map(|p| p.to_string()).collect(),
                related_topics: spec
                    .related
                    .iter()
                    .take(MAX_RELATED_TOPICS)
                    .map(|t| t.to_string())
                    .collect(),
                proficiency_level: level,
            }
        }
        None => {
            debug!("no explanation entry for topic '{canonical}', serving fallback");
            fallback_explanation(topic, level)
        }
    }
}

/// All topic keys the static table can answer, in table order.
pub fn available_topic_keys() -> Vec<String> {
    entries::TOPIC_TABLE.keys().map(|k| k.to_string()).collect()
}

#[pyfunction]
#[pyo3(signature = (topic, proficiency="novice"))]
pub fn explain_topic(py: Python<'_>, topic: &str, proficiency: &str) -> PyResult<PyObject> {
    let level = ProficiencyLevel::parse_or_novice(proficiency);
    let explanation = explain_topic_impl(topic, level);
    let json_str = serde_json::to_string(&explanation).map_err(TaxkitError::from)?;
    let json_module = py.import("json")?;
    json_module
        .call_method1("loads", (json_str,))
        .map(|o| o.into())
}

#[pyfunction]
#[pyo3(signature = (gross_income, total_tax, effective_rate, marginal_rate, proficiency="novice"))]
pub fn explain_result(
    py: Python<'_>,
    gross_income: f64,
    total_tax: f64,
    effective_rate: f64,
    marginal_rate: f64,
    proficiency: &str,
) -> PyResult<PyObject> {
    let level = ProficiencyLevel::parse_or_novice(proficiency);
    let explanation = synthesize_result_explanation(
        gross_income,
        total_tax,
        effective_rate,
        marginal_rate,
        level,
    );
    let json_str = serde_json::to_string(&explanation).map_err(TaxkitError::from)?;
    let json_module = py.import("json")?;
    json_module
        .call_method1("loads", (json_str,))
        .map(|o| o.into())
}

#[pyfunction]
pub fn available_topics() -> Vec<String> {
    available_topic_keys()
}

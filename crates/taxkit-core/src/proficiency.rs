//! Proficiency tracking: per-user interaction counters and the promotion
//! state machine (novice -> intermediate -> expert).
//!
//! The promotion thresholds are product heuristics, kept as named constants
//! because they are the one place policy intent lives. Promotions are
//! monotonic and advance at most one tier per interaction; no path ever
//! demotes a user.

use std::collections::HashMap;

use indexmap::IndexMap;
use parking_lot::Mutex;
use pyo3::prelude::*;
use tracing::{debug, info};

use crate::errors::TaxkitError;
use crate::models::{ProficiencyLevel, ProficiencyProfile};

/// Minimum interactions before any promotion is evaluated; a sample-size
/// gate against noisy early promotion.
pub const PROMOTION_MIN_INTERACTIONS: i64 = 10;

/// Help-request ratio below which a novice becomes intermediate.
pub const INTERMEDIATE_MAX_HELP_RATE: f64 = 0.10;

/// Help-request ratio below which an intermediate becomes expert.
pub const EXPERT_MAX_HELP_RATE: f64 = 0.05;

/// Evaluate the promotion state machine for the given counters.
///
/// Returns the (possibly unchanged) level. Monotonic: the result is never
/// below the input level.
pub fn advance_level(
    level: ProficiencyLevel,
    interaction_count: i64,
    help_request_count: i64,
) -> ProficiencyLevel {
    if interaction_count <= PROMOTION_MIN_INTERACTIONS {
        return level;
    }
    let help_rate = help_request_count as f64 / interaction_count as f64;
    match level {
        ProficiencyLevel::Novice if help_rate < INTERMEDIATE_MAX_HELP_RATE => {
            ProficiencyLevel::Intermediate
        }
        ProficiencyLevel::Intermediate if help_rate < EXPERT_MAX_HELP_RATE => {
            ProficiencyLevel::Expert
        }
        other => other,
    }
}

/// Record one interaction against a profile and return the updated profile.
///
/// Increments `interaction_count` unconditionally, `help_request_count` only
/// when help was requested, then runs the promotion evaluation. Pure; the
/// caller owns persistence and must serialize concurrent updates for the
/// same user (see [`ProficiencyLedger`]).
pub fn record_interaction_impl(
    profile: &ProficiencyProfile,
    help_requested: bool,
) -> ProficiencyProfile {
    let interaction_count = profile.interaction_count + 1;
    let help_request_count = profile.help_request_count + i64::from(help_requested);
    ProficiencyProfile {
        interaction_count,
        help_request_count,
        proficiency_level: advance_level(
            profile.proficiency_level,
            interaction_count,
            help_request_count,
        ),
    }
}

#[pyfunction]
#[pyo3(signature = (interaction_count=0, help_request_count=0, proficiency_level="novice", help_requested=false))]
pub fn record_interaction(
    py: Python<'_>,
    interaction_count: i64,
    help_request_count: i64,
    proficiency_level: &str,
    help_requested: bool,
) -> PyResult<PyObject> {
    let profile = ProficiencyProfile {
        interaction_count,
        help_request_count,
        proficiency_level: proficiency_level.parse::<ProficiencyLevel>()?,
    };
    let updated = record_interaction_impl(&profile, help_requested);
    let json_str = serde_json::to_string(&updated).map_err(TaxkitError::from)?;
    let json_module = py.import("json")?;
    json_module
        .call_method1("loads", (json_str,))
        .map(|o| o.into())
}

#[pyfunction]
pub fn advance_proficiency(
    proficiency_level: &str,
    interaction_count: i64,
    help_request_count: i64,
) -> PyResult<String> {
    let level = proficiency_level.parse::<ProficiencyLevel>()?;
    Ok(advance_level(level, interaction_count, help_request_count)
        .as_str()
        .to_string())
}

// ---------------------------------------------------------------------------
// ProficiencyLedger
// ---------------------------------------------------------------------------

/// In-memory profile store serializing same-user updates.
///
/// Profile state is owned by whoever holds the ledger and injected into this
/// core by reference; the mutex makes `record_interaction` atomic per
/// ledger, so concurrent calls for the same user cannot lose counter
/// updates. Calls for different users are independent.
#[pyclass]
pub struct ProficiencyLedger {
    profiles: Mutex<IndexMap<String, ProficiencyProfile>>,
}

impl Default for ProficiencyLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[pymethods]
impl ProficiencyLedger {
    #[new]
    pub fn new() -> Self {
        Self {
            profiles: Mutex::new(IndexMap::new()),
        }
    }

    /// Record one interaction for `user_id`, creating a fresh novice profile
    /// on first sight. Returns the updated
    /// (interaction_count, help_request_count, proficiency_level) triple.
    #[pyo3(signature = (user_id, help_requested=false))]
    pub fn record_interaction(&self, user_id: &str, help_requested: bool) -> (i64, i64, String) {
        let mut profiles = self.profiles.lock();
        let current = profiles
            .get(user_id)
            .copied()
            .unwrap_or_default();
        let updated = record_interaction_impl(&current, help_requested);
        if updated.proficiency_level != current.proficiency_level {
            info!(
                "user {} promoted from {} to {} after {} interactions",
                user_id,
                current.proficiency_level,
                updated.proficiency_level,
                updated.interaction_count
            );
        } else {
            debug!(
                "recorded interaction for user {}: count={} help={}",
                user_id, updated.interaction_count, updated.help_request_count
            );
        }
        profiles.insert(user_id.to_string(), updated);
        (
            updated.interaction_count,
            updated.help_request_count,
            updated.proficiency_level.as_str().to_string(),
        )
    }

    /// Current counters and level for `user_id`, if the user has been seen.
    pub fn get(&self, user_id: &str) -> Option<(i64, i64, String)> {
        let profiles = self.profiles.lock();
        profiles.get(user_id).map(|p| {
            (
                p.interaction_count,
                p.help_request_count,
                p.proficiency_level.as_str().to_string(),
            )
        })
    }

    pub fn stats(&self) -> HashMap<String, i64> {
        let profiles = self.profiles.lock();
        let mut result = HashMap::new();
        result.insert("users".to_string(), profiles.len() as i64);
        result.insert(
            "experts".to_string(),
            profiles
                .values()
                .filter(|p| p.proficiency_level == ProficiencyLevel::Expert)
                .count() as i64,
        );
        result
    }
}

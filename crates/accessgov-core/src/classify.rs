//! # Drift Classification
//!
//! The comparison at the center of the pipeline: match one observed
//! `(user, system, role)` record against the policy-declared allow-list
//! for its system and classify it as compliant, unexpected-role, or
//! unknown-system.
//!
//! Comparison is exact string equality against the full `Expected
//! Access` value. A role granted under a different naming convention
//! than the policy string is always flagged, even if semantically
//! equivalent — a known fragility of the rule, not a feature.

use crate::model::{DriftIssue, Finding, ObservedAccess, PolicyTable};

/// Classify one observed record against the policy table.
///
/// Returns `None` for a compliant record. Pure function of its inputs.
pub fn classify(policy: &PolicyTable, record: &ObservedAccess) -> Option<Finding> {
    let allow_list = policy.expected_for(&record.system);

    if allow_list.is_empty() {
        // No governing policy at all — distinct in intent (though not in
        // representation) from "policy says no role is allowed".
        return Some(Finding::new(
            &record.user,
            &record.system,
            DriftIssue::UnknownSystem,
        ));
    }

    if !allow_list.contains(&record.role.as_str()) {
        return Some(Finding::new(
            &record.user,
            &record.system,
            DriftIssue::UnexpectedRole(record.role.clone()),
        ));
    }

    None
}

/// Classify every observed record, collecting findings in input order.
///
/// The output length equals the number of non-compliant records and
/// never exceeds the input length.
pub fn audit(policy: &PolicyTable, records: &[ObservedAccess]) -> Vec<Finding> {
    records
        .iter()
        .filter_map(|record| classify(policy, record))
        .collect()
}

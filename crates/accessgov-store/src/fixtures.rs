//! # Demo Fixtures
//!
//! Deterministic sample data for demonstration and testing: a three-row
//! policy table and a four-record observed dataset of which two records
//! are intentionally drifted. Writing the fixtures is idempotent and
//! overwrites any prior fixture files.

use accessgov_core::{ObservedAccess, PolicyEntry, PolicyTable};

use crate::artifacts::{write_observed, write_policy};
use crate::error::StoreResult;
use crate::DataDir;

/// The declared policy table used by the demo pipeline.
pub fn demo_policy() -> PolicyTable {
    PolicyTable::new(vec![
        PolicyEntry::new("AWS", "Developers", "Developer-ReadOnly"),
        PolicyEntry::new("AWS", "SRE", "SRE-Admin"),
        PolicyEntry::new("JIRA", "Finance", "Finance-ReadOnly"),
    ])
}

/// The observed access state used by the demo pipeline.
///
/// bob.sre holds a role outside the AWS allow-list and dave.intern holds
/// a role outside the JIRA allow-list; the other two records comply.
pub fn demo_observed() -> Vec<ObservedAccess> {
    vec![
        ObservedAccess::new("alice.dev", "AWS", "Developer-ReadOnly"),
        ObservedAccess::new("bob.sre", "AWS", "AdministratorAccess"),
        ObservedAccess::new("carol.finance", "JIRA", "Finance-ReadOnly"),
        ObservedAccess::new("dave.intern", "JIRA", "jira-sre-admins"),
    ]
}

/// Write both fixture artifacts, creating the data directory if needed.
pub fn write_demo_fixtures(dir: &DataDir) -> StoreResult<()> {
    write_policy(dir, &demo_policy())?;
    write_observed(dir, &demo_observed())?;
    tracing::info!(dir = %dir.root().display(), "demo fixtures written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::{load_observed, load_policy};

    #[test]
    fn fixtures_write_both_artifacts() {
        let tmp = tempfile::tempdir().unwrap();
        let data = DataDir::new(tmp.path().join("data"));
        write_demo_fixtures(&data).unwrap();

        assert_eq!(load_policy(&data).unwrap(), demo_policy());
        assert_eq!(load_observed(&data).unwrap(), demo_observed());
    }

    #[test]
    fn fixtures_are_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let data = DataDir::new(tmp.path().join("data"));
        write_demo_fixtures(&data).unwrap();
        let first = std::fs::read_to_string(data.policy_path()).unwrap();
        write_demo_fixtures(&data).unwrap();
        let second = std::fs::read_to_string(data.policy_path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn demo_dataset_contains_exactly_two_drifted_records() {
        let policy = demo_policy();
        let findings = accessgov_core::audit(&policy, &demo_observed());
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].user, "bob.sre");
        assert_eq!(findings[1].user, "dave.intern");
    }
}

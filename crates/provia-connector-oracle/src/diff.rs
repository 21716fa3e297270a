//! Membership diffing
//!
//! Computes what to revoke and what to grant from a desired membership
//! list and the current membership snapshot.

use std::collections::HashSet;

/// The set difference between desired and current membership.
///
/// Invariants: `to_grant` and `to_revoke` are disjoint, and neither
/// contains membership already matching the desired state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipDiff {
    /// Names to grant, in desired-list order.
    pub to_grant: Vec<String>,
    /// Names to revoke, in current-snapshot order.
    pub to_revoke: Vec<String>,
}

impl MembershipDiff {
    /// Diff desired membership against the current snapshot.
    ///
    /// `to_revoke` is current minus desired, `to_grant` is desired
    /// minus current. Membership present on both sides produces no
    /// statement at all.
    #[must_use]
    pub fn between(desired: &[String], current: &[String]) -> Self {
        let desired_set: HashSet<&str> = desired.iter().map(String::as_str).collect();
        let current_set: HashSet<&str> = current.iter().map(String::as_str).collect();

        let to_revoke = current
            .iter()
            .filter(|name| !desired_set.contains(name.as_str()))
            .cloned()
            .collect();
        let to_grant = desired
            .iter()
            .filter(|name| !current_set.contains(name.as_str()))
            .cloned()
            .collect();

        Self { to_grant, to_revoke }
    }

    /// Revoke every current membership, grant nothing.
    ///
    /// The explicit-empty-attribute policy: the caller asked for no
    /// membership at all.
    #[must_use]
    pub fn revoke_all(current: &[String]) -> Self {
        Self {
            to_grant: Vec::new(),
            to_revoke: current.to_vec(),
        }
    }

    /// True when nothing needs granting or revoking.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_grant.is_empty() && self.to_revoke.is_empty()
    }
}

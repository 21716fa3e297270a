//! Oracle account-administration connector core.
//!
//! Reconciles a requested account state against the database's current
//! state: profile attribute changes, role membership, and system or
//! object privileges. The reconcilers compute the minimal DDL for a
//! request and execute it as a single transaction through injected
//! collaborators, so this crate stays free of driver and catalog code.
//!
//! Multi-valued attributes carry tri-state meaning. An absent `roles`
//! or `privileges` attribute leaves membership untouched, an empty or
//! null one revokes everything, and a populated one is diffed against
//! current state with revokes ordered before grants.

pub mod attributes;
pub mod config;
pub mod diff;
pub mod incremental;
pub mod statement;
pub mod update;
pub mod validate;

mod txn;

#[cfg(test)]
mod test_support;

pub use config::{CaseSensitivityRules, IdentifierKind, QuoteMode};
pub use diff::MembershipDiff;
pub use incremental::IncrementalReconciler;
pub use statement::GrantRevokeBuilder;
pub use update::UpdateReconciler;
pub use validate::AttributeValidator;

//! Connector framework traits
//!
//! Collaborator seams and capability traits for account reconciliation.
//! Everything here is synchronous: one reconciliation call owns one
//! connection and transaction exclusively for its duration, and no
//! operation suspends cooperatively.

use crate::error::ConnectorResult;
use crate::operation::{AccountId, AttributeSet, Statement};

/// Read-only view of an account's current state in the target system.
///
/// Each read is consistent with the open transaction's isolation; the
/// reconcilers call each method at most once per operation and never
/// cache results across requests.
pub trait CurrentStateReader: Send + Sync {
    /// Check whether the account exists.
    fn exists(&self, account: &AccountId) -> ConnectorResult<bool>;

    /// Roles currently granted to the account, in catalog order.
    fn current_roles(&self, account: &AccountId) -> ConnectorResult<Vec<String>>;

    /// Privileges currently granted to the account, in catalog order.
    fn current_privileges(&self, account: &AccountId) -> ConnectorResult<Vec<String>>;
}

/// Turns the profile portion of a request into zero or one alter
/// statement.
///
/// Parsing the raw attribute payload into a validated profile and
/// diffing it against the account's current profile both live behind
/// this seam; the reconciler only sees "a statement" or "no change".
pub trait ProfileStatementBuilder: Send + Sync {
    /// Build the alter statement for the account's profile attributes.
    ///
    /// Returns `None` when the desired profile matches the current one
    /// (or when no profile attribute is in the request).
    fn build_alter_statement(
        &self,
        account: &AccountId,
        attrs: &AttributeSet,
    ) -> ConnectorResult<Option<Statement>>;
}

/// Executes statements against one open transaction.
///
/// The executor is created fresh per reconciliation call and owns that
/// call's transaction. Once execution begins the only two outcomes are
/// full commit or full rollback.
pub trait StatementExecutor: Send {
    /// Execute one statement inside the open transaction.
    fn execute(&mut self, statement: &Statement) -> ConnectorResult<()>;

    /// Commit the transaction.
    fn commit(&mut self) -> ConnectorResult<()>;

    /// Roll back the transaction.
    ///
    /// Callers treat rollback as best-effort: a rollback failure is
    /// logged and must never mask the error that triggered it.
    fn rollback(&mut self) -> ConnectorResult<()>;
}

/// Capability for full-update reconciliation of an account.
pub trait UpdateOp {
    /// Bring the account's target-side state to the requested state.
    ///
    /// # Returns
    /// The account identifier, unchanged (updates never rename).
    fn update(&mut self, account: &AccountId, attrs: &AttributeSet) -> ConnectorResult<AccountId>;
}

/// Capability for incremental add/remove of multi-valued attribute
/// values (roles and privileges only).
pub trait UpdateAttributeValuesOp {
    /// Grant every listed role and privilege to the account.
    fn add_attribute_values(
        &mut self,
        account: &AccountId,
        attrs: &AttributeSet,
    ) -> ConnectorResult<AccountId>;

    /// Revoke every listed role and privilege from the account.
    fn remove_attribute_values(
        &mut self,
        account: &AccountId,
        attrs: &AttributeSet,
    ) -> ConnectorResult<AccountId>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConnectorError;

    // Minimal in-memory reader to exercise the seam.
    struct StaticReader {
        roles: Vec<String>,
    }

    impl CurrentStateReader for StaticReader {
        fn exists(&self, account: &AccountId) -> ConnectorResult<bool> {
            Ok(account.as_str() == "SCOTT")
        }

        fn current_roles(&self, _account: &AccountId) -> ConnectorResult<Vec<String>> {
            Ok(self.roles.clone())
        }

        fn current_privileges(&self, _account: &AccountId) -> ConnectorResult<Vec<String>> {
            Err(ConnectorError::database("no catalog"))
        }
    }

    #[test]
    fn test_reader_seam() {
        let reader = StaticReader {
            roles: vec!["DBA".to_string()],
        };

        assert!(reader.exists(&AccountId::new("SCOTT")).unwrap());
        assert!(!reader.exists(&AccountId::new("NOBODY")).unwrap());
        assert_eq!(
            reader.current_roles(&AccountId::new("SCOTT")).unwrap(),
            vec!["DBA".to_string()]
        );
        assert!(reader.current_privileges(&AccountId::new("SCOTT")).is_err());
    }

    #[test]
    fn test_object_safety() {
        // The collaborator traits must stay object safe so reconcilers
        // can hold boxed test doubles.
        fn _takes_reader(_: &dyn CurrentStateReader) {}
        fn _takes_profile(_: &dyn ProfileStatementBuilder) {}
        fn _takes_executor(_: &mut dyn StatementExecutor) {}
    }
}

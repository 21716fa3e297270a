//! Grant/revoke statement building
//!
//! Pure statement generation for role and privilege membership. No
//! I/O, no state beyond the quoting configuration; execution is the
//! transactional executor's job.

use provia_connector::operation::{AccountId, Statement};

use crate::config::{CaseSensitivityRules, IdentifierKind};

/// Builds grant and revoke statements for roles and privileges.
///
/// Each builder method produces exactly one statement per input name,
/// preserving input order. Empty input yields an empty list, not an
/// error: deciding whether "nothing to grant" or "revoke everything"
/// was meant is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct GrantRevokeBuilder {
    rules: CaseSensitivityRules,
}

impl GrantRevokeBuilder {
    /// Create a builder with the given case-sensitivity rules.
    #[must_use]
    pub fn new(rules: CaseSensitivityRules) -> Self {
        Self { rules }
    }

    /// One `grant <role> to <account>` statement per role.
    #[must_use]
    pub fn grant_roles(&self, account: &AccountId, roles: &[String]) -> Vec<Statement> {
        self.build(account, roles, IdentifierKind::Role, Verb::Grant)
    }

    /// One `revoke <role> from <account>` statement per role.
    #[must_use]
    pub fn revoke_roles(&self, account: &AccountId, roles: &[String]) -> Vec<Statement> {
        self.build(account, roles, IdentifierKind::Role, Verb::Revoke)
    }

    /// One `grant <privilege> to <account>` statement per privilege.
    #[must_use]
    pub fn grant_privileges(&self, account: &AccountId, privileges: &[String]) -> Vec<Statement> {
        self.build(account, privileges, IdentifierKind::Privilege, Verb::Grant)
    }

    /// One `revoke <privilege> from <account>` statement per privilege.
    #[must_use]
    pub fn revoke_privileges(&self, account: &AccountId, privileges: &[String]) -> Vec<Statement> {
        self.build(account, privileges, IdentifierKind::Privilege, Verb::Revoke)
    }

    fn build(
        &self,
        account: &AccountId,
        names: &[String],
        kind: IdentifierKind,
        verb: Verb,
    ) -> Vec<Statement> {
        let subject = self
            .rules
            .quote_if_needed(account.as_str(), IdentifierKind::Account);
        names
            .iter()
            .map(|name| {
                let object = self.rules.quote_if_needed(name, kind);
                match verb {
                    Verb::Grant => Statement::new(format!("grant {object} to {subject}")),
                    Verb::Revoke => Statement::new(format!("revoke {object} from {subject}")),
                }
            })
            .collect()
    }
}

#[derive(Clone, Copy)]
enum Verb {
    Grant,
    Revoke,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> GrantRevokeBuilder {
        GrantRevokeBuilder::new(CaseSensitivityRules::default())
    }

    fn sql(statements: &[Statement]) -> Vec<&str> {
        statements.iter().map(Statement::sql).collect()
    }

    #[test]
    fn test_grant_roles() {
        let account = AccountId::new("testUser");
        let roles = vec!["myRole1".to_string(), "myRole2".to_string()];

        let statements = builder().grant_roles(&account, &roles);
        assert_eq!(
            sql(&statements),
            vec![
                "grant \"myRole1\" to \"testUser\"",
                "grant \"myRole2\" to \"testUser\"",
            ]
        );
    }

    #[test]
    fn test_revoke_roles_is_grant_inverse() {
        let account = AccountId::new("testUser");
        let roles = vec!["myRole1".to_string(), "myRole2".to_string()];

        let statements = builder().revoke_roles(&account, &roles);
        assert_eq!(
            sql(&statements),
            vec![
                "revoke \"myRole1\" from \"testUser\"",
                "revoke \"myRole2\" from \"testUser\"",
            ]
        );
    }

    #[test]
    fn test_grant_privileges_unquoted() {
        let account = AccountId::new("testUser");
        let privileges = vec!["CREATE SESSION".to_string(), "SELECT ON MYTABLE".to_string()];

        let statements = builder().grant_privileges(&account, &privileges);
        assert_eq!(
            sql(&statements),
            vec![
                "grant CREATE SESSION to \"testUser\"",
                "grant SELECT ON MYTABLE to \"testUser\"",
            ]
        );
    }

    #[test]
    fn test_revoke_privileges_unquoted() {
        let account = AccountId::new("testUser");
        let privileges = vec!["CREATE SESSION".to_string(), "SELECT ON MYTABLE".to_string()];

        let statements = builder().revoke_privileges(&account, &privileges);
        assert_eq!(
            sql(&statements),
            vec![
                "revoke CREATE SESSION from \"testUser\"",
                "revoke SELECT ON MYTABLE from \"testUser\"",
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        let account = AccountId::new("testUser");
        assert!(builder().grant_roles(&account, &[]).is_empty());
        assert!(builder().revoke_roles(&account, &[]).is_empty());
        assert!(builder().grant_privileges(&account, &[]).is_empty());
        assert!(builder().revoke_privileges(&account, &[]).is_empty());
    }

    #[test]
    fn test_input_order_preserved() {
        let account = AccountId::new("u");
        let roles = vec!["z".to_string(), "a".to_string(), "m".to_string()];

        let statements = builder().grant_roles(&account, &roles);
        assert_eq!(
            sql(&statements),
            vec![
                "grant \"z\" to \"u\"",
                "grant \"a\" to \"u\"",
                "grant \"m\" to \"u\"",
            ]
        );
    }
}

//! Oracle connector configuration
//!
//! Case-sensitivity rules deciding which identifier kinds get quoted
//! in generated DDL.

use serde::{Deserialize, Serialize};

use provia_connector::error::{ConnectorError, ConnectorResult};

/// Kind of identifier appearing in a generated statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// Account (user) name.
    Account,
    /// Role name.
    Role,
    /// Privilege clause. May be multi-word ("SELECT ON MYTABLE") and is
    /// never a single quotable identifier.
    Privilege,
}

/// How an identifier kind is rendered into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuoteMode {
    /// Wrap in double quotes, preserving case. Embedded quotes are
    /// doubled.
    #[default]
    Quoted,
    /// Pass through verbatim.
    Plain,
}

/// Per-kind quoting configuration for generated statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSensitivityRules {
    /// Quoting for account names.
    #[serde(default)]
    pub account: QuoteMode,

    /// Quoting for role names.
    #[serde(default)]
    pub role: QuoteMode,

    /// Quoting for privilege clauses. Defaults to `Plain`: a privilege
    /// like `SELECT ON MYTABLE` is a grant clause, not an identifier.
    #[serde(default = "default_privilege_mode")]
    pub privilege: QuoteMode,
}

fn default_privilege_mode() -> QuoteMode {
    QuoteMode::Plain
}

impl Default for CaseSensitivityRules {
    fn default() -> Self {
        Self {
            account: QuoteMode::Quoted,
            role: QuoteMode::Quoted,
            privilege: QuoteMode::Plain,
        }
    }
}

impl CaseSensitivityRules {
    /// Create rules with the default Oracle behavior: accounts and
    /// roles quoted, privileges plain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quoting mode for account names.
    #[must_use]
    pub fn with_account_mode(mut self, mode: QuoteMode) -> Self {
        self.account = mode;
        self
    }

    /// Set the quoting mode for role names.
    #[must_use]
    pub fn with_role_mode(mut self, mode: QuoteMode) -> Self {
        self.role = mode;
        self
    }

    /// Set the quoting mode for privilege clauses.
    #[must_use]
    pub fn with_privilege_mode(mut self, mode: QuoteMode) -> Self {
        self.privilege = mode;
        self
    }

    /// Validate the configuration.
    ///
    /// Quoting privileges is rejected: a multi-word grant clause wrapped
    /// in quotes is never valid DDL.
    pub fn validate(&self) -> ConnectorResult<()> {
        if self.privilege == QuoteMode::Quoted {
            return Err(ConnectorError::invalid_configuration(
                "privilege clauses cannot be quoted",
            ));
        }
        Ok(())
    }

    /// Render an identifier per the configured mode for its kind.
    #[must_use]
    pub fn quote_if_needed(&self, identifier: &str, kind: IdentifierKind) -> String {
        let mode = match kind {
            IdentifierKind::Account => self.account,
            IdentifierKind::Role => self.role,
            IdentifierKind::Privilege => self.privilege,
        };
        match mode {
            QuoteMode::Quoted => format!("\"{}\"", identifier.replace('"', "\"\"")),
            QuoteMode::Plain => identifier.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = CaseSensitivityRules::new();
        assert_eq!(rules.account, QuoteMode::Quoted);
        assert_eq!(rules.role, QuoteMode::Quoted);
        assert_eq!(rules.privilege, QuoteMode::Plain);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_quote_if_needed() {
        let rules = CaseSensitivityRules::new();
        assert_eq!(
            rules.quote_if_needed("testUser", IdentifierKind::Account),
            "\"testUser\""
        );
        assert_eq!(
            rules.quote_if_needed("myRole1", IdentifierKind::Role),
            "\"myRole1\""
        );
        assert_eq!(
            rules.quote_if_needed("SELECT ON MYTABLE", IdentifierKind::Privilege),
            "SELECT ON MYTABLE"
        );
    }

    #[test]
    fn test_embedded_quotes_doubled() {
        let rules = CaseSensitivityRules::new();
        assert_eq!(
            rules.quote_if_needed("odd\"name", IdentifierKind::Account),
            "\"odd\"\"name\""
        );
    }

    #[test]
    fn test_plain_account_mode() {
        let rules = CaseSensitivityRules::new().with_account_mode(QuoteMode::Plain);
        assert_eq!(
            rules.quote_if_needed("SCOTT", IdentifierKind::Account),
            "SCOTT"
        );
    }

    #[test]
    fn test_quoted_privilege_rejected() {
        let rules = CaseSensitivityRules::new().with_privilege_mode(QuoteMode::Quoted);
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_rules_serialization() {
        let rules = CaseSensitivityRules::new().with_role_mode(QuoteMode::Plain);
        let json = serde_json::to_string(&rules).unwrap();
        let parsed: CaseSensitivityRules = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rules);
    }

    #[test]
    fn test_rules_deserialization_defaults() {
        let parsed: CaseSensitivityRules = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, CaseSensitivityRules::default());
    }
}

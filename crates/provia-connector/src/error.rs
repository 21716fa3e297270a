//! Connector framework error types
//!
//! Error taxonomy for account reconciliation, split between validation
//! errors raised before any target-system I/O and failures raised while
//! a transaction is open.

use thiserror::Error;

use crate::operation::{AccountId, OperationKind};

/// Error that can occur during account reconciliation.
#[derive(Debug, Error)]
pub enum ConnectorError {
    // Validation errors (raised before any target-system I/O)
    /// Attribute is not legal for the requested operation.
    #[error("attribute '{attribute}' not supported for {operation}")]
    UnsupportedAttribute {
        attribute: String,
        operation: OperationKind,
    },

    /// A required attribute value is absent (e.g. a null boolean flag).
    #[error("attribute '{attribute}' requires a value")]
    MissingValue { attribute: String },

    /// An attribute value has the wrong type for the attribute.
    #[error("attribute '{attribute}' has a value of the wrong type")]
    InvalidValueType { attribute: String },

    /// Un-expiring a password without supplying a new password.
    #[error("no password specified when unexpiring password")]
    PasswordRequiredToUnexpire,

    // Precondition errors (after a read-only check, before any mutation)
    /// Target account does not exist.
    #[error("account not found: {account}")]
    UnknownAccount { account: AccountId },

    // Execution errors (transaction open; rolled back before surfacing)
    /// The target database rejected a generated statement.
    #[error("statement failed: {message}")]
    Statement {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Commit or rollback-level failure.
    #[error("transaction failed: {message}")]
    Transaction {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Reading current state from the target catalog failed.
    #[error("database error: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Configuration errors
    /// Connector configuration is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl ConnectorError {
    /// Check if this error was raised by request validation, before any
    /// target-system I/O. Validation failures leave the database untouched.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ConnectorError::UnsupportedAttribute { .. }
                | ConnectorError::MissingValue { .. }
                | ConnectorError::InvalidValueType { .. }
                | ConnectorError::PasswordRequiredToUnexpire
        )
    }

    /// Get an error code for classification.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            ConnectorError::UnsupportedAttribute { .. } => "UNSUPPORTED_ATTRIBUTE",
            ConnectorError::MissingValue { .. } => "MISSING_VALUE",
            ConnectorError::InvalidValueType { .. } => "INVALID_VALUE_TYPE",
            ConnectorError::PasswordRequiredToUnexpire => "PASSWORD_REQUIRED_TO_UNEXPIRE",
            ConnectorError::UnknownAccount { .. } => "UNKNOWN_ACCOUNT",
            ConnectorError::Statement { .. } => "STATEMENT_ERROR",
            ConnectorError::Transaction { .. } => "TRANSACTION_ERROR",
            ConnectorError::Database { .. } => "DATABASE_ERROR",
            ConnectorError::InvalidConfiguration { .. } => "INVALID_CONFIG",
        }
    }

    // Convenience constructors

    /// Create an unsupported-attribute error.
    pub fn unsupported_attribute(attribute: impl Into<String>, operation: OperationKind) -> Self {
        ConnectorError::UnsupportedAttribute {
            attribute: attribute.into(),
            operation,
        }
    }

    /// Create a missing-value error.
    pub fn missing_value(attribute: impl Into<String>) -> Self {
        ConnectorError::MissingValue {
            attribute: attribute.into(),
        }
    }

    /// Create an invalid-value-type error.
    pub fn invalid_value_type(attribute: impl Into<String>) -> Self {
        ConnectorError::InvalidValueType {
            attribute: attribute.into(),
        }
    }

    /// Create an unknown-account error.
    pub fn unknown_account(account: &AccountId) -> Self {
        ConnectorError::UnknownAccount {
            account: account.clone(),
        }
    }

    /// Create a statement error.
    pub fn statement_failed(message: impl Into<String>) -> Self {
        ConnectorError::Statement {
            message: message.into(),
            source: None,
        }
    }

    /// Create a statement error with source.
    pub fn statement_failed_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ConnectorError::Statement {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a transaction error.
    pub fn transaction_failed(message: impl Into<String>) -> Self {
        ConnectorError::Transaction {
            message: message.into(),
            source: None,
        }
    }

    /// Create a transaction error with source.
    pub fn transaction_failed_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ConnectorError::Transaction {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        ConnectorError::Database {
            message: message.into(),
            source: None,
        }
    }

    /// Create a database error with source.
    pub fn database_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ConnectorError::Database {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        ConnectorError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// Result type for connector operations.
pub type ConnectorResult<T> = Result<T, ConnectorError>;

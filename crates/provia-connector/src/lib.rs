//! # Connector Framework
//!
//! Core abstractions for provisioning account changes to external
//! systems: account identifiers, the request attribute model, the
//! reconciliation error taxonomy, and the collaborator seams that
//! target-system connectors implement.
//!
//! ## Architecture
//!
//! Target connectors receive their collaborators as injected trait
//! objects rather than concrete dependencies:
//!
//! - [`traits::CurrentStateReader`] - existence and membership reads
//! - [`traits::ProfileStatementBuilder`] - optional profile alter statement
//! - [`traits::StatementExecutor`] - transactional statement execution
//!
//! and expose their operations through capability traits
//! ([`traits::UpdateOp`], [`traits::UpdateAttributeValuesOp`]).
//!
//! ## Crate Organization
//!
//! - [`error`] - Error taxonomy with validation/execution classification
//! - [`operation`] - Operation types (`AccountId`, `AttributeSet`,
//!   `ListState`, `Statement`, `StatementPlan`)
//! - [`traits`] - Collaborator seams and capability traits

pub mod error;
pub mod operation;
pub mod traits;

/// Prelude module for convenient imports.
///
/// ```
/// use provia_connector::prelude::*;
/// ```
pub mod prelude {
    // Error handling
    pub use crate::error::{ConnectorError, ConnectorResult};

    // Operations
    pub use crate::operation::{
        AccountId, AttributeSet, AttributeValue, ListState, OperationKind, Statement,
        StatementPlan,
    };

    // Traits
    pub use crate::traits::{
        CurrentStateReader, ProfileStatementBuilder, StatementExecutor, UpdateAttributeValuesOp,
        UpdateOp,
    };
}

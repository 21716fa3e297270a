//! Request attribute validation
//!
//! Classifies requested attributes as legal or illegal per operation
//! kind and enforces cross-attribute preconditions. Validation runs
//! before any target-system I/O; a failure here leaves the database
//! untouched.

use provia_connector::error::{ConnectorError, ConnectorResult};
use provia_connector::operation::{AttributeSet, AttributeValue, OperationKind};

use crate::attributes;

/// Validates request attribute sets per operation kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeValidator;

impl AttributeValidator {
    /// Create a validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate attributes for a full update.
    ///
    /// Every name must be updatable (the read-only expiration and
    /// disable dates are rejected), and the membership attributes must
    /// carry string values: an explicitly empty list means revoke-all
    /// downstream, so a wrongly-typed value is rejected here rather
    /// than acted on. A present `passwordExpired` flag must carry a
    /// non-null boolean, and un-expiring (`false`) also requires a
    /// non-empty new password in the same request.
    pub fn check_update(&self, attrs: &AttributeSet) -> ConnectorResult<()> {
        for name in attrs.names() {
            if !attributes::UPDATABLE.contains(&name) {
                return Err(ConnectorError::unsupported_attribute(
                    name,
                    OperationKind::Update,
                ));
            }
        }

        check_membership_types(attrs)?;

        if let Some(expired) = attrs.get(attributes::PASSWORD_EXPIRED) {
            let Some(flag) = expired.as_boolean() else {
                return Err(ConnectorError::missing_value(attributes::PASSWORD_EXPIRED));
            };
            // Un-expiring only works with a fresh password; the database
            // would otherwise keep the expired one in force.
            if !flag && !has_nonempty_password(attrs) {
                return Err(ConnectorError::PasswordRequiredToUnexpire);
            }
        }

        Ok(())
    }

    /// Validate attributes for incremental add/remove.
    ///
    /// Only role and privilege membership can be added to or removed
    /// from; incremental operations never touch the profile.
    pub fn check_incremental(
        &self,
        attrs: &AttributeSet,
        kind: OperationKind,
    ) -> ConnectorResult<()> {
        for name in attrs.names() {
            if name != attributes::ROLES && name != attributes::PRIVILEGES {
                return Err(ConnectorError::unsupported_attribute(name, kind));
            }
        }
        check_membership_types(attrs)
    }
}

fn check_membership_types(attrs: &AttributeSet) -> ConnectorResult<()> {
    attrs.list_state(attributes::ROLES)?;
    attrs.list_state(attributes::PRIVILEGES)?;
    Ok(())
}

fn has_nonempty_password(attrs: &AttributeSet) -> bool {
    match attrs.get(attributes::PASSWORD) {
        Some(AttributeValue::String(password)) => !password.is_empty(),
        _ => false,
    }
}

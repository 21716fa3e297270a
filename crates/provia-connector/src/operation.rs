//! Connector framework operation types
//!
//! Types for account-administration operations: account identifiers,
//! attribute sets, multi-valued attribute states, and statement plans.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{ConnectorError, ConnectorResult};

/// Identifier of an account in a target system.
///
/// Opaque to the framework; the target connector decides what it means
/// (a database login name, an LDAP DN, a REST resource id). Immutable
/// once an operation begins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new account identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A value for an attribute, which may be single or multi-valued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// No value (null).
    Null,
    /// A single string value.
    String(String),
    /// A single integer value.
    Integer(i64),
    /// A single boolean value.
    Boolean(bool),
    /// Multiple values.
    Array(Vec<AttributeValue>),
}

impl AttributeValue {
    /// Check if this is a null value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    /// Get as a string if this is a single string value.
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as a boolean if this is a boolean value.
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            AttributeValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(i: i64) -> Self {
        AttributeValue::Integer(i)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Boolean(b)
    }
}

impl<T: Into<AttributeValue>> From<Vec<T>> for AttributeValue {
    fn from(vec: Vec<T>) -> Self {
        AttributeValue::Array(vec.into_iter().map(Into::into).collect())
    }
}

/// State of a multi-valued attribute in a request.
///
/// The three states carry different reconciliation semantics: an absent
/// attribute means "leave membership untouched", an explicitly empty one
/// means "revoke everything", and a non-empty one means "diff against
/// current membership and apply". The distinction is modeled explicitly
/// so the policy stays visible at call sites instead of hiding behind
/// emptiness checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    /// The attribute was not part of the request.
    Absent,
    /// The attribute was present with no values (null or empty list).
    Empty,
    /// The attribute was present with at least one value.
    Present(Vec<String>),
}

impl ListState {
    /// Collapse to a plain value list.
    ///
    /// `Absent` and `Empty` both yield an empty list; callers that need
    /// to distinguish them must match on the state instead.
    #[must_use]
    pub fn values(self) -> Vec<String> {
        match self {
            ListState::Absent | ListState::Empty => Vec::new(),
            ListState::Present(values) => values,
        }
    }

    /// Check whether the attribute was part of the request at all.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, ListState::Absent)
    }
}

/// A set of request attributes, keyed by attribute name.
///
/// Built once per request and read-only during reconciliation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeSet {
    /// Map of attribute name to attribute value(s).
    #[serde(flatten)]
    attributes: HashMap<String, AttributeValue>,
}

impl AttributeSet {
    /// Create a new empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            attributes: HashMap::new(),
        }
    }

    /// Set an attribute value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Set an attribute using builder pattern.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Get a single-valued string attribute.
    #[must_use]
    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttributeValue::as_string)
    }

    /// Check if an attribute exists.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Get all attribute names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Get the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterate over all attributes.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.attributes.iter()
    }

    /// Resolve the tri-state of a multi-valued string attribute.
    ///
    /// A missing key is `Absent`. A null value or an empty array is
    /// `Empty`. A single string or an array of strings is `Present`.
    /// Any other value type is an error: `Empty` carries revoke-all
    /// semantics downstream, so a type-confused value must never
    /// collapse into it.
    pub fn list_state(&self, name: &str) -> ConnectorResult<ListState> {
        match self.attributes.get(name) {
            None => Ok(ListState::Absent),
            Some(AttributeValue::Null) => Ok(ListState::Empty),
            Some(AttributeValue::String(s)) => Ok(ListState::Present(vec![s.clone()])),
            Some(AttributeValue::Array(values)) => {
                let mut strings = Vec::with_capacity(values.len());
                for value in values {
                    match value.as_string() {
                        Some(s) => strings.push(s.to_string()),
                        None => return Err(ConnectorError::invalid_value_type(name)),
                    }
                }
                if strings.is_empty() {
                    Ok(ListState::Empty)
                } else {
                    Ok(ListState::Present(strings))
                }
            }
            Some(_) => Err(ConnectorError::invalid_value_type(name)),
        }
    }

    /// A copy safe for logging: values of password-bearing attributes
    /// are masked, everything else passes through.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let attributes = self
            .attributes
            .iter()
            .map(|(name, value)| {
                if name.to_lowercase().contains("password") && !value.is_null() {
                    (name.clone(), AttributeValue::String("***REDACTED***".to_string()))
                } else {
                    (name.clone(), value.clone())
                }
            })
            .collect();
        Self { attributes }
    }
}

impl FromIterator<(String, AttributeValue)> for AttributeSet {
    fn from_iter<T: IntoIterator<Item = (String, AttributeValue)>>(iter: T) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

/// A single generated SQL statement.
///
/// Statements are generated, never parsed back; the text is opaque to
/// everything downstream of the builder that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Statement(String);

impl Statement {
    /// Create a statement from SQL text.
    pub fn new(sql: impl Into<String>) -> Self {
        Self(sql.into())
    }

    /// Get the SQL text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered sequence of statements computed for one reconciliation call.
///
/// Order matters for auditability and for avoiding transient invalid
/// states (revokes run before grants); atomicity comes from the
/// surrounding transaction, not from the ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementPlan {
    statements: Vec<Statement>,
}

impl StatementPlan {
    /// Create an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single statement.
    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Append a list of statements, preserving their order.
    pub fn extend(&mut self, statements: Vec<Statement>) {
        self.statements.extend(statements);
    }

    /// Number of statements in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Check if the plan has no statements.
    ///
    /// An empty plan is a valid outcome: desired state already matched
    /// current state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterate over the statements in plan order.
    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }

    /// Consume the plan into its statement list.
    #[must_use]
    pub fn into_vec(self) -> Vec<Statement> {
        self.statements
    }
}

/// Kind of reconciliation operation being performed.
///
/// Used to scope attribute validation and to label errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Full update of an account's attributes.
    Update,
    /// Add-only grants of roles/privileges.
    AddAttributeValues,
    /// Remove-only revokes of roles/privileges.
    RemoveAttributeValues,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Update => write!(f, "update"),
            OperationKind::AddAttributeValues => write!(f, "add_attribute_values"),
            OperationKind::RemoveAttributeValues => write!(f, "remove_attribute_values"),
        }
    }
}

//! Incremental add/remove reconciliation
//!
//! Add-only and remove-only paths for role and privilege membership.
//! These never touch the profile and never diff against current state:
//! granting an already-held role or revoking an unheld one is the
//! caller's error, surfaced as a statement failure from the database.

use tracing::{info, instrument};

use provia_connector::error::{ConnectorError, ConnectorResult};
use provia_connector::operation::{AccountId, AttributeSet, OperationKind, StatementPlan};
use provia_connector::traits::{CurrentStateReader, StatementExecutor, UpdateAttributeValuesOp};

use crate::attributes;
use crate::config::CaseSensitivityRules;
use crate::statement::GrantRevokeBuilder;
use crate::txn;
use crate::validate::AttributeValidator;

/// Reconciles incremental grants and revokes.
///
/// Created fresh per request, like [`crate::update::UpdateReconciler`].
/// The reader is only consulted for existence; current membership is
/// deliberately not read on these paths.
pub struct IncrementalReconciler {
    reader: Box<dyn CurrentStateReader>,
    executor: Box<dyn StatementExecutor>,
    statements: GrantRevokeBuilder,
    validator: AttributeValidator,
}

impl IncrementalReconciler {
    /// Create a reconciler for one add or remove call.
    pub fn new(
        reader: Box<dyn CurrentStateReader>,
        executor: Box<dyn StatementExecutor>,
        rules: CaseSensitivityRules,
    ) -> Self {
        Self {
            reader,
            executor,
            statements: GrantRevokeBuilder::new(rules),
            validator: AttributeValidator::new(),
        }
    }

    fn ensure_exists(&self, account: &AccountId) -> ConnectorResult<()> {
        if !self.reader.exists(account)? {
            return Err(ConnectorError::unknown_account(account));
        }
        Ok(())
    }

    fn run(&mut self, account: &AccountId, plan: &StatementPlan) -> ConnectorResult<AccountId> {
        txn::run_plan(self.executor.as_mut(), plan)?;
        Ok(account.clone())
    }
}

impl UpdateAttributeValuesOp for IncrementalReconciler {
    #[instrument(skip(self, attrs), fields(account = %account))]
    fn add_attribute_values(
        &mut self,
        account: &AccountId,
        attrs: &AttributeSet,
    ) -> ConnectorResult<AccountId> {
        self.validator
            .check_incremental(attrs, OperationKind::AddAttributeValues)?;
        self.ensure_exists(account)?;

        let roles = attrs.list_state(attributes::ROLES)?.values();
        let privileges = attrs.list_state(attributes::PRIVILEGES)?.values();

        info!(
            account = %account,
            role_count = roles.len(),
            privilege_count = privileges.len(),
            "granting attribute values"
        );

        // All role statements, then all privilege statements.
        let mut plan = StatementPlan::new();
        plan.extend(self.statements.grant_roles(account, &roles));
        plan.extend(self.statements.grant_privileges(account, &privileges));

        self.run(account, &plan)
    }

    #[instrument(skip(self, attrs), fields(account = %account))]
    fn remove_attribute_values(
        &mut self,
        account: &AccountId,
        attrs: &AttributeSet,
    ) -> ConnectorResult<AccountId> {
        self.validator
            .check_incremental(attrs, OperationKind::RemoveAttributeValues)?;
        self.ensure_exists(account)?;

        let roles = attrs.list_state(attributes::ROLES)?.values();
        let privileges = attrs.list_state(attributes::PRIVILEGES)?.values();

        info!(
            account = %account,
            role_count = roles.len(),
            privilege_count = privileges.len(),
            "revoking attribute values"
        );

        let mut plan = StatementPlan::new();
        plan.extend(self.statements.revoke_roles(account, &roles));
        plan.extend(self.statements.revoke_privileges(account, &privileges));

        self.run(account, &plan)
    }
}

//! Full-update reconciliation
//!
//! Computes the minimal DDL to bring an account's database-side state
//! to the requested state and executes it as one atomic unit of work.

use tracing::{debug, info, instrument};

use provia_connector::error::{ConnectorError, ConnectorResult};
use provia_connector::operation::{AccountId, AttributeSet, ListState, StatementPlan};
use provia_connector::traits::{
    CurrentStateReader, ProfileStatementBuilder, StatementExecutor, UpdateOp,
};

use crate::attributes;
use crate::config::CaseSensitivityRules;
use crate::diff::MembershipDiff;
use crate::statement::GrantRevokeBuilder;
use crate::txn;
use crate::validate::AttributeValidator;

/// Reconciles a full account update.
///
/// Owns its collaborators for the duration of one reconciliation call:
/// the reader and profile builder see the same transaction the executor
/// commits. Created fresh per request; nothing is cached across calls.
pub struct UpdateReconciler {
    reader: Box<dyn CurrentStateReader>,
    profile: Box<dyn ProfileStatementBuilder>,
    executor: Box<dyn StatementExecutor>,
    statements: GrantRevokeBuilder,
    validator: AttributeValidator,
}

impl UpdateReconciler {
    /// Create a reconciler for one update call.
    pub fn new(
        reader: Box<dyn CurrentStateReader>,
        profile: Box<dyn ProfileStatementBuilder>,
        executor: Box<dyn StatementExecutor>,
        rules: CaseSensitivityRules,
    ) -> Self {
        Self {
            reader,
            profile,
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

    /// Build the full plan: optional profile alter, then role revokes,
    /// role grants, privilege revokes, privilege grants.
    fn build_plan(
        &self,
        account: &AccountId,
        attrs: &AttributeSet,
    ) -> ConnectorResult<StatementPlan> {
        let mut plan = StatementPlan::new();

        if let Some(alter) = self.profile.build_alter_statement(account, attrs)? {
            plan.push(alter);
        }

        // Absent attribute: membership untouched. Empty attribute:
        // revoke everything. Non-empty: diff against current state,
        // revokes before grants.
        match attrs.list_state(attributes::ROLES)? {
            ListState::Absent => {}
            ListState::Empty => {
                let current = self.reader.current_roles(account)?;
                let diff = MembershipDiff::revoke_all(&current);
                plan.extend(self.statements.revoke_roles(account, &diff.to_revoke));
            }
            ListState::Present(desired) => {
                let current = self.reader.current_roles(account)?;
                let diff = MembershipDiff::between(&desired, &current);
                plan.extend(self.statements.revoke_roles(account, &diff.to_revoke));
                plan.extend(self.statements.grant_roles(account, &diff.to_grant));
            }
        }

        // Same policy for privileges, independently of roles.
        match attrs.list_state(attributes::PRIVILEGES)? {
            ListState::Absent => {}
            ListState::Empty => {
                let current = self.reader.current_privileges(account)?;
                let diff = MembershipDiff::revoke_all(&current);
                plan.extend(self.statements.revoke_privileges(account, &diff.to_revoke));
            }
            ListState::Present(desired) => {
                let current = self.reader.current_privileges(account)?;
                let diff = MembershipDiff::between(&desired, &current);
                plan.extend(self.statements.revoke_privileges(account, &diff.to_revoke));
                plan.extend(self.statements.grant_privileges(account, &diff.to_grant));
            }
        }

        Ok(plan)
    }
}

impl UpdateOp for UpdateReconciler {
    #[instrument(skip(self, attrs), fields(account = %account))]
    fn update(&mut self, account: &AccountId, attrs: &AttributeSet) -> ConnectorResult<AccountId> {
        self.validator.check_update(attrs)?;
        self.ensure_exists(account)?;

        info!(account = %account, attrs = ?attrs.redacted(), "updating account");

        let plan = match self.build_plan(account, attrs) {
            Ok(plan) => plan,
            Err(err) => {
                txn::rollback_quietly(self.executor.as_mut());
                return Err(err);
            }
        };

        if plan.is_empty() {
            // Valid: e.g. desired roles equal current roles. Commit the
            // open transaction and report success.
            debug!(account = %account, "no ddl generated, desired state already matches");
        }

        txn::run_plan(self.executor.as_mut(), &plan)?;

        info!(account = %account, "account updated");
        Ok(account.clone())
    }
}

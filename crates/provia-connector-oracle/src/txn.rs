//! Transaction contract
//!
//! One reconciliation call owns one open transaction. Every statement
//! in the plan executes in order; any failure rolls the whole
//! transaction back and the original error is the one surfaced. On
//! success the transaction commits exactly once.

use tracing::{debug, info, warn};

use provia_connector::error::ConnectorResult;
use provia_connector::operation::StatementPlan;
use provia_connector::traits::StatementExecutor;

/// Execute a statement plan against one open transaction.
///
/// An empty plan is a no-op success and still commits (nothing became
/// visible, nothing can be lost). A statement or commit failure
/// triggers a best-effort rollback and returns the original error.
pub(crate) fn run_plan(
    executor: &mut dyn StatementExecutor,
    plan: &StatementPlan,
) -> ConnectorResult<()> {
    for statement in plan.iter() {
        debug!(sql = %statement, "executing statement");
        if let Err(err) = executor.execute(statement) {
            rollback_quietly(executor);
            return Err(err);
        }
    }

    if let Err(err) = executor.commit() {
        rollback_quietly(executor);
        return Err(err);
    }

    info!(statement_count = plan.len(), "transaction committed");
    Ok(())
}

/// Best-effort rollback.
///
/// A rollback failure is logged and swallowed; it must never mask the
/// error that triggered the rollback.
pub(crate) fn rollback_quietly(executor: &mut dyn StatementExecutor) {
    match executor.rollback() {
        Ok(()) => warn!("transaction rolled back"),
        Err(err) => warn!(error = %err, "rollback failed"),
    }
}

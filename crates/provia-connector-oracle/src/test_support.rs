//! Test doubles shared by the unit tests.

use std::sync::{Arc, Mutex};

use provia_connector::error::{ConnectorError, ConnectorResult};
use provia_connector::operation::{AccountId, AttributeSet, Statement};
use provia_connector::traits::{CurrentStateReader, ProfileStatementBuilder, StatementExecutor};

/// Shared, inspectable record of what an executor did.
///
/// Statements move from pending to committed only on commit, so tests
/// can assert that rolled-back work never became visible.
#[derive(Clone, Default)]
pub(crate) struct ExecLog(Arc<Mutex<LogInner>>);

#[derive(Default)]
struct LogInner {
    attempted: Vec<String>,
    pending: Vec<String>,
    committed: Vec<String>,
    commit_count: usize,
    rollback_count: usize,
}

impl ExecLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn attempted(&self) -> Vec<String> {
        self.0.lock().unwrap().attempted.clone()
    }

    pub(crate) fn committed(&self) -> Vec<String> {
        self.0.lock().unwrap().committed.clone()
    }

    pub(crate) fn commit_count(&self) -> usize {
        self.0.lock().unwrap().commit_count
    }

    pub(crate) fn rollback_count(&self) -> usize {
        self.0.lock().unwrap().rollback_count
    }
}

/// Executor double recording every call into an [`ExecLog`], with
/// optional injected failures.
pub(crate) struct RecordingExecutor {
    log: ExecLog,
    fail_on: Option<String>,
    fail_commit: bool,
    fail_rollback: bool,
}

impl RecordingExecutor {
    pub(crate) fn new(log: ExecLog) -> Self {
        Self {
            log,
            fail_on: None,
            fail_commit: false,
            fail_rollback: false,
        }
    }

    /// Fail when asked to execute exactly this SQL text.
    pub(crate) fn failing_on(mut self, sql: &str) -> Self {
        self.fail_on = Some(sql.to_string());
        self
    }

    pub(crate) fn failing_on_commit(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    pub(crate) fn failing_on_rollback(mut self) -> Self {
        self.fail_rollback = true;
        self
    }
}

impl StatementExecutor for RecordingExecutor {
    fn execute(&mut self, statement: &Statement) -> ConnectorResult<()> {
        let mut inner = self.log.0.lock().unwrap();
        inner.attempted.push(statement.sql().to_string());
        if self.fail_on.as_deref() == Some(statement.sql()) {
            return Err(ConnectorError::statement_failed(format!(
                "rejected: {statement}"
            )));
        }
        inner.pending.push(statement.sql().to_string());
        Ok(())
    }

    fn commit(&mut self) -> ConnectorResult<()> {
        if self.fail_commit {
            return Err(ConnectorError::transaction_failed("commit refused"));
        }
        let mut inner = self.log.0.lock().unwrap();
        let pending = std::mem::take(&mut inner.pending);
        inner.committed.extend(pending);
        inner.commit_count += 1;
        Ok(())
    }

    fn rollback(&mut self) -> ConnectorResult<()> {
        let mut inner = self.log.0.lock().unwrap();
        inner.rollback_count += 1;
        if self.fail_rollback {
            return Err(ConnectorError::transaction_failed("rollback refused"));
        }
        inner.pending.clear();
        Ok(())
    }
}

/// In-memory current-state reader.
pub(crate) struct FakeStateReader {
    pub(crate) exists: bool,
    pub(crate) roles: Vec<String>,
    pub(crate) privileges: Vec<String>,
}

impl FakeStateReader {
    pub(crate) fn with_account(roles: &[&str], privileges: &[&str]) -> Self {
        Self {
            exists: true,
            roles: roles.iter().map(ToString::to_string).collect(),
            privileges: privileges.iter().map(ToString::to_string).collect(),
        }
    }

    pub(crate) fn missing_account() -> Self {
        Self {
            exists: false,
            roles: Vec::new(),
            privileges: Vec::new(),
        }
    }
}

impl CurrentStateReader for FakeStateReader {
    fn exists(&self, _account: &AccountId) -> ConnectorResult<bool> {
        Ok(self.exists)
    }

    fn current_roles(&self, _account: &AccountId) -> ConnectorResult<Vec<String>> {
        Ok(self.roles.clone())
    }

    fn current_privileges(&self, _account: &AccountId) -> ConnectorResult<Vec<String>> {
        Ok(self.privileges.clone())
    }
}

/// Profile builder double returning a fixed optional statement.
pub(crate) struct StaticProfileBuilder {
    statement: Option<Statement>,
}

impl StaticProfileBuilder {
    /// Profile diff yields no change.
    pub(crate) fn no_change() -> Self {
        Self { statement: None }
    }

    pub(crate) fn with_statement(sql: &str) -> Self {
        Self {
            statement: Some(Statement::new(sql)),
        }
    }
}

impl ProfileStatementBuilder for StaticProfileBuilder {
    fn build_alter_statement(
        &self,
        _account: &AccountId,
        _attrs: &AttributeSet,
    ) -> ConnectorResult<Option<Statement>> {
        Ok(self.statement.clone())
    }
}

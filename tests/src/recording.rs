use sqlbulk_core::{
    async_trait,
    driver::{BulkCopy, Connection},
    stmt::{Type, ValueRecord},
    table::DataTable,
    Error, Result,
};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// An operation received by a [`RecordingConnection`].
#[derive(Debug, Clone)]
pub enum Op {
    ExecuteBatch(String),
    Query { sql: String, ty: Vec<Type> },
    BulkCopy { copy: BulkCopy, table: DataTable },
}

impl Op {
    /// The SQL text of a batch or query.
    pub fn sql(&self) -> Option<&str> {
        match self {
            Op::ExecuteBatch(sql) | Op::Query { sql, .. } => Some(sql),
            Op::BulkCopy { .. } => None,
        }
    }

    pub fn is_bulk_copy(&self) -> bool {
        matches!(self, Op::BulkCopy { .. })
    }
}

/// A connection that records every operation instead of talking to a
/// database.
///
/// Queries answer with canned rows, in the order they were added. A failure
/// can be injected at a given operation.
#[derive(Debug, Default)]
pub struct RecordingConnection {
    /// Log of all operations received by this connection
    /// Using Arc<Mutex> so tests can inspect it after handing the connection off
    ops_log: Arc<Mutex<Vec<Op>>>,

    responses: VecDeque<Vec<ValueRecord>>,

    /// Index of the operation that fails, with the driver message
    fail_at: Option<(usize, String)>,
}

impl RecordingConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the rows returned by the next query.
    pub fn with_rows(mut self, rows: Vec<ValueRecord>) -> Self {
        self.responses.push_back(rows);
        self
    }

    /// Makes the operation at `index` (zero based) fail with a driver error.
    pub fn fail_at(mut self, index: usize, message: impl Into<String>) -> Self {
        self.fail_at = Some((index, message.into()));
        self
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<Op>>> {
        self.ops_log.clone()
    }

    /// A snapshot of the operations received so far.
    pub fn ops(&self) -> Vec<Op> {
        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .clone()
    }

    fn record(&mut self, op: Op) -> Result<()> {
        let mut ops_log = self
            .ops_log
            .lock()
            .expect("Failed to acquire ops log lock");
        let index = ops_log.len();
        ops_log.push(op);

        match &self.fail_at {
            Some((fail_at, message)) if *fail_at == index => Err(Error::driver(
                std::io::Error::other(message.clone()),
            )),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl Connection for RecordingConnection {
    async fn execute_batch(&mut self, sql: &str) -> Result<()> {
        self.record(Op::ExecuteBatch(sql.to_string()))
    }

    async fn query(&mut self, sql: &str, ty: &[Type]) -> Result<Vec<ValueRecord>> {
        self.record(Op::Query {
            sql: sql.to_string(),
            ty: ty.to_vec(),
        })?;

        Ok(self.responses.pop_front().unwrap_or_default())
    }

    async fn bulk_copy(&mut self, copy: &BulkCopy, table: DataTable) -> Result<u64> {
        let rows = table.len() as u64;

        self.record(Op::BulkCopy {
            copy: copy.clone(),
            table,
        })?;

        Ok(rows)
    }
}

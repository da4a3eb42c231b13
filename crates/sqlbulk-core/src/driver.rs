use crate::{
    async_trait,
    stmt::{Type, ValueRecord},
    table::DataTable,
    Result,
};

use std::time::Duration;

/// A database connection able to run bulk inserts.
///
/// Implementations must run every statement on the same session so that the
/// temporary staging table created by one call is visible to the next.
#[async_trait]
pub trait Connection: Send {
    /// Executes a batch of statements that returns no rows.
    async fn execute_batch(&mut self, sql: &str) -> Result<()>;

    /// Executes a batch of statements and returns the rows of the last result
    /// set. Each column is converted to the matching entry of `ty`.
    async fn query(&mut self, sql: &str, ty: &[Type]) -> Result<Vec<ValueRecord>>;

    /// Streams `table` into `copy.destination` with the database's native bulk
    /// load and returns the number of rows written.
    async fn bulk_copy(&mut self, copy: &BulkCopy, table: DataTable) -> Result<u64>;
}

/// Settings for one bulk copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkCopy {
    /// Table the rows are loaded into
    pub destination: String,

    /// Rows per batch; `0` sends every row in a single batch
    pub batch_size: usize,

    /// Time allowed for the whole copy; `None` waits indefinitely
    pub timeout: Option<Duration>,

    /// Whether key values supplied by the client are kept
    pub keep_identity: bool,
}

impl BulkCopy {
    pub fn new(destination: impl Into<String>) -> BulkCopy {
        BulkCopy {
            destination: destination.into(),
            batch_size: 0,
            timeout: Some(Duration::from_secs(30)),
            keep_identity: false,
        }
    }
}

#[async_trait]
impl<C: Connection + ?Sized> Connection for &mut C {
    async fn execute_batch(&mut self, sql: &str) -> Result<()> {
        (**self).execute_batch(sql).await
    }

    async fn query(&mut self, sql: &str, ty: &[Type]) -> Result<Vec<ValueRecord>> {
        (**self).query(sql, ty).await
    }

    async fn bulk_copy(&mut self, copy: &BulkCopy, table: DataTable) -> Result<u64> {
        (**self).bulk_copy(copy, table).await
    }
}

#[async_trait]
impl<C: Connection + ?Sized> Connection for Box<C> {
    async fn execute_batch(&mut self, sql: &str) -> Result<()> {
        (**self).execute_batch(sql).await
    }

    async fn query(&mut self, sql: &str, ty: &[Type]) -> Result<Vec<ValueRecord>> {
        (**self).query(sql, ty).await
    }

    async fn bulk_copy(&mut self, copy: &BulkCopy, table: DataTable) -> Result<u64> {
        (**self).bulk_copy(copy, table).await
    }
}

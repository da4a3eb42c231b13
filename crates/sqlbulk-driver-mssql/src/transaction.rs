use crate::{exec, MsSql};

use sqlbulk_core::{
    async_trait,
    driver::{BulkCopy, Connection},
    stmt::{Type, ValueRecord},
    table::DataTable,
    Result,
};
use tracing::{debug, warn};

/// An open transaction on a [`MsSql`] connection.
///
/// The handle implements [`Connection`], so bulk inserts can run inside the
/// transaction. Finish it with [`commit`](Transaction::commit) or
/// [`rollback`](Transaction::rollback).
pub struct Transaction<'a> {
    conn: &'a mut MsSql,
    finished: bool,
}

impl<'a> Transaction<'a> {
    pub(crate) async fn begin(conn: &'a mut MsSql) -> Result<Transaction<'a>> {
        exec::execute_batch(&mut conn.client, "BEGIN TRANSACTION;").await?;
        debug!("transaction started");

        Ok(Transaction {
            conn,
            finished: false,
        })
    }

    pub async fn commit(mut self) -> Result<()> {
        self.finish("COMMIT TRANSACTION;").await
    }

    pub async fn rollback(mut self) -> Result<()> {
        self.finish("ROLLBACK TRANSACTION;").await
    }

    async fn finish(&mut self, sql: &str) -> Result<()> {
        self.finished = true;

        let res = exec::execute_batch(&mut self.conn.client, sql).await;
        if res.is_err() {
            self.conn.rollback_pending = true;
        }

        res
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.finished {
            warn!("transaction dropped without commit or rollback; it will be rolled back");
            self.conn.rollback_pending = true;
        }
    }
}

#[async_trait]
impl Connection for Transaction<'_> {
    async fn execute_batch(&mut self, sql: &str) -> Result<()> {
        exec::execute_batch(&mut self.conn.client, sql).await
    }

    async fn query(&mut self, sql: &str, ty: &[Type]) -> Result<Vec<ValueRecord>> {
        exec::query(&mut self.conn.client, sql, ty).await
    }

    async fn bulk_copy(&mut self, copy: &BulkCopy, table: DataTable) -> Result<u64> {
        exec::bulk_copy(&mut self.conn.client, copy, table).await
    }
}

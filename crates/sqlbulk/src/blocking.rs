//! A synchronous client for code that does not run on an async runtime.

use crate::{BulkInsert, BulkOptions};

use sqlbulk_core::{driver::Connection, Model, Result};
use tokio::runtime::{self, Runtime};

/// Runs bulk inserts to completion on a private single-threaded runtime.
///
/// Must not be used from within an async context.
pub struct Client<C> {
    runtime: Runtime,
    conn: C,
}

impl<C: Connection> Client<C> {
    /// Wraps an existing connection.
    ///
    /// The connection must not be bound to another runtime's I/O driver; use
    /// [`Client::connect_with`] to open it on this client's runtime instead.
    pub fn new(conn: C) -> Result<Self> {
        Ok(Client {
            runtime: new_runtime()?,
            conn,
        })
    }

    /// Opens a connection on the client's runtime.
    pub fn connect_with<F>(connect: impl FnOnce() -> F) -> Result<Self>
    where
        F: std::future::Future<Output = Result<C>>,
    {
        let runtime = new_runtime()?;
        let conn = runtime.block_on(connect())?;
        Ok(Client { runtime, conn })
    }

    /// Inserts `records` into the model's table.
    ///
    /// See [`BulkInsert::bulk_insert`].
    pub fn bulk_insert<M: Model>(&mut self, records: &[M], options: &BulkOptions) -> Result<()> {
        self.runtime.block_on(self.conn.bulk_insert(records, options))
    }

    /// Inserts `records` and returns the inserted rows.
    ///
    /// See [`BulkInsert::bulk_insert_and_select`].
    pub fn bulk_insert_and_select<M: Model>(
        &mut self,
        records: Vec<M>,
        options: &BulkOptions,
    ) -> Result<Vec<M>> {
        self.runtime
            .block_on(self.conn.bulk_insert_and_select(records, options))
    }

    pub fn connection(&mut self) -> &mut C {
        &mut self.conn
    }

    pub fn into_inner(self) -> C {
        self.conn
    }
}

#[cfg(feature = "mssql")]
impl Client<crate::MsSql> {
    /// Connects to SQL Server using a connection URL.
    ///
    /// See [`MsSql::connect`](crate::MsSql::connect).
    pub fn connect(url: &str) -> Result<Self> {
        Self::connect_with(|| crate::MsSql::connect(url))
    }
}

fn new_runtime() -> Result<Runtime> {
    Ok(runtime::Builder::new_current_thread().enable_all().build()?)
}

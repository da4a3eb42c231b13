use crate::{plan::Plan, BulkOptions};

use sqlbulk_core::{async_trait, driver::Connection, stmt::ValueRecord, Model, Result};
use tracing::debug;

/// Bulk insert operations, available on every [`Connection`].
///
/// Both operations create a staging table shaped like the insert columns,
/// stream the records into it with the native bulk load, then move them into
/// the target table with a single `INSERT ... SELECT`.
#[async_trait]
pub trait BulkInsert: Connection {
    /// Inserts `records` into the model's table.
    async fn bulk_insert<M: Model>(&mut self, records: &[M], options: &BulkOptions) -> Result<()>;

    /// Inserts `records` and returns the inserted rows as stored, including
    /// generated keys and computed columns.
    ///
    /// The rows are read back by joining on the keys captured during the
    /// insert, so their order is not guaranteed to match `records`. If the
    /// model has no key, this is a plain [`bulk_insert`](Self::bulk_insert)
    /// and `records` is returned unchanged.
    async fn bulk_insert_and_select<M: Model>(
        &mut self,
        records: Vec<M>,
        options: &BulkOptions,
    ) -> Result<Vec<M>>;
}

#[async_trait]
impl<C: Connection + ?Sized> BulkInsert for C {
    async fn bulk_insert<M: Model>(&mut self, records: &[M], options: &BulkOptions) -> Result<()> {
        let plan = Plan::build(records, options, false)?;

        if plan.is_empty() {
            debug!(model = plan.meta.name(), "no records to insert");
            return Ok(());
        }

        run(self, plan).await?;
        Ok(())
    }

    async fn bulk_insert_and_select<M: Model>(
        &mut self,
        records: Vec<M>,
        options: &BulkOptions,
    ) -> Result<Vec<M>> {
        let plan = Plan::build(&records, options, true)?;

        if plan.is_empty() {
            debug!(model = plan.meta.name(), "no records to insert");
            return Ok(records);
        }

        if plan.returning.is_none() {
            debug!(
                model = plan.meta.name(),
                "model has no key; returning the records as given"
            );
            run(self, plan).await?;
            return Ok(records);
        }

        let rows = run(self, plan).await?;
        rows.into_iter().map(M::load).collect()
    }
}

/// Stages, copies and merges the planned rows. Returns the selected rows when
/// the merge returns any.
async fn run<C: Connection + ?Sized>(conn: &mut C, plan: Plan) -> Result<Vec<ValueRecord>> {
    let Plan {
        meta,
        table_name,
        stage,
        merge,
        returning,
        copy,
        data,
    } = plan;

    debug!(
        model = meta.name(),
        table = %table_name,
        rows = data.len(),
        "bulk insert"
    );

    conn.execute_batch(&stage).await?;

    let copied = conn.bulk_copy(&copy, data).await?;
    debug!(staging = %copy.destination, rows = copied, "rows staged");

    match returning {
        Some(ty) => {
            let rows = conn.query(&merge, &ty).await?;
            debug!(table = %table_name, rows = rows.len(), "inserted rows selected");
            Ok(rows)
        }
        None => {
            conn.execute_batch(&merge).await?;
            Ok(vec![])
        }
    }
}

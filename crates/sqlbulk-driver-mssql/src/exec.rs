use crate::value::{self, Encoding};

use sqlbulk_core::{
    driver::BulkCopy,
    stmt::{Type, Value, ValueRecord},
    table::{DataColumn, DataTable},
    Error, Result,
};
use tiberius::TokenRow;
use tokio::net::TcpStream;
use tokio_util::compat::Compat;
use tracing::{debug, trace};

pub type Client = tiberius::Client<Compat<TcpStream>>;

// Statements go through `simple_query` so they run as a plain batch.
// Parameterized execution wraps the text in `sp_executesql`, and a
// temporary table created in there is dropped when the call returns.

pub(crate) async fn execute_batch(client: &mut Client, sql: &str) -> Result<()> {
    debug!(sql, "execute batch");

    client
        .simple_query(sql)
        .await
        .map_err(Error::driver)?
        .into_results()
        .await
        .map_err(Error::driver)?;

    Ok(())
}

pub(crate) async fn query(client: &mut Client, sql: &str, ty: &[Type]) -> Result<Vec<ValueRecord>> {
    debug!(sql, "query");

    let mut results = client
        .simple_query(sql)
        .await
        .map_err(Error::driver)?
        .into_results()
        .await
        .map_err(Error::driver)?;

    let rows = results.pop().unwrap_or_default();
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        if row.len() != ty.len() {
            return Err(Error::invalid_result(format!(
                "expected {} columns, got {}",
                ty.len(),
                row.len()
            )));
        }

        let mut fields = Vec::with_capacity(ty.len());
        for (data, ty) in row.into_iter().zip(ty) {
            fields.push(coerce(value::from_column_data(data)?, ty));
        }

        records.push(ValueRecord::from_vec(fields));
    }

    debug!(rows = records.len(), "query returned rows");
    Ok(records)
}

/// Widens a value read back to the type the caller expects. Anything else is
/// left for the field's loader to accept or reject.
fn coerce(value: Value, ty: &Type) -> Value {
    if value.is_a(ty) {
        return value;
    }

    match (ty, value) {
        (Type::I64, Value::I32(v)) => Value::I64(v.into()),
        (Type::I64, Value::I16(v)) => Value::I64(v.into()),
        (Type::I64, Value::U8(v)) => Value::I64(v.into()),
        (Type::I32, Value::I16(v)) => Value::I32(v.into()),
        (Type::I32, Value::U8(v)) => Value::I32(v.into()),
        (Type::I16, Value::U8(v)) => Value::I16(v.into()),
        (Type::F64, Value::F32(v)) => Value::F64(v.into()),
        (Type::DateTimeUtc, Value::DateTime(v)) => Value::DateTimeUtc(v.and_utc()),
        (_, value) => value,
    }
}

pub(crate) async fn bulk_copy(client: &mut Client, copy: &BulkCopy, table: DataTable) -> Result<u64> {
    let rows = table.len();
    let work = bulk_copy_rows(client, copy, table);

    let total = match copy.timeout {
        Some(duration) => tokio::time::timeout(duration, work)
            .await
            .map_err(|_| Error::bulk_copy_timeout(duration))??,
        None => work.await?,
    };

    debug!(destination = %copy.destination, rows, total, "bulk copy complete");
    Ok(total)
}

async fn bulk_copy_rows(client: &mut Client, copy: &BulkCopy, table: DataTable) -> Result<u64> {
    let (columns, rows) = table.into_parts();
    let encodings = column_encodings(client, &copy.destination, &columns).await?;

    if copy.keep_identity {
        debug!(destination = %copy.destination, "bulk copy keeps client key values");
    }

    let batch_size = match copy.batch_size {
        0 => rows.len().max(1),
        size => size,
    };

    let mut rows = rows.into_iter().peekable();
    let mut total = 0;
    let mut batch = 0;

    while rows.peek().is_some() {
        let mut request = client
            .bulk_insert(&copy.destination)
            .await
            .map_err(Error::driver)?;

        for record in rows.by_ref().take(batch_size) {
            let mut row = TokenRow::new();

            for ((value, column), encoding) in record.into_iter().zip(&columns).zip(&encodings) {
                row.push(value::to_column_data(value, column.ty, *encoding)?);
            }

            request.send(row).await.map_err(Error::driver)?;
        }

        let committed = request.finalize().await.map_err(Error::driver)?.total();
        total += committed;
        batch += 1;

        trace!(batch, rows = committed, "bulk copy batch committed");
    }

    Ok(total)
}

/// Looks up how date-time columns must be encoded. Only runs a query when the
/// table has a `DateTime` column.
async fn column_encodings(
    client: &mut Client,
    destination: &str,
    columns: &[DataColumn],
) -> Result<Vec<Encoding>> {
    let mut encodings = vec![Encoding::Native; columns.len()];

    if !columns.iter().any(|column| column.ty == Type::DateTime) {
        return Ok(encodings);
    }

    let sql = column_types_sql(destination);
    trace!(sql, "look up column types");

    let rows = client
        .simple_query(sql)
        .await
        .map_err(Error::driver)?
        .into_first_result()
        .await
        .map_err(Error::driver)?;

    for row in &rows {
        let name: Option<&str> = row.try_get(0).map_err(Error::driver)?;
        let type_name: Option<&str> = row.try_get(1).map_err(Error::driver)?;

        let (Some(name), Some(type_name)) = (name, type_name) else {
            continue;
        };

        if let Some(index) = columns.iter().position(|column| column.name == name) {
            encodings[index] = Encoding::from_type_name(type_name);
        }
    }

    Ok(encodings)
}

fn column_types_sql(destination: &str) -> String {
    let (catalog, object) = if destination.starts_with('#') {
        ("tempdb.", format!("tempdb..{destination}"))
    } else {
        ("", destination.to_string())
    };

    format!(
        "SELECT c.name, t.name FROM {catalog}sys.columns c \
         INNER JOIN {catalog}sys.types t ON c.user_type_id = t.user_type_id \
         WHERE c.object_id = OBJECT_ID(N'{}');",
        object.replace('\'', "''")
    )
}

use crate::BulkOptions;

use sqlbulk_core::{
    bail,
    driver::BulkCopy,
    schema::{self, ModelMeta},
    stmt::Type,
    table::{DataColumn, DataTable},
    Model, Result,
};
use sqlbulk_sql::{stmt::BulkTable, Serializer, Statement};
use std::sync::Arc;

/// Everything one bulk insert sends to the database.
///
/// Building a plan resolves the model's metadata, generates every statement
/// and buffers the records. Configuration errors, such as an unsupported key
/// type, surface here before any statement is sent.
#[derive(Debug)]
pub(crate) struct Plan {
    pub(crate) meta: Arc<ModelMeta>,

    /// Target table name
    pub(crate) table_name: String,

    /// Creates the staging table
    pub(crate) stage: String,

    /// Moves staged rows into the target table
    pub(crate) merge: String,

    /// Column types of the rows returned by `merge`. `None` when the merge
    /// returns nothing.
    pub(crate) returning: Option<Vec<Type>>,

    pub(crate) copy: BulkCopy,

    pub(crate) data: DataTable,
}

impl Plan {
    pub(crate) fn build<M: Model>(
        records: &[M],
        options: &BulkOptions,
        and_select: bool,
    ) -> Result<Plan> {
        let meta = schema::resolve::<M>();
        let table_name = meta.table_name(&options.table_names);

        // Types without a key cannot be selected back; they get a plain insert
        // without identity insert and the caller keeps its own records.
        let fallback = and_select && !meta.has_key();
        let identity_insert = options.identity_insert && !fallback;

        let table = BulkTable::new(&meta, &table_name, identity_insert);
        let serializer = Serializer::new();

        let stage = serializer.serialize(&Statement::stage_table(&table));

        let (merge, returning) = if and_select && !fallback {
            let stmt = Statement::merge_insert_and_select(&table)?;
            let returning = meta.fields().iter().map(|field| field.ty).collect();
            (serializer.serialize(&stmt), Some(returning))
        } else {
            (serializer.serialize(&Statement::merge_insert(&table)), None)
        };

        let data = buffer(&meta, records, identity_insert)?;

        let mut copy = options.bulk_copy(&table.staging);
        copy.keep_identity = identity_insert;

        Ok(Plan {
            copy,
            meta,
            table_name,
            stage,
            merge,
            returning,
            data,
        })
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Copies the insert columns of every record into a [`DataTable`].
fn buffer<M: Model>(meta: &ModelMeta, records: &[M], identity_insert: bool) -> Result<DataTable> {
    let fields = meta.insert_fields(identity_insert);

    let columns = fields
        .iter()
        .map(|(_, field)| DataColumn {
            name: field.column_name().to_string(),
            ty: field.ty,
            nullable: field.nullable,
        })
        .collect();

    let mut data = DataTable::with_capacity(columns, records.len());

    for record in records {
        let mut values = record.record()?;

        if values.len() != meta.fields().len() {
            bail!(
                "{} produced {} values for {} fields",
                meta.name(),
                values.len(),
                meta.fields().len()
            );
        }

        let row = fields
            .iter()
            .map(|(index, _)| values[*index].take())
            .collect();

        data.push(row)?;
    }

    Ok(data)
}

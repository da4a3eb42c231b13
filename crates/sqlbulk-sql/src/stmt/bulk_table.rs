use super::Name;
use sqlbulk_core::schema::{Field, ModelMeta};

/// Everything the bulk insert statements need to know about one target
/// table.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkTable {
    /// Target table
    pub name: Name,

    /// Staging table name, `#TempInsert_` followed by the target name without
    /// dots
    pub staging: String,

    /// Table variable capturing inserted keys, `@TempInserted_` followed by
    /// the target name without dots
    pub inserted: String,

    /// Columns written by the insert, in field order
    pub columns: Vec<String>,

    /// True when explicit key values are written. `SET IDENTITY_INSERT` is
    /// only toggled when no key is a GUID.
    pub identity_insert: bool,

    /// Key fields, used to capture and join inserted rows
    pub keys: Vec<Field>,

    /// Every mapped column, projected when selecting inserted rows
    pub select: Vec<SelectColumn>,
}

/// A column selected back from the target table, aliased to its field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectColumn {
    pub column: String,
    pub alias: String,
}

impl BulkTable {
    pub fn new(meta: &ModelMeta, table_name: &str, identity_insert: bool) -> BulkTable {
        let name = Name::from(table_name);
        let flattened = name.flattened();

        let columns = meta
            .insert_fields(identity_insert)
            .into_iter()
            .map(|(_, field)| field.column_name().to_string())
            .collect();

        let select = meta
            .fields()
            .iter()
            .map(|field| SelectColumn {
                column: field.column_name().to_string(),
                alias: field.name.app_name.clone(),
            })
            .collect();

        BulkTable {
            name,
            staging: format!("#TempInsert_{flattened}"),
            inserted: format!("@TempInserted_{flattened}"),
            columns,
            identity_insert,
            keys: meta.key_fields().cloned().collect(),
            select,
        }
    }

    /// Returns `true` if the insert must be wrapped in `SET IDENTITY_INSERT`.
    pub fn toggles_identity_insert(&self) -> bool {
        self.identity_insert && !self.keys.iter().any(|key| key.ty.is_uuid())
    }
}

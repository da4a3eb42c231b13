use super::{BulkTable, KeyColumn, Name, SelectColumn, Statement};
use sqlbulk_core::{bail, Result};

/// Inserts every staged row into the target table and drops the staging
/// table.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeInsert {
    /// Target table
    pub target: Name,

    /// Staging table rows are read from
    pub staging: String,

    /// Columns copied from the staging table
    pub columns: Vec<String>,

    /// Whether to wrap the insert in `SET IDENTITY_INSERT ON/OFF`
    pub identity_insert: bool,
}

/// Like [`MergeInsert`], but captures the keys of the inserted rows with
/// `OUTPUT ... INTO` and selects the inserted rows back by joining on them.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeInsertAndSelect {
    pub insert: MergeInsert,

    /// Table variable receiving the inserted keys
    pub inserted: String,

    /// Key columns declared in the table variable
    pub keys: Vec<KeyColumn>,

    /// Columns selected from the target table
    pub select: Vec<SelectColumn>,
}

impl Statement {
    /// Moves the staged rows into `table`.
    pub fn merge_insert(table: &BulkTable) -> Self {
        MergeInsert::new(table).into()
    }

    /// Moves the staged rows into `table` and selects them back.
    ///
    /// Fails if the table has no key or a key has a type that cannot be
    /// captured.
    pub fn merge_insert_and_select(table: &BulkTable) -> Result<Self> {
        if table.keys.is_empty() {
            bail!(
                "selecting inserted rows from {} requires a key",
                table.name
            );
        }

        let keys = table
            .keys
            .iter()
            .map(|key| KeyColumn::new(&key.name.app_name, key.column_name(), &key.ty))
            .collect::<Result<Vec<_>>>()?;

        Ok(MergeInsertAndSelect {
            insert: MergeInsert::new(table),
            inserted: table.inserted.clone(),
            keys,
            select: table.select.clone(),
        }
        .into())
    }
}

impl MergeInsert {
    fn new(table: &BulkTable) -> MergeInsert {
        MergeInsert {
            target: table.name.clone(),
            staging: table.staging.clone(),
            columns: table.columns.clone(),
            identity_insert: table.toggles_identity_insert(),
        }
    }
}

impl From<MergeInsert> for Statement {
    fn from(value: MergeInsert) -> Self {
        Self::MergeInsert(value)
    }
}

impl From<MergeInsertAndSelect> for Statement {
    fn from(value: MergeInsertAndSelect) -> Self {
        Self::MergeInsertAndSelect(value)
    }
}

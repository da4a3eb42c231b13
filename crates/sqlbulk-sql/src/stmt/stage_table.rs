use super::{BulkTable, Name, Statement};

/// Clones the shape of the insert columns into an empty staging table.
///
/// ```sql
/// SELECT TOP 0 [a], [b] INTO #TempInsert_x FROM [x] target WITH(NOLOCK);
/// ```
///
/// A `SELECT ... INTO` from a single table copies the `IDENTITY` property of
/// the key column. When `detach_identity` is set a second, empty `UNION ALL`
/// branch is added so the staging column is a plain column and explicit key
/// values can be bulk loaded into it.
#[derive(Debug, Clone, PartialEq)]
pub struct StageTable {
    /// Table whose columns are cloned
    pub source: Name,

    /// Staging table to create
    pub staging: String,

    /// Columns to clone
    pub columns: Vec<String>,

    /// Whether the staging table must not inherit `IDENTITY`
    pub detach_identity: bool,
}

impl Statement {
    /// Creates the staging table for a bulk insert into `table`.
    pub fn stage_table(table: &BulkTable) -> Self {
        StageTable {
            source: table.name.clone(),
            staging: table.staging.clone(),
            columns: table.columns.clone(),
            detach_identity: table.toggles_identity_insert(),
        }
        .into()
    }
}

impl From<StageTable> for Statement {
    fn from(value: StageTable) -> Self {
        Self::StageTable(value)
    }
}

mod bulk_table;
pub use bulk_table::{BulkTable, SelectColumn};

mod key_column;
pub use key_column::{KeyColumn, KeyType};

mod merge_insert;
pub use merge_insert::{MergeInsert, MergeInsertAndSelect};

mod name;
pub use name::Name;

mod stage_table;
pub use stage_table::StageTable;

pub use sqlbulk_core::stmt::*;

/// A T-SQL batch generated for one step of a bulk insert.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Creates the empty staging table
    StageTable(StageTable),

    /// Moves staged rows into the target table
    MergeInsert(MergeInsert),

    /// Moves staged rows into the target table and selects the inserted rows
    MergeInsertAndSelect(MergeInsertAndSelect),
}

use crate::{
    bail,
    stmt::{Type, ValueRecord},
    Result,
};

/// A column of a [`DataTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct DataColumn {
    /// Column name in the destination table
    pub name: String,

    /// Type of the values in the column
    pub ty: Type,

    /// True if the column accepts `NULL`
    pub nullable: bool,
}

/// Rows buffered for a bulk copy.
///
/// Every row has one value per column and rows keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    columns: Vec<DataColumn>,
    rows: Vec<ValueRecord>,
}

impl DataTable {
    pub fn new(columns: Vec<DataColumn>) -> DataTable {
        DataTable {
            columns,
            rows: vec![],
        }
    }

    pub fn with_capacity(columns: Vec<DataColumn>, capacity: usize) -> DataTable {
        DataTable {
            columns,
            rows: Vec::with_capacity(capacity),
        }
    }

    /// Appends a row.
    ///
    /// The row must have one value per column and each non-null value must
    /// have its column's type.
    pub fn push(&mut self, row: ValueRecord) -> Result<()> {
        if row.len() != self.columns.len() {
            bail!(
                "row has {} values but the table has {} columns",
                row.len(),
                self.columns.len()
            );
        }

        for (column, value) in self.columns.iter().zip(row.iter()) {
            if !value.is_a(&column.ty) {
                bail!(
                    "column `{}` expects {:?}, got {:?}",
                    column.name,
                    column.ty,
                    value.infer_ty()
                );
            }
        }

        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[DataColumn] {
        &self.columns
    }

    pub fn rows(&self) -> &[ValueRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_parts(self) -> (Vec<DataColumn>, Vec<ValueRecord>) {
        (self.columns, self.rows)
    }
}

use super::{Field, Model, TableNameConvention};

use indexmap::IndexMap;

/// Per-type metadata used to build bulk insert statements.
///
/// Derived once from the model's static description; see
/// [`resolve`](super::resolve).
#[derive(Debug, Clone)]
pub struct ModelMeta {
    model: Model,

    /// Indices of key fields. Falls back to a field named `id` when no field
    /// is marked `#[key]`.
    keys: Vec<usize>,

    /// Indices of database-computed fields
    computed: Vec<usize>,

    /// Field name to column name, in declaration order
    columns: IndexMap<String, String>,
}

impl ModelMeta {
    pub fn new(model: Model) -> ModelMeta {
        let mut keys: Vec<usize> = model
            .fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.primary_key)
            .map(|(index, _)| index)
            .collect();

        if keys.is_empty() {
            keys.extend(
                model
                    .fields
                    .iter()
                    .position(|field| field.name.app_name.eq_ignore_ascii_case("id")),
            );
        }

        let computed = model
            .fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.computed)
            .map(|(index, _)| index)
            .collect();

        let columns = model
            .fields
            .iter()
            .map(|field| {
                (
                    field.name.app_name.clone(),
                    field.column_name().to_string(),
                )
            })
            .collect();

        ModelMeta {
            model,
            keys,
            computed,
            columns,
        }
    }

    /// Name of the Rust type.
    pub fn name(&self) -> &str {
        &self.model.name
    }

    /// All mapped fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.model.fields
    }

    pub fn key_fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.keys.iter().map(|&index| &self.model.fields[index])
    }

    pub fn computed_fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.computed.iter().map(|&index| &self.model.fields[index])
    }

    pub fn has_key(&self) -> bool {
        !self.keys.is_empty()
    }

    pub fn is_key(&self, index: usize) -> bool {
        self.keys.contains(&index)
    }

    pub fn is_computed(&self, index: usize) -> bool {
        self.computed.contains(&index)
    }

    /// Field name to column name map.
    pub fn columns(&self) -> &IndexMap<String, String> {
        &self.columns
    }

    pub fn column_name(&self, field: &str) -> Option<&str> {
        self.columns.get(field).map(String::as_str)
    }

    /// Fields written by a bulk insert, with their index in the model.
    ///
    /// Computed fields are never written. Key fields are written only when
    /// `identity_insert` is set.
    pub fn insert_fields(&self, identity_insert: bool) -> Vec<(usize, &Field)> {
        self.model
            .fields
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.is_computed(*index))
            .filter(|(index, _)| identity_insert || !self.is_key(*index))
            .collect()
    }

    /// Returns the table the model maps to.
    pub fn table_name(&self, convention: &TableNameConvention) -> String {
        match &self.model.table_name {
            Some(table_name) => table_name.clone(),
            None => convention.table_name(&self.model.name),
        }
    }
}

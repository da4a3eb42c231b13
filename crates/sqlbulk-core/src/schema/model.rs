use super::Field;

/// Static description of a model, produced by `#[derive(Model)]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Name of the Rust type
    pub name: String,

    /// Table name set with `#[table = "..."]`
    pub table_name: Option<String>,

    /// Mapped fields in declaration order. Fields marked `#[skip]` are not
    /// listed.
    pub fields: Vec<Field>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Model {
        Model {
            name: name.into(),
            table_name: None,
            fields: vec![],
        }
    }

    pub fn with_table(mut self, table_name: impl Into<String>) -> Model {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn field(mut self, field: Field) -> Model {
        self.fields.push(field);
        self
    }
}

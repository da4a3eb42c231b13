use crate::stmt::Type;

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field name
    pub name: FieldName,

    /// Column type the field is written and read as
    pub ty: Type,

    /// True if the field can hold `NULL`
    pub nullable: bool,

    /// True if the field is part of the primary key
    pub primary_key: bool,

    /// True if the database computes the value; never written
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName {
    /// Name of the struct field
    pub app_name: String,

    /// Column name, when it differs from the field name
    pub storage_name: Option<String>,
}

impl Field {
    pub fn new(app_name: impl Into<String>, ty: Type) -> Field {
        Field {
            name: FieldName {
                app_name: app_name.into(),
                storage_name: None,
            },
            ty,
            nullable: false,
            primary_key: false,
            computed: false,
        }
    }

    /// The name of the column the field maps to.
    pub fn column_name(&self) -> &str {
        self.name.storage_name()
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Field {
        self.name.storage_name = Some(column.into());
        self
    }

    pub fn nullable(mut self) -> Field {
        self.nullable = true;
        self
    }

    pub fn key(mut self) -> Field {
        self.primary_key = true;
        self
    }

    pub fn computed(mut self) -> Field {
        self.computed = true;
        self
    }
}

impl FieldName {
    pub fn storage_name(&self) -> &str {
        self.storage_name.as_deref().unwrap_or(&self.app_name)
    }
}

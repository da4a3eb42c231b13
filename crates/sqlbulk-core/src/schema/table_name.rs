/// Derives a table name from a type name when a model has no explicit
/// `#[table]`.
///
/// The default convention appends `s` to the type name: `User` maps to
/// `Users`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableNameConvention {
    pub prefix: String,
    pub suffix: String,
}

impl TableNameConvention {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn table_name(&self, type_name: &str) -> String {
        format!("{}{}{}", self.prefix, type_name, self.suffix)
    }
}

impl Default for TableNameConvention {
    fn default() -> Self {
        Self::new("", "s")
    }
}

use super::Type;
use sqlbulk_core::{Error, Result};

/// A key column declared in the table variable that captures inserted keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyColumn {
    /// Column name
    pub name: String,

    /// Declared SQL type
    pub ty: KeyType,
}

/// SQL types a captured key can be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    UniqueIdentifier,
    Int,
    BigInt,
}

impl KeyColumn {
    /// Maps a key field to its declared column.
    ///
    /// Only GUID, 32-bit and 64-bit integer keys are accepted; `field` is used
    /// in the error for any other type.
    pub fn new(field: &str, name: impl Into<String>, ty: &Type) -> Result<KeyColumn> {
        let ty = match ty {
            Type::Uuid => KeyType::UniqueIdentifier,
            Type::I32 => KeyType::Int,
            Type::I64 => KeyType::BigInt,
            _ => return Err(Error::unsupported_key_type(field, *ty)),
        };

        Ok(KeyColumn {
            name: name.into(),
            ty,
        })
    }
}

impl KeyType {
    pub fn as_sql(self) -> &'static str {
        match self {
            KeyType::UniqueIdentifier => "uniqueidentifier",
            KeyType::Int => "int",
            KeyType::BigInt => "bigint",
        }
    }
}

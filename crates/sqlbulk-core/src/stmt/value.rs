use super::Type;
use crate::{Error, Result};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value (`bit`)
    Bool(bool),

    /// Unsigned 8-bit integer (`tinyint`)
    U8(u8),

    /// Signed 16-bit integer (`smallint`)
    I16(i16),

    /// Signed 32-bit integer (`int`)
    I32(i32),

    /// Signed 64-bit integer (`bigint`)
    I64(i64),

    /// 32-bit float (`real`)
    F32(f32),

    /// 64-bit float (`float`)
    F64(f64),

    /// String value
    String(String),

    /// Binary value
    Bytes(Vec<u8>),

    /// GUID (`uniqueidentifier`)
    Uuid(Uuid),

    /// Calendar date without time zone
    Date(NaiveDate),

    /// Time of day without time zone
    Time(NaiveTime),

    /// Date and time without time zone (`datetime2`)
    DateTime(NaiveDateTime),

    /// Instant in UTC (`datetimeoffset`)
    DateTimeUtc(DateTime<Utc>),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Replaces the value with `Null`, returning the previous value.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Returns the type of the value.
    pub fn infer_ty(&self) -> Type {
        match self {
            Self::Null => Type::Null,
            Self::Bool(_) => Type::Bool,
            Self::U8(_) => Type::U8,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::String(_) => Type::String,
            Self::Bytes(_) => Type::Bytes,
            Self::Uuid(_) => Type::Uuid,
            Self::Date(_) => Type::Date,
            Self::Time(_) => Type::Time,
            Self::DateTime(_) => Type::DateTime,
            Self::DateTimeUtc(_) => Type::DateTimeUtc,
        }
    }

    /// Returns `true` if the value can be written to a column of type `ty`.
    ///
    /// `Null` is accepted by every column type; nullability is checked by the
    /// database.
    pub fn is_a(&self, ty: &Type) -> bool {
        self.is_null() || self.infer_ty() == *ty
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::U8(v) => Ok(v != 0),
            _ => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            Value::Uuid(v) => Ok(v.to_string()),
            _ => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }
}

impl TryFrom<Value> for Uuid {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(v) => Ok(v),
            Value::String(v) => Ok(v.parse()?),
            Value::Bytes(v) => Ok(Uuid::from_slice(&v)?),
            _ => Err(Error::type_conversion(value, "Uuid")),
        }
    }
}

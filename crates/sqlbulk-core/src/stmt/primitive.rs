use super::{Type, Value};
use crate::{err, Result};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

/// A field type that maps to a single column.
///
/// `TYPE` is the column type used when the field is staged for a bulk copy
/// and when it is read back. `Option<T>` maps to the same column type as `T`
/// and is flagged nullable.
pub trait Primitive: Sized {
    const TYPE: Type;
    const NULLABLE: bool = false;

    /// Converts a value read from the database into the field type.
    fn load(value: Value) -> Result<Self>;

    /// Converts the field into the value written to its column.
    fn to_value(&self) -> Result<Value>;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl Primitive for $ty {
                const TYPE: Type = Type::$variant;

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }

                fn to_value(&self) -> Result<Value> {
                    Ok(Value::$variant(self.clone()))
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    u8 => U8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    Uuid => Uuid,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => DateTime,
    DateTime<Utc> => DateTimeUtc,
}

// SQL Server has no unsigned integer types wider than `tinyint`. `u32` fields
// are stored in `int` columns and `u64` fields in `bigint` columns; values that
// do not fit the signed column are rejected when the record is buffered.

impl Primitive for u32 {
    const TYPE: Type = Type::I32;

    fn load(value: Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> Result<Value> {
        let value = i32::try_from(*self)
            .map_err(|_| err!("value {} is out of range for int", self))?;
        Ok(Value::I32(value))
    }
}

impl Primitive for u64 {
    const TYPE: Type = Type::I64;

    fn load(value: Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> Result<Value> {
        let value = i64::try_from(*self)
            .map_err(|_| err!("value {} is out of range for bigint", self))?;
        Ok(Value::I64(value))
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> Result<Value> {
        match self {
            Some(value) => value.to_value(),
            None => Ok(Value::Null),
        }
    }
}

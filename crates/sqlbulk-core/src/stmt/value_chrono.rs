use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::{stmt::Value, Error};

macro_rules! impl_chrono_conversions {
    ($chrono:ty, $name:ident) => {
        impl From<$chrono> for Value {
            fn from(value: $chrono) -> Self {
                Self::$name(value)
            }
        }

        impl From<&$chrono> for Value {
            fn from(value: &$chrono) -> Self {
                Self::$name(*value)
            }
        }
    };
}

impl_chrono_conversions!(DateTime<Utc>, DateTimeUtc);
impl_chrono_conversions!(NaiveDateTime, DateTime);
impl_chrono_conversions!(NaiveDate, Date);
impl_chrono_conversions!(NaiveTime, Time);

// A `datetime2` column can back a `DateTime<Utc>` field and a
// `datetimeoffset` column can back a `NaiveDateTime` field; both are read as
// UTC.

impl TryFrom<Value> for DateTime<Utc> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::DateTimeUtc(v) => Ok(v),
            Value::DateTime(v) => Ok(v.and_utc()),
            _ => Err(Error::type_conversion(value, "DateTime<Utc>")),
        }
    }
}

impl TryFrom<Value> for NaiveDateTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::DateTime(v) => Ok(v),
            Value::DateTimeUtc(v) => Ok(v.naive_utc()),
            _ => Err(Error::type_conversion(value, "NaiveDateTime")),
        }
    }
}

impl TryFrom<Value> for NaiveDate {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Date(v) => Ok(v),
            Value::DateTime(v) => Ok(v.date()),
            _ => Err(Error::type_conversion(value, "NaiveDate")),
        }
    }
}

impl TryFrom<Value> for NaiveTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Time(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "NaiveTime")),
        }
    }
}

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use sqlbulk_core::{
    err,
    stmt::{Type, Value},
    Error, Result,
};
use std::borrow::Cow;
use tiberius::{
    time::{DateTime as SqlDateTime, SmallDateTime},
    ColumnData, FromSql, IntoSql,
};

/// How a date-time value is written on the wire.
///
/// `datetime2` is the default; `datetime` and `smalldatetime` columns only
/// accept their own legacy encodings during a bulk load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Encoding {
    #[default]
    Native,
    DateTime,
    SmallDateTime,
}

impl Encoding {
    /// Picks the encoding for a column from its SQL Server type name.
    pub(crate) fn from_type_name(name: &str) -> Encoding {
        match name {
            "datetime" => Encoding::DateTime,
            "smalldatetime" => Encoding::SmallDateTime,
            _ => Encoding::Native,
        }
    }
}

const FRAGMENTS_PER_DAY: u32 = 86_400 * 300;
const MINUTES_PER_DAY: u16 = 1_440;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or_default()
}

/// Converts a buffered value into the representation sent for a column of
/// type `ty`.
pub(crate) fn to_column_data(
    value: Value,
    ty: Type,
    encoding: Encoding,
) -> Result<ColumnData<'static>> {
    Ok(match value {
        Value::Null => null_of(ty, encoding),
        Value::Bool(v) => ColumnData::Bit(Some(v)),
        Value::U8(v) => ColumnData::U8(Some(v)),
        Value::I16(v) => ColumnData::I16(Some(v)),
        Value::I32(v) => ColumnData::I32(Some(v)),
        Value::I64(v) => ColumnData::I64(Some(v)),
        Value::F32(v) => ColumnData::F32(Some(v)),
        Value::F64(v) => ColumnData::F64(Some(v)),
        Value::String(v) => ColumnData::String(Some(Cow::Owned(v))),
        Value::Bytes(v) => ColumnData::Binary(Some(Cow::Owned(v))),
        Value::Uuid(v) => ColumnData::Guid(Some(v)),
        Value::Date(v) => v.into_sql(),
        Value::Time(v) => v.into_sql(),
        Value::DateTime(v) => match encoding {
            Encoding::Native => v.into_sql(),
            Encoding::DateTime => ColumnData::DateTime(Some(legacy_datetime(v))),
            Encoding::SmallDateTime => ColumnData::SmallDateTime(Some(small_datetime(v)?)),
        },
        Value::DateTimeUtc(v) => v.into_sql(),
    })
}

/// A typed `NULL`, so the server sees the column's type even without a value.
fn null_of(ty: Type, encoding: Encoding) -> ColumnData<'static> {
    match ty {
        Type::Bool => ColumnData::Bit(None),
        Type::U8 => ColumnData::U8(None),
        Type::I16 => ColumnData::I16(None),
        Type::I32 => ColumnData::I32(None),
        Type::I64 => ColumnData::I64(None),
        Type::F32 => ColumnData::F32(None),
        Type::F64 => ColumnData::F64(None),
        Type::Bytes => ColumnData::Binary(None),
        Type::Uuid => ColumnData::Guid(None),
        Type::Date => ColumnData::Date(None),
        Type::Time => ColumnData::Time(None),
        Type::DateTime => match encoding {
            Encoding::Native => ColumnData::DateTime2(None),
            Encoding::DateTime => ColumnData::DateTime(None),
            Encoding::SmallDateTime => ColumnData::SmallDateTime(None),
        },
        Type::DateTimeUtc => ColumnData::DateTimeOffset(None),
        Type::String | Type::Null => ColumnData::String(None),
    }
}

/// `datetime`: days since 1900-01-01 and 1/300 second ticks since midnight.
fn legacy_datetime(value: NaiveDateTime) -> SqlDateTime {
    let mut days = (value.date() - epoch()).num_days() as i32;
    let time = value.time();
    let mut fragments = time.num_seconds_from_midnight() * 300
        + (u64::from(time.nanosecond()) * 300 / 1_000_000_000) as u32;

    if fragments >= FRAGMENTS_PER_DAY {
        days += 1;
        fragments -= FRAGMENTS_PER_DAY;
    }

    SqlDateTime::new(days, fragments)
}

/// `smalldatetime`: days since 1900-01-01 and minutes since midnight, rounded
/// to the nearest minute.
fn small_datetime(value: NaiveDateTime) -> Result<SmallDateTime> {
    let mut days = (value.date() - epoch()).num_days();
    let mut minutes = ((value.time().num_seconds_from_midnight() + 30) / 60) as u16;

    if minutes >= MINUTES_PER_DAY {
        days += 1;
        minutes -= MINUTES_PER_DAY;
    }

    let days = u16::try_from(days)
        .map_err(|_| err!("value {} is out of range for smalldatetime", value))?;

    Ok(SmallDateTime::new(days, minutes))
}

/// Converts a value read from SQL Server into a [`Value`].
pub(crate) fn from_column_data(data: ColumnData<'static>) -> Result<Value> {
    let value = match data {
        ColumnData::Bit(v) => v.map(Value::Bool),
        ColumnData::U8(v) => v.map(Value::U8),
        ColumnData::I16(v) => v.map(Value::I16),
        ColumnData::I32(v) => v.map(Value::I32),
        ColumnData::I64(v) => v.map(Value::I64),
        ColumnData::F32(v) => v.map(Value::F32),
        ColumnData::F64(v) => v.map(Value::F64),
        ColumnData::String(v) => v.map(|v| Value::String(v.into_owned())),
        ColumnData::Binary(v) => v.map(|v| Value::Bytes(v.into_owned())),
        ColumnData::Guid(v) => v.map(Value::Uuid),
        ColumnData::Numeric(v) => {
            v.map(|v| Value::F64(v.value() as f64 / 10f64.powi(i32::from(v.scale()))))
        }
        data @ ColumnData::Date(_) => NaiveDate::from_sql(&data)
            .map_err(Error::driver)?
            .map(Value::Date),
        data @ ColumnData::Time(_) => NaiveTime::from_sql(&data)
            .map_err(Error::driver)?
            .map(Value::Time),
        data @ (ColumnData::DateTime(_)
        | ColumnData::SmallDateTime(_)
        | ColumnData::DateTime2(_)) => NaiveDateTime::from_sql(&data)
            .map_err(Error::driver)?
            .map(Value::DateTime),
        data @ ColumnData::DateTimeOffset(_) => DateTime::<Utc>::from_sql(&data)
            .map_err(Error::driver)?
            .map(Value::DateTimeUtc),
        other => {
            return Err(Error::invalid_result(format!(
                "cannot read back column value {other:?}"
            )));
        }
    };

    Ok(value.unwrap_or(Value::Null))
}

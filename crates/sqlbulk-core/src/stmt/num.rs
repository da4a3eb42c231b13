use super::{Type, Value};
use crate::Error;

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty) {
                $is:ident
            } )*
    ) => {
        impl Type {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant)
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }
        )*
    };
}

impl_num! {
    U8(u8) {
        is_u8
    }
    I16(i16) {
        is_i16
    }
    I32(i32) {
        is_i32
    }
    I64(i64) {
        is_i64
    }
    F32(f32) {
        is_f32
    }
    F64(f64) {
        is_f64
    }
}

// Integer columns may come back narrower or wider than the field that reads
// them (an `int` column loaded into an `i64` field). Widening always succeeds,
// narrowing is range checked.
macro_rules! try_convert_range {
    ($val:expr, $target_ty:ty) => {
        $val.try_into().map_err(|_| {
            $crate::err!(
                "value {} is out of range for {}",
                $val,
                stringify!($target_ty)
            )
        })
    };
}

macro_rules! conversion_fallback {
    ($value:expr, $target_ty:ty) => {
        Err(Error::type_conversion($value, stringify!($target_ty)))
    };
}

impl TryFrom<Value> for u8 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::U8(val) => Ok(val),
            Value::I16(val) => try_convert_range!(val, u8),
            Value::I32(val) => try_convert_range!(val, u8),
            Value::I64(val) => try_convert_range!(val, u8),
            _ => conversion_fallback!(value, u8),
        }
    }
}

impl TryFrom<Value> for i16 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::I16(val) => Ok(val),
            Value::U8(val) => Ok(val.into()),
            Value::I32(val) => try_convert_range!(val, i16),
            Value::I64(val) => try_convert_range!(val, i16),
            _ => conversion_fallback!(value, i16),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::I32(val) => Ok(val),
            Value::U8(val) => Ok(val.into()),
            Value::I16(val) => Ok(val.into()),
            Value::I64(val) => try_convert_range!(val, i32),
            _ => conversion_fallback!(value, i32),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::I64(val) => Ok(val),
            Value::U8(val) => Ok(val.into()),
            Value::I16(val) => Ok(val.into()),
            Value::I32(val) => Ok(val.into()),
            _ => conversion_fallback!(value, i64),
        }
    }
}

impl TryFrom<Value> for u32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::U8(val) => Ok(val.into()),
            Value::I16(val) => try_convert_range!(val, u32),
            Value::I32(val) => try_convert_range!(val, u32),
            Value::I64(val) => try_convert_range!(val, u32),
            _ => conversion_fallback!(value, u32),
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::U8(val) => Ok(val.into()),
            Value::I16(val) => try_convert_range!(val, u64),
            Value::I32(val) => try_convert_range!(val, u64),
            Value::I64(val) => try_convert_range!(val, u64),
            _ => conversion_fallback!(value, u64),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F32(val) => Ok(val),
            _ => conversion_fallback!(value, f32),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F64(val) => Ok(val),
            Value::F32(val) => Ok(val.into()),
            _ => conversion_fallback!(value, f64),
        }
    }
}

/// The type of a column value as it is exchanged with the database.
///
/// Enumerations are stored as their integer representation and optional
/// fields use the type of their inner value, so this set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    /// The type of `NULL`; only inferred, never declared by a field.
    Null,
    Bool,
    U8,
    I16,
    I32,
    I64,
    F32,
    F64,
    String,
    Bytes,
    Uuid,
    Date,
    Time,
    DateTime,
    DateTimeUtc,
}

impl Type {
    pub fn is_uuid(&self) -> bool {
        matches!(self, Self::Uuid)
    }

    /// Returns `true` for integer types.
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::U8 | Self::I16 | Self::I32 | Self::I64)
    }
}

use super::Error;
use crate::stmt::Type;

/// Error when a key field cannot be declared in the output table variable.
///
/// Only GUID, 32-bit and 64-bit integer keys can be captured with `OUTPUT`.
#[derive(Debug)]
pub(super) struct UnsupportedKeyType {
    field: Box<str>,
    ty: Type,
}

impl std::error::Error for UnsupportedKeyType {}

impl core::fmt::Display for UnsupportedKeyType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported key type: field `{}` has type {:?}; only GUID, 32-bit and 64-bit integer keys are supported",
            self.field, self.ty
        )
    }
}

impl Error {
    /// Creates an unsupported key type error.
    pub fn unsupported_key_type(field: impl Into<String>, ty: Type) -> Error {
        Error::from(super::ErrorKind::UnsupportedKeyType(UnsupportedKeyType {
            field: field.into().into(),
            ty,
        }))
    }

    /// Returns `true` if this error is an unsupported key type error.
    pub fn is_unsupported_key_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedKeyType(_))
    }
}

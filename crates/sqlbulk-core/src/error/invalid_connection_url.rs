use super::{Error, ErrorKind};

/// A connection URL that could not be turned into a connection configuration.
#[derive(Debug)]
pub(super) struct InvalidConnectionUrl {
    reason: String,
}

impl core::fmt::Display for InvalidConnectionUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("invalid connection URL: ")?;
        f.write_str(&self.reason)
    }
}

impl Error {
    /// Creates an error for a malformed connection URL or an unknown
    /// connection parameter. Raised before connecting.
    pub fn invalid_connection_url(reason: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidConnectionUrl(InvalidConnectionUrl {
            reason: reason.into(),
        }))
    }

    /// Returns `true` if a connection URL was rejected.
    pub fn is_invalid_connection_url(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidConnectionUrl(_))
    }
}

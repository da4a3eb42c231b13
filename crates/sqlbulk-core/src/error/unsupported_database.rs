use super::Error;

#[derive(Debug)]
pub(super) struct UnsupportedDatabase {
    kind: Box<str>,
}

impl std::error::Error for UnsupportedDatabase {}

impl core::fmt::Display for UnsupportedDatabase {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported database: `{}` connections cannot bulk insert; only SQL Server is supported",
            self.kind
        )
    }
}

impl Error {
    /// Returned when a connection is not a SQL Server connection.
    pub fn unsupported_database(kind: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedDatabase(UnsupportedDatabase {
            kind: kind.into().into(),
        }))
    }

    pub fn is_unsupported_database(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedDatabase(_))
    }
}

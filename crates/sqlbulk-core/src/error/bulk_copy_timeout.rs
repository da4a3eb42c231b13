use std::time::Duration;

use crate::{error::ErrorKind, Error};

#[derive(Debug)]
pub(super) struct BulkCopyTimeout {
    duration: Duration,
}

impl Error {
    /// Returned when streaming rows into the staging table exceeds the
    /// configured bulk copy timeout.
    pub fn bulk_copy_timeout(duration: Duration) -> Error {
        ErrorKind::BulkCopyTimeout(BulkCopyTimeout { duration }).into()
    }

    /// Returns `true` if this error is a bulk copy timeout.
    pub fn is_bulk_copy_timeout(&self) -> bool {
        matches!(self.kind(), ErrorKind::BulkCopyTimeout(_))
    }
}

impl std::error::Error for BulkCopyTimeout {}

impl core::fmt::Display for BulkCopyTimeout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bulk copy timed out after {:?}", self.duration)
    }
}

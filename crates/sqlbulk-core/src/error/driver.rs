use super::Error;

/// Error from a database driver.
#[derive(Debug)]
pub(super) struct DriverError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Database errors are surfaced exactly as the driver reported them.
        core::fmt::Display::fmt(&self.inner, f)
    }
}

impl Error {
    /// Creates an error from a driver error.
    ///
    /// Constraint violations, conversion failures reported by the server and
    /// connectivity errors all arrive here. The original error is kept as the
    /// [`source`](std::error::Error::source) and can be downcast through
    /// [`Error::driver_error`].
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Driver(DriverError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a driver error.
    pub fn is_driver(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Driver(_))
    }

    /// Returns the error reported by the driver, if this is a driver error.
    pub fn driver_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self.kind() {
            super::ErrorKind::Driver(err) => Some(err.inner.as_ref()),
            _ => None,
        }
    }
}

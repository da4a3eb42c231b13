use sqlbulk_core::{driver::BulkCopy, schema::TableNameConvention};
use std::time::Duration;

/// Per-call settings for a bulk insert.
///
/// ```
/// use sqlbulk::BulkOptions;
/// use std::time::Duration;
///
/// let options = BulkOptions::new()
///     .batch_size(5_000)
///     .timeout(Duration::from_secs(120))
///     .identity_insert(true);
///
/// assert_eq!(options.batch_size, 5_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BulkOptions {
    /// Rows per bulk copy batch. `0` sends every row in one batch.
    pub batch_size: usize,

    /// Time allowed for the bulk copy. `None` waits indefinitely.
    pub timeout: Option<Duration>,

    /// Write key values supplied by the records instead of letting the
    /// database generate them.
    pub identity_insert: bool,

    /// Naming convention for models without `#[table]`
    pub table_names: TableNameConvention,
}

impl BulkOptions {
    pub fn new() -> BulkOptions {
        BulkOptions::default()
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    pub fn identity_insert(mut self, identity_insert: bool) -> Self {
        self.identity_insert = identity_insert;
        self
    }

    pub fn table_names(mut self, table_names: TableNameConvention) -> Self {
        self.table_names = table_names;
        self
    }

    pub(crate) fn bulk_copy(&self, destination: &str) -> BulkCopy {
        BulkCopy {
            destination: destination.to_string(),
            batch_size: self.batch_size,
            timeout: self.timeout,
            keep_identity: self.identity_insert,
        }
    }
}

impl Default for BulkOptions {
    fn default() -> Self {
        BulkOptions {
            batch_size: 0,
            timeout: Some(Duration::from_secs(30)),
            identity_insert: false,
            table_names: TableNameConvention::default(),
        }
    }
}

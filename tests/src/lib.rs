#[macro_use]
mod macros;

pub mod recording;
pub use recording::{Op, RecordingConnection};

pub use std_util::*;

use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber that writes through the test harness.
///
/// Filtering follows `RUST_LOG`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Connection URL of the SQL Server used by the live tests.
///
/// Live tests return early when `SQLBULK_MSSQL_URL` is not set.
pub fn mssql_url() -> Option<String> {
    std::env::var("SQLBULK_MSSQL_URL")
        .ok()
        .filter(|url| !url.is_empty())
}

pub mod driver;
pub use driver::Connection;

mod error;
pub use error::{Error, IntoError};

mod model;
pub use model::Model;

pub mod schema;

pub mod stmt;

pub mod table;

/// A Result type alias that uses sqlbulk's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;

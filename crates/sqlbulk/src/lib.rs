pub mod blocking;

mod insert;
pub use insert::BulkInsert;

mod options;
pub use options::BulkOptions;

mod plan;

pub use sqlbulk_core::{
    driver::{self, Connection},
    schema::{self, TableNameConvention},
    stmt, Error, Model, Result,
};

pub use sqlbulk_macros::{Model, SqlEnum};

#[cfg(feature = "mssql")]
pub use sqlbulk_driver_mssql::{MsSql, Transaction};

#[doc(hidden)]
pub mod codegen_support {
    pub use sqlbulk_core::{
        schema,
        stmt::{Primitive, Type, Value, ValueRecord},
        Error, Model, Result,
    };
    pub use std::default::Default;
}

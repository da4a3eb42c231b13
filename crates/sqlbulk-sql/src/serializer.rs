#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited, Period};

mod ident;
use ident::Ident;

// Fragment serializers
mod name;
mod statement;

use crate::stmt::Statement;

/// Serializes bulk insert statements to T-SQL text.
///
/// Table and column identifiers are bracket quoted, one pair of brackets per
/// dot-separated part, with `]` doubled. Staging tables and table variables
/// are generated names and written as is. Statements in a batch are separated
/// by newlines and each ends with `;`.
#[derive(Debug, Default)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer::default()
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };

        stmt.to_sql(&mut fmt);

        ret
    }
}

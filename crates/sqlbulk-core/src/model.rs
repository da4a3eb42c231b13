use crate::{schema, stmt::ValueRecord, Result};

/// A record type that can be bulk inserted.
///
/// Usually implemented with `#[derive(Model)]`. The record produced by
/// [`Model::record`] and the record passed to [`Model::load`] both hold one
/// value per field of [`Model::schema`], in declaration order.
pub trait Model: Sized + Send + Sync + 'static {
    /// Returns the static description of the model.
    fn schema() -> schema::Model;

    /// Load an instance of the model, populating fields using the given row.
    fn load(record: ValueRecord) -> Result<Self>;

    /// Returns the values of the mapped fields.
    fn record(&self) -> Result<ValueRecord>;
}

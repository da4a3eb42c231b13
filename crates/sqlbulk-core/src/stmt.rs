mod num;

mod primitive;
pub use primitive::Primitive;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_chrono;

mod value_record;
pub use value_record::ValueRecord;

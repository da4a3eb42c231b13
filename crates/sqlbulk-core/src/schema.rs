mod cache;
pub use cache::{resolve, Registry};

mod field;
pub use field::{Field, FieldName};

mod model;
pub use model::Model;

mod model_meta;
pub use model_meta::ModelMeta;

mod table_name;
pub use table_name::TableNameConvention;

mod column;
pub use column::Column;

mod default_value;
pub use default_value::DefaultValue;

mod schema;
pub use schema::Schema;

mod table;
pub use table::{Table, TableId};

mod ty;
pub use ty::Type;

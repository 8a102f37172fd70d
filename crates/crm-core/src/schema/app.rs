mod column_name;
pub use column_name::ColumnName;

mod column_type;
pub use column_type::ColumnType;

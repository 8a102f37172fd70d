use super::Name;

use crm_core::schema::db::{Column, DefaultValue, Type};

/// A column definition as it appears in `CREATE TABLE` and `ADD COLUMN`.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    /// Name of the column.
    pub name: Name,

    /// Storage type of the column.
    pub ty: Type,

    /// Whether the column has a `NOT NULL` constraint.
    pub not_null: bool,

    /// Whether the column has a `UNIQUE` constraint.
    pub unique: bool,

    /// Whether the column is the primary key.
    pub primary_key: bool,

    /// Default expression, if any.
    pub default: Option<DefaultValue>,
}

impl ColumnDef {
    pub fn from_schema(column: &Column) -> Self {
        Self {
            name: Name::from(&column.name),
            ty: column.ty,
            not_null: !column.nullable,
            unique: column.unique,
            primary_key: column.primary_key,
            default: column.default,
        }
    }
}

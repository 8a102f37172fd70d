use super::{DefaultValue, Type};

/// A column of a built-in table, or the definition of a custom column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The database storage type of the column.
    pub ty: Type,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// True if the column carries a `UNIQUE` constraint
    pub unique: bool,

    /// True if the column is the table's primary key
    pub primary_key: bool,

    /// Value used when an insert omits the column
    pub default: Option<DefaultValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: true,
            unique: false,
            primary_key: false,
            default: None,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }
}

/// Database storage types.
///
/// These are the physical types of the built-in tables and the types custom
/// columns are created with. Their SQL spelling depends on the database flavor
/// and is produced by the serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Boolean,
    Date,
    Integer,
    Text,
    /// Ordered list of strings. `text[]` in PostgreSQL, a JSON array elsewhere.
    TextArray,
    Timestamptz,
    Uuid,
}

impl Type {
    /// Maps the `data_type` reported by schema introspection back to a storage
    /// type.
    ///
    /// Accepts PostgreSQL `information_schema` spellings as well as declared
    /// SQLite type names.
    pub fn from_data_type(data_type: &str) -> Option<Type> {
        match data_type.trim().to_ascii_lowercase().as_str() {
            "boolean" | "bool" => Some(Type::Boolean),
            "date" => Some(Type::Date),
            "integer" | "int" | "int4" => Some(Type::Integer),
            "text" => Some(Type::Text),
            "array" | "text[]" | "_text" => Some(Type::TextArray),
            "timestamp with time zone" | "timestamptz" => Some(Type::Timestamptz),
            "uuid" => Some(Type::Uuid),
            _ => None,
        }
    }
}

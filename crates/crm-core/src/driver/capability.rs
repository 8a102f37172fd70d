#[derive(Debug)]
pub struct Capability {
    /// Structural changes (`ALTER TABLE`) can run inside a transaction and are
    /// undone by `ROLLBACK`.
    pub transactional_ddl: bool,

    /// `ADD COLUMN IF NOT EXISTS` and `DROP COLUMN IF EXISTS` are understood
    /// by the database. When false, the driver checks the live table first.
    pub column_if_exists: bool,

    /// The database has a native array type for `dropdown_options`.
    pub native_arrays: bool,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        transactional_ddl: true,
        column_if_exists: false,
        native_arrays: false,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        column_if_exists: true,
        native_arrays: true,
        ..Self::SQLITE
    };
}

mod value;
pub(crate) use value::Value;

use crm_core::{
    async_trait,
    driver::{
        operation::{AlterTable, AlterTableAction, Operation},
        Capability, Driver, Response,
    },
    schema::db::{Schema, Type},
    stmt, Error, Result,
};
use chrono::Utc;
use crm_sql as sql;
use rusqlite::{ffi, Connection as RusqliteConnection};
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::Arc,
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "missing database path in connection URL; url={}",
                url_str
            )))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn connect(&self) -> Result<Box<dyn crm_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;

        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Ok(Self { connection })
    }

    /// SQLite has no `IF [NOT] EXISTS` for columns, so the guard is evaluated
    /// here. Returns `false` when the change would be a no-op.
    fn should_apply(&self, alter: &AlterTable) -> Result<bool> {
        match &alter.action {
            AlterTableAction::AddColumnIfNotExists(column) => {
                Ok(!self.has_column(&alter.table, &column.name)?)
            }
            AlterTableAction::DropColumnIfExists(name) => self.has_column(&alter.table, name),
            AlterTableAction::RenameColumn { .. } => Ok(true),
        }
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        let mut stmt = self
            .connection
            .prepare_cached("SELECT 1 FROM pragma_table_info(?1) WHERE name = ?2")
            .map_err(driver_error)?;

        stmt.exists([table, column]).map_err(driver_error)
    }

    fn execute(&self, sql: &str) -> Result<Response> {
        let count = self.connection.execute(sql, []).map_err(driver_error)?;
        Ok(Response::count(count as _))
    }
}

#[async_trait]
impl crm_core::driver::Connection for Connection {
    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn exec(&mut self, schema: &Arc<Schema>, op: Operation) -> Result<Response> {
        let (sql, ret_tys): (sql::Statement, Option<Vec<Type>>) = match op {
            Operation::AlterTable(mut op) => {
                if !self.should_apply(&op)? {
                    return Ok(Response::count(0));
                }

                // SQLite rejects non-constant defaults when adding a column to
                // a table that has rows, so `Now` is fixed to this instant.
                if let AlterTableAction::AddColumnIfNotExists(column) = &mut op.action {
                    column.default = column.default.map(|default| default.at(Utc::now()));
                }

                (sql::Statement::alter_table(&op, &Capability::SQLITE), None)
            }
            Operation::CreateTable(op) => (
                sql::Statement::create_table_if_not_exists(op.table),
                None,
            ),
            Operation::Delete(op) => (op.into(), None),
            Operation::DescribeTable(op) => (
                sql::Statement::describe_table(op.table),
                Some(vec![Type::Text; 4]),
            ),
            Operation::ExecSql(op) => return self.execute(&op.sql),
            Operation::Insert(op) => (op.into(), None),
            Operation::Select(op) => {
                let tys = schema
                    .table(op.table)
                    .columns
                    .iter()
                    .map(|column| column.ty)
                    .collect();
                (op.into(), Some(tys))
            }
            Operation::Transaction(op) => {
                let sql = sql::Serializer::sqlite(schema).serialize_transaction(&op);
                return self.execute(&sql);
            }
            Operation::Update(op) => (op.into(), None),
        };

        let mut params: Vec<stmt::Value> = vec![];
        let sql_str = sql::Serializer::sqlite(schema).serialize(&sql, &mut params);

        let mut stmt = self
            .connection
            .prepare_cached(&sql_str)
            .map_err(driver_error)?;

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        let Some(ret_tys) = ret_tys else {
            let count = stmt
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(driver_error)?;

            return Ok(Response::count(count as _));
        };

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(driver_error)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(driver_error)? {
            let mut items = Vec::with_capacity(ret_tys.len());

            for (index, ty) in ret_tys.iter().enumerate() {
                items.push(Value::from_sql(row, index, *ty)?.into_inner());
            }

            ret.push(stmt::ValueRecord::from_vec(items));
        }

        Ok(Response::values(ret))
    }
}

/// Classifies unique-constraint violations as duplicates.
fn driver_error(err: rusqlite::Error) -> Error {
    match &err {
        rusqlite::Error::SqliteFailure(failure, message)
            if failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
                || failure.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
        {
            let what = message.clone().unwrap_or_else(|| failure.to_string());
            Error::duplicate(what)
        }
        _ => Error::driver(err),
    }
}

//! Typed CRUD over the built-in tables.
//!
//! The store holds no business rules: values are written as given. Unique
//! violations surface as duplicate errors from the driver, and updating or
//! deleting an absent id is a record-not-found error.

mod clients;
mod columns;
mod users;

use crate::{db::Shared, tables::Tables, LiveColumn, Result};

use crm_core::{
    driver::{
        operation::{Delete, DescribeTable, Insert, Select, Update},
        Capability, Connection, Operation, Response,
    },
    schema::db::TableId,
    stmt::{Filter, OrderBy, Value, ValueRecord},
    Error, Schema,
};

use chrono::{DateTime, SubsecRound, Utc};
use tokio::sync::MutexGuard;
use uuid::Uuid;

use std::sync::Arc;

/// Exclusive access to the database connection.
///
/// Obtained from [`Db::metadata`](crate::Db::metadata). The connection stays
/// locked until the store is dropped.
pub struct MetadataStore<'a> {
    connection: MutexGuard<'a, Box<dyn Connection>>,
    schema: &'a Arc<Schema>,
    tables: Tables,
}

impl<'a> MetadataStore<'a> {
    pub(crate) async fn new(shared: &'a Shared) -> MetadataStore<'a> {
        MetadataStore {
            connection: shared.connection.lock().await,
            schema: &shared.schema,
            tables: shared.tables,
        }
    }

    pub fn capability(&self) -> &'static Capability {
        self.connection.capability()
    }

    pub(crate) async fn exec(&mut self, op: impl Into<Operation>) -> Result<Response> {
        self.connection.exec(self.schema, op.into()).await
    }

    /// Lists the columns of a live table in position order.
    pub async fn describe_table(&mut self, table: &str) -> Result<Vec<LiveColumn>> {
        let op = DescribeTable {
            table: table.to_string(),
        };

        self.exec(op)
            .await?
            .into_values()?
            .into_iter()
            .map(|record| {
                let [column_name, data_type, is_nullable, column_default] =
                    record.into_array()?;

                Ok(LiveColumn {
                    column_name: column_name.to_string()?,
                    data_type: data_type.to_string()?,
                    is_nullable: is_nullable.to_string()? == "YES",
                    column_default: column_default.to_option_string()?,
                })
            })
            .collect()
    }

    async fn insert(&mut self, table: TableId, values: Vec<Value>) -> Result<()> {
        let op = Insert {
            table,
            values: ValueRecord::from_vec(values),
        };

        self.exec(op).await?;
        Ok(())
    }

    async fn select(
        &mut self,
        table: TableId,
        filter: Option<Filter>,
        order_by: Option<OrderBy>,
    ) -> Result<Vec<ValueRecord>> {
        let op = Select {
            table,
            filter,
            order_by,
        };

        self.exec(op).await?.into_values()
    }

    async fn select_one(&mut self, table: TableId, filter: Filter) -> Result<Option<ValueRecord>> {
        let mut records = self.select(table, Some(filter), None).await?;

        if records.len() > 1 {
            return Err(crm_core::err!(
                "expected at most one row; table={}; actual={}",
                self.schema.table(table).name,
                records.len()
            ));
        }

        Ok(records.pop())
    }

    /// Updates the row with the given id; the id is always column 0.
    async fn update_by_id(
        &mut self,
        table: TableId,
        id: Uuid,
        assignments: Vec<(usize, Value)>,
    ) -> Result<()> {
        let op = Update {
            table,
            assignments,
            filter: Filter::eq(0, id),
        };

        match self.exec(op).await?.into_count()? {
            0 => Err(self.not_found(table, id)),
            _ => Ok(()),
        }
    }

    async fn delete_by_id(&mut self, table: TableId, id: Uuid) -> Result<()> {
        let op = Delete {
            table,
            filter: Filter::eq(0, id),
        };

        match self.exec(op).await?.into_count()? {
            0 => Err(self.not_found(table, id)),
            _ => Ok(()),
        }
    }

    fn not_found(&self, table: TableId, id: Uuid) -> Error {
        Error::record_not_found(format!("table={} id={id}", self.schema.table(table).name))
    }
}

/// Current time at the precision every supported database stores.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

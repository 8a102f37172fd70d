//! Custom column management.
//!
//! Every change touches two places: the live table, through a structural
//! `ALTER TABLE`, and the `column_metadata` table. The structural change always
//! runs first. How a failing metadata write is handled depends on the
//! configured [`Strategy`].

mod audit;
pub use audit::{AuditReport, TypeMismatch};

mod strategy;
pub use strategy::Strategy;

use crate::{
    ColumnDescriptor, ColumnUpdate, Db, LiveColumn, MetadataStore, MutatorConfig, NewColumn,
    Result,
};

use crm_core::{
    driver::operation::{AlterTable, Transaction},
    schema::{
        app::{ColumnName, ColumnType},
        db::Column,
    },
    Error, Residue,
};
use uuid::Uuid;

use std::time::Duration;

/// Upper bound for the delay between compensation attempts
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Adds, renames and deletes the custom columns of the clients table.
#[derive(Debug)]
pub struct SchemaMutator<'a> {
    db: &'a Db,
}

/// A structural change and the metadata write that follows it.
struct Change {
    /// Describes the change in errors and logs
    action: String,

    column: ColumnName,

    structural: AlterTable,

    /// Reverses `structural`, if it can be reversed
    undo: Option<Undo>,

    metadata: MetadataChange,
}

struct Undo {
    structural: AlterTable,

    /// Left behind if `structural` cannot be applied
    residue: Residue,
}

enum MetadataChange {
    Insert(NewColumn),
    Rename { id: Uuid, column_name: ColumnName },
    Delete(ColumnDescriptor),
}

impl<'a> SchemaMutator<'a> {
    pub(crate) fn new(db: &'a Db) -> SchemaMutator<'a> {
        SchemaMutator { db }
    }

    fn config(&self) -> &MutatorConfig {
        &self.db.config().mutator
    }

    fn table(&self) -> &str {
        &self.config().table
    }

    /// Adds a column named after `display_name` and describes it.
    ///
    /// Dropdown columns need at least one non-blank option; options given for
    /// any other type are ignored.
    pub async fn add_column(
        &self,
        display_name: &str,
        column_type: ColumnType,
        dropdown_options: Option<Vec<String>>,
    ) -> Result<ColumnDescriptor> {
        let column_name = derive_column_name(display_name)?;
        let dropdown_options = dropdown_options_for(column_type, dropdown_options)?;

        let mut store = self.db.metadata().await;

        if store.column_by_name(&column_name).await?.is_some() {
            return Err(duplicate(&column_name));
        }

        let column = Column::new(column_name.as_str(), column_type.storage_ty())
            .default(column_type.default_value());

        let change = Change {
            action: format!("add column {column_name}"),
            column: column_name.clone(),
            structural: AlterTable::add_column(self.table(), column),
            undo: Some(Undo {
                structural: AlterTable::drop_column(self.table(), column_name.as_str()),
                residue: Residue::OrphanColumn {
                    column: column_name.to_string(),
                },
            }),
            metadata: MetadataChange::Insert(NewColumn {
                column_name,
                column_type,
                dropdown_options,
            }),
        };

        self.apply(&mut store, change).await
    }

    /// Renames a column; its type and options are kept.
    pub async fn rename_column(
        &self,
        id: Uuid,
        new_display_name: &str,
    ) -> Result<ColumnDescriptor> {
        let new_name = derive_column_name(new_display_name)?;

        let mut store = self.db.metadata().await;
        let current = resolve(&mut store, id).await?;

        if current.column_name == new_name {
            return Err(Error::same_name(new_name));
        }

        if store.column_by_name(&new_name).await?.is_some() {
            return Err(duplicate(&new_name));
        }

        let old_name = current.column_name;

        let change = Change {
            action: format!("rename column {old_name} to {new_name}"),
            column: new_name.clone(),
            structural: AlterTable::rename_column(self.table(), old_name.as_str(), new_name.as_str()),
            undo: Some(Undo {
                structural: AlterTable::rename_column(
                    self.table(),
                    new_name.as_str(),
                    old_name.as_str(),
                ),
                residue: Residue::RenamedColumn {
                    live: new_name.to_string(),
                    described: old_name.to_string(),
                },
            }),
            metadata: MetadataChange::Rename {
                id,
                column_name: new_name,
            },
        };

        self.apply(&mut store, change).await
    }

    /// Drops a column and deletes its descriptor.
    ///
    /// A dropped column cannot be restored, so a failing descriptor delete is
    /// not compensated: the error is a dangling-metadata failure.
    pub async fn delete_column(&self, id: Uuid) -> Result<()> {
        let mut store = self.db.metadata().await;
        let descriptor = resolve(&mut store, id).await?;
        let column_name = descriptor.column_name.clone();

        let change = Change {
            action: format!("delete column {column_name}"),
            column: column_name.clone(),
            structural: AlterTable::drop_column(self.table(), column_name.as_str()),
            undo: None,
            metadata: MetadataChange::Delete(descriptor),
        };

        self.apply(&mut store, change).await?;
        Ok(())
    }

    /// The live table's columns in position order.
    pub async fn list_schema(&self) -> Result<Vec<LiveColumn>> {
        self.db.metadata().await.describe_table(self.table()).await
    }

    /// All descriptors, newest first.
    pub async fn list_columns(&self) -> Result<Vec<ColumnDescriptor>> {
        self.db.metadata().await.all_columns().await
    }

    /// Compares the live custom columns with their descriptors.
    pub async fn audit(&self) -> Result<AuditReport> {
        let mut store = self.db.metadata().await;
        let live = store.describe_table(self.table()).await?;
        let descriptors = store.all_columns().await?;

        let report = AuditReport::diff(&live, &descriptors);

        if !report.is_consistent() {
            tracing::warn!(
                orphan_columns = report.orphan_columns.len(),
                dangling_descriptors = report.dangling_descriptors.len(),
                type_mismatches = report.type_mismatches.len(),
                "schema drift detected"
            );
        }

        Ok(report)
    }

    async fn apply(
        &self,
        store: &mut MetadataStore<'_>,
        change: Change,
    ) -> Result<ColumnDescriptor> {
        let action = change.action.clone();

        let result = match self.config().strategy.resolve(store.capability())? {
            Strategy::Transactional => self.transactional(store, change).await,
            _ => self.compensating(store, change).await,
        };

        if result.is_ok() {
            tracing::info!(table = self.table(), %action, "column changed");
        }

        result
    }

    async fn transactional(
        &self,
        store: &mut MetadataStore<'_>,
        change: Change,
    ) -> Result<ColumnDescriptor> {
        store.exec(Transaction::Start).await?;

        let action = change.action.clone();

        match apply_both(store, change).await {
            Ok(descriptor) => {
                store.exec(Transaction::Commit).await?;
                Ok(descriptor)
            }
            Err(err) => {
                if let Err(rollback) = store.exec(Transaction::Rollback).await {
                    tracing::error!(%action, error = %rollback, "rollback failed");
                }

                Err(err)
            }
        }
    }

    async fn compensating(
        &self,
        store: &mut MetadataStore<'_>,
        change: Change,
    ) -> Result<ColumnDescriptor> {
        let Change {
            action,
            column,
            structural,
            undo,
            metadata,
        } = change;

        apply_structural(store, &action, structural).await?;

        let cause = match metadata.apply(store).await {
            Ok(descriptor) => return Ok(descriptor),
            Err(cause) => cause,
        };

        let Some(undo) = undo else {
            tracing::warn!(%action, %column, error = %cause, "descriptor left dangling");
            return Err(cause.context(Error::dangling_metadata(column.as_str())));
        };

        let err = cause.context(Error::metadata_failure(&action));

        match self.compensate(store, &undo.structural).await {
            Ok(()) => {
                tracing::warn!(%action, error = %err, "structural change undone");
                Err(err)
            }
            Err(compensation) => {
                tracing::error!(
                    %action,
                    residue = ?undo.residue,
                    error = %compensation,
                    "compensation failed; schema left inconsistent"
                );
                Err(err.context(Error::unrepaired_inconsistency(undo.residue)))
            }
        }
    }

    /// Applies `undo`, retrying with exponential backoff.
    async fn compensate(&self, store: &mut MetadataStore<'_>, undo: &AlterTable) -> Result<()> {
        let config = self.config();
        let mut delay = config.compensation_backoff;
        let mut attempt = 0;

        loop {
            match store.exec(undo.clone()).await {
                Ok(_) => return Ok(()),
                Err(err) if attempt < config.compensation_retries => {
                    attempt += 1;
                    tracing::warn!(attempt, ?delay, error = %err, "compensation failed; retrying");
                    tokio::time::sleep(delay).await;
                    delay = next_backoff(delay);
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl MetadataChange {
    async fn apply(self, store: &mut MetadataStore<'_>) -> Result<ColumnDescriptor> {
        match self {
            MetadataChange::Insert(new) => store.create_column(new).await,
            MetadataChange::Rename { id, column_name } => {
                store
                    .update_column(id, ColumnUpdate::default().column_name(column_name))
                    .await
            }
            MetadataChange::Delete(descriptor) => {
                store.delete_column(descriptor.id).await?;
                Ok(descriptor)
            }
        }
    }
}

async fn apply_both(store: &mut MetadataStore<'_>, change: Change) -> Result<ColumnDescriptor> {
    apply_structural(store, &change.action, change.structural).await?;

    change
        .metadata
        .apply(store)
        .await
        .map_err(|cause| cause.context(Error::metadata_failure(&change.action)))
}

async fn apply_structural(
    store: &mut MetadataStore<'_>,
    action: &str,
    structural: AlterTable,
) -> Result<()> {
    store
        .exec(structural)
        .await
        .map_err(|cause| cause.context(Error::structural_failure(action)))?;
    Ok(())
}

async fn resolve(store: &mut MetadataStore<'_>, id: Uuid) -> Result<ColumnDescriptor> {
    store
        .column_by_id(id)
        .await?
        .ok_or_else(|| Error::record_not_found(format!("table=column_metadata id={id}")))
}

fn derive_column_name(display_name: &str) -> Result<ColumnName> {
    if display_name.trim().is_empty() {
        return Err(Error::validation_empty("column name"));
    }

    let column_name = ColumnName::derive(display_name);

    if column_name.is_bare() {
        return Err(Error::validation_invalid(
            "column name",
            format!("`{display_name}` has no letters, digits or underscores"),
        ));
    }

    Ok(column_name)
}

/// Drops the blank options of a dropdown column. The others are kept as
/// submitted.
fn dropdown_options_for(
    column_type: ColumnType,
    options: Option<Vec<String>>,
) -> Result<Option<Vec<String>>> {
    if !column_type.is_dropdown() {
        return Ok(None);
    }

    let options: Vec<String> = options
        .unwrap_or_default()
        .into_iter()
        .filter(|option| !option.trim().is_empty())
        .collect();

    if options.is_empty() {
        return Err(Error::validation_empty("dropdown options"));
    }

    Ok(Some(options))
}

fn next_backoff(delay: Duration) -> Duration {
    delay.saturating_mul(2).min(MAX_BACKOFF)
}

fn duplicate(column_name: &ColumnName) -> Error {
    Error::duplicate(format!("column_metadata.column_name = {column_name}"))
}

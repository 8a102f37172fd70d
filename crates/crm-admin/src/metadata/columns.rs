use super::{now, MetadataStore};
use crate::{
    tables::column_metadata::{self, COLUMN_NAME, COLUMN_TYPE, CREATED_AT, DROPDOWN_OPTIONS},
    ColumnDescriptor, ColumnUpdate, NewColumn, Result,
};

use crm_core::{
    schema::app::{ColumnName, ColumnType},
    stmt::{Filter, OrderBy, Value, ValueRecord},
};
use uuid::Uuid;

impl MetadataStore<'_> {
    /// Inserts a descriptor, assigning its id and creation time.
    pub async fn create_column(&mut self, new: NewColumn) -> Result<ColumnDescriptor> {
        let descriptor = ColumnDescriptor {
            id: Uuid::new_v4(),
            column_name: new.column_name,
            column_type: new.column_type,
            dropdown_options: new.dropdown_options,
            created_at: now(),
        };

        let values = vec![
            descriptor.id.into(),
            descriptor.column_name.as_str().into(),
            descriptor.column_type.as_str().into(),
            descriptor.dropdown_options.clone().into(),
            descriptor.created_at.into(),
        ];

        self.insert(self.tables.column_metadata, values).await?;
        Ok(descriptor)
    }

    /// All descriptors, newest first.
    pub async fn all_columns(&mut self) -> Result<Vec<ColumnDescriptor>> {
        self.select(
            self.tables.column_metadata,
            None,
            Some(OrderBy::desc(CREATED_AT)),
        )
        .await?
        .into_iter()
        .map(descriptor_from_record)
        .collect()
    }

    pub async fn column_by_id(&mut self, id: Uuid) -> Result<Option<ColumnDescriptor>> {
        self.select_one(self.tables.column_metadata, Filter::eq(column_metadata::ID, id))
            .await?
            .map(descriptor_from_record)
            .transpose()
    }

    pub async fn column_by_name(&mut self, name: &ColumnName) -> Result<Option<ColumnDescriptor>> {
        self.select_one(
            self.tables.column_metadata,
            Filter::eq(COLUMN_NAME, name.as_str()),
        )
        .await?
        .map(descriptor_from_record)
        .transpose()
    }

    /// Applies a partial update and returns the stored descriptor.
    pub async fn update_column(
        &mut self,
        id: Uuid,
        update: ColumnUpdate,
    ) -> Result<ColumnDescriptor> {
        let mut assignments = vec![];

        if let Some(column_name) = update.column_name {
            assignments.push((COLUMN_NAME, Value::from(String::from(column_name))));
        }

        if let Some(column_type) = update.column_type {
            assignments.push((COLUMN_TYPE, Value::from(column_type.as_str())));
        }

        if let Some(dropdown_options) = update.dropdown_options {
            assignments.push((DROPDOWN_OPTIONS, Value::from(dropdown_options)));
        }

        if !assignments.is_empty() {
            self.update_by_id(self.tables.column_metadata, id, assignments)
                .await?;
        }

        match self.column_by_id(id).await? {
            Some(descriptor) => Ok(descriptor),
            None => Err(self.not_found(self.tables.column_metadata, id)),
        }
    }

    pub async fn delete_column(&mut self, id: Uuid) -> Result<()> {
        self.delete_by_id(self.tables.column_metadata, id).await
    }
}

fn descriptor_from_record(record: ValueRecord) -> Result<ColumnDescriptor> {
    let [id, column_name, column_type, dropdown_options, created_at] =
        record.into_array::<{ column_metadata::WIDTH }>()?;

    Ok(ColumnDescriptor {
        id: id.to_uuid()?,
        column_name: ColumnName::from_stored(column_name.to_string()?),
        column_type: column_type.to_string()?.parse::<ColumnType>()?,
        dropdown_options: dropdown_options.to_option_list()?,
        created_at: created_at.to_timestamp()?,
    })
}

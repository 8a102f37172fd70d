use super::{Table, TableId};

/// The set of tables known to a driver connection.
#[derive(Debug, Default)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    /// Adds a table, assigning it the next [`TableId`].
    pub fn push(&mut self, mut table: Table) -> TableId {
        let id = TableId(self.tables.len());
        table.id = id;
        self.tables.push(table);
        id
    }

    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        &self.tables[id.into().0]
    }

    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }
}

use super::{Comma, Flavor, Formatter, Ident, Params, ToSql};

use crate::stmt::{self, Statement};

use crm_core::stmt::{Direction, Filter, OrderBy};

impl ToSql for &Statement {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Statement::AddColumn(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DescribeTable(stmt) => stmt.to_sql(f),
            Statement::DropColumn(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::RenameColumn(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::AddColumn {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let if_not_exists = if self.if_not_exists {
            Some("IF NOT EXISTS ")
        } else {
            None
        };

        fmt!(
            f,
            "ALTER TABLE ",
            &self.table,
            " ADD COLUMN ",
            if_not_exists,
            &self.column
        );
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = f.serializer.table(self.table);
        let if_not_exists = if self.if_not_exists {
            Some("IF NOT EXISTS ")
        } else {
            None
        };

        let columns: Vec<_> = table
            .columns
            .iter()
            .map(stmt::ColumnDef::from_schema)
            .collect();

        fmt!(
            f,
            "CREATE TABLE ",
            if_not_exists,
            Ident(&table.name),
            " (",
            Comma(&columns),
            ")"
        );
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = f.serializer.table(self.table);

        fmt!(f, "DELETE FROM ", Ident(&table.name), Where(self.table, &self.filter));
    }
}

impl ToSql for &stmt::DescribeTable {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = crm_core::stmt::Value::from(&self.table[..]);

        match f.serializer.flavor {
            Flavor::Postgresql => fmt!(
                f,
                "SELECT column_name::text, data_type::text, is_nullable::text, column_default::text \
                 FROM information_schema.columns \
                 WHERE table_schema = current_schema() AND table_name::text = ",
                &table,
                " ORDER BY ordinal_position"
            ),
            Flavor::Sqlite => fmt!(
                f,
                "SELECT name, lower(type), CASE WHEN \"notnull\" = 0 THEN 'YES' ELSE 'NO' END, dflt_value \
                 FROM pragma_table_info(",
                &table,
                ") ORDER BY cid"
            ),
        }
    }
}

impl ToSql for &stmt::DropColumn {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let if_exists = if self.if_exists {
            Some("IF EXISTS ")
        } else {
            None
        };

        fmt!(
            f,
            "ALTER TABLE ",
            &self.table,
            " DROP COLUMN ",
            if_exists,
            &self.name
        );
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = f.serializer.table(self.table);
        let columns = table.columns.iter().map(|column| Ident(&column.name));

        fmt!(
            f,
            "INSERT INTO ",
            Ident(&table.name),
            " (",
            Comma(columns),
            ") VALUES (",
            Comma(&self.values),
            ")"
        );
    }
}

impl ToSql for &stmt::RenameColumn {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(
            f,
            "ALTER TABLE ",
            &self.table,
            " RENAME COLUMN ",
            &self.from,
            " TO ",
            &self.to
        );
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = f.serializer.table(self.table);
        let columns = table.columns.iter().map(|column| Ident(&column.name));
        let filter = self.filter.as_ref().map(|filter| Where(self.table, filter));
        let order_by = self.order_by.as_ref().map(|order_by| Order(self.table, order_by));

        fmt!(
            f,
            "SELECT ",
            Comma(columns),
            " FROM ",
            Ident(&table.name),
            filter,
            order_by
        );
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let table = f.serializer.table(self.table);
        let assignments = self
            .assignments
            .iter()
            .map(|(index, value)| (Ident(&table.column(*index).name), (" = ", value)));

        fmt!(
            f,
            "UPDATE ",
            Ident(&table.name),
            " SET ",
            Comma(assignments),
            Where(self.table, &self.filter)
        );
    }
}

/// ` WHERE "column" = <param>`
struct Where<'a>(crm_core::schema::db::TableId, &'a Filter);

impl ToSql for Where<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let Where(table, filter) = self;
        let column = f.serializer.table(table).column(filter.column);

        fmt!(f, " WHERE ", Ident(&column.name), " = ", &filter.value);
    }
}

/// ` ORDER BY "column" ASC|DESC`
struct Order<'a>(crm_core::schema::db::TableId, &'a OrderBy);

impl ToSql for Order<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let Order(table, order_by) = self;
        let column = f.serializer.table(table).column(order_by.column);
        let direction = match order_by.direction {
            Direction::Asc => " ASC",
            Direction::Desc => " DESC",
        };

        fmt!(f, " ORDER BY ", Ident(&column.name), direction);
    }
}

use crate::theme;
use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;
use crm_admin::{ColumnDescriptor, ColumnType, Db};
use uuid::Uuid;

#[derive(Subcommand, Debug)]
pub enum ColumnCommand {
    /// Add a custom column
    Add(AddColumn),

    /// Rename a custom column
    Rename {
        id: Uuid,

        /// New display name
        name: String,
    },

    /// Drop a custom column and its metadata
    Delete {
        id: Uuid,

        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// List column metadata, newest first
    List,

    /// Show the live columns of the clients table
    Schema,

    /// Compare live columns with their metadata
    Audit,
}

#[derive(Args, Debug)]
pub struct AddColumn {
    /// Display name; the column identifier is derived from it
    name: String,

    /// One of string, integer, date, timestamp, boolean, dropdown
    #[arg(long = "type", short = 't', value_parser = parse_column_type)]
    column_type: ColumnType,

    /// Dropdown option, repeat for each option
    #[arg(long = "option", short = 'o')]
    options: Vec<String>,
}

impl ColumnCommand {
    pub(crate) async fn run(self, db: &Db) -> Result<()> {
        let columns = db.columns();

        match self {
            ColumnCommand::Add(add) => {
                theme::heading("Add Column");

                let options = (!add.options.is_empty()).then_some(add.options);
                let column = columns.add_column(&add.name, add.column_type, options).await?;

                print_column(&column);
                theme::done(format!("Added {}", column.column_name));
            }
            ColumnCommand::Rename { id, name } => {
                theme::heading("Rename Column");

                let column = columns.rename_column(id, &name).await?;

                print_column(&column);
                theme::done(format!("Renamed to {}", column.column_name));
            }
            ColumnCommand::Delete { id, yes } => {
                theme::heading("Delete Column");

                if !theme::confirm("This drops the column and its data. Are you sure?", yes)? {
                    return Ok(());
                }

                columns.delete_column(id).await?;
                theme::done("Column deleted");
            }
            ColumnCommand::List => {
                theme::heading("Columns");

                let descriptors = columns.list_columns().await?;
                if descriptors.is_empty() {
                    println!("  {}", style("No custom columns.").magenta().dim());
                    println!();
                }

                for column in &descriptors {
                    print_column(column);
                }
            }
            ColumnCommand::Schema => {
                theme::heading("Schema");

                for column in columns.list_schema().await? {
                    let name = if column.is_custom() {
                        style(column.column_name).cyan()
                    } else {
                        style(column.column_name)
                    };

                    println!(
                        "  {:<32} {:<26} {:<9} {}",
                        name,
                        column.data_type,
                        if column.is_nullable { "null" } else { "not null" },
                        style(column.column_default.unwrap_or_default()).dim()
                    );
                }
                println!();
            }
            ColumnCommand::Audit => {
                theme::heading("Audit");

                let report = columns.audit().await?;

                if report.is_consistent() {
                    theme::done("Live columns match their metadata");
                    return Ok(());
                }

                for column in &report.orphan_columns {
                    println!(
                        "  {} {} has no metadata",
                        style("✖").red().bold(),
                        style(&column.column_name).bold()
                    );
                }

                for descriptor in &report.dangling_descriptors {
                    println!(
                        "  {} {} is described but missing ({})",
                        style("✖").red().bold(),
                        style(&descriptor.column_name).bold(),
                        descriptor.id
                    );
                }

                for mismatch in &report.type_mismatches {
                    println!(
                        "  {} {} is {} but described as {}",
                        style("✖").red().bold(),
                        style(&mismatch.live.column_name).bold(),
                        mismatch.live.data_type,
                        mismatch.descriptor.column_type
                    );
                }

                println!();
                bail!("schema drift detected");
            }
        }

        Ok(())
    }
}

fn parse_column_type(s: &str) -> Result<ColumnType, String> {
    s.parse().map_err(|_| {
        let names: Vec<_> = ColumnType::ALL.iter().map(|ty| ty.as_str()).collect();
        format!("expected one of {}", names.join(", "))
    })
}

fn print_column(column: &ColumnDescriptor) {
    println!(
        "  {} {} {}",
        style(&column.column_name).bold(),
        style(format!("({})", column.column_type.label())).dim(),
        style(column.id).dim()
    );

    if let Some(options) = &column.dropdown_options {
        println!("    {}", options.join(", "));
    }

    println!();
}

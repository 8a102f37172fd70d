mod client;
mod column;
mod login;
mod theme;
mod user;
mod utility;

pub use client::ClientCommand;
pub use column::ColumnCommand;
pub use login::LoginCommand;
pub use user::UserCommand;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use crm_admin::{config::DATABASE_URL_ENV, Config, Db};

use std::path::PathBuf;

/// Command line administration of a CRM database
pub struct CrmCli {
    db: Db,
}

impl CrmCli {
    /// Create a new CrmCli instance with the given database connection
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        self.db.config()
    }

    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Migrate => migrate(&self.db).await,
            Command::Column(cmd) => cmd.run(&self.db).await,
            Command::User(cmd) => cmd.run(&self.db).await,
            Command::Client(cmd) => cmd.run(&self.db).await,
            Command::Login(cmd) => cmd.run(&self.db).await,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "crm")]
#[command(about = "CRM administration - custom columns, operators and clients")]
#[command(version)]
pub struct Cli {
    /// Database connection URL
    #[arg(long, env = DATABASE_URL_ENV, global = true)]
    database_url: Option<String>,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the built-in tables if they do not exist
    Migrate,

    /// Custom column management
    #[command(subcommand)]
    Column(ColumnCommand),

    /// Operator account management
    #[command(subcommand)]
    User(UserCommand),

    /// Client records
    #[command(subcommand)]
    Client(ClientCommand),

    /// Check operator credentials and issue a session token
    Login(LoginCommand),
}

impl Cli {
    /// Loads the configuration, connects and runs the command.
    pub async fn run(self) -> Result<()> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        let url = self
            .database_url
            .clone()
            .or_else(|| config.database_url.clone())
            .with_context(|| {
                format!("no database URL; pass --database-url or set {DATABASE_URL_ENV}")
            })?;

        let db = Db::builder().config(config).connect(&url).await?;

        tracing::debug!(url = %utility::redact_url_password(&url), "connected");

        CrmCli::new(db).run(self.command).await
    }
}

async fn migrate(db: &Db) -> Result<()> {
    theme::heading("Migrate");
    println!(
        "  {}",
        style(format!(
            "Connected to {}",
            utility::redact_url_password(&db.driver().url())
        ))
        .dim()
    );
    println!();

    db.migrate().await?;

    theme::done("Built-in tables are up to date");
    Ok(())
}

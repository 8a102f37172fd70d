use crate::theme;
use anyhow::Result;
use clap::Subcommand;
use console::style;
use crm_admin::{Db, NewClient};
use uuid::Uuid;

#[derive(Subcommand, Debug)]
pub enum ClientCommand {
    /// Create a client record
    Create {
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,
    },

    /// List client records, newest first
    List,

    /// Delete a client record
    Delete {
        id: Uuid,

        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

impl ClientCommand {
    pub(crate) async fn run(self, db: &Db) -> Result<()> {
        let clients = db.clients();

        match self {
            ClientCommand::Create { name, email, phone } => {
                theme::heading("Create Client");

                let client = clients.create(NewClient { name, email, phone }).await?;
                theme::done(format!("Created {} ({})", client.name, client.id));
            }
            ClientCommand::List => {
                theme::heading("Clients");

                for client in clients.list().await? {
                    println!(
                        "  {} {} {}",
                        style(&client.name).bold(),
                        client.email,
                        style(&client.phone).dim()
                    );
                    println!("    {}", style(client.id).dim());
                }
                println!();
            }
            ClientCommand::Delete { id, yes } => {
                theme::heading("Delete Client");

                if !theme::confirm("Delete this client?", yes)? {
                    return Ok(());
                }

                clients.delete(id).await?;
                theme::done("Client deleted");
            }
        }

        Ok(())
    }
}

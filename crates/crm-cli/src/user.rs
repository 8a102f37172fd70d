use crate::theme;
use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;
use crm_admin::{CreateUser, CrmUser, Db, UpdateUser};
use uuid::Uuid;

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Create an operator account; the password is prompted for
    Create(CreateArgs),

    /// List operator accounts, newest first
    List,

    /// Change fields of an operator account
    Update(UpdateArgs),

    /// Delete an operator account
    Delete {
        id: Uuid,

        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    email: String,

    #[arg(long)]
    name: String,

    #[arg(long)]
    phone: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    id: Uuid,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    /// Prompt for a new password
    #[arg(long)]
    password: bool,
}

impl UserCommand {
    pub(crate) async fn run(self, db: &Db) -> Result<()> {
        let users = db.users();

        match self {
            UserCommand::Create(args) => {
                theme::heading("Create User");

                let user = users
                    .create(CreateUser {
                        email: args.email,
                        password: theme::password("Password", true)?,
                        name: args.name,
                        phone_number: args.phone,
                    })
                    .await?;

                print_user(&user);
                theme::done(format!("Created {}", user.email));
            }
            UserCommand::List => {
                theme::heading("Users");

                let all = users.list().await?;
                if all.is_empty() {
                    println!("  {}", style("No users.").magenta().dim());
                    println!();
                }

                for user in &all {
                    print_user(user);
                }
            }
            UserCommand::Update(args) => {
                theme::heading("Update User");

                let password = if args.password {
                    Some(theme::password("New password", true)?)
                } else {
                    None
                };

                let user = users
                    .update(
                        args.id,
                        UpdateUser {
                            email: args.email,
                            password,
                            name: args.name,
                            phone_number: args.phone,
                        },
                    )
                    .await?;

                print_user(&user);
                theme::done("User updated");
            }
            UserCommand::Delete { id, yes } => {
                theme::heading("Delete User");

                if !theme::confirm("Delete this user?", yes)? {
                    return Ok(());
                }

                users.delete(id).await?;
                theme::done("User deleted");
            }
        }

        Ok(())
    }
}

fn print_user(user: &CrmUser) {
    println!(
        "  {} {} {}",
        style(&user.email).bold(),
        user.name.as_deref().unwrap_or("-"),
        style(user.phone_number.as_deref().unwrap_or("-")).dim()
    );
    println!("    {}", style(user.id).dim());
    println!();
}

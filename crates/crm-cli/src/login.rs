use crate::theme;
use anyhow::Result;
use clap::Args;
use console::style;
use crm_admin::{
    Authenticator, Credentials, Db, Session, Sessions, StaticAdmin, UserDirectory,
};

#[derive(Args, Debug)]
pub struct LoginCommand {
    #[arg(long)]
    email: String,
}

impl LoginCommand {
    pub(crate) async fn run(self, db: &Db) -> Result<()> {
        theme::heading("Login");

        let credentials = Credentials::new(self.email, theme::password("Password", false)?);
        let sessions = Sessions::new(&db.config().sessions);

        let session = login(db, &sessions, &credentials).await?;

        println!("  {} {}", style("token").dim(), session.token);
        println!("  {} {}", style("expires").dim(), session.expires_at);
        println!();
        theme::done(format!("Logged in as {}", session.identity.email));
        Ok(())
    }
}

/// Tries the configured operator first, then the user directory.
async fn login(db: &Db, sessions: &Sessions, credentials: &Credentials) -> Result<Session> {
    let mut providers: Vec<Box<dyn Authenticator>> = vec![];

    if let Some(admin) = &db.config().admin {
        providers.push(Box::new(StaticAdmin::from(admin)));
    }

    providers.push(Box::new(UserDirectory::new(db.clone())));

    let mut last_err = None;

    for provider in &providers {
        match sessions.login(provider.as_ref(), credentials).await {
            Ok(session) => return Ok(session),
            Err(err) => last_err = Some(err),
        }
    }

    Err(last_err.map(anyhow::Error::from).unwrap_or_else(|| {
        anyhow::anyhow!("no authentication provider configured")
    }))
}

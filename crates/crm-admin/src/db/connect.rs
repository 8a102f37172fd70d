use crm_core::{driver::Driver, Error, Result};

use url::Url;

/// Picks the built-in driver for a connection URL.
pub fn driver_for_url(url: &str) -> Result<Box<dyn Driver>> {
    let parsed =
        Url::parse(url).map_err(|e| Error::invalid_connection_url(format!("{e}; url={url}")))?;

    match parsed.scheme() {
        "postgresql" | "postgres" => postgresql(url),
        "sqlite" => sqlite(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "postgresql")]
fn postgresql(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(crm_driver_postgresql::PostgreSQL::new(url)?))
}

#[cfg(not(feature = "postgresql"))]
fn postgresql(_url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::unsupported_feature("`postgresql` feature not enabled"))
}

#[cfg(feature = "sqlite")]
fn sqlite(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(crm_driver_sqlite::Sqlite::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn sqlite(_url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::unsupported_feature("`sqlite` feature not enabled"))
}

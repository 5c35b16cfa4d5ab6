use serde::Deserialize;

/// Connection settings for the relational store, sourced from the process
/// environment at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    /// Hostname of the store server.
    pub host: String,
    /// Server port; defaults to the MySQL standard port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Account to authenticate as.
    pub user: String,
    pub password: String,
    /// Name of the target database. Created on first connect if absent.
    pub database: String,
}

fn default_port() -> u16 {
    3306
}

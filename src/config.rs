//! Deployment configuration read from the environment.

use std::collections::HashSet;

use crate::error::Error;

/// Connection descriptor for one Postgres store.
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl DbConfig {
    fn from_env(prefix: &str) -> Result<Self, Error> {
        let port_var = format!("{prefix}_PORT");
        Ok(Self {
            host: require(&format!("{prefix}_HOST"))?,
            port: require(&port_var)?
                .parse()
                .map_err(|_| Error::InvalidEnvValue {
                    var: port_var,
                    reason: "not a port number".to_string(),
                })?,
            database: require(&format!("{prefix}_DATABASE"))?,
            user: require(&format!("{prefix}_USER"))?,
            password: require(&format!("{prefix}_PASSWORD"))?,
        })
    }

    /// Connection URL for sea-orm.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

pub struct Config {
    /// Static universe reference database (SDE).
    pub sde: DbConfig,
    /// Stationspinner corporation database.
    pub spinner: DbConfig,
    /// Corporation name all owner-scoped queries are filtered to. May be
    /// empty; resolution then fails at startup and blocks those commands.
    pub corporation: String,
    /// Listing threshold for `whoat`/`ship` before they summarize.
    pub max_lines: usize,
    /// Channels allowed to run corporation-data commands.
    pub full_access_channels: HashSet<String>,
    /// Base URL of the server-status endpoint.
    pub status_url: String,
}

const DEFAULT_MAX_LINES: usize = 10;

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let max_lines = match std::env::var("MAX_LINES") {
            Ok(raw) => raw.parse().map_err(|_| Error::InvalidEnvValue {
                var: "MAX_LINES".to_string(),
                reason: "not a line count".to_string(),
            })?,
            Err(_) => DEFAULT_MAX_LINES,
        };

        let full_access_channels = std::env::var("FULL_ACCESS_CHANNELS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|channel| !channel.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            sde: DbConfig::from_env("SDE")?,
            spinner: DbConfig::from_env("SPINNER")?,
            corporation: std::env::var("CORPORATION").unwrap_or_default(),
            max_lines,
            full_access_channels,
            status_url: require("STATUS_URL")?,
        })
    }
}

fn require(var: &str) -> Result<String, Error> {
    std::env::var(var).map_err(|_| Error::MissingEnvVar(var.to_string()))
}

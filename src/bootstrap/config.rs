use std::env;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    /// Cap applied to `GET /users`; there is no pagination beyond it.
    pub users_list_limit: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_port: 4000,
            database_url: String::new(),
            db_max_connections: 10,
            users_list_limit: 20,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must point at the users database")?;
        Self::from_lookup(database_url, |key| env::var(key).ok())
    }

    fn from_lookup(
        database_url: String,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let api_port = lookup("API_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.api_port);
        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.db_max_connections);
        let users_list_limit = lookup("USERS_LIST_LIMIT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.users_list_limit);

        if users_list_limit < 1 {
            anyhow::bail!("USERS_LIST_LIMIT must be a positive integer");
        }
        if database_url.trim().is_empty() {
            anyhow::bail!("DATABASE_URL must not be empty");
        }

        Ok(Self {
            api_port,
            database_url,
            db_max_connections,
            users_list_limit,
        })
    }
}

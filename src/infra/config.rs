//! Centralized configuration (environment variables + defaults).

use crate::app::PatchTimestampPolicy;
use anyhow::{anyhow, Context};
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" | "in_memory" => Ok(Self::Memory),
            other => Err(anyhow!("unknown store backend '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub store_backend: StoreBackend,
    /// Required for the postgres backend only.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub app_env: String,
    pub seed_data: bool,
    pub patch_timestamp_policy: PatchTimestampPolicy,
}

impl Config {
    /// Reads the process environment (after loading `.env`, if any).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_addr = var("BIND_ADDR", "0.0.0.0:8080")
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address")?;
        let store_backend = var("STORE_BACKEND", "postgres")
            .parse::<StoreBackend>()
            .context("STORE_BACKEND must be 'postgres' or 'memory'")?;
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(anyhow!("DATABASE_URL must be set for the postgres store backend"));
        }
        let db_max_connections = var("DB_MAX_CONNECTIONS", "5")
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid u32")?
            .max(1);
        let seed_data = parse_bool(&var("SEED_DATA", "true"))
            .ok_or_else(|| anyhow!("SEED_DATA must be true or false"))?;
        let patch_timestamp_policy = var("PATCH_TIMESTAMP_POLICY", "on_change")
            .parse::<PatchTimestampPolicy>()
            .context("PATCH_TIMESTAMP_POLICY must be 'on_change' or 'always'")?;

        Ok(Self {
            bind_addr,
            store_backend,
            database_url,
            db_max_connections,
            app_env: var("APP_ENV", "development").trim().to_lowercase(),
            seed_data,
            patch_timestamp_policy,
        })
    }

    pub fn is_production(&self) -> bool {
        self.app_env == "production" || self.app_env == "prod"
    }

    /// Fixture seeding only ever runs outside production.
    pub fn seed_enabled(&self) -> bool {
        self.seed_data && !self.is_production()
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

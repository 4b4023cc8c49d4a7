//! Resource services: the business layer between HTTP handlers and the record store.

use anyhow::anyhow;
use std::str::FromStr;

pub mod beer_service;
pub mod bootstrap;
pub mod customer_service;

pub use beer_service::BeerService;
pub use customer_service::CustomerService;

/// Whether a PATCH that changes nothing still rewrites the record (and so
/// bumps `last_modified_date`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatchTimestampPolicy {
    /// Skip the save when no field changed.
    #[default]
    OnChange,
    /// Always save.
    Always,
}

impl PatchTimestampPolicy {
    pub fn should_save(self, changed: bool) -> bool {
        changed || self == Self::Always
    }
}

impl FromStr for PatchTimestampPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "on_change" | "onchange" => Ok(Self::OnChange),
            "always" => Ok(Self::Always),
            other => Err(anyhow!("unknown patch timestamp policy '{}'", other)),
        }
    }
}

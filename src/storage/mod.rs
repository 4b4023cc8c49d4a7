//! Record store abstraction.
//!
//! Services talk to a [`Repository`] and never to a concrete backend. Two
//! backends exist: PostgreSQL ([`postgres`]) and an in-process map ([`memory`]).

use crate::domain::model::{Beer, Customer};
use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use std::fmt;
use uuid::Uuid;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryRepository;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A persisted record the store can key, audit and filter.
pub trait Document: Clone + Send + Sync + 'static {
    /// Fields that support exact-match lookup.
    type Field: Copy + fmt::Debug + Send + Sync;

    const COLLECTION: &'static str;

    fn id(&self) -> Option<Uuid>;

    fn created_date(&self) -> Option<DateTime<Utc>>;

    fn field(&self, field: Self::Field) -> Option<&str>;

    /// Assigns the id and audit timestamps ahead of a save; returns the id.
    fn stamp(&mut self, now: DateTime<Utc>) -> Uuid;
}

/// Shared auditing step for every save: a missing id or creation date is
/// filled in, and the modification date moves to `now` without going backwards.
/// Timestamps are kept at microsecond precision, the resolution of `TIMESTAMPTZ`.
pub fn audit(
    id: &mut Option<Uuid>,
    created_date: &mut Option<DateTime<Utc>>,
    last_modified_date: &mut Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Uuid {
    let now = now.trunc_subsecs(6);
    let key = *id.get_or_insert_with(Uuid::new_v4);
    let created = *created_date.get_or_insert(now);
    let floor = last_modified_date.map_or(created, |prev| prev.max(created));
    *last_modified_date = Some(now.max(floor));
    key
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeerField {
    Name,
    Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    Name,
}

impl Document for Beer {
    type Field = BeerField;

    const COLLECTION: &'static str = "beer";

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn created_date(&self) -> Option<DateTime<Utc>> {
        self.created_date
    }

    fn field(&self, field: BeerField) -> Option<&str> {
        match field {
            BeerField::Name => Some(self.beer_name.as_str()),
            BeerField::Style => self.beer_style.as_deref(),
        }
    }

    fn stamp(&mut self, now: DateTime<Utc>) -> Uuid {
        audit(
            &mut self.id,
            &mut self.created_date,
            &mut self.last_modified_date,
            now,
        )
    }
}

impl Document for Customer {
    type Field = CustomerField;

    const COLLECTION: &'static str = "customer";

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn created_date(&self) -> Option<DateTime<Utc>> {
        self.created_date
    }

    fn field(&self, field: CustomerField) -> Option<&str> {
        match field {
            CustomerField::Name => Some(self.customer_name.as_str()),
        }
    }

    fn stamp(&mut self, now: DateTime<Utc>) -> Uuid {
        audit(
            &mut self.id,
            &mut self.created_date,
            &mut self.last_modified_date,
            now,
        )
    }
}

/// Record store operations for one collection.
///
/// Absence is `Ok(None)` / an empty `Vec`; `Err` only ever means the backend failed.
#[async_trait]
pub trait Repository<E: Document>: Send + Sync {
    async fn count(&self) -> Result<u64, StoreError>;

    /// All records, ordered by creation date then id.
    async fn find_all(&self) -> Result<Vec<E>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, StoreError>;

    /// Records whose `field` equals `value` exactly, in `find_all` order.
    async fn find_by_field(&self, field: E::Field, value: &str) -> Result<Vec<E>, StoreError>;

    /// Inserts or replaces the record, assigning id and audit timestamps.
    async fn save(&self, entity: E) -> Result<E, StoreError>;

    async fn save_all(&self, entities: Vec<E>) -> Result<Vec<E>, StoreError> {
        let mut saved = Vec::with_capacity(entities.len());
        for entity in entities {
            saved.push(self.save(entity).await?);
        }
        Ok(saved)
    }

    /// Removes the record if present. Missing ids are not an error.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError>;

    async fn delete_all(&self) -> Result<(), StoreError>;
}

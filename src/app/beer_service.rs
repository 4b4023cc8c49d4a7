//! Beer service.
//!
//! Absence is `Ok(None)`, never an error: the HTTP layer alone decides that an
//! absent beer becomes a 404.

use crate::app::PatchTimestampPolicy;
use crate::domain::mapper::parse_id;
use crate::domain::model::{Beer, BeerDto, BeerPatch, BeerQuery};
use crate::storage::{BeerField, Repository, StoreError};
use std::sync::Arc;
use tracing::{debug, info, instrument};

pub struct BeerService {
    repository: Arc<dyn Repository<Beer>>,
    patch_policy: PatchTimestampPolicy,
}

impl BeerService {
    pub fn new(repository: Arc<dyn Repository<Beer>>, patch_policy: PatchTimestampPolicy) -> Self {
        Self {
            repository,
            patch_policy,
        }
    }

    /// Lists beers, optionally narrowed by exact name and/or style.
    #[instrument(skip(self))]
    pub async fn list(&self, query: &BeerQuery) -> Result<Vec<BeerDto>, StoreError> {
        let beers = match (query.beer_name.as_deref(), query.beer_style.as_deref()) {
            (Some(name), style) => {
                let mut beers = self.repository.find_by_field(BeerField::Name, name).await?;
                if let Some(style) = style {
                    beers.retain(|b| b.beer_style.as_deref() == Some(style));
                }
                beers
            }
            (None, Some(style)) => self.repository.find_by_field(BeerField::Style, style).await?,
            (None, None) => self.repository.find_all().await?,
        };
        Ok(beers.into_iter().map(BeerDto::from).collect())
    }

    /// The earliest-created beer with exactly this name.
    pub async fn find_first_by_name(&self, name: &str) -> Result<Option<BeerDto>, StoreError> {
        let beers = self.repository.find_by_field(BeerField::Name, name).await?;
        Ok(beers.into_iter().next().map(BeerDto::from))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<BeerDto>, StoreError> {
        Ok(self.find(id).await?.map(BeerDto::from))
    }

    /// Persists a new beer. Any id on the DTO is ignored.
    #[instrument(skip_all)]
    pub async fn create(&self, dto: BeerDto) -> Result<BeerDto, StoreError> {
        let mut beer = Beer::from(dto);
        beer.id = None;
        beer.created_date = None;
        beer.last_modified_date = None;
        let saved = self.repository.save(beer).await?;
        info!(id = ?saved.id, name = %saved.beer_name, "beer created");
        Ok(saved.into())
    }

    /// Overwrites every mutable field of an existing beer.
    #[instrument(skip(self, dto))]
    pub async fn update_by_id(&self, id: &str, dto: BeerDto) -> Result<Option<BeerDto>, StoreError> {
        let Some(mut beer) = self.find(id).await? else {
            return Ok(None);
        };
        beer.overwrite_from(dto);
        let saved = self.repository.save(beer).await?;
        Ok(Some(saved.into()))
    }

    /// Applies only the fields set in `patch` to an existing beer.
    #[instrument(skip(self, patch))]
    pub async fn patch_by_id(
        &self,
        id: &str,
        patch: BeerPatch,
    ) -> Result<Option<BeerDto>, StoreError> {
        let Some(mut beer) = self.find(id).await? else {
            return Ok(None);
        };
        if patch.is_empty() {
            debug!(id, "patch sets no fields");
        }
        let changed = patch.apply_to(&mut beer);
        if !self.patch_policy.should_save(changed) {
            debug!("patch changed nothing, record left untouched");
            return Ok(Some(beer.into()));
        }
        let saved = self.repository.save(beer).await?;
        Ok(Some(saved.into()))
    }

    /// Removes the beer if present. Returns whether a record was removed;
    /// unknown and malformed ids are not an error.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let Some(key) = parse_id(id) else {
            return Ok(false);
        };
        if self.repository.find_by_id(key).await?.is_none() {
            debug!(%key, "no beer to delete");
            return Ok(false);
        }
        self.repository.delete_by_id(key).await?;
        info!(%key, "beer deleted");
        Ok(true)
    }

    async fn find(&self, id: &str) -> Result<Option<Beer>, StoreError> {
        match parse_id(id) {
            Some(key) => self.repository.find_by_id(key).await,
            None => {
                debug!(id, "not a beer key");
                Ok(None)
            }
        }
    }
}

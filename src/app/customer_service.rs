use crate::app::PatchTimestampPolicy;
use crate::domain::mapper::parse_id;
use crate::domain::model::{Customer, CustomerDto, CustomerPatch, CustomerQuery};
use crate::storage::{CustomerField, Repository, StoreError};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Customer service; same contract shape as [`crate::app::BeerService`].
pub struct CustomerService {
    repository: Arc<dyn Repository<Customer>>,
    patch_policy: PatchTimestampPolicy,
}

impl CustomerService {
    pub fn new(
        repository: Arc<dyn Repository<Customer>>,
        patch_policy: PatchTimestampPolicy,
    ) -> Self {
        Self {
            repository,
            patch_policy,
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: &CustomerQuery) -> Result<Vec<CustomerDto>, StoreError> {
        let customers = match query.customer_name.as_deref() {
            Some(name) => {
                self.repository
                    .find_by_field(CustomerField::Name, name)
                    .await?
            }
            None => self.repository.find_all().await?,
        };
        Ok(customers.into_iter().map(CustomerDto::from).collect())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<CustomerDto>, StoreError> {
        Ok(self.find(id).await?.map(CustomerDto::from))
    }

    #[instrument(skip_all)]
    pub async fn create(&self, dto: CustomerDto) -> Result<CustomerDto, StoreError> {
        let customer = Customer {
            customer_name: dto.customer_name.unwrap_or_default(),
            ..Default::default()
        };
        let saved = self.repository.save(customer).await?;
        info!(id = ?saved.id, "customer created");
        Ok(saved.into())
    }

    #[instrument(skip(self, dto))]
    pub async fn update_by_id(
        &self,
        id: &str,
        dto: CustomerDto,
    ) -> Result<Option<CustomerDto>, StoreError> {
        let Some(mut customer) = self.find(id).await? else {
            return Ok(None);
        };
        customer.overwrite_from(dto);
        Ok(Some(self.repository.save(customer).await?.into()))
    }

    #[instrument(skip(self, patch))]
    pub async fn patch_by_id(
        &self,
        id: &str,
        patch: CustomerPatch,
    ) -> Result<Option<CustomerDto>, StoreError> {
        let Some(mut customer) = self.find(id).await? else {
            return Ok(None);
        };
        if patch.is_empty() {
            debug!(id, "patch sets no fields");
        }
        let changed = patch.apply_to(&mut customer);
        if !self.patch_policy.should_save(changed) {
            debug!("patch changed nothing, record left untouched");
            return Ok(Some(customer.into()));
        }
        Ok(Some(self.repository.save(customer).await?.into()))
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let Some(key) = parse_id(id) else {
            return Ok(false);
        };
        if self.repository.find_by_id(key).await?.is_none() {
            debug!(%key, "no customer to delete");
            return Ok(false);
        }
        self.repository.delete_by_id(key).await?;
        info!(%key, "customer deleted");
        Ok(true)
    }

    async fn find(&self, id: &str) -> Result<Option<Customer>, StoreError> {
        match parse_id(id) {
            Some(key) => self.repository.find_by_id(key).await,
            None => Ok(None),
        }
    }
}

use crate::app::{BeerService, CustomerService, PatchTimestampPolicy};
use crate::domain::model::{Beer, Customer};
use crate::storage::Repository;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

/// Shared, immutable handler state. Services are the only path to the store,
/// apart from the liveness probe.
#[derive(Clone)]
pub struct AppState {
    pub beer_service: Arc<BeerService>,
    pub customer_service: Arc<CustomerService>,
    pub probe: Arc<dyn Repository<Beer>>,
}

impl AppState {
    pub fn new(
        beers: Arc<dyn Repository<Beer>>,
        customers: Arc<dyn Repository<Customer>>,
        patch_policy: PatchTimestampPolicy,
    ) -> Self {
        Self {
            beer_service: Arc::new(BeerService::new(beers.clone(), patch_policy)),
            customer_service: Arc::new(CustomerService::new(customers, patch_policy)),
            probe: beers,
        }
    }
}

/// Envelope for error (and health) responses. Successful resource reads return
/// the DTOs directly.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>, data: Option<JsonValue>) -> Self {
        Self {
            success: false,
            data,
            error: Some(error.into()),
        }
    }
}

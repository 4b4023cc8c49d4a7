use super::{assign, has_text, not_blank};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Persisted customer record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Customer {
    pub id: Option<Uuid>,
    pub customer_name: String,
    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl Customer {
    pub fn overwrite_from(&mut self, dto: CustomerDto) {
        self.customer_name = dto.customer_name.unwrap_or_default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: Option<String>,
    #[validate(required, length(min = 2, max = 255), custom(function = "not_blank"))]
    pub customer_name: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_date: Option<DateTime<Utc>>,
}

/// Partial customer update; a blank name counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct CustomerPatch {
    #[validate(length(min = 2, max = 255))]
    pub customer_name: Option<String>,
}

impl From<CustomerDto> for CustomerPatch {
    fn from(dto: CustomerDto) -> Self {
        Self {
            customer_name: dto.customer_name.filter(|s| has_text(s)),
        }
    }
}

impl CustomerPatch {
    pub fn is_empty(&self) -> bool {
        self.customer_name.is_none()
    }

    pub fn apply_to(self, customer: &mut Customer) -> bool {
        match self.customer_name {
            Some(name) => assign(&mut customer.customer_name, name),
            None => false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CustomerQuery {
    pub customer_name: Option<String>,
}

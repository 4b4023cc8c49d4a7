use crate::domain::model::{CustomerDto, CustomerPatch, CustomerQuery};
use crate::transport::http::handlers::common::{resource_location, ApiError};
use crate::transport::http::router::CUSTOMER_PATH;
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

const RESOURCE: &str = "Customer";

#[utoipa::path(
    get,
    path = "/api/v3/customer",
    params(CustomerQuery),
    responses(
        (status = 200, description = "Customers, optionally filtered by exact name", body = [CustomerDto]),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<CustomerQuery>,
) -> Result<Json<Vec<CustomerDto>>, ApiError> {
    Ok(Json(state.customer_service.list(&query).await?))
}

#[utoipa::path(
    get,
    path = "/api/v3/customer/{customerId}",
    params(("customerId" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "The customer", body = CustomerDto),
        (status = 404, description = "Not found", body = ApiResponse)
    )
)]
pub async fn get_customer_by_id(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<CustomerDto>, ApiError> {
    match state.customer_service.get_by_id(&customer_id).await? {
        Some(customer) => Ok(Json(customer)),
        None => Err(ApiError::not_found(RESOURCE, customer_id)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v3/customer",
    request_body = CustomerDto,
    responses(
        (status = 201, description = "Created; Location points at the new customer"),
        (status = 400, description = "Validation failed", body = ApiResponse),
        (status = 415, description = "Body is not declared as JSON", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse)
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    request: Result<Json<CustomerDto>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(dto) = request?;
    dto.validate()?;

    let saved = state.customer_service.create(dto).await?;
    let location = resource_location(CUSTOMER_PATH, saved.id.as_deref().unwrap_or_default());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

#[utoipa::path(
    put,
    path = "/api/v3/customer/{customerId}",
    params(("customerId" = String, Path, description = "Customer id")),
    request_body = CustomerDto,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation failed", body = ApiResponse),
        (status = 404, description = "Not found", body = ApiResponse)
    )
)]
pub async fn update_customer_by_id(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    request: Result<Json<CustomerDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(dto) = request?;
    dto.validate()?;

    match state.customer_service.update_by_id(&customer_id, dto).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(ApiError::not_found(RESOURCE, customer_id)),
    }
}

#[utoipa::path(
    patch,
    path = "/api/v3/customer/{customerId}",
    params(("customerId" = String, Path, description = "Customer id")),
    request_body = CustomerDto,
    responses(
        (status = 204, description = "Patched (a blank name is ignored)"),
        (status = 400, description = "Validation failed", body = ApiResponse),
        (status = 404, description = "Not found", body = ApiResponse)
    )
)]
pub async fn patch_customer_by_id(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    request: Result<Json<CustomerDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(dto) = request?;
    let patch = CustomerPatch::from(dto);
    patch.validate()?;

    match state.customer_service.patch_by_id(&customer_id, patch).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(ApiError::not_found(RESOURCE, customer_id)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v3/customer/{customerId}",
    params(("customerId" = String, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ApiResponse)
    )
)]
pub async fn delete_customer_by_id(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.customer_service.delete_by_id(&customer_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(RESOURCE, customer_id))
    }
}

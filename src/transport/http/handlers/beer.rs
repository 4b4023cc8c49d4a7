use crate::domain::model::{BeerDto, BeerPatch, BeerQuery};
use crate::transport::http::handlers::common::{resource_location, ApiError};
use crate::transport::http::router::BEER_PATH;
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

const RESOURCE: &str = "Beer";

#[utoipa::path(
    get,
    path = "/api/v3/beer",
    params(BeerQuery),
    responses(
        (status = 200, description = "Beers, optionally filtered by exact name/style", body = [BeerDto]),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_beers(
    State(state): State<AppState>,
    Query(query): Query<BeerQuery>,
) -> Result<Json<Vec<BeerDto>>, ApiError> {
    Ok(Json(state.beer_service.list(&query).await?))
}

#[utoipa::path(
    get,
    path = "/api/v3/beer/{beerId}",
    params(("beerId" = String, Path, description = "Beer id")),
    responses(
        (status = 200, description = "The beer", body = BeerDto),
        (status = 404, description = "Not found", body = ApiResponse)
    )
)]
pub async fn get_beer_by_id(
    State(state): State<AppState>,
    Path(beer_id): Path<String>,
) -> Result<Json<BeerDto>, ApiError> {
    state
        .beer_service
        .get_by_id(&beer_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(RESOURCE, beer_id))
}

#[utoipa::path(
    post,
    path = "/api/v3/beer",
    request_body = BeerDto,
    responses(
        (status = 201, description = "Created; Location points at the new beer"),
        (status = 400, description = "Validation failed", body = ApiResponse),
        (status = 415, description = "Body is not declared as JSON", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse)
    )
)]
pub async fn create_beer(
    State(state): State<AppState>,
    request: Result<Json<BeerDto>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(dto) = request?;
    dto.validate()?;

    let saved = state.beer_service.create(dto).await?;
    let location = resource_location(BEER_PATH, saved.id.as_deref().unwrap_or_default());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

#[utoipa::path(
    put,
    path = "/api/v3/beer/{beerId}",
    params(("beerId" = String, Path, description = "Beer id")),
    request_body = BeerDto,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation failed", body = ApiResponse),
        (status = 404, description = "Not found", body = ApiResponse),
        (status = 415, description = "Body is not declared as JSON", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse)
    )
)]
pub async fn update_beer_by_id(
    State(state): State<AppState>,
    Path(beer_id): Path<String>,
    request: Result<Json<BeerDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(dto) = request?;
    dto.validate()?;

    state
        .beer_service
        .update_by_id(&beer_id, dto)
        .await?
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| ApiError::not_found(RESOURCE, beer_id))
}

#[utoipa::path(
    patch,
    path = "/api/v3/beer/{beerId}",
    params(("beerId" = String, Path, description = "Beer id")),
    request_body = BeerDto,
    responses(
        (status = 204, description = "Patched (blank / non-positive fields are ignored)"),
        (status = 400, description = "Validation failed", body = ApiResponse),
        (status = 404, description = "Not found", body = ApiResponse),
        (status = 415, description = "Body is not declared as JSON", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse)
    )
)]
pub async fn patch_beer_by_id(
    State(state): State<AppState>,
    Path(beer_id): Path<String>,
    request: Result<Json<BeerDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(dto) = request?;
    let patch = BeerPatch::from(dto);
    patch.validate()?;

    state
        .beer_service
        .patch_by_id(&beer_id, patch)
        .await?
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| ApiError::not_found(RESOURCE, beer_id))
}

#[utoipa::path(
    delete,
    path = "/api/v3/beer/{beerId}",
    params(("beerId" = String, Path, description = "Beer id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ApiResponse)
    )
)]
pub async fn delete_beer_by_id(
    State(state): State<AppState>,
    Path(beer_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.beer_service.delete_by_id(&beer_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(RESOURCE, beer_id))
    }
}

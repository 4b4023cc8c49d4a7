use crate::storage::StoreError;
use crate::transport::http::types::ApiResponse;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use validator::ValidationErrors;

/// Everything a handler can fail with, mapped onto HTTP in one place.
#[derive(Debug)]
pub enum ApiError {
    /// Body was not valid JSON for the DTO.
    InvalidJson(JsonRejection),
    /// Body parsed but broke a field constraint. Nothing was written.
    Validation(ValidationErrors),
    NotFound { resource: &'static str, id: String },
    Store(StoreError),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidJson(JsonRejection::MissingJsonContentType(_)) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            // syntax and shape errors alike
            Self::InvalidJson(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        Self::InvalidJson(err)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        Self::Validation(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::InvalidJson(err) => {
                ApiResponse::failure(format!("Invalid JSON body: {}", err.body_text()), None)
            }
            Self::Validation(errors) => ApiResponse::failure(
                "Validation failed",
                serde_json::to_value(&errors).ok(),
            ),
            Self::NotFound { resource, id } => {
                ApiResponse::failure(format!("{} with id {} not found", resource, id), None)
            }
            Self::Store(err) => {
                tracing::error!(error = %err, "record store failure");
                ApiResponse::failure("Internal server error", None)
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Canonical path of a single resource, used for `Location` headers.
pub fn resource_location(collection_path: &str, id: &str) -> String {
    format!("{}/{}", collection_path.trim_end_matches('/'), id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn statuses_by_kind() {
        assert_eq!(
            ApiError::not_found("Beer", "999").status(),
            StatusCode::NOT_FOUND
        );
        let invalid = crate::domain::model::CustomerDto::default()
            .validate()
            .unwrap_err();
        assert_eq!(ApiError::from(invalid).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(StoreError::Database(sqlx::Error::PoolTimedOut)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn location_joins_path_and_id() {
        assert_eq!(resource_location("/api/v3/beer", "abc"), "/api/v3/beer/abc");
        assert_eq!(resource_location("/api/v3/beer/", "abc"), "/api/v3/beer/abc");
    }
}

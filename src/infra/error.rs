//! Types for reporting errors that happened during a request.

use super::extract::Json;
use axum::{
    extract::rejection::QueryRejection,
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tower_http::catch_panic::ResponseForPanic;
use utoipa::ToSchema;

/// A standard error response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// A description of the error.
    message: String,
    /// When the error happened.
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    timestamp: OffsetDateTime,
}

impl ErrorBody {
    pub(crate) fn new(message: String) -> Self {
        Self {
            message,
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }
}

/// An error from our API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// An error caused by the client.
    #[error("{0}")]
    ClientError(#[from] ClientError),
    /// An internal error.
    #[error("{0}")]
    InternalError(#[from] InternalError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::ClientError(e) => e.into_response(),
            ApiError::InternalError(e) => {
                tracing::error!("internal error: {}", e);
                e.into_response()
            }
        }
    }
}

/// The result of calling API-related functions.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors caused by the client.
/// The client can do something to fix these.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The resource was not found.
    #[error("not found")]
    NotFound,
    /// Custom error.
    #[error("{1}")]
    Custom(StatusCode, String),
}

impl From<QueryRejection> for ClientError {
    fn from(value: QueryRejection) -> Self {
        ClientError::Custom(value.status(), value.body_text())
    }
}

impl IntoResponse for ClientError {
    fn into_response(self) -> axum::response::Response {
        let msg = self.to_string();
        let status = match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Custom(status, _) => status,
        };
        (status, Json(ErrorBody::new(msg))).into_response()
    }
}

/// An internal error.
/// The client cannot do anything about this.
#[derive(Debug, thiserror::Error)]
pub enum InternalError {
    /// Failed to read a request or response body.
    #[error("body error: {0}")]
    BodyError(#[from] axum::Error),
    /// Other miscellaneous errors.
    #[error("{0}")]
    Other(String),
}

impl IntoResponse for InternalError {
    fn into_response(self) -> axum::response::Response {
        let mut response = (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new("internal error".to_string())),
        )
            .into_response();
        response
            .headers_mut()
            .insert("Retry-After", HeaderValue::from_static("5"));
        response
    }
}

/// A handler for converting panics into proper responses for the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanicHandler;

impl ResponseForPanic for PanicHandler {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(
        &mut self,
        _: Box<dyn std::any::Any + Send + 'static>,
    ) -> http::Response<Self::ResponseBody> {
        ApiError::InternalError(InternalError::Other("Panic".to_string())).into_response()
    }
}

/// Answers requests to routes that do not exist.
pub async fn not_found() -> ApiError {
    ClientError::NotFound.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: axum::response::Response) -> ErrorBody {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_has_json_body() {
        assert!(matches!(
            not_found().await,
            ApiError::ClientError(ClientError::NotFound)
        ));
        let response = not_found().await.into_response();
        assert_eq!(StatusCode::NOT_FOUND, response.status());
        assert_eq!("not found", body_of(response).await.message());
    }

    #[tokio::test]
    async fn internal_error_hides_details() {
        let response = ApiError::from(InternalError::Other("secret".to_string())).into_response();
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
        assert_eq!("5", response.headers()["Retry-After"]);
        assert_eq!("internal error", body_of(response).await.message());
    }

    #[tokio::test]
    async fn panics_become_internal_errors() {
        let response = PanicHandler.response_for_panic(Box::new("boom"));
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
        assert_eq!("internal error", body_of(response).await.message());
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let json = serde_json::to_value(ErrorBody::new("oops".to_string())).unwrap();
        let timestamp = json["timestamp"].as_str().unwrap();
        assert!(OffsetDateTime::parse(
            timestamp,
            &time::format_description::well_known::Rfc3339
        )
        .is_ok());
    }
}

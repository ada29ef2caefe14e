//! Middleware for modifying requests and responses.

use super::error::{ApiResult, InternalError};
use axum::{body::Body, middleware::Next, response::IntoResponse};
use bytes::Bytes;
use http::{Request, Response};
use http_body_util::BodyExt;
use hyper::body::Body as _;
use tower_http::trace::MakeSpan;

static X_REQUEST_ID: &str = "x-request-id";

/// Creates a request span carrying the id set by the request id layer.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MakeRequestIdSpan;

impl<B> MakeSpan<B> for MakeRequestIdSpan {
    fn make_span(&mut self, request: &Request<B>) -> tracing::Span {
        let request_id = request
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|id| id.to_str().ok())
            .unwrap_or_default();
        tracing::info_span!(
            "request",
            request_id = request_id,
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
        )
    }
}

/// The maximum size of a body to log.
const MAX_BODY_SIZE: u64 = 8192;

/// Whether a body is known to be small enough to log.
fn is_loggable(body: &Body) -> bool {
    match body.size_hint().upper() {
        Some(n) => n <= MAX_BODY_SIZE,
        _ => false,
    }
}

/// Trace the request and response bodies.
pub(crate) async fn log_request_response(
    req: Request<Body>,
    next: Next,
) -> ApiResult<impl IntoResponse> {
    let (parts, body) = req.into_parts();
    let req = if is_loggable(&body) {
        let body = buffer_and_print("Request", body).await?;
        Request::from_parts(parts, Body::from(body))
    } else {
        Request::from_parts(parts, body)
    };

    let res = next.run(req).await;

    let (parts, body) = res.into_parts();
    let res = if is_loggable(&body) {
        let body = buffer_and_print("Response", body).await?;
        Response::from_parts(parts, Body::from(body))
    } else {
        Response::from_parts(parts, body)
    };

    Ok(res)
}

/// Read the entire body stream and store it in memory.
async fn buffer_and_print(direction: &str, body: Body) -> ApiResult<Bytes> {
    let body: Bytes = body
        .collect()
        .await
        .map_err(InternalError::from)?
        .to_bytes();

    // Log if valid text
    if let Ok(body) = std::str::from_utf8(&body) {
        tracing::trace!("{} body = {:?}", direction, body);
    }

    Ok(body)
}

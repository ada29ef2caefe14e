//! The greeting API. Returns a numbered greeting based on a query parameter.

use crate::core::greeting::{greeting_record::Greeting, greeting_service::GreetingService};
#[allow(unused_imports)] // Referenced only inside `#[utoipa::path]`.
use crate::infra::error::ErrorBody;
use crate::infra::{
    extract::{Json, Query},
    state::AppState,
};
use axum::{extract::State, routing::get, Router};
use serde::Deserialize;
use std::fmt::Debug;
use tracing::instrument;
use utoipa::IntoParams;

/// The greeting API endpoints.
pub fn routes() -> Router<AppState> {
    Router::new().route("/greeting", get(greeting))
}

/// The greeting query parameters.
#[derive(Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GreetingParams {
    /// Who to greet. Defaults to `World`.
    name: Option<String>,
}

impl GreetingParams {
    /// Constructs new [`GreetingParams`].
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }
}

impl Debug for GreetingParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name.fmt(f)
    }
}

/// A handler for requests to the greeting endpoint.
#[utoipa::path(
    get,
    path = "/greeting",
    params(GreetingParams),
    responses(
        (status = 200, description = "Success", body = Greeting),
        (status = 400, description = "Malformed query", body = ErrorBody),
    )
)]
#[instrument(skip(service))]
pub async fn greeting(
    State(service): State<GreetingService>,
    Query(params): Query<GreetingParams>,
) -> Json<Greeting> {
    Json(service.greeting(params.name.as_deref()))
}

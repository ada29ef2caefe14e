//! REST API implementation.
//!
//! # Examples
//!
//! Greeting API.
//!
//! ```rust
//! # use hello_rest::core::greeting::greeting_record::Greeting;
//! # tokio_test::block_on(async {
//! # let url = hello_rest::app::spawn_app().await.unwrap();
//! let response = reqwest::get(format!("{}/greeting", url)).await.unwrap();
//! assert_eq!(200, response.status());
//! let greeting = response.json::<Greeting>().await.unwrap();
//! assert_eq!("Hello, World!", greeting.content());
//! # });
//! ```
//!
//! Greeting API with name.
//!
//! ```rust
//! # use hello_rest::core::greeting::greeting_record::Greeting;
//! # tokio_test::block_on(async {
//! # let url = hello_rest::app::spawn_app().await.unwrap();
//! let response = reqwest::get(format!("{}/greeting?name=Foo", url)).await.unwrap();
//! assert_eq!(200, response.status());
//! let greeting = response.json::<Greeting>().await.unwrap();
//! assert_eq!("Hello, Foo!", greeting.content());
//! # });
//! ```

use crate::feature::greeting::greeting_api;
use crate::infra::config::{Config, ServerConfig};
use crate::infra::error::{not_found, InternalError, PanicHandler};
use crate::infra::middleware::{log_request_response, MakeRequestIdSpan};
use crate::infra::openapi::ApiDoc;
use crate::infra::shutdown::shutdown_signal;
use crate::infra::state::AppState;
use axum::error_handling::HandleErrorLayer;
use axum::response::IntoResponse;
use axum::Router;
use http::StatusCode;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

/// Constructs the full axum application.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .merge(greeting_api::routes())
        .fallback(not_found)
        .with_state(state);

    let router = if config.redoc {
        router.merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
    } else {
        router
    };

    with_middleware(router, config)
}

/// Wraps routes in the middleware stack shared by every endpoint.
fn with_middleware(router: Router, config: &ServerConfig) -> Router {
    // Fallible middleware from tower, mapped to infallible response with [`HandleErrorLayer`].
    let tower_middleware = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(|e| async move {
            InternalError::Other(format!("Tower middleware failed: {e}")).into_response()
        }))
        .concurrency_limit(config.concurrency_limit);

    router
        // Layers
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(axum::middleware::from_fn(log_request_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(MakeRequestIdSpan)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(()),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(tower_middleware)
        .layer(CatchPanicLayer::custom(PanicHandler))
}

/// Starts the axum server.
pub async fn run_app(listener: TcpListener, config: Config) -> std::io::Result<()> {
    let state = AppState::new();
    let app = app(state, &config.server).into_make_service();

    tracing::info!("Starting axum on {}", listener.local_addr()?);
    let exit_result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    match &exit_result {
        Ok(_) => tracing::info!("Successfully shut down"),
        Err(e) => tracing::error!("Shutdown failed: {}", e),
    }

    exit_result
}

/// Spawn a server on a random port, returning its base url.
pub async fn spawn_app() -> std::io::Result<String> {
    let address = "127.0.0.1";
    let listener = TcpListener::bind(format!("{address}:0")).await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(run_app(listener, Config::default()));
    Ok(format!("http://{address}:{port}"))
}

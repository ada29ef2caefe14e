//! A small greeting web service with axum.

use hello_rest::{
    app::run_app,
    infra::{config, logging::init_logging},
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    dotenvy::dotenv().ok();
    let _guard = init_logging();
    color_eyre::install()?;

    let config = config::load_config()?;
    let listener =
        TcpListener::bind((config.server.address.as_str(), config.server.port)).await?;
    run_app(listener, config).await?;

    Ok(())
}

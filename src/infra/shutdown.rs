//! Graceful shutdown.

use std::future::Future;

/// Completes when ctrl-c is pressed.
pub async fn shutdown_signal() {
    shutdown_on(tokio::signal::ctrl_c()).await
}

/// Completes when `signal` fires. Never completes if listening for it failed.
async fn shutdown_on(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(e) = signal.await {
        tracing::error!("Failed to fetch ctrl_c: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use super::shutdown_on;
    use std::time::Duration;

    #[tokio::test]
    async fn completes_on_signal() {
        let shutdown = shutdown_on(async { Ok(()) });
        assert!(tokio::time::timeout(Duration::from_millis(100), shutdown)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn keeps_running_when_signal_cannot_be_installed() {
        let shutdown = shutdown_on(async { Err(std::io::Error::other("no signals")) });
        assert!(tokio::time::timeout(Duration::from_millis(50), shutdown)
            .await
            .is_err());
    }
}

//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::time::Duration;

use tokio::net::TcpListener;

use crate::api::build_app;
use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with an initialized state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Bind and serve until Ctrl+C
    ///
    /// In-flight requests get `shutdown_timeout_ms` to finish after the signal.
    pub async fn run(&self) -> Result<()> {
        let addr = format!("{}:{}", self.config.http_host, self.config.http_port);
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("🦀 Employee server listening on {}", listener.local_addr()?);

        let app = build_app(self.state.clone());
        let shutdown_timeout = Duration::from_millis(self.config.shutdown_timeout_ms);

        let (signal_tx, signal_rx) = tokio::sync::oneshot::channel::<()>();
        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            let _ = signal_tx.send(());
        });
        let server = tokio::spawn(async move { server.await });

        // 收到信号后最多等待 shutdown_timeout
        tokio::select! {
            joined = server => {
                joined
                    .map_err(|e| ServerError::Internal(e.into()))?
                    .map_err(ServerError::Io)?;
            }
            _ = async {
                let _ = signal_rx.await;
                tokio::time::sleep(shutdown_timeout).await;
            } => {
                tracing::warn!(
                    timeout_ms = self.config.shutdown_timeout_ms,
                    "Graceful shutdown timed out, dropping open connections"
                );
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use super::super::server::build_app;
use super::super::Container;

pub struct ServeController<'a> {
    container: &'a Container,
}

impl<'a> ServeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn serve(&self) -> Result<String> {
        let config = self.container.config();
        let app = build_app(Arc::new(self.container.answer_use_case()));

        let listener = TcpListener::bind(&config.bind_addr)
            .await
            .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;
        let local_addr = listener.local_addr()?;

        info!("Answer service listening on http://{}", local_addr);
        info!("Chat endpoint: POST http://{}/api/chat", local_addr);
        info!("Audit log: {}", config.audit_log.display());

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        Ok("Answer service stopped.".to_string())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

use anyhow::{Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use bankqa::connector::{audit_layer, audit_writer};
use bankqa::{Cli, Commands, Container, Router};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _audit_guard = init_tracing(cli.verbose, &cli.command)?;

    let container = Container::new(cli.command.container_config());
    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}

/// Console logging for every command; the audit file only for `serve`.
/// The returned guard must be held until exit so buffered audit lines are flushed.
fn init_tracing(verbose: bool, command: &Commands) -> Result<Option<WorkerGuard>> {
    let default_level = if verbose { "debug" } else { "info" };
    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        );

    let registry = tracing_subscriber::registry().with(console);

    match command.audit_log() {
        Some(path) => {
            let (writer, guard) = audit_writer(path)
                .with_context(|| format!("Failed to open audit log {}", path.display()))?;
            registry
                .with(audit_layer(writer))
                .try_init()
                .context("Failed to initialise logging")?;
            Ok(Some(guard))
        }
        None => {
            registry.try_init().context("Failed to initialise logging")?;
            Ok(None)
        }
    }
}

//! Spendgauge Server - zero-click budget tracking over webhooks
//!
//! Ingests financial-activity notifications (bank SMS alerts, UPI
//! transactions, receipt scans) and serves a single derived metric:
//! percent of the monthly budget consumed, bucketed green/orange/red.
//!
//! # Quick Start
//!
//! ```bash
//! # Start with defaults (0.0.0.0:8080, monthly limit 50000)
//! spendgauge-server
//!
//! # Custom port and budget
//! spendgauge-server --port 9090 --monthly-limit 80000
//!
//! # Environment overrides
//! SPENDGAUGE_PORT=3000 MONTHLY_LIMIT=25000 spendgauge-server
//! ```

use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spendgauge_intake::{InMemoryEventStore, OverflowPolicy};
use spendgauge_server::{create_router, AppState};
use spendgauge_types::BudgetLimits;

/// Spendgauge Server - webhook intake and budget gauge
#[derive(Parser, Debug)]
#[command(name = "spendgauge-server", version, about)]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0", env = "SPENDGAUGE_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "SPENDGAUGE_PORT")]
    port: u16,

    /// Monthly budget limit the gauge is computed against
    #[arg(long, default_value = "50000", env = "MONTHLY_LIMIT")]
    monthly_limit: f64,

    /// Capacity of the in-memory event buffer
    #[arg(long, default_value = "1024", env = "SPENDGAUGE_QUEUE_CAPACITY")]
    queue_capacity: usize,

    /// What to do with new events when the buffer is full
    #[arg(long, value_enum, default_value = "drop-oldest")]
    overflow: OverflowArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OverflowArg {
    /// Evict the oldest buffered event
    DropOldest,
    /// Reject the new event with 429
    Reject,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::DropOldest => OverflowPolicy::DropOldest,
            OverflowArg::Reject => OverflowPolicy::Reject,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Spendgauge Server"
    );

    let store = Arc::new(InMemoryEventStore::with_capacity(
        args.queue_capacity,
        args.overflow.into(),
    ));
    let limits = BudgetLimits::new(args.monthly_limit);
    let state = Arc::new(AppState::new(store, limits));

    let app = create_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    tracing::info!(
        monthly_limit = limits.monthly,
        queue_capacity = args.queue_capacity,
        "Spendgauge Server running at http://{}", addr
    );
    tracing::info!("Gauge:    http://localhost:{}/budget/gauge", args.port);
    tracing::info!("Webhooks: POST http://localhost:{}/webhook/{{sms,upi,receipt}}", args.port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let args = Args::parse_from(["spendgauge-server"]);
        assert_eq!(args.port, 8080);
        assert_eq!(args.monthly_limit, 50_000.0);
        assert_eq!(args.queue_capacity, 1024);
    }

    #[test]
    fn test_cli_overrides() {
        let args = Args::parse_from([
            "spendgauge-server",
            "--port",
            "9090",
            "--monthly-limit",
            "80000",
            "--overflow",
            "reject",
        ]);
        assert_eq!(args.port, 9090);
        assert_eq!(args.monthly_limit, 80_000.0);
        assert!(matches!(args.overflow, OverflowArg::Reject));
    }
}

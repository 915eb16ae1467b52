use clap::{Parser, Subcommand};
use fruitstand::application::checkout::CheckoutService;
use fruitstand::config::{ServeArgs, ServerConfig, StorageArgs};
use fruitstand::infrastructure::open_store;
use fruitstand::infrastructure::pool::ConnectionPool;
use fruitstand::interfaces::csv::order_writer::OrderWriter;
use fruitstand::interfaces::http::{AppState, router};
use miette::{IntoDiagnostic, Result};
use std::io;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the order form and accept submissions.
    Serve(ServeArgs),
    /// Write every stored order to stdout as CSV.
    Export(StorageArgs),
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fruitstand=info,tower_http=info".into());

    // Logs go to stderr so `export` output stays machine-readable.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Serve(args) => serve(ServerConfig::try_from(args).into_diagnostic()?).await,
        Command::Export(args) => export(args).await,
    }
}

async fn serve(config: ServerConfig) -> Result<()> {
    let store = open_store(config.db_path.as_deref()).into_diagnostic()?;
    let pool = ConnectionPool::new(store, config.pool_size);
    let checkout = CheckoutService::new(pool, config.store_timeout);
    let app = router(AppState::new(checkout));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.into_diagnostic()?;
    tracing::info!("fruitstand listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()
}

async fn export(args: StorageArgs) -> Result<()> {
    let store = open_store(args.db_path.as_deref()).into_diagnostic()?;
    let pool = ConnectionPool::new(store, 1);
    let orders = pool
        .acquire()
        .await
        .into_diagnostic()?
        .all_orders()
        .await
        .into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = OrderWriter::new(stdout.lock());
    writer.write_orders(&orders).into_diagnostic()?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}

//! Tronics product service.
//!
//! Serves the product catalogue REST API:
//!
//! ```text
//! GET    /products        list all products
//! GET    /products/{id}   fetch one product
//! POST   /products        create   {"product_name": "..."}
//! PUT    /products/{id}   rename   {"product_name": "..."}
//! DELETE /products/{id}   remove
//! ```

use clap::Parser;
use std::path::PathBuf;

use tronics::config::resolve_config;
use tronics::lifecycle::startup;
use tronics::observability::logging;

#[derive(Parser)]
#[command(name = "tronics")]
#[command(about = "In-memory product catalogue REST service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listener port, overriding the configuration file.
    #[arg(short, long, env = "PORT")]
    port: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(args.config.as_deref(), args.port.as_deref())?;

    logging::init(&config.observability.log_level)?;

    tracing::info!("tronics v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        key_policy = ?config.registry.key_policy,
        seeded_products = config.registry.seed.len(),
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

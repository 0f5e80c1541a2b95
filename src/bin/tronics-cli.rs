use clap::{Parser, Subcommand};
use serde::Serialize;
use tronics_sdk::{ClientError, ProductClient};

#[derive(Parser)]
#[command(name = "tronics-cli")]
#[command(about = "Command line client for the tronics product API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all products
    List,
    /// Show one product
    Get { id: u64 },
    /// Create a product
    Create { name: String },
    /// Rename a product
    Update { id: u64, name: String },
    /// Delete a product
    Delete { id: u64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ProductClient::new(&cli.url);

    let result = match cli.command {
        Commands::List => print_json(client.list().await),
        Commands::Get { id } => print_json(client.get(id).await),
        Commands::Create { name } => print_json(client.create(&name).await),
        Commands::Update { id, name } => print_json(client.update(id, &name).await),
        Commands::Delete { id } => print_json(client.delete(id).await),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn print_json<T: Serialize>(result: Result<T, ClientError>) -> Result<(), Box<dyn std::error::Error>> {
    let value = result?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

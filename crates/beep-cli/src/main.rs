//! Beep CLI - scan barcodes and look up product metadata
//!
//! Provides `beep watch` (interactive scan loop) and `beep lookup`
//! (one-shot lookup).

mod source;
mod watch;

use std::path::PathBuf;
use std::time::Duration;

use beep_lookup::{LookupClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "beep")]
#[command(about = "beep - barcode product lookup")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read decode events and look up each scanned barcode
    Watch {
        /// Scanner device or FIFO to read decodes from (defaults to stdin)
        #[arg(short, long)]
        device: Option<PathBuf>,

        /// Lookup endpoint base URL
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Request timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,
    },
    /// Look up a single barcode and print the result
    Lookup {
        /// Barcode to look up
        barcode: String,

        /// Lookup endpoint base URL
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Request timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },
}

fn resolve_endpoint(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("BEEP_ENDPOINT").ok())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

fn resolve_timeout(flag: Option<u64>) -> Duration {
    flag.map_or(DEFAULT_TIMEOUT, Duration::from_secs)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Watch {
            device,
            endpoint,
            timeout,
        } => watch::run(device, &resolve_endpoint(endpoint), resolve_timeout(timeout)).await,
        Commands::Lookup {
            barcode,
            endpoint,
            timeout,
            json,
        } => {
            run_lookup(
                &barcode,
                &resolve_endpoint(endpoint),
                resolve_timeout(timeout),
                json,
            )
            .await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_lookup(
    barcode: &str,
    endpoint: &str,
    timeout: Duration,
    json: bool,
) -> anyhow::Result<()> {
    let client = LookupClient::with_endpoint(endpoint, timeout)?;
    let record = client.lookup(barcode).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", beep_core::render::render_record(&record));
    }

    Ok(())
}

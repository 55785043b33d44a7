mod config;
mod terminal_output;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use menulens_capture::{CaptureSession, FileCaptureDevice};
use menulens_pipeline::{MenuUploader, ScanFlow, TransportClient};

use config::Config;
use terminal_output::TerminalPresenter;

#[derive(Parser)]
#[command(name = "menulens")]
#[command(about = "MenuLens — photograph a menu, get it back structured")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a menu photo and print the decoded menu
    Scan {
        /// Path to the photo (JPEG or PNG)
        image: PathBuf,
        /// Override the analysis endpoint
        #[arg(long)]
        endpoint: Option<String>,
        /// Print the decoded menu as JSON instead of a formatted listing
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            image,
            endpoint,
            json,
        } => {
            let endpoint = endpoint.unwrap_or(config.endpoint);
            run_scan(image, endpoint, json).await?;
        }
    }

    Ok(())
}

async fn run_scan(path: PathBuf, endpoint: String, json: bool) -> Result<()> {
    info!(image = %path.display(), endpoint = %endpoint, "Starting menu scan");

    // Drive the session exactly as a camera-backed flow would; the file
    // device stands in for hardware.
    let device = Arc::new(FileCaptureDevice::new(&path));
    let mut session = CaptureSession::new(device);
    session.authorize().await;
    session.configure().await;

    let image = match session.capture().await {
        Ok(image) => image,
        Err(err) => {
            terminal_output::note_error(&err.user_message());
            return Ok(());
        }
    };

    let uploader = MenuUploader::new(TransportClient::new()?, endpoint);
    let flow = ScanFlow::new(uploader, TerminalPresenter::new(json));
    flow.scan(image).await;

    Ok(())
}

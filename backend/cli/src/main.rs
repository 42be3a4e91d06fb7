mod client;
mod terminal_output;

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use planty_config::Config;
use planty_gateway::{start_server, GatewayState};
use planty_understanding::GeminiVision;

use client::DEFAULT_SERVER;
use terminal_output::note_error;

#[derive(Parser)]
#[command(name = "planty")]
#[command(about = "Planty: identify a plant from a photo")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the identification server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind the HTTP server to
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Upload an image to a running server and print what it is
    Identify {
        /// Image file to identify
        file: PathBuf,
        /// Base URL of the Planty server
        #[arg(short, long, default_value = DEFAULT_SERVER)]
        server: String,
    },
    /// Show whether a server is running
    Status {
        /// Base URL of the Planty server
        #[arg(short, long, default_value = DEFAULT_SERVER)]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("Invalid configuration")?;

    planty_logging::init_logger(config.log_dir.as_deref().map(Path::new), &config.log_level);

    match cli.command {
        Commands::Serve { port, bind } => {
            let config = Config {
                port: port.unwrap_or(config.port),
                bind_address: bind.unwrap_or(config.bind_address),
                ..config
            };
            run_server(config).await?;
        }
        Commands::Identify { file, server } => {
            if let Err(e) = client::run_identify(&file, &server).await {
                note_error(&format!("{e:#}"));
                std::process::exit(1);
            }
        }
        Commands::Status { server } => {
            println!("Planty status: checking...");
            let client = reqwest::Client::new();
            match client
                .get(format!("{}/api/health", server.trim_end_matches('/')))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("Planty is not running at {}", server);
                }
            }
        }
    }

    Ok(())
}

async fn run_server(config: Config) -> Result<()> {
    info!(config = ?config.redacted(), "Starting Planty");

    let api_key = config.require_api_key()?;
    let model = GeminiVision::new(api_key, config.model.as_str())
        .with_base_url(config.gemini_base_url.as_str());
    info!(model = %config.model, "Registered Gemini vision model");

    let ip: IpAddr = config
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address {:?}", config.bind_address))?;
    let addr = SocketAddr::new(ip, config.port);

    start_server(addr, GatewayState::new(Arc::new(model)), config.max_upload_bytes).await
}

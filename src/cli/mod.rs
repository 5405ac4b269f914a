use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Cloud provider identity detector
#[derive(Parser)]
#[command(name = "cloud-ident")]
#[command(about = "Cloud provider identity detection for host-monitoring agents")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Detect whether this host is an EC2 instance
    Detect(commands::detect::DetectCommand),
    /// Classify a hardware identifier without any network access
    Classify(commands::classify::ClassifyCommand),
    /// Test connectivity to the EC2 metadata endpoint
    ProbeEndpoint(commands::probe_endpoint::ProbeEndpointCommand),
}

pub async fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect(command) => command.run().await,
        Commands::Classify(command) => command.run(),
        Commands::ProbeEndpoint(command) => command.run().await,
    }
}

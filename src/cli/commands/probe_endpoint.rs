use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::probe::{MetadataClient, MetadataTransport};
use clap::Args;
use tracing::{info, warn};

/// Test connectivity to the EC2 metadata endpoint
#[derive(Args)]
pub struct ProbeEndpointCommand {
    /// Metadata endpoint base URL (overrides config.toml)
    #[arg(long)]
    pub metadata_url: Option<String>,

    /// Per-request timeout in seconds (overrides config.toml)
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl ProbeEndpointCommand {
    pub async fn run(&self) -> AppResult<()> {
        info!("=== Testing EC2 metadata endpoint ===");

        let mut config = match AppConfig::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load configuration, using defaults: {}", e);
                AppConfig::get_defaults()
            }
        };

        // Override with CLI arguments
        if let Some(url) = &self.metadata_url {
            config.metadata.base_url = url.clone();
        }
        if let Some(seconds) = self.timeout {
            config.metadata.timeout_seconds = seconds;
        }

        info!("probing {}", config.metadata.base_url);

        let client = MetadataClient::new(&config.metadata)?;
        match client.fetch_ami_id_status().await {
            Ok(200) => {
                println!("Metadata endpoint test PASSED");
                println!("Endpoint answered 200 - this host can reach the EC2 metadata service");
            }
            Ok(status) => {
                println!("Metadata endpoint reachable but answered {}", status);
                println!("This host is probably not an EC2 instance");
            }
            Err(e) => {
                println!("Metadata endpoint test FAILED");
                println!("Error: {}", e);
                println!();
                println!("Troubleshooting tips:");
                println!("1. The metadata endpoint only exists inside EC2 instances");
                println!("2. Check that 169.254.169.254 is not blocked by a local firewall");
                println!("3. Verify the base URL if a proxy or mock endpoint is configured");
            }
        }

        Ok(())
    }
}

use crate::config::AppConfig;
use crate::detection::Ec2Detector;
use crate::errors::AppResult;
use crate::inventory::SmbiosSource;
use crate::probe::{ConfirmationProber, MetadataClient};
use clap::Args;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{info, warn};

/// Detect whether this host is an EC2 instance
#[derive(Args)]
pub struct DetectCommand {
    /// Overall detection deadline in seconds (overrides config.toml)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Metadata endpoint base URL (overrides config.toml)
    #[arg(long)]
    pub metadata_url: Option<String>,

    /// Emit the decision as JSON
    #[arg(long)]
    pub json: bool,
}

impl DetectCommand {
    pub async fn run(&self) -> AppResult<()> {
        // Load configuration from file/environment, fall back to defaults
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
            config.detection.deadline_seconds = seconds;
        }

        let source = SmbiosSource::new(config.inventory.smbios_paths.clone());
        let client = MetadataClient::new(&config.metadata)?;
        let detector = Ec2Detector::new(source, ConfirmationProber::new(client));

        let deadline = Instant::now() + Duration::from_secs(config.detection.deadline_seconds);
        let detected = detector.detect(deadline).await;

        info!("detection finished: ec2={}", detected);

        if self.json {
            let report = serde_json::json!({
                "provider": "aws",
                "platform": "ec2",
                "detected": detected,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else if detected {
            println!("aws-ec2");
        } else {
            println!("not-detected");
        }

        Ok(())
    }
}

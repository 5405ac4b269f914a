use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub metadata: MetadataConfig,
    pub inventory: InventoryConfig,
    pub detection: DetectionConfig,
}

/// EC2 metadata endpoint configuration for the confirmation probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            base_url: "http://169.254.169.254".to_string(),
            timeout_seconds: 3,
        }
    }
}

/// SMBIOS/DMI identifier inventory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    pub smbios_paths: Vec<PathBuf>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            smbios_paths: crate::inventory::DEFAULT_SMBIOS_PATHS
                .iter()
                .map(PathBuf::from)
                .collect(),
        }
    }
}

/// Overall detection budget used to derive the caller deadline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    pub deadline_seconds: u64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            deadline_seconds: 15,
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let metadata = MetadataConfig::default();
        let inventory = InventoryConfig::default();
        let detection = DetectionConfig::default();
        let config = Config::builder()
            // Start with default values
            .set_default("metadata.base_url", metadata.base_url)?
            .set_default("metadata.timeout_seconds", metadata.timeout_seconds)?
            .set_default(
                "inventory.smbios_paths",
                inventory
                    .smbios_paths
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<String>>(),
            )?
            .set_default("detection.deadline_seconds", detection.deadline_seconds)?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Check for specific environment variables with custom names
        if let Ok(base_url) = env::var("CLOUD_IDENT_METADATA_URL") {
            app_config.metadata.base_url = base_url;
        }

        if let Ok(seconds) = env::var("CLOUD_IDENT_DEADLINE_SECONDS") {
            app_config.detection.deadline_seconds = seconds.parse().map_err(|_| {
                ConfigError::Message(format!(
                    "CLOUD_IDENT_DEADLINE_SECONDS must be a whole number of seconds, got {}",
                    seconds
                ))
            })?;
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Self {
        // Try to load config for defaults, but don't fail if not found
        match Self::load() {
            Ok(config) => config,
            Err(_) => Self {
                metadata: MetadataConfig::default(),
                inventory: InventoryConfig::default(),
                detection: DetectionConfig::default(),
            },
        }
    }
}

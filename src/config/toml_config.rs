use crate::config::{DEFAULT_EVENT_URL_BASE, DEFAULT_ROUNDS_FILE};
use crate::core::cluster::DEFAULT_CLUSTER_GAP;
use crate::core::engine::DEFAULT_MIN_GROUP_SIZE;
use crate::core::ConfigProvider;
use crate::utils::error::{CaddieError, Result};
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path, validate_positive_number,
    validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: ServiceConfig,
    pub source: Option<SourceConfig>,
    pub aggregation: Option<AggregationConfig>,
    pub links: Option<LinksConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub rounds_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregationConfig {
    pub cluster_gap: Option<u32>,
    pub min_group_size: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinksConfig {
    pub event_url_base: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(CaddieError::ConfigError {
                message: format!("Config file not found: {}", path),
            });
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CaddieError::ConfigError {
            message: format!("Failed to parse TOML config: {}", e),
        })
    }

    pub fn log_json(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.json)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn rounds_file(&self) -> &str {
        self.source
            .as_ref()
            .and_then(|source| source.rounds_file.as_deref())
            .unwrap_or(DEFAULT_ROUNDS_FILE)
    }

    fn cluster_gap(&self) -> u32 {
        self.aggregation
            .as_ref()
            .and_then(|aggregation| aggregation.cluster_gap)
            .unwrap_or(DEFAULT_CLUSTER_GAP)
    }

    fn min_group_size(&self) -> usize {
        self.aggregation
            .as_ref()
            .and_then(|aggregation| aggregation.min_group_size)
            .unwrap_or(DEFAULT_MIN_GROUP_SIZE)
    }

    fn event_url_base(&self) -> &str {
        self.links
            .as_ref()
            .and_then(|links| links.event_url_base.as_deref())
            .unwrap_or(DEFAULT_EVENT_URL_BASE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("service.name", &self.service.name)?;
        validate_path("source.rounds_file", self.rounds_file())?;
        validate_file_extensions(
            "source.rounds_file",
            &[self.rounds_file().to_string()],
            &["json"],
        )?;
        validate_range("aggregation.cluster_gap", self.cluster_gap(), 1, 100_000)?;
        validate_positive_number("aggregation.min_group_size", self.min_group_size(), 1)?;
        validate_url("links.event_url_base", self.event_url_base())?;
        Ok(())
    }
}

pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::cluster::DEFAULT_CLUSTER_GAP;
#[cfg(feature = "cli")]
use crate::core::engine::DEFAULT_MIN_GROUP_SIZE;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    self, validate_file_extensions, validate_non_empty_string, validate_path,
    validate_positive_number, validate_range, validate_required_field, validate_url,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROUNDS_FILE: &str = "rounds.json";
pub const DEFAULT_EVENT_URL_BASE: &str = "https://www.pdga.com/apps/tournament/live/event/";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "caddie-stats")]
#[command(about = "Aggregates recorded disc golf rounds into per-course layout statistics")]
pub struct CliConfig {
    /// Course to aggregate (omit together with --list-courses)
    pub course: Option<String>,

    /// JSON file holding the recorded rounds, keyed by course name
    #[arg(long)]
    pub data_file: Option<String>,

    /// TOML configuration file; explicit flags override its values
    #[arg(long)]
    pub config: Option<String>,

    /// List the known course names and exit
    #[arg(long)]
    pub list_courses: bool,

    /// Hide aggregates built from fewer rounds than this
    #[arg(long)]
    pub min_rounds: Option<usize>,

    /// Maximum total-distance gap (feet) bridged within one cluster
    #[arg(long)]
    pub cluster_gap: Option<u32>,

    /// Base URL for tournament reference links
    #[arg(long)]
    pub event_url_base: Option<String>,

    /// Rank results against these layout keywords
    #[arg(long, value_delimiter = ',')]
    pub keywords: Vec<String>,

    /// Emit the raw JSON report instead of the readable summary
    #[arg(long)]
    pub json: bool,

    /// Log in JSON format (for unattended runs)
    #[arg(long)]
    pub log_json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn rounds_file(&self) -> &str {
        self.data_file.as_deref().unwrap_or(DEFAULT_ROUNDS_FILE)
    }

    fn cluster_gap(&self) -> u32 {
        self.cluster_gap.unwrap_or(DEFAULT_CLUSTER_GAP)
    }

    fn min_group_size(&self) -> usize {
        self.min_rounds.unwrap_or(DEFAULT_MIN_GROUP_SIZE)
    }

    fn event_url_base(&self) -> &str {
        self.event_url_base.as_deref().unwrap_or(DEFAULT_EVENT_URL_BASE)
    }
}

#[cfg(feature = "cli")]
impl validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("data_file", self.rounds_file())?;
        validate_file_extensions("data_file", &[self.rounds_file().to_string()], &["json"])?;
        validate_url("event_url_base", self.event_url_base())?;
        if let Some(gap) = self.cluster_gap {
            validate_range("cluster_gap", gap, 1, 100_000)?;
        }
        if let Some(min_rounds) = self.min_rounds {
            validate_positive_number("min_rounds", min_rounds, 1)?;
        }
        if !self.list_courses {
            let course = validate_required_field("course", &self.course)?;
            validate_non_empty_string("course", course)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    fn base_config() -> CliConfig {
        CliConfig {
            course: Some("Maple Hill".to_string()),
            data_file: None,
            config: None,
            list_courses: false,
            min_rounds: None,
            cluster_gap: None,
            event_url_base: None,
            keywords: vec![],
            json: false,
            log_json: false,
            verbose: false,
        }
    }

    #[test]
    fn test_defaults_apply_through_provider() {
        let config = base_config();
        assert_eq!(config.rounds_file(), DEFAULT_ROUNDS_FILE);
        assert_eq!(ConfigProvider::cluster_gap(&config), DEFAULT_CLUSTER_GAP);
        assert_eq!(config.min_group_size(), DEFAULT_MIN_GROUP_SIZE);
        assert_eq!(
            ConfigProvider::event_url_base(&config),
            DEFAULT_EVENT_URL_BASE
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_course_required_unless_listing() {
        let mut config = base_config();
        config.course = None;
        assert!(config.validate().is_err());
        config.list_courses = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_json_data_file() {
        let mut config = base_config();
        config.data_file = Some("rounds.csv".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_cluster_gap() {
        let mut config = base_config();
        config.cluster_gap = Some(0);
        assert!(config.validate().is_err());
    }
}

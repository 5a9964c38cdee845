use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Path to the cocktails JSON collection.
    #[serde(default = "default_cocktails_path")]
    pub cocktails_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Where the `analyze` command writes the report artifact.
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// How many top ingredients the report lists.
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            cocktails_path: default_cocktails_path(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            top_limit: default_top_limit(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_cocktails_path() -> String {
    "cocktails.json".to_string()
}

fn default_output_path() -> String {
    "cocktail-analysis-results.json".to_string()
}

fn default_top_limit() -> usize {
    cocktail::REPORT_TOP_LIMIT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from an optional TOML file plus `BARSHELF_*`
    /// environment overrides. A missing default file is fine; everything
    /// has a default.
    pub fn load(path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = match path {
            Some(path) => builder.add_source(File::with_name(&path)),
            None => builder.add_source(File::with_name("barshelf").required(false)),
        };

        builder
            .add_source(Environment::with_prefix("BARSHELF").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.data.cocktails_path.is_empty() {
            return Err("data.cocktails_path must not be empty".to_string());
        }

        if self.report.top_limit == 0 {
            return Err("report.top_limit must be at least 1".to_string());
        }

        Ok(())
    }
}

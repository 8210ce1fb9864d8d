use camino::Utf8Path;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::ApiResult;

/// Reasonable default filters, when `RUST_LOG` is not specified
pub const DEFAULT_LOG_FILTERS: &[&str] = &["info"];

#[derive(clap::ValueEnum, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputFormat,

    #[serde(default = "default_log_filters")]
    pub log_filters: Vec<String>,

    /// Keep decoding attribute records from the trailing bytes of the
    /// previous one
    #[serde(default = "default_follow_trailing")]
    pub follow_trailing: bool,
}

fn default_log_filters() -> Vec<String> {
    DEFAULT_LOG_FILTERS.iter().map(ToString::to_string).collect()
}

const fn default_follow_trailing() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            log_filters: default_log_filters(),
            follow_trailing: default_follow_trailing(),
        }
    }
}

/// Load configuration from `filename` (if it exists), then from `ZIGPARSE_*`
/// environment variables.
pub fn parse(filename: &Utf8Path) -> ApiResult<AppConfig> {
    let settings = Config::builder()
        .add_source(File::new(filename.as_str(), FileFormat::Yaml).required(false))
        .add_source(
            Environment::with_prefix("ZIGPARSE")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("log_filters"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Parse configuration from a yaml string, without consulting the
/// environment.
pub fn parse_str(yaml: &str) -> ApiResult<AppConfig> {
    let settings = Config::builder()
        .add_source(File::from_str(yaml, FileFormat::Yaml))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;

    use crate::config::{AppConfig, OutputFormat, parse, parse_str};

    #[test]
    fn defaults() {
        let config = parse_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.follow_trailing);
        assert_eq!(config.log_filters, ["info"]);
    }

    #[test]
    fn yaml_settings() {
        let yaml = "output: json\nfollow_trailing: false\nlog_filters:\n  - debug\n  - zcl=trace\n";
        let config = parse_str(yaml).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(!config.follow_trailing);
        assert_eq!(config.log_filters, ["debug", "zcl=trace"]);
    }

    #[test]
    fn missing_file() {
        let config = parse(Utf8Path::new("does-not-exist/zigparse.yaml")).unwrap();
        assert_eq!(config.output, AppConfig::default().output);
    }
}

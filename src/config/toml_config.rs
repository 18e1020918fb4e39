use crate::adapters::source::SourceFormat;
use crate::config::RunConfig;
use crate::utils::error::{DomainError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub transform: TransformConfig,
    pub load: LoadConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub input: Option<String>,
    pub format: SourceFormat,
    pub selector: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub reverse: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// Loads a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after replacing `${VAR}` with environment values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| DomainError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn into_run_config(self) -> RunConfig {
        let defaults = RunConfig::default();
        RunConfig {
            input: self.source.input,
            format: self.source.format,
            selector: self.source.selector.unwrap_or(defaults.selector),
            reverse: self.transform.reverse,
            output: self.load.output,
            monitor: self.monitoring.enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[source]
input = "amazon.html"
format = "html"
selector = "table.wikitable tbody td"

[transform]
reverse = true

[load]
output = "out/music-domains.txt"

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap().into_run_config();

        assert_eq!(config.input.as_deref(), Some("amazon.html"));
        assert_eq!(config.format, SourceFormat::Html);
        assert_eq!(config.selector, "table.wikitable tbody td");
        assert!(config.reverse);
        assert_eq!(config.output.as_deref(), Some("out/music-domains.txt"));
        assert!(config.monitor);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap().into_run_config();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MUSIC_DOMAINS_TEST_INPUT", "/tmp/cells.csv");

        let toml_content = r#"
[source]
input = "${MUSIC_DOMAINS_TEST_INPUT}"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.input.as_deref(), Some("/tmp/cells.csv"));

        std::env::remove_var("MUSIC_DOMAINS_TEST_INPUT");
    }

    #[test]
    fn test_unknown_format_is_parse_error() {
        let err = TomlConfig::from_toml_str("[source]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, DomainError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_invalid_selector_fails_validation() {
        let toml_content = r#"
[source]
format = "html"
selector = "td[[["
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap().into_run_config();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[transform]\nreverse = true\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert!(config.transform.reverse);
    }
}

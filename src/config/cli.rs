use crate::adapters::source::SourceFormat;
use crate::config::toml_config::TomlConfig;
use crate::config::RunConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "music-domains")]
#[command(about = "Turn Amazon regional domains from a table into Amazon Music domains")]
pub struct CliConfig {
    /// Table cells as text lines, CSV, or a saved HTML page. `-` or absent reads stdin.
    pub input: Option<String>,

    /// Input format
    #[arg(short, long, value_enum)]
    pub format: Option<SourceFormat>,

    /// CSS selector for table cells in HTML input
    #[arg(long)]
    pub selector: Option<String>,

    /// Print each domain with its labels reversed (music.amazon.de -> de.amazon.music)
    #[arg(short, long, overrides_with = "no_reverse")]
    pub reverse: bool,

    /// Print domains forward even when the config file sets `reverse = true`
    #[arg(long, overrides_with = "reverse")]
    pub no_reverse: bool,

    /// Also write the result to this file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log process CPU and memory usage
    #[arg(long)]
    pub monitor: bool,
}

impl CliConfig {
    /// Loads the config file when given, then applies command line overrides.
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?.into_run_config()
            }
            None => RunConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input = Some(input.clone());
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(selector) = &self.selector {
            config.selector = selector.clone();
        }
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        if self.reverse {
            config.reverse = true;
        } else if self.no_reverse {
            config.reverse = false;
        }
        config.monitor |= self.monitor;

        Ok(config)
    }
}

#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::source::{SourceFormat, DEFAULT_CELL_SELECTOR};
use crate::domain::model::TransformOptions;
use crate::domain::ports::{CellSource, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_selector, Validate};

/// Settings for one run, after merging the config file and command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: Option<String>,
    pub format: SourceFormat,
    pub selector: String,
    pub reverse: bool,
    pub output: Option<String>,
    pub monitor: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: None,
            format: SourceFormat::Auto,
            selector: DEFAULT_CELL_SELECTOR.to_string(),
            reverse: false,
            output: None,
            monitor: false,
        }
    }
}

impl ConfigProvider for RunConfig {
    fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn source(&self) -> Box<dyn CellSource> {
        self.format.cell_source(self.input(), &self.selector)
    }

    fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            reverse: self.reverse,
        }
    }

    fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("source.input", input)?;
        }
        if let Some(output) = &self.output {
            validate_path("load.output", output)?;
        }
        if self.format.resolve(self.input()) == SourceFormat::Html {
            validate_selector("source.selector", &self.selector)?;
        }
        Ok(())
    }
}

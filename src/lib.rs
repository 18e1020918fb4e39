pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{print_result, LocalStorage, SourceFormat};
pub use config::RunConfig;
pub use crate::core::transform::{
    extract_music_domains, is_amazon_domain, music_domains, reverse_domain, to_candidate,
    to_music_domain,
};
pub use crate::core::{etl::EtlEngine, pipeline::DomainPipeline};
pub use domain::model::{ExtractionReport, ResultSet, TransformOptions};
pub use utils::error::{DomainError, Result};

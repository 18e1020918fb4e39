use crate::core::transform::extract_music_domains;
use crate::core::{ConfigProvider, Pipeline, Storage, TransformResult};
use crate::utils::error::Result;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Reads a whole document, replacing invalid UTF-8 like file input does.
pub async fn read_lossy<R: AsyncRead + Unpin>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub struct DomainPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> DomainPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    async fn read_document(&self) -> Result<String> {
        match self.config.input() {
            Some(path) if path != "-" => {
                tracing::debug!("Reading cells from {}", path);
                let bytes = self.storage.read_file(path).await?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            _ => {
                tracing::debug!("Reading cells from stdin");
                read_lossy(tokio::io::stdin()).await
            }
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DomainPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        let document = self.read_document().await?;
        self.config.source().cells(&document)
    }

    async fn transform(&self, cells: Vec<String>) -> Result<TransformResult> {
        let options = self.config.transform_options();
        let result = extract_music_domains(&cells, &options);

        tracing::debug!(
            "{} of {} cells matched, {} unique domains (reverse: {})",
            result.report.candidates_matched,
            result.report.cells_read,
            result.report.domains_emitted,
            options.reverse
        );
        Ok(result)
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let rendered = result.result_set.render();

        if let Some(output) = self.config.output() {
            tracing::debug!("Writing {} bytes to {}", rendered.len(), output);
            self.storage.write_file(output, rendered.as_bytes()).await?;
        }

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::source::SourceFormat;
    use crate::config::RunConfig;
    use crate::utils::error::DomainError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn put_file(&self, path: &str, data: &str) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.as_bytes().to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                DomainError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn config_for(input: &str) -> RunConfig {
        RunConfig {
            input: Some(input.to_string()),
            ..RunConfig::default()
        }
    }

    #[tokio::test]
    async fn test_extract_uses_format_from_extension() {
        let storage = MockStorage::default();
        storage
            .put_file("table.csv", "Country,Domain\nFrance,amazon.fr\n")
            .await;
        let pipeline = DomainPipeline::new(storage, config_for("table.csv"));

        let cells = pipeline.extract().await.unwrap();
        assert_eq!(cells, vec!["Country", "Domain", "France", "amazon.fr"]);
    }

    #[tokio::test]
    async fn test_explicit_format_overrides_extension() {
        let storage = MockStorage::default();
        storage.put_file("cells.dat", "a,b\n").await;
        let mut config = config_for("cells.dat");
        config.format = SourceFormat::Lines;
        let pipeline = DomainPipeline::new(storage, config);

        assert_eq!(pipeline.extract().await.unwrap(), vec!["a,b"]);
    }

    #[tokio::test]
    async fn test_transform_and_load_without_output() {
        let storage = MockStorage::default();
        let pipeline = DomainPipeline::new(storage.clone(), config_for("cells.txt"));

        let cells = vec!["amazon.es".to_string(), "AMAZON.ES".to_string(), "amazon.eg".to_string()];
        let result = pipeline.transform(cells).await.unwrap();
        let rendered = pipeline.load(result).await.unwrap();

        assert_eq!(rendered, "music.amazon.eg\nmusic.amazon.es");
        assert!(storage.files.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_writes_output_verbatim() {
        let storage = MockStorage::default();
        let mut config = config_for("cells.txt");
        config.output = Some("out/domains.txt".to_string());
        config.reverse = true;
        let pipeline = DomainPipeline::new(storage.clone(), config);

        let result = pipeline
            .transform(vec!["amazon.se".to_string(), "amazon.pl".to_string()])
            .await
            .unwrap();
        let rendered = pipeline.load(result).await.unwrap();

        assert_eq!(rendered, "pl.amazon.music\nse.amazon.music");
        assert_eq!(
            storage.get_file("out/domains.txt").await.unwrap(),
            b"pl.amazon.music\nse.amazon.music"
        );
    }

    #[tokio::test]
    async fn test_read_lossy_replaces_invalid_utf8() {
        let bytes: &[u8] = b"amazon.de\n\xff\xfe junk\nAmazon.com\n";
        let document = read_lossy(bytes).await.unwrap();

        assert_eq!(document, "amazon.de\n\u{fffd}\u{fffd} junk\nAmazon.com\n");
    }

    #[tokio::test]
    async fn test_invalid_utf8_file_still_transforms() {
        let storage = MockStorage::default();
        {
            let mut files = storage.files.lock().await;
            files.insert(
                "cells.txt".to_string(),
                b"amazon.de\n\xff\xfe junk\nAmazon.com\n".to_vec(),
            );
        }
        let pipeline = DomainPipeline::new(storage, config_for("cells.txt"));

        let cells = pipeline.extract().await.unwrap();
        let rendered = pipeline.load(pipeline.transform(cells).await.unwrap()).await.unwrap();
        assert_eq!(rendered, "music.amazon.com\nmusic.amazon.de");
    }

    #[tokio::test]
    async fn test_missing_input_propagates_io_error() {
        let pipeline = DomainPipeline::new(MockStorage::default(), config_for("absent.html"));
        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, DomainError::IoError(_)));
    }
}

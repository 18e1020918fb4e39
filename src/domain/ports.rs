use crate::domain::model::{TransformOptions, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Turns a document into the ordered sequence of table cell texts.
pub trait CellSource: Send + Sync {
    fn cells(&self, document: &str) -> Result<Vec<String>>;
}

pub trait ConfigProvider: Send + Sync {
    /// Input path; `None` or `-` reads stdin.
    fn input(&self) -> Option<&str>;
    fn source(&self) -> Box<dyn CellSource>;
    fn transform_options(&self) -> TransformOptions;
    fn output(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<String>>;
    async fn transform(&self, cells: Vec<String>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}

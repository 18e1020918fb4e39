pub mod etl;
pub mod pipeline;
pub mod transform;

pub use crate::domain::model::{ResultSet, TransformOptions, TransformResult};
pub use crate::domain::ports::{CellSource, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

// Adapters layer: concrete implementations of the domain ports.

pub mod console;
pub mod source;
pub mod storage;

pub use console::print_result;
pub use source::{CsvSource, HtmlTableSource, LineSource, SourceFormat};
pub use storage::LocalStorage;

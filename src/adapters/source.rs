//! Readers that turn a supplied document into table cell texts.

use crate::domain::ports::CellSource;
use crate::utils::error::{DomainError, Result};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Cells of the regional-domain table; same query as running in the browser.
pub const DEFAULT_CELL_SELECTOR: &str = "table tbody td";

const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption", "figure",
    "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "ol", "p", "pre",
    "section", "table", "td", "th", "tr", "ul",
];

const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Rendered text of a cell: `<br>` and block boundaries become line breaks, as
/// in a browser's `innerText`, so adjacent lines never fuse into one domain.
pub fn cell_text(cell: ElementRef<'_>) -> String {
    let mut text = String::new();
    push_text(cell, &mut text);
    text
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            continue;
        }
        let Some(child) = ElementRef::wrap(child) else {
            continue;
        };

        let name = child.value().name();
        if name == "br" {
            out.push('\n');
        } else if SKIPPED_ELEMENTS.contains(&name) {
            continue;
        } else if BLOCK_ELEMENTS.contains(&name) {
            out.push('\n');
            push_text(child, out);
            out.push('\n');
        } else {
            push_text(child, out);
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Pick from the input file extension.
    #[default]
    Auto,
    /// One cell per line.
    Lines,
    /// Every field of every record.
    Csv,
    /// Saved HTML page, cells selected by CSS selector.
    Html,
}

impl SourceFormat {
    /// Resolves `Auto` against the input path. Stdin is read as lines.
    pub fn resolve(self, input: Option<&str>) -> SourceFormat {
        if self != SourceFormat::Auto {
            return self;
        }

        let extension = input
            .filter(|path| *path != "-")
            .and_then(|path| Path::new(path).extension())
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("html") | Some("htm") => SourceFormat::Html,
            Some("csv") => SourceFormat::Csv,
            _ => SourceFormat::Lines,
        }
    }

    pub fn cell_source(self, input: Option<&str>, selector: &str) -> Box<dyn CellSource> {
        match self.resolve(input) {
            SourceFormat::Csv => Box::new(CsvSource),
            SourceFormat::Html => Box::new(HtmlTableSource::new(selector)),
            SourceFormat::Lines | SourceFormat::Auto => Box::new(LineSource),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LineSource;

impl CellSource for LineSource {
    fn cells(&self, document: &str) -> Result<Vec<String>> {
        Ok(document.lines().map(String::from).collect())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvSource;

impl CellSource for CsvSource {
    fn cells(&self, document: &str) -> Result<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(document.as_bytes());

        let mut cells = Vec::new();
        for record in reader.records() {
            let record = record?;
            cells.extend(record.iter().map(String::from));
        }
        Ok(cells)
    }
}

#[derive(Debug, Clone)]
pub struct HtmlTableSource {
    selector: String,
}

impl HtmlTableSource {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }
}

impl Default for HtmlTableSource {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SELECTOR)
    }
}

impl CellSource for HtmlTableSource {
    fn cells(&self, document: &str) -> Result<Vec<String>> {
        let selector = Selector::parse(&self.selector).map_err(|e| DomainError::SelectorError {
            selector: self.selector.clone(),
            message: e.to_string(),
        })?;

        let html = Html::parse_document(document);
        let cells: Vec<String> = html
            .select(&selector)
            .map(cell_text)
            .collect();

        tracing::debug!("Selector '{}' matched {} cells", self.selector, cells.len());
        Ok(cells)
    }
}

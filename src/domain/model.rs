use std::collections::BTreeSet;

/// Options applied by the transformation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Rewrite every output line with its labels in reverse order.
    pub reverse: bool,
}

/// Counters describing one run of the transformation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    pub cells_read: usize,
    pub candidates_matched: usize,
    pub domains_emitted: usize,
}

/// Unique music domains in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    domains: Vec<String>,
}

impl ResultSet {
    /// Builds a sorted, deduplicated set.
    pub fn from_unique(domains: BTreeSet<String>) -> Self {
        Self {
            domains: domains.into_iter().collect(),
        }
    }

    /// Applies `f` to every line, keeping the current order.
    pub fn map_lines<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        Self {
            domains: self.domains.iter().map(|d| f(d.as_str())).collect(),
        }
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Newline-joined output, no trailing newline.
    pub fn render(&self) -> String {
        self.domains.join("\n")
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub result_set: ResultSet,
    pub report: ExtractionReport,
}

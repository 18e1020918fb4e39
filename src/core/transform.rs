//! Cell text to Amazon Music domain transformation.
//!
//! Every function here is total: any sequence of strings, including an empty
//! one, produces a (possibly empty) result.

use crate::domain::model::{ExtractionReport, ResultSet, TransformOptions, TransformResult};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

pub const MUSIC_PREFIX: &str = "music.";

static AMAZON_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^amazon\.[.a-z]+$").expect("domain pattern is a valid regex")
});

/// Trims surrounding whitespace and lowercases.
pub fn to_candidate(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// `amazon.` followed by one or more lowercase ASCII letters or dots.
pub fn is_amazon_domain(candidate: &str) -> bool {
    AMAZON_DOMAIN.is_match(candidate)
}

pub fn to_music_domain(candidate: &str) -> String {
    format!("{}{}", MUSIC_PREFIX, candidate)
}

/// `music.amazon.co.uk` becomes `uk.co.amazon.music`.
pub fn reverse_domain(domain: &str) -> String {
    domain
        .split('.')
        .map(str::trim)
        .rev()
        .collect::<Vec<_>>()
        .join(".")
}

pub fn extract_music_domains<I, S>(cells: I, options: &TransformOptions) -> TransformResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = ExtractionReport::default();
    let mut unique = BTreeSet::new();

    for cell in cells {
        report.cells_read += 1;
        let candidate = to_candidate(cell.as_ref());
        if !is_amazon_domain(&candidate) {
            continue;
        }
        report.candidates_matched += 1;
        unique.insert(to_music_domain(&candidate));
    }

    let mut result_set = ResultSet::from_unique(unique);
    // Reversal happens after sorting; lines keep the order of their forward form.
    if options.reverse {
        result_set = result_set.map_lines(reverse_domain);
    }
    report.domains_emitted = result_set.len();

    TransformResult { result_set, report }
}

/// The primary pipeline: filter, prefix, dedupe, sort, join.
pub fn music_domains<I, S>(cells: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extract_music_domains(cells, &TransformOptions::default())
        .result_set
        .render()
}

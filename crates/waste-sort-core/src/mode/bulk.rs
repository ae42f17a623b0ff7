//! Bulk mode: one item per line in, CSV report out.

use std::fs;
use std::path::{Path, PathBuf};

use crate::category::Classifier;
use crate::error::{Result, WasteSortError};
use crate::record::Record;
use crate::report::write_report;

const OUTPUT_SUFFIX: &str = "_classified.csv";

/// Result of a successful bulk run
#[derive(Debug, Clone)]
pub struct BulkOutcome {
    pub records: Vec<Record>,
    pub output: PathBuf,
}

/// Classifies input files line by line
pub struct BulkRunner<'a> {
    classifier: &'a Classifier,
}

impl<'a> BulkRunner<'a> {
    pub fn new(classifier: &'a Classifier) -> Self {
        Self { classifier }
    }

    /// Read `input`, classify each non-blank line and write the report
    ///
    /// Nothing is written when the input is missing or unreadable.
    pub fn run(&self, input: &Path, output: Option<&Path>) -> Result<BulkOutcome> {
        if !input.exists() {
            return Err(WasteSortError::InputNotFound {
                path: input.to_path_buf(),
            });
        }

        let content = fs::read_to_string(input).map_err(|source| WasteSortError::Read {
            path: input.to_path_buf(),
            source,
        })?;

        let records = self.classify_lines(&content);
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input));

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            items = records.len(),
            "bulk classification"
        );
        write_report(&records, &output)?;

        Ok(BulkOutcome { records, output })
    }

    /// Trim lines, drop blanks, classify the rest in order
    pub fn classify_lines(&self, content: &str) -> Vec<Record> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| Record::classify(self.classifier, line))
            .collect()
    }
}

/// `<input basename without extension>_classified.csv`, relative to the
/// working directory
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    PathBuf::from(format!("{stem}{OUTPUT_SUFFIX}"))
}

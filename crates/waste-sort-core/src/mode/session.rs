//! Interactive session state machine
//!
//! The caller owns the console. It feeds one line at a time into
//! [`Session::handle_line`] and renders the returned [`Step`]. The session
//! moves between `Reading`, a transient `Saving` and the final `Exiting`.

use std::path::{Path, PathBuf};

use crate::category::Classifier;
use crate::error::Result;
use crate::record::Record;
use crate::report::{write_report, DEFAULT_REPORT_FILE};

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Reading,
    Saving,
    Exiting,
}

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line
    Skip,
    Exit,
    Save(PathBuf),
    Classify(String),
}

impl Command {
    /// Parse one line of user input
    ///
    /// `exit` and the `save ` prefix are case-insensitive; the filename keeps
    /// its case.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Skip;
        }
        if line.eq_ignore_ascii_case("exit") {
            return Self::Exit;
        }
        let is_save = line
            .get(..5)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("save "));
        if is_save {
            let name = line[4..].trim_start();
            let name = if name.is_empty() {
                DEFAULT_REPORT_FILE
            } else {
                name
            };
            return Self::Save(PathBuf::from(name));
        }
        Self::Classify(line.to_string())
    }
}

/// What happened for one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Ignored,
    Classified(Record),
    Saved { path: PathBuf, count: usize },
    Exit,
}

/// Accumulates records for one interactive run
pub struct Session {
    classifier: Classifier,
    records: Vec<Record>,
    state: State,
    saved_upto: usize,
    exit_report: PathBuf,
}

impl Session {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            records: Vec::new(),
            state: State::Reading,
            saved_upto: 0,
            exit_report: PathBuf::from(DEFAULT_REPORT_FILE),
        }
    }

    /// Override the file used by the save-on-exit prompt
    pub fn with_exit_report(mut self, path: impl Into<PathBuf>) -> Self {
        self.exit_report = path.into();
        self
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// True when records were added after the last successful save
    pub fn has_unsaved(&self) -> bool {
        self.records.len() > self.saved_upto
    }

    /// Process one input line
    ///
    /// A failed save is returned as an error; the session stays `Reading`
    /// and the records are kept.
    pub fn handle_line(&mut self, line: &str) -> Result<Step> {
        if self.state == State::Exiting {
            return Ok(Step::Exit);
        }

        match Command::parse(line) {
            Command::Skip => Ok(Step::Ignored),
            Command::Exit => {
                self.state = State::Exiting;
                Ok(Step::Exit)
            }
            Command::Save(path) => {
                let count = self.save(&path)?;
                Ok(Step::Saved { path, count })
            }
            Command::Classify(item) => {
                let record = Record::classify(&self.classifier, item);
                self.records.push(record.clone());
                Ok(Step::Classified(record))
            }
        }
    }

    /// Write all records so far to `path`
    pub fn save(&mut self, path: &Path) -> Result<usize> {
        self.state = State::Saving;
        let result = write_report(&self.records, path);
        self.state = State::Reading;
        result?;

        self.saved_upto = self.records.len();
        Ok(self.records.len())
    }

    /// Handle the save-on-exit answer; returns the written path on `y`
    pub fn finish(&mut self, answer: &str) -> Result<Option<PathBuf>> {
        self.state = State::Exiting;
        if !confirms(answer) {
            return Ok(None);
        }
        let path = self.exit_report.clone();
        let saved = self.save(&path);
        self.state = State::Exiting;
        saved.map(|_| Some(path))
    }
}

/// `y` (any case, surrounding whitespace ignored) means yes
pub fn confirms(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

//! Keyword Store
//!
//! Runtime keyword sets. Built once from the builtin tables, optionally
//! extended by the `[keywords]` config section, then only read.

use crate::config::KeywordsConfig;

use super::builtin::{DRY_HINTS, DRY_KEYWORDS, WET_HINTS, WET_KEYWORDS};

/// Keyword lists used by the classifier, in scan order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    wet: Vec<String>,
    dry: Vec<String>,
    wet_hints: Vec<String>,
    dry_hints: Vec<String>,
}

impl KeywordSet {
    /// Builtin tables only
    pub fn builtin() -> Self {
        Self {
            wet: to_owned(WET_KEYWORDS),
            dry: to_owned(DRY_KEYWORDS),
            wet_hints: to_owned(WET_HINTS),
            dry_hints: to_owned(DRY_HINTS),
        }
    }

    /// Append configured keywords after the builtin ones
    ///
    /// Entries are lowercased; blanks and duplicates are skipped.
    pub fn with_config(mut self, config: &KeywordsConfig) -> Self {
        extend(&mut self.wet, &config.wet);
        extend(&mut self.dry, &config.dry);
        extend(&mut self.wet_hints, &config.wet_hints);
        extend(&mut self.dry_hints, &config.dry_hints);
        self
    }

    pub fn wet(&self) -> &[String] {
        &self.wet
    }

    pub fn dry(&self) -> &[String] {
        &self.dry
    }

    pub fn wet_hints(&self) -> &[String] {
        &self.wet_hints
    }

    pub fn dry_hints(&self) -> &[String] {
        &self.dry_hints
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn to_owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

fn extend(list: &mut Vec<String>, extra: &[String]) {
    for kw in extra {
        let kw = kw.trim().to_lowercase();
        if kw.is_empty() || list.contains(&kw) {
            continue;
        }
        list.push(kw);
    }
}

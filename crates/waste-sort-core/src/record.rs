//! Classified records
//!
//! A [`Record`] pairs an item with the category it was assigned. Records are
//! created once by a mode driver and never changed afterwards.

use std::collections::HashMap;

use crate::category::{Category, Classifier};

/// One classified item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    item: String,
    category: Category,
}

impl Record {
    pub fn new(item: impl Into<String>, category: Category) -> Self {
        Self {
            item: item.into(),
            category,
        }
    }

    /// Classify `item` and wrap the result
    pub fn classify(classifier: &Classifier, item: impl Into<String>) -> Self {
        let item = item.into();
        let category = classifier.classify(&item);
        Self { item, category }
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// Per-category record counts
pub fn category_counts(records: &[Record]) -> HashMap<Category, usize> {
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(record.category).or_insert(0) += 1;
    }
    counts
}

//! Sample mode: a fixed demonstration list.

use crate::category::Classifier;
use crate::record::Record;

pub const SAMPLE_REPORT_FILE: &str = "sample_waste_report.csv";

pub const SAMPLE_ITEMS: [&str; 10] = [
    "Apple peel",
    "Plastic bottle",
    "Used tea bag",
    "Newspaper",
    "Eggshell",
    "Glass jar",
    "Vegetable leftover",
    "Styrofoam cup",
    "Old battery",
    "Grass clippings",
];

/// Classify the sample items in order
pub fn sample_records(classifier: &Classifier) -> Vec<Record> {
    SAMPLE_ITEMS
        .iter()
        .map(|item| Record::classify(classifier, *item))
        .collect()
}

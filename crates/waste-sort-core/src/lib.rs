pub mod category;
pub mod config;
pub mod error;
pub mod mode;
pub mod record;
pub mod report;

pub use category::{classify, Category, Classifier, KeywordSet};
pub use config::{Config, KeywordsConfig};
pub use error::{Result, WasteSortError};
pub use mode::{BulkOutcome, BulkRunner, Command, Session, State, Step};
pub use record::{category_counts, Record};
pub use report::{write_csv, write_report, DEFAULT_REPORT_FILE};

//! Mode drivers
//!
//! - `bulk`: classify every line of a text file into a CSV report
//! - `sample`: classify the fixed demonstration list
//! - `session`: interactive line-by-line state machine

pub mod bulk;
pub mod sample;
pub mod session;

pub use bulk::{BulkOutcome, BulkRunner};
pub use sample::{SAMPLE_ITEMS, SAMPLE_REPORT_FILE};
pub use session::{Command, Session, State, Step};

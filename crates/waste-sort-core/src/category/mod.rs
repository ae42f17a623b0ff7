//! # Category Module
//!
//! Sorts free-text waste descriptions into wet or dry by keyword containment.
//!
//! ## Module layout
//!
//! - `builtin`: the builtin keyword tables
//! - `store`: runtime keyword sets (builtin plus config extensions)
//! - `classifier`: the keyword scan
//!
//! ## Example
//!
//! ```rust
//! use waste_sort_core::category::{classify, Category};
//!
//! assert_eq!(classify("Apple peel"), Category::Wet);
//! assert_eq!(classify("Plastic bottle"), Category::Dry);
//! assert_eq!(classify("Ceramic mug"), Category::Unknown);
//! ```

mod builtin;
mod classifier;
mod store;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use builtin::{DRY_HINTS, DRY_KEYWORDS, WET_HINTS, WET_KEYWORDS};
pub use classifier::{classify, Classifier};
pub use store::KeywordSet;

/// Waste category assigned to an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Biodegradable
    Wet,
    /// Non-biodegradable
    Dry,
    /// No keyword or hint matched
    Unknown,
}

impl Category {
    /// All categories in report order
    pub const ALL: [Category; 3] = [Category::Wet, Category::Dry, Category::Unknown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wet => "wet",
            Self::Dry => "dry",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_is_lowercase() {
        assert_eq!(Category::Wet.to_string(), "wet");
        assert_eq!(Category::Dry.to_string(), "dry");
        assert_eq!(Category::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_category_uppercase_feedback() {
        assert_eq!(Category::Wet.as_str().to_uppercase(), "WET");
    }
}

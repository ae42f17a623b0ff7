//! Keyword Classifier
//!
//! Lowercases the item and scans, in order: primary wet keywords, primary
//! dry keywords, wet hints, dry hints. The first substring hit decides.

use once_cell::sync::Lazy;

use super::store::KeywordSet;
use super::Category;

static BUILTIN: Lazy<Classifier> = Lazy::new(Classifier::builtin);

/// Classify with the builtin keyword tables
pub fn classify(item: &str) -> Category {
    BUILTIN.classify(item)
}

/// Keyword classifier over a fixed [`KeywordSet`]
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    keywords: KeywordSet,
}

impl Classifier {
    pub fn new(keywords: KeywordSet) -> Self {
        Self { keywords }
    }

    /// Builtin tables only
    pub fn builtin() -> Self {
        Self::new(KeywordSet::builtin())
    }

    /// Assign a category to a free-text item
    pub fn classify(&self, item: &str) -> Category {
        match self.matching_keyword(item) {
            Some((category, keyword)) => {
                tracing::debug!(item, keyword, %category, "keyword matched");
                category
            }
            None => {
                tracing::debug!(item, "no keyword matched");
                Category::Unknown
            }
        }
    }

    /// First keyword hit and the category it maps to
    pub fn matching_keyword(&self, item: &str) -> Option<(Category, &str)> {
        let s = item.to_lowercase();
        let passes = [
            (Category::Wet, self.keywords.wet()),
            (Category::Dry, self.keywords.dry()),
            (Category::Wet, self.keywords.wet_hints()),
            (Category::Dry, self.keywords.dry_hints()),
        ];

        passes.into_iter().find_map(|(category, list)| {
            list.iter()
                .find(|kw| s.contains(kw.as_str()))
                .map(|kw| (category, kw.as_str()))
        })
    }
}

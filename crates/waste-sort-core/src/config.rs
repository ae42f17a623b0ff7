use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::{Classifier, KeywordSet};
use crate::error::{Result, WasteSortError};

/// Template written by `Config::init`
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# waste-sort configuration file
# Pass with: waste-sort --config <path>

[keywords]
# Extra primary keywords, checked after the builtin ones
# Example: wet = ["banana", "corn cob"]
wet = []
dry = []

# Extra fallback hints, checked only when no primary keyword matched
wet_hints = []
dry_hints = []
"#;

/// Runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keywords: KeywordsConfig,
}

/// `[keywords]` section: lists appended to the builtin tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordsConfig {
    #[serde(default)]
    pub wet: Vec<String>,
    #[serde(default)]
    pub dry: Vec<String>,
    #[serde(default)]
    pub wet_hints: Vec<String>,
    #[serde(default)]
    pub dry_hints: Vec<String>,
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| WasteSortError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Write the commented default template unless the file already exists
    pub fn init(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        if !path.exists() {
            fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
        }
        Ok(())
    }

    /// Keyword sets: builtin tables extended by this config
    pub fn keyword_set(&self) -> KeywordSet {
        KeywordSet::builtin().with_config(&self.keywords)
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.keyword_set())
    }
}

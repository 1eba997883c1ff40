use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};
use wordlevel_core::Level;

use self::output::OutputConfig;

pub mod output;

fn default_field() -> String {
    wordlevel_core::DEFAULT_FIELD.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TaggerConfig {
    /// Field added to untagged entries
    #[serde(default = "default_field")]
    pub field: String,
    /// Value for untagged entries, inferred from the file name when unset
    pub default_level: Option<String>,
    pub output: OutputConfig,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            field: default_field(),
            default_level: None,
            output: OutputConfig::default(),
        }
    }
}

impl TaggerConfig {
    /// Build from `WORDLEVEL_*` environment variables
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let field = lookup("WORDLEVEL_FIELD")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_field);

        let default_level = lookup("WORDLEVEL_DEFAULT_LEVEL").filter(|v| !v.is_empty());

        TaggerConfig {
            field,
            default_level,
            output: OutputConfig::from_lookup(&lookup),
        }
    }

    /// Level for untagged entries of `path`
    ///
    /// An explicit default wins, then the CEFR level named by the file
    /// stem (`b1.json` -> `b1`), then `c2`.
    pub fn default_level_for(&self, path: &Path) -> String {
        if let Some(level) = &self.default_level {
            return level.clone();
        }

        match Level::from_path(path) {
            Some(level) => level.as_str().to_string(),
            None => {
                tracing::debug!(
                    "No level in file name {}, using {}",
                    path.display(),
                    wordlevel_core::DEFAULT_LEVEL
                );
                wordlevel_core::DEFAULT_LEVEL.as_str().to_string()
            }
        }
    }
}

use serde::{Deserialize, Serialize};
use wordlevel_core::SaveOptions;

fn default_indent() -> usize {
    wordlevel_core::DEFAULT_INDENT
}

fn default_atomic_write() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Spaces per indentation level in the rewritten file
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Replace the file via a temporary sibling instead of overwriting it
    #[serde(default = "default_atomic_write")]
    pub atomic_write: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            atomic_write: default_atomic_write(),
        }
    }
}

impl OutputConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let indent = lookup("WORDLEVEL_INDENT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or_else(default_indent);

        let atomic_write = lookup("WORDLEVEL_ATOMIC_WRITE")
            .and_then(|v| parse_bool(&v))
            .unwrap_or_else(default_atomic_write);

        Self {
            indent,
            atomic_write,
        }
    }

    pub fn save_options(&self) -> SaveOptions {
        SaveOptions {
            indent: self.indent,
            atomic_write: self.atomic_write,
        }
    }
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

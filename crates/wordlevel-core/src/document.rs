use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use crate::error::TagError;

/// One vocabulary item, kept as a raw JSON object
pub type Entry = Map<String, Value>;

/// Placeholder path for documents parsed from memory
const IN_MEMORY: &str = "<memory>";

/// Ordered word list backed by a JSON array of objects
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: Vec<Entry>,
}

/// Outcome of a single tagging pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagReport {
    pub total: usize,
    pub updated: usize,
    pub already_tagged: usize,
}

impl TagReport {
    pub fn is_unchanged(&self) -> bool {
        self.updated == 0
    }
}

/// How a document is written back to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    /// Spaces per indentation level
    pub indent: usize,
    /// Write to a temporary sibling and rename it over the target
    pub atomic_write: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            indent: crate::DEFAULT_INDENT,
            atomic_write: true,
        }
    }
}

impl Document {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Parse a word list from JSON text
    ///
    /// The root must be an array and every element an object. The first
    /// offending element is reported by index.
    pub fn from_json(json: &str) -> Result<Self, TagError> {
        Self::from_slice(json.as_bytes())
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, TagError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|source| TagError::MalformedJson {
                path: PathBuf::from(IN_MEMORY),
                source,
            })?;

        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(TagError::NotAnArray {
                    path: PathBuf::from(IN_MEMORY),
                    found: json_type(&other),
                });
            }
        };

        let mut entries = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match item {
                Value::Object(entry) => entries.push(entry),
                other => {
                    return Err(TagError::NotAnObject {
                        path: PathBuf::from(IN_MEMORY),
                        index,
                        found: json_type(&other),
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    /// Read and parse a word list file
    pub fn load(path: &Path) -> Result<Self, TagError> {
        tracing::debug!("Reading word list: {}", path.display());
        let bytes = fs::read(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => TagError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => TagError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let document = Self::from_slice(&bytes).map_err(|e| e.with_path(path))?;
        tracing::debug!("Parsed {} entries from {}", document.len(), path.display());
        Ok(document)
    }

    /// Add `field: value` to every entry missing `field`
    ///
    /// Existing values are never touched, whatever their type.
    pub fn apply_default(&mut self, field: &str, value: &str) -> TagReport {
        let mut report = TagReport {
            total: self.entries.len(),
            ..TagReport::default()
        };

        for entry in &mut self.entries {
            if entry.contains_key(field) {
                report.already_tagged += 1;
            } else {
                entry.insert(field.to_string(), Value::String(value.to_string()));
                report.updated += 1;
            }
        }

        report
    }

    /// Pretty-print with `indent` spaces, non-ASCII kept verbatim
    pub fn to_json_bytes(&self, indent: usize) -> Result<Vec<u8>, TagError> {
        let mut buf = Vec::new();
        self.write_json(&mut buf, indent)?;
        Ok(buf)
    }

    pub fn write_json<W: Write>(&self, writer: W, indent: usize) -> Result<(), TagError> {
        let indent = " ".repeat(indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = Serializer::with_formatter(writer, formatter);
        self.entries.serialize(&mut serializer)?;
        Ok(())
    }

    /// Serialize and overwrite `path`
    pub fn save(&self, path: &Path, options: SaveOptions) -> Result<(), TagError> {
        let bytes = self.to_json_bytes(options.indent)?;

        if options.atomic_write {
            write_atomic(path, &bytes)
        } else {
            fs::write(path, &bytes).map_err(|source| TagError::Write {
                path: path.to_path_buf(),
                source,
            })
        }?;

        tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Temporary sibling used by atomic writes, e.g. `.c2.json.tmp`
pub fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), TagError> {
    // Replace the file a symlink points at, not the link itself
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let temp_path = temp_path_for(&target);

    let result = (|| -> io::Result<()> {
        let mut file = File::create(&temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;

        if let Ok(metadata) = fs::metadata(&target) {
            fs::set_permissions(&temp_path, metadata.permissions())?;
        }

        fs::rename(&temp_path, &target)
    })();

    result.map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        TagError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

use std::path::PathBuf;

/// Coarse failure class of a [`TagError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    MalformedInput,
    Io,
    Config,
}

#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}", path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON array at the top level of {}, found {found}", path.display())]
    NotAnArray { path: PathBuf, found: &'static str },

    #[error("Expected entry {index} of {} to be a JSON object, found {found}", path.display())]
    NotAnObject {
        path: PathBuf,
        index: usize,
        found: &'static str,
    },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl TagError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TagError::FileNotFound { .. } | TagError::Read { .. } => ErrorKind::FileNotFound,
            TagError::MalformedJson { .. }
            | TagError::NotAnArray { .. }
            | TagError::NotAnObject { .. } => ErrorKind::MalformedInput,
            TagError::Write { .. } | TagError::Serialize(_) => ErrorKind::Io,
            TagError::InvalidConfig(_) => ErrorKind::Config,
        }
    }

    /// Attach a path to errors raised while parsing in-memory text
    pub(crate) fn with_path(self, path: &std::path::Path) -> Self {
        match self {
            TagError::MalformedJson { source, .. } => TagError::MalformedJson {
                path: path.to_path_buf(),
                source,
            },
            TagError::NotAnArray { found, .. } => TagError::NotAnArray {
                path: path.to_path_buf(),
                found,
            },
            TagError::NotAnObject { index, found, .. } => TagError::NotAnObject {
                path: path.to_path_buf(),
                index,
                found,
            },
            other => other,
        }
    }
}

pub mod document;
pub mod error;
pub mod level;
pub mod tagger;

pub use document::{Document, Entry, SaveOptions, TagReport};
pub use error::{ErrorKind, TagError};
pub use level::Level;
pub use tagger::{TagOptions, Tagger, tag};

/// Field added to untagged entries
pub const DEFAULT_FIELD: &str = "level";

/// Level used when neither config nor file name names one
pub const DEFAULT_LEVEL: Level = Level::C2;

/// Word list processed when no file is given
pub const DEFAULT_FILE: &str = "c2.json";

pub const DEFAULT_INDENT: usize = 4;

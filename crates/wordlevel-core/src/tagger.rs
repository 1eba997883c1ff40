use std::path::Path;

use crate::document::{Document, SaveOptions, TagReport};
use crate::error::TagError;
use crate::level::Level;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagOptions {
    pub save: SaveOptions,
    /// Run the pass and report, but never write
    pub dry_run: bool,
}

/// Adds a default level to every entry of a word list that lacks one
#[derive(Debug, Clone)]
pub struct Tagger {
    field: String,
    default_level: String,
    options: TagOptions,
}

impl Tagger {
    pub fn new(
        field: impl Into<String>,
        default_level: impl Into<String>,
    ) -> Result<Self, TagError> {
        let field = field.into();
        let default_level = default_level.into();

        if field.is_empty() {
            return Err(TagError::InvalidConfig("field name must not be empty".into()));
        }
        if default_level.is_empty() {
            return Err(TagError::InvalidConfig("default level must not be empty".into()));
        }
        if Level::from_str(&default_level).is_none() {
            tracing::warn!("Default level '{default_level}' is not a CEFR level");
        }

        Ok(Self {
            field,
            default_level,
            options: TagOptions::default(),
        })
    }

    pub fn with_options(mut self, options: TagOptions) -> Self {
        self.options = options;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn default_level(&self) -> &str {
        &self.default_level
    }

    pub fn options(&self) -> TagOptions {
        self.options
    }

    /// Tag an in-memory document
    pub fn tag_document(&self, document: &mut Document) -> TagReport {
        document.apply_default(&self.field, &self.default_level)
    }

    /// Load `path`, tag it and write it back in place
    ///
    /// Nothing is written unless the whole file parsed.
    pub fn tag_file(&self, path: &Path) -> Result<TagReport, TagError> {
        let mut document = Document::load(path)?;
        let report = self.tag_document(&mut document);

        tracing::info!(
            "{}: {} entries, {} tagged with {}='{}', {} already tagged",
            path.display(),
            report.total,
            report.updated,
            self.field,
            self.default_level,
            report.already_tagged,
        );

        if self.options.dry_run {
            tracing::info!("Dry run, not writing {}", path.display());
            return Ok(report);
        }

        document.save(path, self.options.save)?;
        Ok(report)
    }
}

/// Tag `path` with the standard `level` field
pub fn tag(path: &Path, default_level: &str) -> Result<TagReport, TagError> {
    Tagger::new(crate::DEFAULT_FIELD, default_level)?.tag_file(path)
}

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use wordlevel_config::TaggerConfig;
use wordlevel_core::{TagOptions, TagReport, Tagger};

#[derive(Parser, Debug)]
#[command(name = "wordlevel")]
#[command(about = "Add a default CEFR level to every untagged entry of a JSON word list")]
pub struct Cli {
    /// Word list files, rewritten in place
    #[arg(value_name = "FILES", default_value = wordlevel_core::DEFAULT_FILE)]
    pub files: Vec<PathBuf>,

    /// Field to add to untagged entries
    #[arg(long)]
    pub field: Option<String>,

    /// Value for untagged entries (default: level named by the file, else c2)
    #[arg(long)]
    pub default_level: Option<String>,

    /// Spaces per indentation level in the output
    #[arg(long)]
    pub indent: Option<usize>,

    /// Overwrite files directly instead of replacing them atomically
    #[arg(long)]
    pub no_atomic: bool,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layer command line flags over `config`
    pub fn apply(&self, mut config: TaggerConfig) -> TaggerConfig {
        if let Some(field) = &self.field {
            config.field = field.clone();
        }
        if let Some(level) = &self.default_level {
            config.default_level = Some(level.clone());
        }
        if let Some(indent) = self.indent {
            config.output.indent = indent;
        }
        if self.no_atomic {
            config.output.atomic_write = false;
        }
        config
    }
}

/// Tag every file in order, stopping at the first failure
pub fn run(
    files: &[PathBuf],
    config: &TaggerConfig,
    dry_run: bool,
    out: &mut impl Write,
) -> anyhow::Result<Vec<TagReport>> {
    let options = TagOptions {
        save: config.output.save_options(),
        dry_run,
    };

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        let default_level = config.default_level_for(path);
        let tagger = Tagger::new(config.field.as_str(), default_level)?.with_options(options);

        let report = tagger
            .tag_file(path)
            .with_context(|| format!("Failed to tag {}", path.display()))?;

        let verb = if dry_run { "Would add" } else { "Added" };
        writeln!(
            out,
            "{verb} key '{}': '{}' to {} ({} of {} entries updated)",
            tagger.field(),
            tagger.default_level(),
            path.display(),
            report.updated,
            report.total,
        )?;

        reports.push(report);
    }

    Ok(reports)
}

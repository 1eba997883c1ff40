use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordlevel_config::TaggerConfig;

pub mod cli;

use self::cli::Cli;

fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let config = cli.apply(TaggerConfig::new());
    tracing::debug!(
        "Tagging {} file(s), field '{}', indent {}, atomic write {}",
        cli.files.len(),
        config.field,
        config.output.indent,
        config.output.atomic_write,
    );

    let mut stdout = std::io::stdout().lock();
    cli::run(&cli.files, &config, cli.dry_run, &mut stdout)?;

    Ok(())
}

/// Log to stderr so stdout only carries the confirmation lines
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .try_init();
}

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Target};
use orp_reader::cli::{Cli, Commands, GlobalArgs};
use std::fs::{self, OpenOptions};

fn main() -> Result<()> {
    let (global, command) = Cli::parse().into_command();

    match command {
        Commands::Read(args) => {
            init_file_logging(&global)?;
            args.execute(&global)
        }
        Commands::Tokenize(args) => {
            Builder::new()
                .parse_filters(&global.log_level)
                .target(Target::Stderr)
                .init();
            let stdout = std::io::stdout();
            args.execute(&mut stdout.lock())
        }
    }
}

/// The reader owns the terminal, so its log goes to a file.
fn init_file_logging(global: &GlobalArgs) -> Result<()> {
    if global.ephemeral && global.log_file.is_none() {
        return Ok(());
    }

    let path = global.log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Builder::new()
        .parse_filters(&global.log_level)
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .init();

    log::info!("orp-reader {} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}

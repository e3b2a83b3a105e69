//! Command-line interface

use crate::app::{App, AppEvent};
use crate::input::{self, LoadError, WikipediaClient};
use crate::reading::tokenize_text;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::ui::TuiManager;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

const DATA_DIR_NAME: &str = ".orp-reader";
const LOG_FILE_NAME: &str = "orp-reader.log";

#[derive(Debug, Parser)]
#[command(name = "orp-reader", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// File to open when no subcommand is given
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Where settings, the last document and the position are kept
    #[arg(long, global = true, value_name = "DIR", env = "ORP_READER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log destination for the reader (default: <data-dir>/orp-reader.log)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `info` or `orp_reader=debug`
    #[arg(long, global = true, value_name = "LEVEL", env = "ORP_READER_LOG", default_value = "info")]
    pub log_level: String,

    /// Keep everything in memory; nothing is read from or written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the reader (the default)
    Read(ReadArgs),

    /// Print the reading sequence for a document as JSON
    Tokenize(TokenizeArgs),
}

#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Load this file before the reader opens
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Document to tokenize (default: stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// The subcommand to run, with a bare `orp-reader [FILE]` meaning `read`.
    pub fn into_command(self) -> (GlobalArgs, Commands) {
        let command = self
            .command
            .unwrap_or(Commands::Read(ReadArgs { file: self.file }));
        (self.global, command)
    }
}

impl GlobalArgs {
    pub fn data_dir(&self) -> Result<PathBuf> {
        self.data_dir_from(std::env::var_os("HOME"))
    }

    /// `--log-file` if given, else a file in the data directory.
    pub fn log_path(&self) -> Result<PathBuf> {
        self.log_path_from(std::env::var_os("HOME"))
    }

    fn data_dir_from(&self, home: Option<OsString>) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let home = home.context("HOME is not set; pass --data-dir or set ORP_READER_DATA_DIR")?;
        Ok(PathBuf::from(home).join(DATA_DIR_NAME))
    }

    fn log_path_from(&self, home: Option<OsString>) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Ok(self.data_dir_from(home)?.join(LOG_FILE_NAME)),
        }
    }

    /// The persistent store, or a throwaway one with `--ephemeral`.
    pub fn open_store(&self) -> Result<Box<dyn KeyValueStore>> {
        if self.ephemeral {
            return Ok(Box::new(MemoryStore::new()));
        }
        let dir = self.data_dir()?;
        let store = FileStore::open(&dir)
            .with_context(|| format!("Failed to open data directory {}", dir.display()))?;
        Ok(Box::new(store))
    }
}

impl ReadArgs {
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let mut app = App::new(global.open_store()?, Box::new(WikipediaClient::default()));
        if let Some(file) = &self.file {
            app.handle_event(
                AppEvent::LoadFile(file.to_string_lossy().into_owned()),
                Instant::now(),
            );
        }

        let mut tui = TuiManager::new().context("Failed to set up the terminal")?;
        let result = tui.run_event_loop(&mut app);
        app.shutdown();
        result.context("Terminal I/O failed")?;

        log::info!("Reader closed");
        Ok(())
    }
}

impl TokenizeArgs {
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        let text = match &self.file {
            Some(path) => read_document(path)?,
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read stdin")?;
                text
            }
        };

        let units = tokenize_text(&text);
        log::info!("Tokenized {} units", units.len());

        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, &units)?;
        } else {
            serde_json::to_writer(&mut *out, &units)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

/// File contents as text; an empty document is just an empty string here.
fn read_document(path: &Path) -> Result<String> {
    match input::load_path(&path.to_string_lossy()) {
        Ok(document) => Ok(document.text),
        Err(LoadError::EmptyDocument(_)) => Ok(String::new()),
        Err(err) => Err(err).with_context(|| format!("Failed to load {}", path.display())),
    }
}

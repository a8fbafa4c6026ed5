use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::storage::ConfigEntry;

#[derive(Parser)]
#[command(name = "localconf")]
#[command(version)]
#[command(about = "Atomically persist and read local configuration files")]
pub struct Args {
    /// Configuration directory (overrides LOCALCONF_DIR, default: conf)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Atomically write text to a file, creating missing directories
    Write {
        /// Destination file
        path: PathBuf,

        /// Content to write, '-' or omit to read from stdin
        content: Option<String>,
    },
    /// Print a file's content
    Read {
        /// File to read
        path: PathBuf,
    },
    /// Print a stored configuration entry
    Get {
        #[arg(value_enum)]
        entry: EntryArg,
    },
    /// Store a configuration entry from JSON
    Put {
        #[arg(value_enum)]
        entry: EntryArg,

        /// JSON file, '-' or omit to read from stdin
        json_file: Option<PathBuf>,
    },
    /// Remove staging files left behind by interrupted writes
    Sweep {
        /// Directory to sweep (default: the configuration directory)
        dir: Option<PathBuf>,

        /// Only remove staging files at least this old
        #[arg(long, default_value = "60")]
        min_age_secs: u64,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum EntryArg {
    InterpreterSettings,
    NotebookAuthorization,
    Credentials,
}

impl From<EntryArg> for ConfigEntry {
    fn from(arg: EntryArg) -> Self {
        match arg {
            EntryArg::InterpreterSettings => ConfigEntry::InterpreterSettings,
            EntryArg::NotebookAuthorization => ConfigEntry::NotebookAuthorization,
            EntryArg::Credentials => ConfigEntry::Credentials,
        }
    }
}

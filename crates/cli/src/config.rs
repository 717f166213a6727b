//! Command line arguments and runtime configuration.

use std::path::PathBuf;

use clap::Parser;

/// Extension appended to file names entered in the session.
pub const SOURCE_EXTENSION: &str = "csv";

/// Warehouse system: load an inventory table and query it interactively.
#[derive(Parser, Debug, Clone)]
#[command(name = "warehouse", version, about = "Load a warehouse .csv table and query it")]
pub struct Args {
    /// Directory searched for the files named in the session
    #[arg(long, env = "WAREHOUSE_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// File to load before the main menu (name without extension)
    #[arg(long)]
    pub file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// File name for a name entered without extension.
    pub fn file_name(name: &str) -> String {
        format!("{}.{SOURCE_EXTENSION}", name.trim())
    }

    /// Path of the source file for a name entered without extension.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.data_dir.join(Self::file_name(name))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".")
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self::new(args.data_dir.clone())
    }
}

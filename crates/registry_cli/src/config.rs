//! Command-line configuration for the registry binary.
//!
//! # Responsibility
//! - Select the storage backend (file or in-memory).
//! - Carry logging settings into core logging bootstrap.

use clap::Parser;
use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "database/registry.sqlite";

/// Interactive member registry.
#[derive(Debug, Parser)]
#[command(name = "registry", version, about)]
pub struct Config {
    /// SQLite database file holding the member table.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Keep members in a transient in-memory database instead of a file.
    #[arg(long, conflicts_with = "db")]
    pub in_memory: bool,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, value_name = "LEVEL", default_value = registry_core::default_log_level())]
    pub log_level: String,

    /// Absolute directory for rotating log files. Logging is off when omitted.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Storage backend chosen at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    File(PathBuf),
    Memory,
}

impl Config {
    pub fn backend(&self) -> Backend {
        if self.in_memory {
            Backend::Memory
        } else {
            Backend::File(self.db.clone())
        }
    }
}

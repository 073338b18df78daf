//! CLI argument definitions using clap
//!
//! Commands:
//! - innkeeper serve --config <path>
//! - innkeeper init --config <path>
//! - innkeeper enter --config <path>
//!
//! `--host`, `--port`, and `--database` override the corresponding
//! config-file values.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// innkeeper - hotel and guest record management over HTTP
#[derive(Parser, Debug)]
#[command(name = "innkeeper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./innkeeper.json")]
        config: PathBuf,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,

        /// SQLite database file
        #[arg(long)]
        database: Option<PathBuf>,
    },

    /// Create the database schema and exit
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./innkeeper.json")]
        config: PathBuf,

        /// SQLite database file
        #[arg(long)]
        database: Option<PathBuf>,
    },

    /// Interactively enter hotel and user records
    Enter {
        /// Path to configuration file
        #[arg(long, default_value = "./innkeeper.json")]
        config: PathBuf,

        /// SQLite database file
        #[arg(long)]
        database: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

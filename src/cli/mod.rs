//! CLI module for innkeeper
//!
//! Provides command-line interface for:
//! - serve: Run the HTTP server
//! - init: Create the database schema and exit
//! - enter: Interactive hotel and user data entry

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};

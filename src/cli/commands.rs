//! CLI command implementations
//!
//! Command bodies are synchronous entry points that build a tokio
//! runtime and block on the async store; the data-entry loop goes
//! through the same repository insert operations as the HTTP surface,
//! with the same uniqueness validation.

use std::fs;
use std::io::Write as _;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::api::HttpServer;
use crate::config::Config;
use crate::db::{Database, DbConfig};
use crate::model::{NewHotel, NewUser};
use crate::repo::{HotelRepository, RepoError, UserRepository};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{prompt, prompt_parse};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}

/// Dispatch a parsed command
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            database,
        } => {
            let mut config = load_config(&config)?;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(database) = database {
                config.database = database;
            }
            serve(config)
        }
        Command::Init { config, database } => {
            let mut config = load_config(&config)?;
            if let Some(database) = database {
                config.database = database;
            }
            init(&config)
        }
        Command::Enter { config, database } => {
            let mut config = load_config(&config)?;
            if let Some(database) = database {
                config.database = database;
            }
            enter(&config)
        }
    }
}

/// Load configuration from file, falling back to defaults when the
/// file does not exist.
fn load_config(path: &Path) -> CliResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Runtime::new()?)
}

async fn open_database(path: &Path) -> CliResult<Database> {
    Ok(Database::connect(&DbConfig::new(path)).await?)
}

/// `serve`: run the HTTP server until interrupted
fn serve(config: Config) -> CliResult<()> {
    init_tracing();
    runtime()?.block_on(async {
        let database = open_database(&config.database).await?;
        let server = HttpServer::new(config, database);
        server.start().await?;
        Ok(())
    })
}

/// `init`: bring up the schema and exit
fn init(config: &Config) -> CliResult<()> {
    runtime()?.block_on(async {
        open_database(&config.database).await?;
        println!("Database initialized at {}", config.database.display());
        Ok(())
    })
}

/// `enter`: interactive data entry, hotels first, then users
fn enter(config: &Config) -> CliResult<()> {
    runtime()?.block_on(async {
        let database = open_database(&config.database).await?;
        let hotels = HotelRepository::new(database.pool().clone());
        let users = UserRepository::new(database.pool().clone());

        println!("======= Enter Hotel Data =======");
        loop {
            let hotel_name = prompt("Hotel Name (leave blank to stop)")?;
            if hotel_name.is_empty() {
                break;
            }

            let new = NewHotel {
                hotel_name,
                rooms_available: prompt_parse("Rooms Available")?,
                location: prompt("Location")?,
                rating: prompt_parse("Rating")?,
                price_per_room: prompt_parse("Price per Room")?,
            };
            report_insert(hotels.insert(&new).await)?;
        }

        println!("\n======= Enter User Data =======");
        loop {
            let user_name = prompt("User Name (leave blank to stop)")?;
            if user_name.is_empty() {
                break;
            }

            let new = NewUser {
                user_name,
                user_id: prompt("User ID")?,
                booking_cost: prompt_parse("Booking Cost")?,
            };
            report_insert(users.insert(&new).await)?;
        }

        println!("\nAll data saved in {}", config.database.display());
        Ok(())
    })
}

/// A conflict is reported and the entry loop continues; a backend
/// failure aborts.
fn report_insert(result: Result<(), RepoError>) -> CliResult<()> {
    match result {
        Ok(()) => Ok(()),
        Err(RepoError::Conflict(msg)) => {
            let mut stdout = std::io::stdout();
            writeln!(stdout, "Skipped: {msg}")?;
            Ok(())
        }
        Err(RepoError::Backend(e)) => Err(CliError::Database(e)),
        // Insert never raises NotFound or NoFields
        Err(other) => Err(CliError::config_error(other.to_string())),
    }
}

//! CLI command definitions and dispatch.

pub mod migrate;
pub mod serve;
pub mod user;

use clap::{Parser, Subcommand};

use keygate_core::config::AppConfig;
use keygate_core::error::AppError;
use keygate_database::DatabasePool;

use crate::output::OutputFormat;

/// Keygate: credential issuance and session validation service
#[derive(Debug, Parser)]
#[command(name = "keygate", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects `config/{env}.toml`)
    #[arg(short, long, env = "KEYGATE_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Keygate server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User management
    User(user::UserArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.env)?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::User(args) => user::execute(args, &config, self.format).await,
        }
    }
}

/// Helper: connect to PostgreSQL, refusing the in-memory store.
pub async fn connect_database(config: &AppConfig) -> Result<DatabasePool, AppError> {
    if config.database.is_memory() {
        return Err(AppError::configuration(
            "This command needs a PostgreSQL database; database.url is set to the in-memory store",
        ));
    }
    DatabasePool::connect(&config.database).await
}

//! User management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use keygate_core::config::AppConfig;
use keygate_core::error::AppError;
use keygate_database::{UserRepository, UserStore};
use keygate_entity::user::{User, UserRole};

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Show a user by email
    Show {
        /// Email address (exact match)
        email: String,
    },
    /// Change a user's role
    SetRole {
        /// Email address (exact match)
        email: String,
        /// New role: `user` or `admin`
        role: UserRole,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: i64,
    /// Email
    email: String,
    /// Role
    role: String,
    /// Created at
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            email: u.email.clone(),
            role: u.role.to_string(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let pool = super::connect_database(config).await?;
    let repo = UserRepository::new(pool.pool().clone());

    let result = run(&repo, &args.command, format).await;
    pool.close().await;
    result
}

async fn run(repo: &dyn UserStore, command: &UserCommand, format: OutputFormat) -> Result<(), AppError> {
    match command {
        UserCommand::Show { email } => {
            let user = find_user(repo, email).await?;
            output::print_list(&[UserRow::from(&user)], format);
        }
        UserCommand::SetRole { email, role } => {
            let user = find_user(repo, email).await?;
            let updated = repo
                .update_role(user.id, *role)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User '{email}' not found")))?;

            output::print_list(&[UserRow::from(&updated)], format);
            output::print_success(&format!("Role of '{email}' set to {role}."));
        }
    }
    Ok(())
}

async fn find_user(repo: &dyn UserStore, email: &str) -> Result<User, AppError> {
    repo.find_by_email(email)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User '{email}' not found")))
}

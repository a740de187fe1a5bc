//! CLI administration tool for domain-rank.
//!
//! Manages admin tokens and the stored API key, and checks the database,
//! without going through the HTTP interface.
//!
//! # Usage
//!
//! ```bash
//! # Create a new admin token
//! cargo run --bin admin -- token create
//!
//! # List all tokens
//! cargo run --bin admin -- token list
//!
//! # Revoke a token
//! cargo run --bin admin -- token revoke "ops laptop"
//!
//! # Show or replace the OpenPageRank API key
//! cargo run --bin admin -- settings show
//! cargo run --bin admin -- settings set-api-key
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or the `DB_*` components): PostgreSQL connection
//! - `TOKEN_SIGNING_SECRET`: required by the `token` commands

use domain_rank::application::services::{AuthService, SettingsService};
use domain_rank::config::Config;
use domain_rank::domain::repositories::TokenRepository;
use domain_rank::infrastructure::persistence::{PgSettingsRepository, PgTokenRepository};
use domain_rank::utils::mask::mask_secret;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing domain-rank.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage admin tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Manage stored settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Create a new admin token
    Create {
        /// Token name (e.g., "ops laptop")
        #[arg(short, long)]
        name: Option<String>,

        /// Custom token value (optional, auto-generated if not provided)
        #[arg(short, long)]
        token: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token
    Revoke {
        /// Token name or ID to revoke
        name_or_id: String,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Show the stored OpenPageRank API key (masked)
    Show,

    /// Replace the OpenPageRank API key
    SetApiKey {
        /// New key (prompted for if omitted)
        key: Option<String>,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Token { action } => handle_token_action(action, pool).await?,
        Commands::Settings { action } => handle_settings_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_token_action(action: TokenAction, pool: PgPool) -> Result<()> {
    let secret =
        std::env::var("TOKEN_SIGNING_SECRET").context("TOKEN_SIGNING_SECRET must be set")?;
    if secret.is_empty() {
        anyhow::bail!("TOKEN_SIGNING_SECRET must not be empty");
    }

    let repo = Arc::new(PgTokenRepository::new(Arc::new(pool)));
    let auth = AuthService::new(repo.clone(), secret);

    match action {
        TokenAction::Create { name, token, yes } => create_token(&auth, name, token, yes).await?,
        TokenAction::List => list_tokens(repo.as_ref()).await?,
        TokenAction::Revoke { name_or_id } => revoke_token(repo.as_ref(), name_or_id).await?,
    }

    Ok(())
}

/// Creates a new admin token with interactive prompts.
///
/// Only the HMAC hash is stored. The raw token is printed once.
async fn create_token(
    auth: &AuthService,
    name: Option<String>,
    token: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create admin token".bright_blue().bold());
    println!();

    let token_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .with_initial_text("admin")
            .interact_text()?,
    };

    let token_value = match token {
        Some(t) => {
            println!("{}", "Using provided token value".yellow());
            t
        }
        None => AuthService::generate_token(),
    };

    println!();
    println!("{}", "Token details:".bright_white().bold());
    println!("  Name:  {}", token_name.cyan());
    println!("  Token: {}", token_value.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    auth.create_token(&token_name, &token_value)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;

    println!("{}", "Token created successfully!".green().bold());
    println!();
    println!("{}", "Use it to log in at /admin/login, or call the API:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/api/domains",
        token_value.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all tokens with status and last use.
async fn list_tokens(repo: &dyn TokenRepository) -> Result<()> {
    println!("{}", "Admin tokens".bright_blue().bold());
    println!();

    let tokens = repo
        .list_tokens()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "  No tokens found".yellow());
        println!();
        println!(
            "  Create one with: {} admin token create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<18} {:<18} {:<10}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold(),
        "Last used".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "-".repeat(84).bright_black());

    for token in &tokens {
        let status = if token.revoked_at.is_some() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };
        let last_used = token
            .last_used_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "  {:<4} {:<30} {:<18} {:<18} {}",
            token.id.to_string().bright_black(),
            token.name.cyan(),
            token
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            last_used.bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        tokens.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Revokes a token by name or ID after confirmation.
///
/// Numeric input is looked up as an ID, anything else as an exact name.
async fn revoke_token(repo: &dyn TokenRepository, name_or_id: String) -> Result<()> {
    println!("{}", "Revoke admin token".bright_blue().bold());
    println!();

    let token = match name_or_id.parse::<i64>() {
        Ok(id) => repo.find_by_id(id).await,
        Err(_) => repo.find_by_name(&name_or_id).await,
    }
    .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    .context("Token not found")?;

    if token.revoked_at.is_some() {
        println!("{}", "This token is already revoked".yellow());
        return Ok(());
    }

    println!("  Token: {}", token.name.cyan());
    println!("  ID:    {}", token.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this token?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "Cancelled".red());
        return Ok(());
    }

    repo.revoke_token(token.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

    println!("{}", "Token revoked successfully!".green().bold());
    println!();

    Ok(())
}

async fn handle_settings_action(action: SettingsAction, pool: PgPool) -> Result<()> {
    let settings = SettingsService::new(Arc::new(PgSettingsRepository::new(Arc::new(pool))));

    match action {
        SettingsAction::Show => {
            let key = settings
                .api_key()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to read settings: {}", e))?;

            if key.is_empty() {
                println!("  API key: {}", "not set".yellow());
            } else {
                println!("  API key: {}", mask_secret(&key).bright_white());
            }
        }
        SettingsAction::SetApiKey { key } => {
            let raw = match key {
                Some(k) => k,
                None => Password::new()
                    .with_prompt("OpenPageRank API key")
                    .allow_empty_password(true)
                    .interact()?,
            };

            let stored = settings
                .update_api_key(&raw)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to save API key: {}", e))?;

            println!(
                "{} {}",
                "API key saved:".green().bold(),
                mask_secret(&stored).bright_white()
            );
        }
    }

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
    }

    Ok(())
}

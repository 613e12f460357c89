//! One-shot resolver CLI.
//!
//! Runs a single resolve invocation against the configured bucket and prints
//! the response descriptor as JSON. Useful for checking a record without
//! starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a request path
//! cargo run --bin resolve -- path /promo2024
//!
//! # Resolve a runtime event ({"rawPath": "/promo2024", ...})
//! cargo run --bin resolve -- event ./event.json
//!
//! # Pretend it is a different moment (Unix seconds)
//! cargo run --bin resolve -- --now 1700000000 path /promo2024
//!
//! # Check that the bucket is reachable
//! cargo run --bin resolve -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `link_redirector::config`.

use link_redirector::application::services::RedirectResolver;
use link_redirector::domain::entities::RequestContext;
use link_redirector::error::AppError;
use link_redirector::{config, server, telemetry};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Resolve short links against the configured object store.
#[derive(Parser)]
#[command(name = "resolve")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Evaluate expiration at this Unix timestamp instead of now
    #[arg(long, global = true)]
    now: Option<i64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a raw request path such as `/abc123`
    Path { raw_path: String },

    /// Resolve the `rawPath` of a JSON event file
    Event { file: PathBuf },

    /// Check that the bucket is reachable
    Check,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    telemetry::init(&config.log_level, &config.log_format);

    let store = server::connect_store(&config).await;

    let ctx = match cli.command {
        Commands::Check => {
            return Ok(if store.health_check().await {
                println!("bucket {} is reachable", config.storage_bucket);
                ExitCode::SUCCESS
            } else {
                eprintln!("bucket {} is not reachable", config.storage_bucket);
                ExitCode::FAILURE
            });
        }
        Commands::Path { raw_path } => RequestContext::new(raw_path),
        Commands::Event { file } => {
            let raw = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            serde_json::from_str::<RequestContext>(&raw)
                .with_context(|| format!("{} is not a valid event", file.display()))?
        }
    };

    let resolver = RedirectResolver::new(store);
    let outcome = match cli.now {
        Some(now) => resolver.resolve_at(&ctx.raw_path, now).await,
        None => resolver.resolve(&ctx.raw_path).await,
    };

    match outcome {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let status = AppError::from(e.clone()).status();
            eprintln!("{} ({})", e, status);
            Ok(ExitCode::FAILURE)
        }
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use censor::censor::{BlockedWordSet, CommentValidator};
use censor::config::Config;

/// Censor: reject comments that contain blocked words.
///
/// Serves POST /validate, or checks a single comment from the command line.
#[derive(Parser)]
#[command(name = "censor", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP validation service
    Serve {
        /// Port to listen on (overrides CENSOR_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides CENSOR_BIND)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Check one comment against the blocklist without starting a server
    Check {
        /// The comment text to check
        comment: String,
    },

    /// Show the blocked terms
    Blocklist,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("censor=info,tower_http=info")
            }),
        )
        .init();

    let cli = Cli::parse();
    let validator = CommentValidator::new(BlockedWordSet::default());

    match cli.command {
        Commands::Serve { port, bind } => {
            let mut config = Config::load()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }
            info!(
                blocked_terms = validator.blocked_words().len(),
                "Starting censorship service"
            );
            censor::web::run_server(&config, validator).await?;
        }

        Commands::Check { comment } => {
            let trigger = validator.find_blocked_term(&comment);
            censor::output::terminal::display_verdict(&comment, trigger);
            if trigger.is_some() {
                std::process::exit(1);
            }
        }

        Commands::Blocklist => {
            censor::output::terminal::display_blocklist(validator.blocked_words().as_slice());
        }
    }

    Ok(())
}

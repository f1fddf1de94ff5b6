use anyhow::Result;
use dotenvy::dotenv;
use std::path::Path;
use std::sync::Arc;
use teloxide::prelude::*;

use kizbot::backend::BackendClient;
use kizbot::cli::{Cli, Commands};
use kizbot::conversion::render_codes;
use kizbot::core::{init_logger, AppError, AppResult, Config};
use kizbot::storage::{UserRecord, UserStore};
use kizbot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

/// Main entry point for the bot
///
/// Parses CLI arguments and dispatches to the selected subcommand.
///
/// # Errors
/// Returns an error if configuration is invalid or the subcommand fails.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present
    let _ = dotenv();

    let config = Config::from_env()?;
    init_logger(&config.log_level)?;

    let outcome = match cli.command {
        None | Some(Commands::Run) => run_bot(config).await,
        Some(Commands::AddUser { username, email, price }) => {
            add_user(&config, UserRecord { username, email, price }).await
        }
        Some(Commands::RenderCodes { output, input, codes }) => render(&output, input.as_deref(), codes),
    };

    if let Err(e) = &outcome {
        log::error!("{}", e);
    }
    Ok(outcome?)
}

/// Long polling until Ctrl+C
async fn run_bot(config: Config) -> AppResult<()> {
    log::info!("Starting kizbot...");

    let bot = create_bot(&config)?;
    let backend = BackendClient::new(config.backend.clone())?;
    log::info!("Backend: {}", backend.config().base_url);

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    let handler = schema(HandlerDeps::new(Arc::new(backend)));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}

async fn add_user(config: &Config, user: UserRecord) -> AppResult<()> {
    let store = UserStore::from_config(&config.store)?;
    if store.add_user(&user).await {
        Ok(())
    } else {
        Err(AppError::Storage(format!("user {} was not added", user.username)))
    }
}

fn render(output: &Path, input: Option<&Path>, mut codes: Vec<String>) -> AppResult<()> {
    if let Some(input) = input {
        let contents = std::fs::read_to_string(input)?;
        codes.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    render_codes(&codes, output)?;
    Ok(())
}

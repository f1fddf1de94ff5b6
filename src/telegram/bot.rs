//! Bot initialization and the command set
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Publishing the command list to the Telegram UI

use secrecy::ExposeSecret;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::core::config::Config;
use crate::core::ConfigError;
use crate::telegram::args::tokenize;

/// Bot commands enum with descriptions
///
/// Commands with arguments take the raw text after the command; it is split
/// into tokens by [`Command::args`].
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "приветствие и список команд")]
    Start,
    #[command(description = "запросить КИЗы: /requestkiz <gtin> <кол-во> [...] inn <ИНН>")]
    Requestkiz(String),
    #[command(description = "создать платеж: /pay <сумма> <ID заказа>")]
    Pay(String),
}

impl Command {
    /// Argument tokens following the command
    pub fn args(&self) -> Vec<String> {
        match self {
            Command::Start => Vec::new(),
            Command::Requestkiz(raw) | Command::Pay(raw) => tokenize(raw),
        }
    }
}

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(ConfigError)` - No bot token configured; the process must not start
pub fn create_bot(config: &Config) -> Result<Bot, ConfigError> {
    let token = config.require_bot_token()?;
    let bot = Bot::new(token.expose_secret());

    let bot = match &config.bot_api_url {
        Some(url) => {
            log::info!("Using custom Bot API URL: {}", url);
            bot.set_api_url(url.clone())
        }
        None => bot,
    };

    Ok(bot)
}

/// Sets up bot commands in Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

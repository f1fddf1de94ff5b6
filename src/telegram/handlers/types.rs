//! Handler types and dependencies

use std::sync::Arc;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Message;

use crate::backend::BackendClient;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub backend: Arc<BackendClient>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self { backend }
    }
}

/// What a handler knows about the update it is serving
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    /// Telegram ID of the sender
    pub user_id: i64,
    pub first_name: Option<String>,
    /// Tokens following the command
    pub args: Vec<String>,
}

impl CommandContext {
    /// Builds the context from a Telegram message and already-split arguments
    ///
    /// Messages without a sender (channel posts) fall back to the chat ID.
    pub fn from_message(msg: &Message, args: Vec<String>) -> Self {
        Self {
            user_id: msg
                .from
                .as_ref()
                .and_then(|u| i64::try_from(u.id.0).ok())
                .unwrap_or(msg.chat.id.0),
            first_name: msg.from.as_ref().map(|u| u.first_name.clone()),
            args,
        }
    }
}

/// Where handler replies go.
///
/// Handlers only ever produce text replies; sending them is the sink's job, so
/// the same handler runs against Telegram in production and against a
/// recorder in tests.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Delivers one reply. Delivery failures are logged, not returned.
    async fn reply(&self, text: String);
}

/// Sends replies to a Telegram chat
pub struct ChatReplier {
    bot: Bot,
    chat_id: ChatId,
}

impl ChatReplier {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl ReplySink for ChatReplier {
    async fn reply(&self, text: String) {
        if let Err(e) = self.bot.send_message(self.chat_id, text).await {
            log::error!("Failed to send reply to chat {}: {}", self.chat_id, e);
        }
    }
}

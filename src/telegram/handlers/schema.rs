//! Dispatcher schema

use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::commands::dispatch;
use super::types::{ChatReplier, CommandContext, HandlerDeps, HandlerError};
use crate::telegram::bot::Command;

/// Creates the dispatcher schema for the Telegram bot.
///
/// Registers /start, /requestkiz and /pay. Every other update falls through
/// to teloxide's default handler.
///
/// # Arguments
/// * `deps` - Handler dependencies (backend client)
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter_command::<Command>()
        .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                let ctx = CommandContext::from_message(&msg, cmd.args());
                log::info!("⚡ {:?} matched for user {}", cmd, ctx.user_id);

                let sink = ChatReplier::new(bot, msg.chat.id);
                dispatch(&cmd, &ctx, &deps, &sink).await;
                Ok(())
            }
        })
}

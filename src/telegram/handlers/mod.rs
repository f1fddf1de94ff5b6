//! Telegram bot handler tree
//!
//! Handlers are plain async functions over a [`CommandContext`] and a
//! [`ReplySink`], so tests run them without Telegram.

mod commands;
mod schema;
mod types;

pub use commands::{dispatch, handle_pay_command, handle_request_kiz_command, handle_start_command, start_greeting};
pub use schema::schema;
pub use types::{ChatReplier, CommandContext, HandlerDeps, HandlerError, ReplySink};

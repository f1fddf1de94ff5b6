//! Command handler implementations (/start, /requestkiz, /pay)
//!
//! Each handler catches every failure and turns it into a reply; nothing
//! propagates back into the dispatcher.

use super::types::{CommandContext, HandlerDeps, ReplySink};
use crate::telegram::args::{parse_code_request, parse_payment_request};
use crate::telegram::bot::Command;
use crate::telegram::format::{
    format_args_error, format_backend_error, format_codes_reply, format_payment_failure, format_payment_link,
    PAYMENT_PENDING,
};

/// Routes a parsed command to its handler
pub async fn dispatch(command: &Command, ctx: &CommandContext, deps: &HandlerDeps, sink: &dyn ReplySink) {
    match command {
        Command::Start => handle_start_command(ctx, sink).await,
        Command::Requestkiz(_) => handle_request_kiz_command(ctx, deps, sink).await,
        Command::Pay(_) => handle_pay_command(ctx, deps, sink).await,
    }
}

/// Greeting shown on /start
pub fn start_greeting(first_name: Option<&str>) -> String {
    let hello = match first_name {
        Some(name) if !name.trim().is_empty() => format!("👋 Здравствуйте, {}!", name),
        _ => "👋 Здравствуйте!".to_string(),
    };

    format!(
        "{}\n\n\
         Я бот для работы с Честным ЗНАКом. Доступные команды:\n\
         /requestkiz - запросить КИЗы\n\
         /pay - создать платеж",
        hello
    )
}

/// Handle /start command
pub async fn handle_start_command(ctx: &CommandContext, sink: &dyn ReplySink) {
    log::info!("New /start from user {}", ctx.user_id);
    sink.reply(start_greeting(ctx.first_name.as_deref())).await;
}

/// Handle /requestkiz command
pub async fn handle_request_kiz_command(ctx: &CommandContext, deps: &HandlerDeps, sink: &dyn ReplySink) {
    let request = match parse_code_request(&ctx.args, ctx.user_id) {
        Ok(request) => request,
        Err(e) => {
            log::info!("Rejected /requestkiz arguments from user {}: {:?}", ctx.user_id, e);
            sink.reply(format_args_error(&e)).await;
            return;
        }
    };

    let reply = match deps.backend.request_codes(&request).await {
        Ok(result) => format_codes_reply(&result),
        Err(e) => {
            log::error!(
                "❌ /requestkiz failed for user {} ({}): {}",
                ctx.user_id,
                e.category(),
                e
            );
            format_backend_error(&e)
        }
    };

    sink.reply(reply).await;
}

/// Handle /pay command
///
/// Arguments are validated before anything is sent, so a bad amount never
/// reaches the backend.
pub async fn handle_pay_command(ctx: &CommandContext, deps: &HandlerDeps, sink: &dyn ReplySink) {
    let request = match parse_payment_request(&ctx.args, ctx.user_id) {
        Ok(request) => request,
        Err(e) => {
            log::info!("Rejected /pay arguments from user {}: {:?}", ctx.user_id, e);
            sink.reply(format_args_error(&e)).await;
            return;
        }
    };

    sink.reply(PAYMENT_PENDING.to_string()).await;

    let reply = match deps.backend.create_payment(&request).await {
        Ok(url) => {
            log::info!("✅ Payment link created for user {}, order {}", ctx.user_id, request.order_id);
            format_payment_link(&url)
        }
        Err(e) => {
            log::error!("❌ /pay failed for user {} ({}): {}", ctx.user_id, e.category(), e);
            format_payment_failure(&e)
        }
    };

    sink.reply(reply).await;
}

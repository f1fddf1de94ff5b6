use thiserror::Error;

use crate::backend::BackendError;
use crate::conversion::RenderError;
use crate::core::config::ConfigError;

/// Centralized error type for the binary entry points
///
/// Handler-level failures never reach this type: they are turned into chat
/// replies inside the handlers. `AppError` covers startup and the CLI
/// subcommands, where a failure should stop the process with a message.
///
/// # Example
///
/// ```no_run
/// use kizbot::core::error::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or invalid startup configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Backend client could not be created or called
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Document generation failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage operation reported failure
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

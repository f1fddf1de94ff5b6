//! kizbot - Telegram bot for requesting marking codes (KIZ) and creating payments
//!
//! The bot forwards `/requestkiz` and `/pay` commands to the backend service and
//! relays the answers back to the chat.
//!
//! # Module Structure
//!
//! - `core`: Configuration, errors and logging
//! - `backend`: HTTP client for the backend service
//! - `telegram`: Commands, argument parsing, reply formatting and handlers
//! - `storage`: User records in PostgreSQL
//! - `conversion`: PDF rendering of code lists

pub mod backend;
pub mod cli;
pub mod conversion;
pub mod core;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use backend::{BackendClient, BackendError, BackendResult};
pub use core::{config, AppError, Config};
pub use storage::{UserRecord, UserStore};
pub use telegram::{schema, HandlerDeps};

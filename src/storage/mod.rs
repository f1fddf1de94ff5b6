//! Relational store access

pub mod users;

// Re-exports for convenience
pub use users::{UserRecord, UserStore};

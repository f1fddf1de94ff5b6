//! Backend service integration: code issuance and payment creation

pub mod client;
pub mod error;
pub mod types;

pub use client::BackendClient;
pub use error::BackendError;
pub use types::{BackendPayload, BackendResult, BackendStatus, CodeRequest, CodeRequestItem, PaymentRequest};

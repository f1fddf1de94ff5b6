//! Request and response types exchanged with the backend service

use serde::{Deserialize, Serialize};

/// One GTIN with the number of codes requested for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeRequestItem {
    pub gtin: String,
    pub count: u32,
}

/// Code issuance request built from `/requestkiz` arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRequest {
    pub items: Vec<CodeRequestItem>,
    /// Organization tax identifier (INN)
    pub inn: String,
    /// Telegram ID of the user who asked
    pub requester_id: i64,
}

impl CodeRequest {
    pub(crate) fn body(&self) -> CodeRequestBody<'_> {
        CodeRequestBody {
            gtin_data: &self.items,
            inn: &self.inn,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct CodeRequestBody<'a> {
    gtin_data: &'a [CodeRequestItem],
    inn: &'a str,
}

/// Payment creation request built from `/pay` arguments
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    /// Sent as a JSON number, which is what the payment endpoint expects
    pub amount: f64,
    pub order_id: String,
    pub requester_id: i64,
}

impl PaymentRequest {
    pub(crate) fn body(&self) -> PaymentRequestBody<'_> {
        PaymentRequestBody {
            amount: self.amount,
            order_id: &self.order_id,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct PaymentRequestBody<'a> {
    amount: f64,
    order_id: &'a str,
}

/// Outcome reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    Success,
    Failure,
}

/// Structured data that may accompany a backend answer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendPayload {
    /// Issued codes
    pub codes: Vec<String>,
    /// Files the backend stored the codes in
    pub file_paths: Vec<String>,
    pub payment_url: Option<String>,
}

/// Decoded backend answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendResult {
    pub status: BackendStatus,
    pub message: Option<String>,
    pub payload: BackendPayload,
}

/// Wire shape of every backend response. Every field is optional; `status` is
/// kept untyped so an unexpected value degrades to a failure instead of a
/// decode error.
#[derive(Deserialize)]
struct RawResponse {
    #[serde(default)]
    status: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    kizs: Option<Vec<String>>,
    #[serde(default)]
    file_paths: Option<Vec<String>>,
    #[serde(default)]
    payment_url: Option<String>,
}

impl BackendResult {
    /// Decodes a response body
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let raw: RawResponse = serde_json::from_str(body)?;
        Ok(Self::from_raw(raw))
    }

    pub fn is_success(&self) -> bool {
        self.status == BackendStatus::Success
    }

    fn from_raw(raw: RawResponse) -> Self {
        let status = match raw.status {
            Some(serde_json::Value::String(ref s)) if s == "success" => BackendStatus::Success,
            _ => BackendStatus::Failure,
        };

        Self {
            status,
            message: raw.message,
            payload: BackendPayload {
                codes: raw.kizs.unwrap_or_default(),
                file_paths: raw.file_paths.unwrap_or_default(),
                payment_url: raw.payment_url,
            },
        }
    }
}

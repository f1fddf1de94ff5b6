//! HTTP client for the backend service
//!
//! One attempt per call, no retries. Every call sends the requester's Telegram
//! ID as the `telegram_id` query parameter and a JSON body.

use serde::Serialize;
use std::time::Duration;

use super::error::BackendError;
use super::types::{BackendResult, BackendStatus, CodeRequest, PaymentRequest};
use crate::core::config::{backend, BackendConfig};

/// Client for the code issuance and payment endpoints
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    config: BackendConfig,
}

impl BackendClient {
    /// Creates a client for the backend described by `config`
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("kizbot/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Requests codes for every GTIN in `request`.
    ///
    /// A decoded answer is returned as-is, including business failures
    /// (`BackendStatus::Failure`); only transport and decode problems are errors.
    pub async fn request_codes(&self, request: &CodeRequest) -> Result<BackendResult, BackendError> {
        log::info!(
            "📦 Requesting codes: telegram_id={}, gtins={}, inn={}",
            request.requester_id,
            request.items.len(),
            request.inn
        );

        let body = self
            .post_json(
                backend::KIZS_ENDPOINT,
                request.requester_id,
                &request.body(),
                self.config.codes_timeout,
            )
            .await?;

        let result = BackendResult::from_json(&body).map_err(|e| {
            log::error!("Failed to decode code request response: {}", e);
            BackendError::Decode(e)
        })?;

        match result.status {
            BackendStatus::Success => log::info!(
                "✅ Codes issued for telegram_id={}: {} code(s)",
                request.requester_id,
                result.payload.codes.len()
            ),
            BackendStatus::Failure => log::warn!(
                "Backend refused code request for telegram_id={}: {:?}",
                request.requester_id,
                result.message
            ),
        }

        Ok(result)
    }

    /// Creates a payment and returns the URL the user should pay at.
    ///
    /// Anything other than `"status": "success"` with a `payment_url` is
    /// `BackendError::Rejected`, carrying the backend's message when it sent one.
    pub async fn create_payment(&self, request: &PaymentRequest) -> Result<String, BackendError> {
        log::info!(
            "💳 Creating payment: telegram_id={}, order_id={}, amount={}",
            request.requester_id,
            request.order_id,
            request.amount
        );

        let body = self
            .post_json(
                backend::PAYMENTS_ENDPOINT,
                request.requester_id,
                &request.body(),
                self.config.payment_timeout,
            )
            .await?;

        let result = BackendResult::from_json(&body).map_err(|e| {
            log::error!("Failed to decode payment response: {}", e);
            BackendError::Decode(e)
        })?;

        match (result.status, result.payload.payment_url) {
            (BackendStatus::Success, Some(url)) => Ok(url),
            (BackendStatus::Success, None) => {
                log::error!("Payment service reported success without payment_url");
                Err(BackendError::Rejected(result.message))
            }
            (BackendStatus::Failure, _) => {
                log::error!(
                    "Payment service error for order {}: {}",
                    request.order_id,
                    result.message.as_deref().unwrap_or("no message")
                );
                Err(BackendError::Rejected(result.message))
            }
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Sends one POST and returns the body of a 2xx response
    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        requester_id: i64,
        body: &B,
        timeout: Duration,
    ) -> Result<String, BackendError> {
        let url = self.endpoint(path);

        let response = self
            .http
            .post(url.as_str())
            .query(&[("telegram_id", requester_id)])
            .json(body)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                log::error!("Request to {} failed: {}", url, e);
                BackendError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Request to {} returned status {}", url, status);
            return Err(BackendError::Status(status));
        }

        response.text().await.map_err(|e| {
            log::error!("Failed to read response body from {}: {}", url, e);
            BackendError::Transport(e)
        })
    }
}

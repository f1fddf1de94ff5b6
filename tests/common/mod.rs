//! Common test utilities
//!
//! This module is shared across all integration tests

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use url::Url;
use wiremock::MockServer;

use kizbot::backend::BackendClient;
use kizbot::core::BackendConfig;
use kizbot::telegram::{CommandContext, HandlerDeps, ReplySink};

pub const TEST_USER_ID: i64 = 123456789;

/// Collects replies instead of sending them
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingSink {
    replies: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.replies.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ReplySink for RecordingSink {
    async fn reply(&self, text: String) {
        self.replies.lock().unwrap().push(text);
    }
}

/// Backend config pointing at `server` with the default timeouts
pub fn backend_config(server: &MockServer) -> BackendConfig {
    BackendConfig::new(Url::parse(&server.uri()).unwrap())
}

/// Client for `server` with both timeouts set to `timeout`
#[allow(dead_code)]
pub fn backend_with_timeout(server: &MockServer, timeout: Duration) -> BackendClient {
    let mut config = backend_config(server);
    config.codes_timeout = timeout;
    config.payment_timeout = timeout;
    BackendClient::new(config).unwrap()
}

#[allow(dead_code)]
pub fn deps_for(server: &MockServer) -> HandlerDeps {
    HandlerDeps::new(Arc::new(BackendClient::new(backend_config(server)).unwrap()))
}

#[allow(dead_code)]
pub fn deps_with_timeout(server: &MockServer, timeout: Duration) -> HandlerDeps {
    HandlerDeps::new(Arc::new(backend_with_timeout(server, timeout)))
}

/// Context for a command sent by the test user, `args` split on whitespace
#[allow(dead_code)]
pub fn ctx(args: &str) -> CommandContext {
    CommandContext {
        user_id: TEST_USER_ID,
        first_name: Some("Анна".to_string()),
        args: args.split_whitespace().map(str::to_string).collect(),
    }
}

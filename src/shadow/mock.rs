//! In-memory shadow client for deterministic handler tests.
//!
//! Records every call and answers reads from a canned document without
//! making any network calls.

use async_trait::async_trait;
use bytes::Bytes;
use riego_shared::Qos;
use std::sync::Mutex;

use super::traits::{ShadowClient, ShadowError};

/// A call observed by the mock
#[derive(Debug, Clone, PartialEq)]
pub enum ShadowCall {
    Update {
        thing_name: String,
        payload: serde_json::Value,
    },
    Get {
        thing_name: String,
    },
    Publish {
        topic: String,
        qos: Qos,
        payload: serde_json::Value,
    },
}

/// Which operation the mock should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Update,
    Get,
    Publish,
}

pub struct MockShadowClient {
    document: Bytes,
    failing: Option<Operation>,
    calls: Mutex<Vec<ShadowCall>>,
}

impl Default for MockShadowClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockShadowClient {
    pub fn new() -> Self {
        Self {
            document: Bytes::from_static(br#"{"state":{"reported":{}}}"#),
            failing: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Serve this document from `get_thing_shadow`.
    pub fn with_document(mut self, document: serde_json::Value) -> Self {
        self.document = Bytes::from(document.to_string());
        self
    }

    /// Serve raw bytes from `get_thing_shadow`.
    pub fn with_raw_document(mut self, document: &'static [u8]) -> Self {
        self.document = Bytes::from_static(document);
        self
    }

    /// Fail every call to `operation` with a simulated outage.
    pub fn failing(mut self, operation: Operation) -> Self {
        self.failing = Some(operation);
        self
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<ShadowCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ShadowCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn outcome(&self, operation: Operation) -> Result<(), ShadowError> {
        if self.failing == Some(operation) {
            return Err(ShadowError::Status {
                operation: "mock",
                status: 503,
                body: "simulated network failure".into(),
            });
        }
        Ok(())
    }
}

fn parse(payload: &Bytes) -> serde_json::Value {
    serde_json::from_slice(payload).unwrap_or(serde_json::Value::Null)
}

#[async_trait]
impl ShadowClient for MockShadowClient {
    async fn update_thing_shadow(
        &self,
        thing_name: &str,
        payload: Bytes,
    ) -> Result<(), ShadowError> {
        self.record(ShadowCall::Update {
            thing_name: thing_name.to_string(),
            payload: parse(&payload),
        });
        self.outcome(Operation::Update)
    }

    async fn get_thing_shadow(&self, thing_name: &str) -> Result<Bytes, ShadowError> {
        self.record(ShadowCall::Get {
            thing_name: thing_name.to_string(),
        });
        self.outcome(Operation::Get)?;
        Ok(self.document.clone())
    }

    async fn publish(&self, topic: &str, qos: Qos, payload: Bytes) -> Result<(), ShadowError> {
        self.record(ShadowCall::Publish {
            topic: topic.to_string(),
            qos,
            payload: parse(&payload),
        });
        self.outcome(Operation::Publish)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_serves_empty_reported_state() {
        let mock = MockShadowClient::default();
        let document = mock.get_thing_shadow("proyecto_03").await.unwrap();

        assert_eq!(document.as_ref(), br#"{"state":{"reported":{}}}"#);
        assert_eq!(
            mock.calls(),
            vec![ShadowCall::Get {
                thing_name: "proyecto_03".into()
            }]
        );
    }
}

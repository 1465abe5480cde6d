//! Shadow client abstraction for pluggable device data backends

use async_trait::async_trait;
use bytes::Bytes;
use riego_shared::codec::CodecError;
use riego_shared::Qos;
use thiserror::Error;

/// Failures of a remote shadow or topic call
#[derive(Error, Debug)]
pub enum ShadowError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{operation} returned status {status}: {body}")]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("Invalid endpoint: {0}")]
    Endpoint(String),

    #[error("Failed to read client identity: {0}")]
    Identity(#[from] std::io::Error),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Remote operations on a device shadow and its topics
#[async_trait]
pub trait ShadowClient: Send + Sync {
    /// Merge a serialized update document into the thing's shadow
    async fn update_thing_shadow(&self, thing_name: &str, payload: Bytes)
        -> Result<(), ShadowError>;

    /// Read the thing's current shadow document
    async fn get_thing_shadow(&self, thing_name: &str) -> Result<Bytes, ShadowError>;

    /// Publish a message to a topic, fire-and-forget
    async fn publish(&self, topic: &str, qos: Qos, payload: Bytes) -> Result<(), ShadowError>;

    /// Human-readable name for this backend
    fn name(&self) -> &'static str;
}

//! HTTPS client for the device data endpoint (shadow and topic REST APIs)

use crate::config::ClientIdentity;
use crate::shadow::traits::{ShadowClient, ShadowError};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header, Client, Identity, Response, Url};
use riego_shared::Qos;
use tracing::debug;

/// Shadow client talking to the managed device data endpoint
pub struct IotDataClient {
    client: Client,
    endpoint: Url,
}

impl IotDataClient {
    /// Create a client for `endpoint`, optionally authenticating with a client certificate
    pub fn new(endpoint: &str, identity: Option<&ClientIdentity>) -> Result<Self, ShadowError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ShadowError::Endpoint(format!("{}: {}", endpoint, e)))?;
        if endpoint.cannot_be_a_base() {
            return Err(ShadowError::Endpoint(endpoint.to_string()));
        }

        let mut builder = Client::builder();
        if let Some(id) = identity {
            let mut pem = std::fs::read(&id.cert_path)?;
            pem.extend(std::fs::read(&id.key_path)?);
            builder = builder.identity(Identity::from_pem(&pem)?);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    /// Build an endpoint URL from path segments, percent-encoding each one
    fn url(&self, segments: &[&str]) -> Result<Url, ShadowError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| ShadowError::Endpoint(self.endpoint.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn shadow_url(&self, thing_name: &str) -> Result<Url, ShadowError> {
        self.url(&["things", thing_name, "shadow"])
    }

    fn topic_url(&self, topic: &str) -> Result<Url, ShadowError> {
        self.url(&["topics", topic])
    }
}

/// Turn a non-2xx response into a `ShadowError::Status`
async fn check(operation: &'static str, resp: Response) -> Result<Response, ShadowError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(ShadowError::Status {
        operation,
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl ShadowClient for IotDataClient {
    async fn update_thing_shadow(
        &self,
        thing_name: &str,
        payload: Bytes,
    ) -> Result<(), ShadowError> {
        let url = self.shadow_url(thing_name)?;
        debug!(%url, bytes = payload.len(), "updating thing shadow");

        let resp = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;
        check("UpdateThingShadow", resp).await?;
        Ok(())
    }

    async fn get_thing_shadow(&self, thing_name: &str) -> Result<Bytes, ShadowError> {
        let url = self.shadow_url(thing_name)?;
        debug!(%url, "reading thing shadow");

        let resp = self.client.get(url).send().await?;
        let resp = check("GetThingShadow", resp).await?;
        Ok(resp.bytes().await?)
    }

    async fn publish(&self, topic: &str, qos: Qos, payload: Bytes) -> Result<(), ShadowError> {
        let url = self.topic_url(topic)?;
        debug!(%url, qos = qos.level(), "publishing");

        let resp = self
            .client
            .post(url)
            .query(&[("qos", qos.level())])
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;
        check("Publish", resp).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "iot-data"
    }
}

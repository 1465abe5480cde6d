//! Skill configuration, fixed at startup

use riego_shared::device;
use std::path::PathBuf;
use std::time::Duration;

/// Mutual-TLS identity used to authenticate against the device data endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct ClientIdentity {
    /// PEM certificate chain
    pub cert_path: PathBuf,
    /// PEM private key
    pub key_path: PathBuf,
}

/// Configuration shared read-only by every invocation
#[derive(Debug, Clone)]
pub struct SkillConfig {
    /// Device data endpoint (shadow + topic APIs)
    pub iot_endpoint: String,
    /// Thing name of the irrigation controller
    pub thing_name: String,
    /// Topic used to ask the device for a fresh reading
    pub sensor_topic: String,
    /// Wait between the reading request and the shadow read
    pub sensor_wait: Duration,
    /// Readings below this are spoken as humid
    pub humid_threshold: f64,
    /// Address the skill endpoint listens on
    pub listen_addr: String,
    /// Client certificate for the data endpoint, if any
    pub identity: Option<ClientIdentity>,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            iot_endpoint: device::IOT_ENDPOINT.into(),
            thing_name: device::THING_NAME.into(),
            sensor_topic: device::SENSOR_REQUEST_TOPIC.into(),
            sensor_wait: device::SENSOR_WAIT,
            humid_threshold: device::HUMID_THRESHOLD,
            listen_addr: "0.0.0.0:8080".into(),
            identity: None,
        }
    }
}

impl SkillConfig {
    /// Defaults with deployment overrides read from the environment
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (`RIEGO_*` variables)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("RIEGO_IOT_ENDPOINT") {
            self.iot_endpoint = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = lookup("RIEGO_THING_NAME") {
            self.thing_name = v;
        }
        if let Some(v) = lookup("RIEGO_LISTEN_ADDR") {
            self.listen_addr = v;
        }
        // Both halves of the identity are required
        if let (Some(cert), Some(key)) = (lookup("RIEGO_CLIENT_CERT"), lookup("RIEGO_CLIENT_KEY")) {
            self.identity = Some(ClientIdentity {
                cert_path: cert.into(),
                key_path: key.into(),
            });
        }
        self
    }
}

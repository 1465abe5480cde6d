//! Riego Shared Device Types
//!
//! This crate provides the shadow document types and codec shared by the
//! skill backend when talking to the irrigation device through its shadow.

pub mod codec;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Fixed parameters of the irrigation device and its shadow
pub mod device {
    use std::time::Duration;

    /// Thing name of the irrigation controller in the device registry
    pub const THING_NAME: &str = "proyecto_03";

    /// Device data endpoint that serves the shadow and topic APIs
    pub const IOT_ENDPOINT: &str = "https://aleas6fbrinez-ats.iot.us-east-1.amazonaws.com";

    /// Topic the device listens on for on-demand moisture readings
    pub const SENSOR_REQUEST_TOPIC: &str = "sistema_riego/solicitud_humedad";

    /// Body of the on-demand reading request
    pub const SENSOR_REQUEST_MESSAGE: &str = "SOLICITAR_HUMEDAD";

    /// Time the device is given to publish a fresh reading before we read back
    pub const SENSOR_WAIT: Duration = Duration::from_secs(2);

    /// Raw sensor readings below this value mean the soil is humid
    pub const HUMID_THRESHOLD: f64 = 1300.0;

    /// Maximum size of a shadow update document accepted by the service
    pub const MAX_DOCUMENT_SIZE: usize = 8 * 1024;
}

/// Commanded state of the pump relay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PumpState {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

impl std::fmt::Display for PumpState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PumpState::On => write!(f, "ON"),
            PumpState::Off => write!(f, "OFF"),
        }
    }
}

/// Delivery guarantee requested when publishing to a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qos {
    AtMostOnce,
    AtLeastOnce,
}

impl Qos {
    /// Numeric level as used on the wire
    pub fn level(self) -> u8 {
        match self {
            Qos::AtMostOnce => 0,
            Qos::AtLeastOnce => 1,
        }
    }
}

/// `{"state": {"desired": {...}}}` update document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowUpdate {
    pub state: DesiredSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesiredSection {
    pub desired: DesiredState,
}

/// Desired values written by the skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesiredState {
    pub bomba: PumpState,
}

impl ShadowUpdate {
    /// Create an update that commands the pump on or off
    pub fn pump(state: PumpState) -> Self {
        Self {
            state: DesiredSection {
                desired: DesiredState { bomba: state },
            },
        }
    }
}

/// Shadow document as returned by a read.
///
/// Only the reported section is modeled; `desired`, `delta`, `metadata` and
/// `version` are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShadowDocument {
    pub state: ReportedSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportedSection {
    pub reported: ReportedState,
}

/// Values last reported by the device
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportedState {
    /// Raw soil moisture reading; `null` is treated as absent
    #[serde(default)]
    pub humedad: Option<Number>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Message asking the device to refresh its reported reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRequest {
    pub message: String,
}

impl SensorRequest {
    /// The on-demand moisture reading request
    pub fn humidity() -> Self {
        Self {
            message: device::SENSOR_REQUEST_MESSAGE.into(),
        }
    }
}

/// Soil condition derived from a raw moisture reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilCondition {
    Humid,
    Dry,
}

impl SoilCondition {
    /// Classify a raw reading against the humid threshold
    pub fn classify(reading: f64, threshold: f64) -> Self {
        if reading < threshold {
            SoilCondition::Humid
        } else {
            SoilCondition::Dry
        }
    }

    /// Spoken label
    pub fn label(self) -> &'static str {
        match self {
            SoilCondition::Humid => "húmedo",
            SoilCondition::Dry => "seco",
        }
    }
}

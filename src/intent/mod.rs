//! Intent routing for the skill endpoint
//!
//! This module handles:
//! - Classifying inbound requests into a route
//! - Dispatching to the matching intent handler
//! - Converting handler failures into the catch-all apology
//! - Formatting the platform response

pub mod handlers;
mod router;

pub use router::{IntentRouter, SkillError};
#[cfg(test)]
pub use router::APOLOGY;

/// Voice commands the skill understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    ActivatePump,
    DeactivatePump,
    QueryMoisture,
}

impl IntentKind {
    /// Look up an intent by its interaction-model name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ActivarRegadorIntent" => Some(IntentKind::ActivatePump),
            "DesactivarRegadorIntent" => Some(IntentKind::DeactivatePump),
            "ConsultarHumedadIntent" => Some(IntentKind::QueryMoisture),
            _ => None,
        }
    }

    /// Interaction-model name
    pub fn name(self) -> &'static str {
        match self {
            IntentKind::ActivatePump => "ActivarRegadorIntent",
            IntentKind::DeactivatePump => "DesactivarRegadorIntent",
            IntentKind::QueryMoisture => "ConsultarHumedadIntent",
        }
    }
}

//! Voice platform request/response envelopes

use serde::{Deserialize, Serialize};

/// Version string sent on every response
pub const RESPONSE_VERSION: &str = "1.0";

/// Inbound skill request
///
/// Only the fields the skill routes on are modeled; `version`, `session`,
/// `context`, locale and slots are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    pub request: Request,
}

/// Request body, tagged by `type`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    LaunchRequest(LaunchRequest),
    IntentRequest(IntentRequest),
    SessionEndedRequest(SessionEndedRequest),
    /// Any request type this skill does not model
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    #[serde(default)]
    pub request_id: String,
}

/// Intent request; a missing intent or name is routed to the catch-all
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub intent: Option<Intent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedRequest {
    #[serde(default)]
    pub request_id: String,
}

/// A classified voice command
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Intent {
    #[serde(default)]
    pub name: Option<String>,
}

impl IntentRequest {
    /// Name of the intent, if the request carries one
    pub fn intent_name(&self) -> Option<&str> {
        self.intent.as_ref().and_then(|i| i.name.as_deref())
    }
}

impl Request {
    /// Platform name of the request type
    pub fn type_name(&self) -> &'static str {
        match self {
            Request::LaunchRequest(_) => "LaunchRequest",
            Request::IntentRequest(_) => "IntentRequest",
            Request::SessionEndedRequest(_) => "SessionEndedRequest",
            Request::Unknown => "Unknown",
        }
    }

    /// Platform request identifier, empty if not supplied
    pub fn request_id(&self) -> &str {
        match self {
            Request::LaunchRequest(r) => &r.request_id,
            Request::IntentRequest(r) => &r.request_id,
            Request::SessionEndedRequest(r) => &r.request_id,
            Request::Unknown => "",
        }
    }
}

/// Outbound skill response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

/// Speech the device reads out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl OutputSpeech {
    /// Wrap plain speech in an SSML document
    pub fn ssml(speech: &str) -> Self {
        OutputSpeech::Ssml {
            ssml: format!("<speak>{}</speak>", speech),
        }
    }

    /// The spoken text without SSML wrapping
    #[cfg(test)]
    pub fn text(&self) -> &str {
        match self {
            OutputSpeech::Ssml { ssml } => ssml
                .strip_prefix("<speak>")
                .and_then(|s| s.strip_suffix("</speak>"))
                .unwrap_or(ssml.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_intent_request() {
        let raw = r#"{
            "version": "1.0",
            "session": {"new": true, "sessionId": "amzn1.echo-api.session.1"},
            "context": {"System": {}},
            "request": {
                "type": "IntentRequest",
                "requestId": "amzn1.echo-api.request.1",
                "timestamp": "2024-05-01T12:00:00Z",
                "locale": "es-MX",
                "intent": {"name": "ConsultarHumedadIntent", "confirmationStatus": "NONE"}
            }
        }"#;

        let envelope: RequestEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.request.type_name(), "IntentRequest");
        assert_eq!(envelope.request.request_id(), "amzn1.echo-api.request.1");
        match envelope.request {
            Request::IntentRequest(r) => assert_eq!(r.intent_name(), Some("ConsultarHumedadIntent")),
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_parse_intent_request_without_name() {
        for raw in [
            r#"{"request": {"type": "IntentRequest", "requestId": "r"}}"#,
            r#"{"request": {"type": "IntentRequest", "requestId": "r", "intent": null}}"#,
            r#"{"request": {"type": "IntentRequest", "requestId": "r", "intent": {}}}"#,
            r#"{"request": {"type": "IntentRequest", "requestId": "r", "intent": {"name": null}}}"#,
        ] {
            let envelope: RequestEnvelope = serde_json::from_str(raw).unwrap();
            match envelope.request {
                Request::IntentRequest(r) => assert_eq!(r.intent_name(), None),
                other => panic!("unexpected request {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_launch_and_session_ended() {
        let launch: RequestEnvelope =
            serde_json::from_str(r#"{"request": {"type": "LaunchRequest", "requestId": "r1"}}"#)
                .unwrap();
        assert!(matches!(launch.request, Request::LaunchRequest(_)));

        let ended: RequestEnvelope = serde_json::from_str(
            r#"{"request": {"type": "SessionEndedRequest", "requestId": "r3", "reason": "USER_INITIATED"}}"#,
        )
        .unwrap();
        assert!(matches!(ended.request, Request::SessionEndedRequest(_)));
        assert_eq!(ended.request.request_id(), "r3");
    }

    #[test]
    fn test_unknown_request_type() {
        let envelope: RequestEnvelope = serde_json::from_str(
            r#"{"request": {"type": "CanFulfillIntentRequest", "requestId": "r2"}}"#,
        )
        .unwrap();
        assert!(matches!(envelope.request, Request::Unknown));
        assert_eq!(envelope.request.request_id(), "");
    }

    #[test]
    fn test_response_serialization() {
        let envelope = ResponseEnvelope {
            version: RESPONSE_VERSION.into(),
            response: ResponseBody {
                output_speech: Some(OutputSpeech::ssml("Hola")),
                ..Default::default()
            },
        };

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "version": "1.0",
                "response": {
                    "outputSpeech": {"type": "SSML", "ssml": "<speak>Hola</speak>"}
                }
            })
        );
    }

    #[test]
    fn test_output_speech_text() {
        assert_eq!(OutputSpeech::ssml("El suelo está seco.").text(), "El suelo está seco.");
    }
}

//! Response formatter - wraps handler speech into the platform envelope

use crate::protocol::{OutputSpeech, Reprompt, ResponseBody, ResponseEnvelope, RESPONSE_VERSION};

/// Speech produced by a handler
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub speech: String,
    /// Repeated on silence; keeps the session open
    pub reprompt: Option<String>,
}

impl Reply {
    /// Speak and end the session
    pub fn speak(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            reprompt: None,
        }
    }

    /// Speak and wait for a follow-up, repeating the same prompt on silence
    pub fn ask(speech: impl Into<String>) -> Self {
        let speech = speech.into();
        Self {
            reprompt: Some(speech.clone()),
            speech,
        }
    }

    /// Build the response envelope
    pub fn into_response(self) -> ResponseEnvelope {
        let listening = self.reprompt.is_some();

        ResponseEnvelope {
            version: RESPONSE_VERSION.into(),
            response: ResponseBody {
                output_speech: Some(OutputSpeech::ssml(&self.speech)),
                reprompt: self.reprompt.map(|r| Reprompt {
                    output_speech: OutputSpeech::ssml(&r),
                }),
                // Omitted when not listening; the platform then closes the session
                should_end_session: listening.then_some(false),
            },
        }
    }
}

impl From<Reply> for ResponseEnvelope {
    fn from(reply: Reply) -> Self {
        reply.into_response()
    }
}

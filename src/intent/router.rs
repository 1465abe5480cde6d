//! Intent router - classifies and dispatches inbound requests

use super::handlers::{self, HandlerContext};
use super::IntentKind;
use crate::protocol::{Request, RequestEnvelope, ResponseEnvelope};
use crate::response::Reply;
use std::fmt;
use thiserror::Error;
use tracing::{debug, error};

pub const APOLOGY: &str = "Lo siento, hubo un problema. Por favor intenta nuevamente.";

/// Failures that escape a handler and reach the catch-all
#[derive(Error, Debug)]
pub enum SkillError {
    #[error("No handler for {0}")]
    Unhandled(String),
}

/// Handler selected for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Launch,
    Intent(IntentKind),
}

impl Route {
    /// Select the single route matching a request, if any
    pub fn for_request(request: &Request) -> Result<Self, SkillError> {
        match request {
            Request::LaunchRequest(_) => Ok(Route::Launch),
            Request::IntentRequest(r) => {
                let name = r.intent_name().ok_or_else(|| {
                    SkillError::Unhandled("IntentRequest without intent name".to_string())
                })?;
                IntentKind::from_name(name)
                    .map(Route::Intent)
                    .ok_or_else(|| SkillError::Unhandled(format!("intent {}", name)))
            }
            other => Err(SkillError::Unhandled(other.type_name().to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Launch => f.write_str("LaunchRequest"),
            Route::Intent(kind) => f.write_str(kind.name()),
        }
    }
}

/// Routes requests to intent handlers and formats their replies
pub struct IntentRouter {
    ctx: HandlerContext,
}

impl IntentRouter {
    pub fn new(ctx: HandlerContext) -> Self {
        Self { ctx }
    }

    /// Handle one request and return the platform response
    ///
    /// Never fails: any error becomes the apology.
    pub async fn dispatch(&self, envelope: &RequestEnvelope) -> ResponseEnvelope {
        let request = &envelope.request;
        debug!(
            "Dispatching request: id={} type={}",
            request.request_id(),
            request.type_name()
        );

        let result = match Route::for_request(request) {
            Ok(route) => self.invoke(route).await,
            Err(e) => Err(e),
        };

        catch_all(result).into_response()
    }

    /// Run the handler for a route
    pub async fn invoke(&self, route: Route) -> Result<Reply, SkillError> {
        debug!("  Route: {}", route);

        match route {
            Route::Launch => handlers::handle_launch(&self.ctx).await,
            Route::Intent(IntentKind::ActivatePump) => {
                handlers::handle_activate_pump(&self.ctx).await
            }
            Route::Intent(IntentKind::DeactivatePump) => {
                handlers::handle_deactivate_pump(&self.ctx).await
            }
            Route::Intent(IntentKind::QueryMoisture) => {
                handlers::handle_query_moisture(&self.ctx).await
            }
        }
    }
}

/// Terminal error handler: logs and apologizes, once
pub fn catch_all(result: Result<Reply, SkillError>) -> Reply {
    match result {
        Ok(reply) => reply,
        Err(e) => {
            error!("Error handled: {}", e);
            Reply::speak(APOLOGY)
        }
    }
}

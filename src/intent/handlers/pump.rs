//! Pump command handlers (activate, deactivate)

use super::HandlerContext;
use crate::intent::SkillError;
use crate::response::Reply;
use crate::shadow::ShadowError;
use riego_shared::{codec, PumpState, ShadowUpdate};
use tracing::{error, info};

pub const ACTIVATED: &str = "El regador ha sido activado.";
pub const ACTIVATE_FAILED: &str =
    "Hubo un problema al activar el regador, por favor intenta nuevamente.";
pub const DEACTIVATED: &str = "El regador ha sido desactivado.";
pub const DEACTIVATE_FAILED: &str =
    "Hubo un problema al desactivar el regador, por favor intenta nuevamente.";

/// Handle ActivarRegadorIntent
pub async fn handle_activate_pump(ctx: &HandlerContext) -> Result<Reply, SkillError> {
    set_pump(ctx, PumpState::On, ACTIVATED, ACTIVATE_FAILED).await
}

/// Handle DesactivarRegadorIntent
pub async fn handle_deactivate_pump(ctx: &HandlerContext) -> Result<Reply, SkillError> {
    set_pump(ctx, PumpState::Off, DEACTIVATED, DEACTIVATE_FAILED).await
}

/// Speak the outcome of a pump write.
///
/// Failures are spoken, not propagated; no retry.
async fn set_pump(
    ctx: &HandlerContext,
    state: PumpState,
    done: &str,
    failed: &str,
) -> Result<Reply, SkillError> {
    match write_pump(ctx, state).await {
        Ok(()) => Ok(Reply::speak(done)),
        Err(e) => {
            error!("[PUMP] Failed to set bomba={}: {}", state, e);
            Ok(Reply::speak(failed))
        }
    }
}

/// Encode and send the desired pump state
async fn write_pump(ctx: &HandlerContext, state: PumpState) -> Result<(), ShadowError> {
    let payload = codec::encode_update(&ShadowUpdate::pump(state))?;
    let thing_name = &ctx.config.thing_name;

    info!("[PUMP] Setting desired bomba={} on {}", state, thing_name);
    ctx.shadow.update_thing_shadow(thing_name, payload).await
}

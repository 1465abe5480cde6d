//! Launch request handler

use super::HandlerContext;
use crate::intent::SkillError;
use crate::response::Reply;

pub const WELCOME: &str = "Bienvenido al sistema de riego. Puedes decir \"activar el regador\", \"desactivar el regador\", o \"consultar humedad\".";

/// Handle LaunchRequest
///
/// No device call; greets and waits for one of the three commands.
pub async fn handle_launch(_ctx: &HandlerContext) -> Result<Reply, SkillError> {
    Ok(Reply::ask(WELCOME))
}

//! Soil moisture query handler

use super::HandlerContext;
use crate::intent::SkillError;
use crate::response::Reply;
use crate::shadow::ShadowError;
use riego_shared::{codec, Qos, SensorRequest, SoilCondition};
use serde_json::Number;
use tracing::{debug, error, info};

pub const UNAVAILABLE: &str = "No puedo obtener la humedad en este momento.";
pub const QUERY_FAILED: &str =
    "Hubo un problema al obtener la humedad. Por favor, intenta nuevamente.";

/// Handle ConsultarHumedadIntent
///
/// Asks the device for a fresh reading, gives it a fixed window to report,
/// then reads whatever the shadow holds. Nothing confirms the device answered
/// within the window, so a slow device yields its previous reading.
pub async fn handle_query_moisture(ctx: &HandlerContext) -> Result<Reply, SkillError> {
    match read_humidity(ctx).await {
        Ok(Some(reading)) => Ok(Reply::speak(describe(&reading, ctx.config.humid_threshold))),
        Ok(None) => {
            info!("[MOISTURE] Shadow has no reported humedad");
            Ok(Reply::speak(UNAVAILABLE))
        }
        Err(e) => {
            error!("[MOISTURE] Failed to read humidity: {}", e);
            Ok(Reply::speak(QUERY_FAILED))
        }
    }
}

/// Publish the reading request, wait, then read the reported value
async fn read_humidity(ctx: &HandlerContext) -> Result<Option<Number>, ShadowError> {
    let config = &ctx.config;

    let request = codec::encode_sensor_request(&SensorRequest::humidity())?;
    ctx.shadow
        .publish(&config.sensor_topic, Qos::AtLeastOnce, request)
        .await?;
    debug!(
        "[MOISTURE] Reading requested on {}, waiting {:?}",
        config.sensor_topic, config.sensor_wait
    );

    tokio::time::sleep(config.sensor_wait).await;

    let document = ctx.shadow.get_thing_shadow(&config.thing_name).await?;
    Ok(codec::reported_humidity(&document)?)
}

/// Speech for a reading, quoting the value as reported
fn describe(reading: &Number, threshold: f64) -> String {
    let value = reading.as_f64().unwrap_or(f64::NAN);
    // NaN never compares below the threshold, so it reads as dry
    let condition = SoilCondition::classify(value, threshold);
    format!(
        "El nivel de humedad es {}. El suelo está {}.",
        reading,
        condition.label()
    )
}

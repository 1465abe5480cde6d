//! Intent handlers for the supported voice commands

pub mod launch;
pub mod moisture;
pub mod pump;

pub use launch::handle_launch;
pub use moisture::handle_query_moisture;
pub use pump::{handle_activate_pump, handle_deactivate_pump};

use crate::config::SkillConfig;
use crate::shadow::ShadowClient;
use std::sync::Arc;

/// Context passed to intent handlers
///
/// Read-only; one instance is shared by all concurrent invocations.
#[derive(Clone)]
pub struct HandlerContext {
    pub shadow: Arc<dyn ShadowClient>,
    pub config: Arc<SkillConfig>,
}

impl HandlerContext {
    pub fn new(shadow: Arc<dyn ShadowClient>, config: SkillConfig) -> Self {
        Self {
            shadow,
            config: Arc::new(config),
        }
    }
}

// src/config.rs
//
// Service configuration.
// Plain data with defaults; missing keys in a JSON document fall back to them.

use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::events::{EventBus, DEFAULT_EVENT_LOG_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Keep deleted clips in storage with a deleted_at marker
    pub soft_delete_clips: bool,

    /// Emissions retained by the event bus log (0 disables it)
    pub event_log_capacity: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            soft_delete_clips: true,
            event_log_capacity: DEFAULT_EVENT_LOG_CAPACITY,
        }
    }
}

impl ServiceConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Event bus sized according to this configuration
    pub fn build_event_bus(&self) -> EventBus {
        EventBus::with_log_capacity(self.event_log_capacity)
    }
}

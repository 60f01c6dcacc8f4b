use std::env;
use serde::{Deserialize, Serialize};
use crate::gateway::GatewayPublisherVia;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}


// Configuration abstracts config options for library catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub max_update_attempts: usize,
    pub log_level: String,
    pub json_logs: bool,
    pub events_via: GatewayPublisherVia,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_update_attempts: 3,
            log_level: "warn".to_string(),
            json_logs: false,
            events_via: GatewayPublisherVia::Logs,
        }
    }

    // Reads LIBRARY_BRANCH, LIBRARY_LOG_LEVEL, LIBRARY_LOG_FORMAT and LIBRARY_EVENTS,
    // keeping the defaults for anything missing or unrecognized.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Configuration::new(
            lookup("LIBRARY_BRANCH").unwrap_or_else(|| "main".to_string()).as_str());
        if let Some(level) = lookup("LIBRARY_LOG_LEVEL") {
            let level = level.trim().to_lowercase();
            if ["trace", "debug", "info", "warn", "error", "off"].contains(&level.as_str()) {
                config.log_level = level;
            }
        }
        if let Some(format) = lookup("LIBRARY_LOG_FORMAT") {
            config.json_logs = format.trim().eq_ignore_ascii_case("json");
        }
        if let Some(via) = lookup("LIBRARY_EVENTS") {
            config.events_via = GatewayPublisherVia::from(via.trim().to_lowercase());
        }
        config
    }
}

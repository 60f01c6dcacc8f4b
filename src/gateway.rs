use serde::{Deserialize, Serialize};

pub mod events;
pub mod logs {
    pub mod publisher;
}
pub mod memory {
    pub mod publisher;
}
pub mod factory;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum GatewayPublisherVia {
    Logs,
    Memory,
}

impl From<String> for GatewayPublisherVia {
    fn from(s: String) -> Self {
        match s.as_str() {
            "memory" => GatewayPublisherVia::Memory,
            _ => GatewayPublisherVia::Logs,
        }
    }
}

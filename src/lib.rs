// Simeis trading agent library
// Keeps one ship mining and selling for a player, indefinitely

pub mod admiral;
pub mod client;
pub mod config;
pub mod debug;
pub mod error;
pub mod models;
pub mod operations;
pub mod storage;
pub mod verbosity;

// Re-export commonly used types
pub use admiral::{Admiral, AgentPhase};
pub use client::{HttpTransport, SimeisClient, Transport};
pub use config::AgentConfig;
pub use error::{AgentError, AgentResult};
pub use models::{Planet, Player, Ship, ShipState, Station};

// Constants
pub const DEFAULT_SERVER_URL: &str = "http://0.0.0.0:8080";
pub const DEFAULT_CONFIG_FILE: &str = "simeis_agent.toml";

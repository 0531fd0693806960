use thiserror::Error;

/// Every failure the agent can surface
#[derive(Error, Debug)]
pub enum AgentError {
    /// The service answered with an `error` field other than "ok"
    #[error("Service error: {0}")]
    Service(String),

    /// Timeout, refused connection, broken body... never retried
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Ship {ship_id} still busy after waiting {waited_secs:.1}s")]
    PollTimeout { ship_id: u64, waited_secs: f64 },

    #[error("Identity storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Player owns no station")]
    NoStation,

    #[error("Shipyard at station {0} has no ship for sale")]
    NoShipOffered(u64),

    #[error("Scan around station {0} found no planet")]
    NoPlanetInRange(u64),
}

impl AgentError {
    pub fn is_service(&self) -> bool {
        matches!(self, AgentError::Service(_))
    }
}

pub type AgentResult<T> = Result<T, AgentError>;

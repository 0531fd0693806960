use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub type CrewId = u64;

/// Crew of a ship or station, keyed by crew member id
pub type Crew = BTreeMap<CrewId, CrewMember>;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub enum CrewRole {
    Pilot,
    Operator,
    Trader,
    Soldier,
    #[serde(other)]
    Unknown,
}

impl CrewRole {
    /// Lower-case name used by the hiring endpoint
    pub fn as_path(&self) -> &'static str {
        match self {
            CrewRole::Pilot => "pilot",
            CrewRole::Operator => "operator",
            CrewRole::Trader => "trader",
            CrewRole::Soldier => "soldier",
            CrewRole::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CrewRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrewMember {
    pub member_type: CrewRole,
    #[serde(default)]
    pub rank: u8,
}

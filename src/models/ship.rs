use crate::models::crew::{Crew, CrewRole};
use crate::models::navigation::SpaceCoord;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

pub type ShipId = u64;
pub type ModuleId = u64;

#[derive(Debug, Deserialize, Clone)]
pub struct Ship {
    pub id: ShipId,
    pub position: SpaceCoord,
    pub state: ShipState,
    pub cargo: ShipCargo,
    #[serde(default)]
    pub modules: BTreeMap<ModuleId, ShipModule>,
    #[serde(default)]
    pub crew: Crew,
    #[serde(default)]
    pub hull_decay: f64,
    #[serde(default)]
    pub fuel_tank: f64,
    #[serde(default)]
    pub fuel_tank_capacity: f64,
}

impl Ship {
    pub fn is_idle(&self) -> bool {
        self.state == ShipState::Idle
    }

    /// Id of the first installed module of `modtype`
    pub fn module_of(&self, modtype: ModuleType) -> Option<ModuleId> {
        self.modules
            .iter()
            .find(|(_, m)| m.modtype == modtype)
            .map(|(id, _)| *id)
    }

    pub fn count_role(&self, role: CrewRole) -> usize {
        self.crew.values().filter(|c| c.member_type == role).count()
    }

    /// Whole hull plates needed to repair all decay
    pub fn hull_plates_needed(&self) -> f64 {
        self.hull_decay.max(0.0).trunc()
    }

    /// Whole fuel units needed to fill the tank
    pub fn fuel_needed(&self) -> f64 {
        (self.fuel_tank_capacity - self.fuel_tank).max(0.0).trunc()
    }
}

/// Operating state of a ship
///
/// The service encodes idle as a bare string and busy states as a single-key
/// object carrying the action's details, so only the variant name is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipState {
    Idle,
    Traveling,
    Extracting,
    Other(String),
}

impl ShipState {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Idle" => ShipState::Idle,
            "Extracting" => ShipState::Extracting,
            n if n.contains("Flight") || n.contains("Travel") => ShipState::Traveling,
            n => ShipState::Other(n.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ShipState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let name = match &value {
            Value::String(s) => s.clone(),
            Value::Object(map) => map.keys().next().cloned().unwrap_or_default(),
            other => other.to_string(),
        };
        Ok(ShipState::from_name(&name))
    }
}

impl fmt::Display for ShipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipState::Other(name) => write!(f, "{}", name),
            state => write!(f, "{:?}", state),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ShipCargo {
    #[serde(default)]
    pub resources: BTreeMap<String, f64>,
    #[serde(default)]
    pub usage: f64,
    #[serde(default)]
    pub capacity: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShipModule {
    pub modtype: ModuleType,
    #[serde(default)]
    pub rank: u8,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub enum ModuleType {
    Miner,
    GasSucker,
    #[serde(other)]
    Other,
}

impl ModuleType {
    /// Extraction module able to work a planet of the given kind
    pub fn for_planet(solid: bool) -> Self {
        if solid {
            ModuleType::Miner
        } else {
            ModuleType::GasSucker
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Per-resource extraction rate (units per second) reported when extraction starts
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(transparent)]
pub struct ExtractionRates(pub BTreeMap<String, f64>);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ship_with_state(state: Value) -> Ship {
        serde_json::from_value(json!({
            "id": 1,
            "position": [0, 0, 0],
            "state": state,
            "cargo": {"resources": {}, "usage": 0.0, "capacity": 100.0},
        }))
        .unwrap()
    }

    #[test]
    fn decodes_plain_and_tagged_states() {
        assert_eq!(ship_with_state(json!("Idle")).state, ShipState::Idle);
        assert_eq!(
            ship_with_state(json!({"InFlight": {"dist_done": 1.0}})).state,
            ShipState::Traveling
        );
        assert_eq!(
            ship_with_state(json!({"Extracting": {"Stone": 1.5}})).state,
            ShipState::Extracting
        );
        assert_eq!(
            ship_with_state(json!("Docking")).state,
            ShipState::Other("Docking".to_string())
        );
    }

    #[test]
    fn deficits_are_whole_units() {
        let mut ship = ship_with_state(json!("Idle"));
        ship.hull_decay = 5.7;
        ship.fuel_tank = 12.5;
        ship.fuel_tank_capacity = 40.0;
        assert_eq!(ship.hull_plates_needed(), 5.0);
        assert_eq!(ship.fuel_needed(), 27.0);
    }
}

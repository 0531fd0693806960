use crate::models::navigation::SpaceCoord;
use crate::models::ship::Ship;
use crate::models::station::StationId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type PlayerId = u64;

/// Profile of a player
///
/// `money`, `costs` and `ships` are only sent back when the request carries
/// the player's own key; their absence means the key was not recognized.
#[derive(Debug, Deserialize, Clone)]
pub struct Player {
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stations: BTreeMap<StationId, SpaceCoord>,
    pub money: Option<f64>,
    pub costs: Option<f64>,
    #[serde(default)]
    pub ships: Vec<Ship>,
}

impl Player {
    pub fn is_private_view(&self) -> bool {
        self.money.is_some()
    }

    pub fn money(&self) -> f64 {
        self.money.unwrap_or(0.0)
    }

    pub fn costs(&self) -> f64 {
        self.costs.unwrap_or(0.0)
    }

    /// A player with no money left cannot play anymore
    pub fn has_lost(&self) -> bool {
        self.money.is_some_and(|m| m <= 0.0)
    }

    /// Seconds before money runs out at the current cost rate, `None` when nothing is being spent
    pub fn survival_secs(&self) -> Option<f64> {
        let costs = self.costs();
        (costs > 0.0).then(|| self.money() / costs)
    }

    pub fn first_station(&self) -> Option<StationId> {
        self.stations.keys().next().copied()
    }
}

/// Credentials handed out by the registration endpoint
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NewPlayer {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    pub key: String,
}

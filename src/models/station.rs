use crate::models::crew::Crew;
use crate::models::navigation::SpaceCoord;
use crate::models::ship::ShipId;
use serde::Deserialize;
use std::collections::BTreeMap;

pub type StationId = u64;

#[derive(Debug, Deserialize, Clone)]
pub struct Station {
    pub id: StationId,
    pub position: SpaceCoord,
    #[serde(default)]
    pub crew: Crew,
    #[serde(default)]
    pub cargo: StationCargo,
}

/// Station storage, unbounded
#[derive(Debug, Deserialize, Clone, Default)]
pub struct StationCargo {
    #[serde(default)]
    pub resources: BTreeMap<String, f64>,
}

impl StationCargo {
    /// Quantity held, an absent resource counting as zero
    pub fn stock(&self, resource: &str) -> f64 {
        self.resources.get(resource).copied().unwrap_or(0.0)
    }
}

/// Planet as seen by a sector scan
#[derive(Debug, Deserialize, Clone)]
pub struct Planet {
    pub position: SpaceCoord,
    #[serde(default)]
    pub temperature: u16,
    pub solid: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScanResult {
    #[serde(default)]
    pub planets: Vec<Planet>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShipyardOffer {
    pub id: ShipId,
    pub price: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShipyardListing {
    #[serde(default)]
    pub ships: Vec<ShipyardOffer>,
}

impl ShipyardListing {
    /// Lowest-priced offer, the first one listed on a tie
    pub fn cheapest(&self) -> Option<&ShipyardOffer> {
        self.ships.iter().fold(None, |best: Option<&ShipyardOffer>, offer| match best {
            Some(b) if b.price <= offer.price => Some(b),
            _ => Some(offer),
        })
    }
}

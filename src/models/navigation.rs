use serde::{Deserialize, Serialize};

/// Integer position in the galaxy
pub type SpaceCoord = (i64, i64, i64);

/// Euclidean distance between two positions
pub fn distance(a: &SpaceCoord, b: &SpaceCoord) -> f64 {
    let dx = (a.0 - b.0) as f64;
    let dy = (a.1 - b.1) as f64;
    let dz = (a.2 - b.2) as f64;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Cost estimate returned when a ship is sent somewhere
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TravelCost {
    #[serde(default)]
    pub direction: (f64, f64, f64),
    pub distance: f64,
    /// Seconds until arrival
    pub duration: f64,
    #[serde(default)]
    pub fuel_consumption: f64,
    #[serde(default)]
    pub hull_usage: f64,
}

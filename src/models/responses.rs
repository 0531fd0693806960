use serde::Deserialize;

// Small endpoint-specific response records

#[derive(Debug, Deserialize, Clone)]
pub struct PingResponse {
    pub ping: String,
}

/// Id of something just created (crew member, module)
#[derive(Debug, Deserialize, Clone)]
pub struct CreatedId {
    pub id: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShipPurchase {
    #[serde(rename = "shipId")]
    pub ship_id: crate::models::ShipId,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UnloadReport {
    pub unloaded: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RepairReport {
    #[serde(rename = "added-hull")]
    pub added_hull: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefuelReport {
    #[serde(rename = "added-fuel")]
    pub added_fuel: f64,
}

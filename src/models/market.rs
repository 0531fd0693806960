use serde::Deserialize;
use std::collections::BTreeMap;

pub const FUEL: &str = "Fuel";
pub const HULL_PLATE: &str = "HullPlate";

/// Resources bought to maintain ships rather than extracted for sale
pub fn is_consumable(resource: &str) -> bool {
    resource == FUEL || resource == HULL_PLATE
}

/// Unit price snapshot
#[derive(Debug, Deserialize, Clone, Default)]
pub struct MarketPrices {
    #[serde(default)]
    pub prices: BTreeMap<String, f64>,
}

impl MarketPrices {
    pub fn estimate(&self, resource: &str, amount: f64) -> Option<f64> {
        self.prices.get(resource).map(|p| p * amount)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MarketTransaction {
    pub added_money: Option<f64>,
    pub removed_money: Option<f64>,
    #[serde(default)]
    pub fees: f64,
}

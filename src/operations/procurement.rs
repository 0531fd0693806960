// Keeping the home station stocked with ship consumables
use crate::client::{SimeisClient, Transport};
use crate::error::AgentResult;
use crate::models::*;
use crate::v_info;

/// Units missing to reach `required`, never negative
pub fn deficit(required: f64, current: f64) -> f64 {
    (required - current).max(0.0)
}

#[derive(Debug, Clone)]
pub struct StockOutcome {
    pub purchased: f64,
    /// Station cargo as known after the purchase (re-fetched when something was bought)
    pub cargo: StationCargo,
}

pub struct Procurement<'a, T: Transport> {
    client: &'a SimeisClient<T>,
    station_id: StationId,
}

impl<'a, T: Transport> Procurement<'a, T> {
    pub fn new(client: &'a SimeisClient<T>, station_id: StationId) -> Self {
        Self { client, station_id }
    }

    /// Buy exactly the shortfall of `resource` on the market
    ///
    /// Nothing is called at all when the station already holds `required`.
    pub async fn ensure_stock(
        &self,
        resource: &str,
        required: f64,
        cargo: StationCargo,
    ) -> AgentResult<StockOutcome> {
        let need = deficit(required, cargo.stock(resource));
        if need <= 0.0 {
            return Ok(StockOutcome { purchased: 0.0, cargo });
        }

        let tx = self.client.buy_resource(self.station_id, resource, need).await?;
        v_info!(
            "🛒 Bought {} of {} for {:.2} credits",
            need,
            resource,
            tx.removed_money.unwrap_or_default()
        );

        let station = self.client.get_station(self.station_id).await?;
        Ok(StockOutcome {
            purchased: need,
            cargo: station.cargo,
        })
    }

    /// Stock hull plates for the ship's decay, then repair with whatever the station holds
    pub async fn repair(&self, ship: &Ship) -> AgentResult<Option<RepairReport>> {
        let required = ship.hull_plates_needed();
        if required <= 0.0 {
            return Ok(None);
        }

        let station = self.client.get_station(self.station_id).await?;
        let outcome = self.ensure_stock(HULL_PLATE, required, station.cargo).await?;
        if outcome.cargo.stock(HULL_PLATE) <= 0.0 {
            return Ok(None);
        }

        let report = self.client.repair_ship(self.station_id, ship.id).await?;
        v_info!("🔩 Repaired {} hull plates on the ship", report.added_hull);
        Ok(Some(report))
    }

    /// Stock fuel for an empty tank portion, then refuel with whatever the station holds
    pub async fn refuel(&self, ship: &Ship) -> AgentResult<Option<RefuelReport>> {
        let required = ship.fuel_needed();
        if required <= 0.0 {
            return Ok(None);
        }

        let station = self.client.get_station(self.station_id).await?;
        let outcome = self.ensure_stock(FUEL, required, station.cargo).await?;
        if outcome.cargo.stock(FUEL) <= 0.0 {
            return Ok(None);
        }

        let report = self.client.refuel_ship(self.station_id, ship.id).await?;
        v_info!("⛽ Refilled {} fuel on the ship", report.added_fuel);
        Ok(Some(report))
    }
}

// Trading operations module
use crate::client::{SimeisClient, Transport};
use crate::error::AgentResult;
use crate::models::*;
use crate::operations::bootstrap::HomeBase;
use crate::operations::procurement::Procurement;
use crate::operations::ship::{PollPolicy, ShipPoller};
use crate::{v_error, v_info};

#[derive(Debug, Clone)]
pub struct Sale {
    pub resource: String,
    pub amount: f64,
    pub revenue: f64,
    /// Sold from station storage, left there by an earlier unload whose sale never went through
    pub recovered: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TradeReport {
    pub sales: Vec<Sale>,
    pub repair: Option<RepairReport>,
    pub refuel: Option<RefuelReport>,
}

impl TradeReport {
    pub fn revenue(&self) -> f64 {
        self.sales.iter().map(|s| s.revenue).sum()
    }
}

/// Cargo entries worth unloading, in cargo order
pub fn sellable_cargo(resources: &std::collections::BTreeMap<String, f64>) -> Vec<(String, f64)> {
    resources
        .iter()
        .filter(|(_, amount)| **amount > 0.0)
        .map(|(resource, amount)| (resource.clone(), *amount))
        .collect()
}

/// Extracted resources sitting in station storage; these were unloaded but never sold
pub fn unsold_station_stock(cargo: &StationCargo) -> Vec<(String, f64)> {
    sellable_cargo(&cargo.resources)
        .into_iter()
        .filter(|(resource, _)| !is_consumable(resource))
        .collect()
}

pub struct TradingOperations<'a, T: Transport> {
    client: &'a SimeisClient<T>,
    home: HomeBase,
    poller: ShipPoller<'a, T>,
    procurement: Procurement<'a, T>,
}

impl<'a, T: Transport> TradingOperations<'a, T> {
    pub fn new(client: &'a SimeisClient<T>, home: HomeBase, policy: PollPolicy) -> Self {
        Self {
            client,
            home,
            poller: ShipPoller::new(client, policy),
            procurement: Procurement::new(client, home.station_id),
        }
    }

    /// Bring the cargo home, sell all of it, then repair and refuel the ship
    pub async fn run_cycle(&self) -> AgentResult<TradeReport> {
        v_info!("💰 Starting the trading operation");
        let mut report = TradeReport::default();

        let ship = self.poller.wait_idle(self.home.ship_id).await?;
        let station = self.client.get_station(self.home.station_id).await?;
        if ship.position != station.position {
            self.poller.travel_to(ship.id, &station.position).await?;
        }

        for (resource, amount) in unsold_station_stock(&station.cargo) {
            let tx = self.client.sell_resource(station.id, &resource, amount).await?;
            let revenue = tx.added_money.unwrap_or_default();
            v_info!(
                "♻️ Sold {} of {} left in station storage, for {:.2} credits",
                amount,
                resource,
                revenue
            );
            report.sales.push(Sale {
                resource,
                amount,
                revenue,
                recovered: true,
            });
        }

        let to_sell = sellable_cargo(&ship.cargo.resources);
        if !to_sell.is_empty() {
            let prices = self.client.get_market_prices().await?;
            for (resource, amount) in to_sell {
                if let Some(estimate) = prices.estimate(&resource, amount) {
                    v_info!(
                        "📈 {} of {} should fetch about {:.2} credits",
                        amount,
                        resource,
                        estimate
                    );
                }
                report.sales.push(self.unload_and_sell(ship.id, &resource, amount).await?);
            }
        }

        let ship = self.client.get_ship(ship.id).await?;
        report.repair = self.procurement.repair(&ship).await?;
        report.refuel = self.procurement.refuel(&ship).await?;

        Ok(report)
    }

    /// Move `amount` of `resource` into the station, then sell that same amount
    ///
    /// If the sale fails the resource stays in station storage and the next
    /// cycle sells it before unloading anything new.
    pub async fn unload_and_sell(
        &self,
        ship_id: ShipId,
        resource: &str,
        amount: f64,
    ) -> AgentResult<Sale> {
        let unloaded = self.client.unload_cargo(ship_id, resource, amount).await?;

        let tx = match self
            .client
            .sell_resource(self.home.station_id, resource, amount)
            .await
        {
            Ok(tx) => tx,
            Err(e) => {
                v_error!(
                    "❌ Unloaded {} of {} but the sale failed, it stays in station storage: {}",
                    unloaded.unloaded,
                    resource,
                    e
                );
                return Err(e);
            }
        };

        let revenue = tx.added_money.unwrap_or_default();
        v_info!(
            "💸 Unloaded and sold {} of {}, for {:.2} credits",
            unloaded.unloaded,
            resource,
            revenue
        );
        Ok(Sale {
            resource: resource.to_string(),
            amount,
            revenue,
            recovered: false,
        })
    }
}

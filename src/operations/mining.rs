// Mining operations module
use crate::client::{SimeisClient, Transport};
use crate::error::{AgentError, AgentResult};
use crate::models::*;
use crate::operations::bootstrap::HomeBase;
use crate::operations::crew::{CrewManager, CrewPost};
use crate::operations::ship::{PollPolicy, ShipPoller};
use crate::v_info;

/// Planet closest to `origin`; the first listed wins a tie
pub fn nearest_planet<'p>(origin: &SpaceCoord, planets: &'p [Planet]) -> Option<&'p Planet> {
    planets.iter().fold(None, |best: Option<&'p Planet>, planet| match best {
        Some(b) if distance(origin, &b.position) <= distance(origin, &planet.position) => Some(b),
        _ => Some(planet),
    })
}

#[derive(Debug, Clone)]
pub struct MiningReport {
    pub target: SpaceCoord,
    pub module: ModuleType,
    pub rates: ExtractionRates,
    /// Whether a module had to be bought for this target
    pub bought_module: bool,
    pub traveled: bool,
    pub cargo: ShipCargo,
}

pub struct MiningOperations<'a, T: Transport> {
    client: &'a SimeisClient<T>,
    home: HomeBase,
    poller: ShipPoller<'a, T>,
    crew: CrewManager<'a, T>,
}

impl<'a, T: Transport> MiningOperations<'a, T> {
    pub fn new(client: &'a SimeisClient<T>, home: HomeBase, policy: PollPolicy) -> Self {
        Self {
            client,
            home,
            poller: ShipPoller::new(client, policy),
            crew: CrewManager::new(client, home.station_id),
        }
    }

    /// Make sure the ship carries a staffed `modtype` module, buying one if needed
    ///
    /// Returns whether a module was bought. An operator is hired whenever the ship has fewer
    /// operators than modules, so a module bought by an interrupted run still gets staffed.
    pub async fn ensure_module(&self, ship: &Ship, modtype: ModuleType) -> AgentResult<bool> {
        let (ship, module_id, bought) = match ship.module_of(modtype) {
            Some(module_id) => (ship.clone(), module_id, false),
            None => {
                let module_id = self
                    .client
                    .buy_module(self.home.station_id, ship.id, modtype)
                    .await?;
                v_info!(
                    "🛠️ Bought a {} module (id {}) for ship {}",
                    modtype,
                    module_id,
                    ship.id
                );
                (self.client.get_ship(ship.id).await?, module_id, true)
            }
        };

        if ship.count_role(CrewRole::Operator) < ship.modules.len() {
            self.crew
                .hire_and_assign(CrewPost::Operator {
                    ship_id: ship.id,
                    module_id,
                })
                .await?;
        }
        Ok(bought)
    }

    /// Fly to the nearest planet and extract until the cargo is full
    pub async fn run_cycle(&self) -> AgentResult<MiningReport> {
        v_info!("⛏️ Starting the mining operation");

        let station = self.client.get_station(self.home.station_id).await?;
        let scan = self.client.scan_sector(self.home.station_id).await?;
        let target = nearest_planet(&station.position, &scan.planets)
            .ok_or(AgentError::NoPlanetInRange(self.home.station_id))?
            .clone();
        let modtype = ModuleType::for_planet(target.solid);

        let ship = self.client.get_ship(self.home.ship_id).await?;
        let bought_module = self.ensure_module(&ship, modtype).await?;
        v_info!(
            "🎯 Targeting {} planet at {:?}",
            if target.solid { "solid" } else { "gaseous" },
            target.position
        );

        let ship = self.poller.wait_idle(self.home.ship_id).await?;
        let traveled = ship.position != target.position;
        if traveled {
            self.poller.travel_to(ship.id, &target.position).await?;
        }

        let rates = self.client.start_extraction(ship.id).await?;
        v_info!("⛏️ Starting extraction:");
        for (resource, rate) in &rates.0 {
            v_info!("\t- Extraction of {}: {}/sec", resource, rate);
        }

        // Extraction stops by itself once the cargo is full
        let ship = self.poller.wait_idle(ship.id).await?;
        v_info!("📦 The cargo is full, stopping mining process");

        Ok(MiningReport {
            target: target.position,
            module: modtype,
            rates,
            bought_module,
            traveled,
            cargo: ship.cargo,
        })
    }
}

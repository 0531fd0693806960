// One-time setup of the home station and working ship
use crate::client::{SimeisClient, Transport};
use crate::error::{AgentError, AgentResult};
use crate::models::*;
use crate::operations::crew::{CrewManager, CrewPost};
use crate::{v_info, v_summary};

/// The two things every cycle works with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeBase {
    pub station_id: StationId,
    pub ship_id: ShipId,
}

pub struct Bootstrapper<'a, T: Transport> {
    client: &'a SimeisClient<T>,
    player_id: PlayerId,
}

impl<'a, T: Transport> Bootstrapper<'a, T> {
    pub fn new(client: &'a SimeisClient<T>, player_id: PlayerId) -> Self {
        Self { client, player_id }
    }

    pub async fn run(&self) -> AgentResult<HomeBase> {
        let mut player = self.client.get_player(self.player_id).await?;
        let station_id = player.first_station().ok_or(AgentError::NoStation)?;
        let crew = CrewManager::new(self.client, station_id);

        let station = self.client.get_station(station_id).await?;
        crew.ensure_role(station.crew.values(), CrewPost::Trading).await?;

        let mut bought = None;
        if player.ships.is_empty() {
            bought = Some(self.buy_cheapest_ship(station_id).await?);
            player = self.client.get_player(self.player_id).await?;
        }
        let ship = match bought {
            Some(ship_id) => player.ships.iter().find(|s| s.id == ship_id),
            None => player.ships.first(),
        }
        .ok_or(AgentError::NoShipOffered(station_id))?;

        crew.ensure_role(ship.crew.values(), CrewPost::Pilot(ship.id))
            .await?;

        v_summary!("✅ Game initialisation finished (station {}, ship {})", station_id, ship.id);
        Ok(HomeBase {
            station_id,
            ship_id: ship.id,
        })
    }

    async fn buy_cheapest_ship(&self, station_id: StationId) -> AgentResult<ShipId> {
        let listing = self.client.list_shipyard(station_id).await?;
        let offer = listing
            .cheapest()
            .ok_or(AgentError::NoShipOffered(station_id))?;

        v_info!("🚢 Purchasing the first ship for {:.2} credits", offer.price);
        let purchase = self.client.buy_ship(station_id, offer.id).await?;
        Ok(purchase.ship_id)
    }
}

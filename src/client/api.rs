use crate::client::transport::{unwrap_envelope, HttpTransport, Transport};
use crate::debug_api_call;
use crate::error::{AgentError, AgentResult};
use crate::models::*;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Typed access to the game service
///
/// Every endpoint goes through [`SimeisClient::call`], which attaches the
/// player key once one is known and strips the response envelope.
pub struct SimeisClient<T: Transport = HttpTransport> {
    transport: T,
    key: Option<String>,
}

impl<T: Transport> SimeisClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            key: None,
        }
    }

    pub fn set_key(&mut self, key: String) {
        self.key = Some(key);
    }

    pub fn clear_key(&mut self) {
        self.key = None;
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn call(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> AgentResult<Map<String, Value>> {
        let mut query: Vec<(&str, String)> = params.to_vec();
        if let Some(key) = &self.key {
            query.push(("key", key.clone()));
        }

        debug_api_call!(path);
        let body = self.transport.get(path, &query).await?;
        unwrap_envelope(body)
    }

    async fn call_as<R: DeserializeOwned>(&self, path: &str) -> AgentResult<R> {
        let fields = self.call(path, &[]).await?;
        Ok(serde_json::from_value(Value::Object(fields))?)
    }

    // Health
    pub async fn ping(&self) -> AgentResult<()> {
        let pong: PingResponse = self.call_as("/ping").await?;
        if pong.ping != "pong" {
            return Err(AgentError::Service(format!("unexpected ping reply: {}", pong.ping)));
        }
        Ok(())
    }

    // Player operations
    pub async fn register_player(&self, name: &str) -> AgentResult<NewPlayer> {
        self.call_as(&format!("/player/new/{}", name)).await
    }

    pub async fn get_player(&self, player_id: PlayerId) -> AgentResult<Player> {
        self.call_as(&format!("/player/{}", player_id)).await
    }

    // Station operations
    pub async fn get_station(&self, station_id: StationId) -> AgentResult<Station> {
        self.call_as(&format!("/station/{}", station_id)).await
    }

    pub async fn scan_sector(&self, station_id: StationId) -> AgentResult<ScanResult> {
        self.call_as(&format!("/station/{}/scan", station_id)).await
    }

    pub async fn list_shipyard(&self, station_id: StationId) -> AgentResult<ShipyardListing> {
        self.call_as(&format!("/station/{}/shipyard/list", station_id)).await
    }

    pub async fn buy_ship(
        &self,
        station_id: StationId,
        offer_id: ShipId,
    ) -> AgentResult<ShipPurchase> {
        self.call_as(&format!("/station/{}/shipyard/buy/{}", station_id, offer_id))
            .await
    }

    pub async fn buy_module(
        &self,
        station_id: StationId,
        ship_id: ShipId,
        modtype: ModuleType,
    ) -> AgentResult<ModuleId> {
        let created: CreatedId = self
            .call_as(&format!(
                "/station/{}/shop/modules/{}/buy/{}",
                station_id, ship_id, modtype
            ))
            .await?;
        Ok(created.id)
    }

    pub async fn hire_crew(&self, station_id: StationId, role: CrewRole) -> AgentResult<CrewId> {
        let created: CreatedId = self
            .call_as(&format!("/station/{}/crew/hire/{}", station_id, role.as_path()))
            .await?;
        Ok(created.id)
    }

    pub async fn assign_pilot(
        &self,
        station_id: StationId,
        crew_id: CrewId,
        ship_id: ShipId,
    ) -> AgentResult<()> {
        self.call(
            &format!("/station/{}/crew/assign/{}/{}/pilot", station_id, crew_id, ship_id),
            &[],
        )
        .await?;
        Ok(())
    }

    pub async fn assign_operator(
        &self,
        station_id: StationId,
        crew_id: CrewId,
        ship_id: ShipId,
        module_id: ModuleId,
    ) -> AgentResult<()> {
        self.call(
            &format!(
                "/station/{}/crew/assign/{}/{}/{}",
                station_id, crew_id, ship_id, module_id
            ),
            &[],
        )
        .await?;
        Ok(())
    }

    pub async fn assign_trader(&self, station_id: StationId, crew_id: CrewId) -> AgentResult<()> {
        self.call(
            &format!("/station/{}/crew/assign/{}/trading", station_id, crew_id),
            &[],
        )
        .await?;
        Ok(())
    }

    pub async fn repair_ship(
        &self,
        station_id: StationId,
        ship_id: ShipId,
    ) -> AgentResult<RepairReport> {
        self.call_as(&format!("/station/{}/repair/{}", station_id, ship_id))
            .await
    }

    pub async fn refuel_ship(
        &self,
        station_id: StationId,
        ship_id: ShipId,
    ) -> AgentResult<RefuelReport> {
        self.call_as(&format!("/station/{}/refuel/{}", station_id, ship_id))
            .await
    }

    // Ship operations
    pub async fn get_ship(&self, ship_id: ShipId) -> AgentResult<Ship> {
        self.call_as(&format!("/ship/{}", ship_id)).await
    }

    pub async fn navigate(
        &self,
        ship_id: ShipId,
        destination: &SpaceCoord,
    ) -> AgentResult<TravelCost> {
        let (x, y, z) = destination;
        self.call_as(&format!("/ship/{}/navigate/{}/{}/{}", ship_id, x, y, z))
            .await
    }

    pub async fn start_extraction(&self, ship_id: ShipId) -> AgentResult<ExtractionRates> {
        self.call_as(&format!("/ship/{}/extraction/start", ship_id)).await
    }

    pub async fn unload_cargo(
        &self,
        ship_id: ShipId,
        resource: &str,
        amount: f64,
    ) -> AgentResult<UnloadReport> {
        self.call_as(&format!("/ship/{}/unload/{}/{}", ship_id, resource, amount))
            .await
    }

    // Market operations
    pub async fn get_market_prices(&self) -> AgentResult<MarketPrices> {
        self.call_as("/market/prices").await
    }

    pub async fn buy_resource(
        &self,
        station_id: StationId,
        resource: &str,
        amount: f64,
    ) -> AgentResult<MarketTransaction> {
        self.call_as(&format!("/market/{}/buy/{}/{}", station_id, resource, amount))
            .await
    }

    pub async fn sell_resource(
        &self,
        station_id: StationId,
        resource: &str,
        amount: f64,
    ) -> AgentResult<MarketTransaction> {
        self.call_as(&format!("/market/{}/sell/{}/{}", station_id, resource, amount))
            .await
    }
}

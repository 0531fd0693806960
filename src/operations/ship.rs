// Waiting on ship actions to finish
use crate::client::{SimeisClient, Transport};
use crate::config::PollingConfig;
use crate::error::{AgentError, AgentResult};
use crate::models::*;
use crate::{v_debug, v_info};
use tokio::time::{sleep, Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    /// `None` waits as long as the ship stays busy
    pub max_wait: Option<Duration>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::from(&PollingConfig::default())
    }
}

impl From<&PollingConfig> for PollPolicy {
    fn from(config: &PollingConfig) -> Self {
        Self {
            interval: config.idle_interval(),
            max_wait: config.max_wait(),
        }
    }
}

pub struct ShipPoller<'a, T: Transport> {
    client: &'a SimeisClient<T>,
    policy: PollPolicy,
}

impl<'a, T: Transport> ShipPoller<'a, T> {
    pub fn new(client: &'a SimeisClient<T>, policy: PollPolicy) -> Self {
        Self { client, policy }
    }

    /// Wait for Idle, checking at the default interval
    pub async fn wait_idle(&self, ship_id: ShipId) -> AgentResult<Ship> {
        self.wait_idle_every(ship_id, self.policy.interval).await
    }

    /// Poll the ship every `interval` until it is Idle and return that idle snapshot
    pub async fn wait_idle_every(&self, ship_id: ShipId, interval: Duration) -> AgentResult<Ship> {
        let started = Instant::now();
        let mut ship = self.client.get_ship(ship_id).await?;

        while !ship.is_idle() {
            if let Some(max_wait) = self.policy.max_wait {
                let waited = started.elapsed();
                if waited >= max_wait {
                    return Err(AgentError::PollTimeout {
                        ship_id,
                        waited_secs: waited.as_secs_f64(),
                    });
                }
            }

            v_debug!(
                "⏳ Ship {} is {}, checking again in {:.1}s",
                ship_id,
                ship.state,
                interval.as_secs_f64()
            );
            sleep(interval).await;
            ship = self.client.get_ship(ship_id).await?;
        }

        Ok(ship)
    }

    /// Send the ship to `destination` and wait for arrival
    pub async fn travel_to(
        &self,
        ship_id: ShipId,
        destination: &SpaceCoord,
    ) -> AgentResult<TravelCost> {
        let cost = self.client.navigate(ship_id, destination).await?;
        v_info!("🚀 Traveling to {:?}, will take {:.1}s", destination, cost.duration);

        let interval = if cost.duration.is_finite() && cost.duration > 0.0 {
            Duration::from_secs_f64(cost.duration)
        } else {
            self.policy.interval
        };
        self.wait_idle_every(ship_id, interval).await?;
        Ok(cost)
    }
}

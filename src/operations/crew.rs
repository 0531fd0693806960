// Crew staffing for ships and the home station
use crate::client::{SimeisClient, Transport};
use crate::error::AgentResult;
use crate::models::*;
use crate::v_info;

/// True when at least one member holds `role`
pub fn has_role<'c>(crew: impl IntoIterator<Item = &'c CrewMember>, role: CrewRole) -> bool {
    crew.into_iter().any(|member| member.member_type == role)
}

/// Where a hired crew member is put to work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrewPost {
    Pilot(ShipId),
    Operator { ship_id: ShipId, module_id: ModuleId },
    /// The station's trading desk
    Trading,
}

impl CrewPost {
    pub fn role(&self) -> CrewRole {
        match self {
            CrewPost::Pilot(_) => CrewRole::Pilot,
            CrewPost::Operator { .. } => CrewRole::Operator,
            CrewPost::Trading => CrewRole::Trader,
        }
    }
}

pub struct CrewManager<'a, T: Transport> {
    client: &'a SimeisClient<T>,
    station_id: StationId,
}

impl<'a, T: Transport> CrewManager<'a, T> {
    pub fn new(client: &'a SimeisClient<T>, station_id: StationId) -> Self {
        Self { client, station_id }
    }

    /// Hire one member at the home station and assign it to `post`
    pub async fn hire_and_assign(&self, post: CrewPost) -> AgentResult<CrewId> {
        let crew_id = self.client.hire_crew(self.station_id, post.role()).await?;

        match post {
            CrewPost::Pilot(ship_id) => {
                self.client.assign_pilot(self.station_id, crew_id, ship_id).await?;
                v_info!("👨‍✈️ Hired a pilot, assigned it on ship {}", ship_id);
            }
            CrewPost::Operator { ship_id, module_id } => {
                self.client
                    .assign_operator(self.station_id, crew_id, ship_id, module_id)
                    .await?;
                v_info!(
                    "🔧 Hired an operator, assigned it on module {} of ship {}",
                    module_id,
                    ship_id
                );
            }
            CrewPost::Trading => {
                self.client.assign_trader(self.station_id, crew_id).await?;
                v_info!("💼 Hired a trader, assigned it on station {}", self.station_id);
            }
        }

        Ok(crew_id)
    }

    /// Hire for `post` unless `crew` already has the role; returns whether it was already there
    pub async fn ensure_role<'c>(
        &self,
        crew: impl IntoIterator<Item = &'c CrewMember>,
        post: CrewPost,
    ) -> AgentResult<bool> {
        if has_role(crew, post.role()) {
            return Ok(true);
        }
        self.hire_and_assign(post).await?;
        Ok(false)
    }
}

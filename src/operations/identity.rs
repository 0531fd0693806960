// Player identity: reuse a remembered account or register a new one
use crate::client::{SimeisClient, Transport};
use crate::error::{AgentError, AgentResult};
use crate::models::Player;
use crate::storage::{IdentityStore, StoredIdentity};
use crate::{v_info, v_summary};

/// How many times a rejected identity is replaced by a fresh registration per startup
pub const MAX_FORCED_REGISTRATIONS: u32 = 1;

/// Keep ASCII letters and digits only, lower-cased
pub fn sanitize_handle(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[derive(Debug, Clone)]
pub struct Session {
    pub handle: String,
    pub identity: StoredIdentity,
    pub player: Player,
}

#[derive(Debug, Clone)]
pub enum Enrollment {
    Active(Session),
    /// The player's money reached zero; nothing more can be done with this identity
    Lost(Player),
}

pub struct IdentityManager<'a, S: IdentityStore> {
    store: &'a S,
}

impl<'a, S: IdentityStore> IdentityManager<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Resolve the player behind `raw_handle`, leaving the client authenticated as that player
    pub async fn load_or_register<T: Transport>(
        &self,
        client: &mut SimeisClient<T>,
        raw_handle: &str,
    ) -> AgentResult<Enrollment> {
        let handle = sanitize_handle(raw_handle);
        if handle.is_empty() {
            return Err(AgentError::Config(format!(
                "handle {:?} has no letter or digit",
                raw_handle
            )));
        }

        let mut forced_registrations = 0;
        let mut identity = match self.store.load(&handle)? {
            Some(identity) => {
                v_info!("💾 Loaded data for player {}", handle);
                identity
            }
            None => self.register(client, &handle).await?,
        };

        let player = loop {
            client.set_key(identity.key.clone());
            match self.fetch_profile(client, &identity).await {
                Ok(player) => break player,
                Err(e) if e.is_service() && forced_registrations < MAX_FORCED_REGISTRATIONS => {
                    v_info!("⚠️ Player {} rejected ({}), registering again", handle, e);
                    forced_registrations += 1;
                    identity = self.register(client, &handle).await?;
                }
                Err(e) => return Err(e),
            }
        };

        if player.has_lost() {
            return Ok(Enrollment::Lost(player));
        }

        Ok(Enrollment::Active(Session {
            handle,
            identity,
            player,
        }))
    }

    async fn register<T: Transport>(
        &self,
        client: &mut SimeisClient<T>,
        handle: &str,
    ) -> AgentResult<StoredIdentity> {
        client.clear_key();
        let created = client.register_player(handle).await?;
        let identity = StoredIdentity::from_registration(handle, created);
        self.store.save(handle, &identity)?;
        v_summary!("🆕 Created player {} (id {})", handle, identity.player_id);
        Ok(identity)
    }

    async fn fetch_profile<T: Transport>(
        &self,
        client: &SimeisClient<T>,
        identity: &StoredIdentity,
    ) -> AgentResult<Player> {
        let player = client.get_player(identity.player_id).await?;
        if !player.is_private_view() {
            return Err(AgentError::Service(format!(
                "key not accepted for player {}",
                identity.player_id
            )));
        }
        Ok(player)
    }
}

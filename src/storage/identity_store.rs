// Persistent player identity storage
use crate::error::AgentResult;
use crate::models::{NewPlayer, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// What is remembered about a player between runs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredIdentity {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    pub key: String,
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub registered_at: Option<DateTime<Utc>>,
}

impl StoredIdentity {
    pub fn from_registration(handle: &str, created: NewPlayer) -> Self {
        Self {
            player_id: created.player_id,
            key: created.key,
            handle: handle.to_string(),
            registered_at: Some(Utc::now()),
        }
    }
}

/// Load/save of identities keyed by sanitized handle
pub trait IdentityStore {
    fn load(&self, handle: &str) -> AgentResult<Option<StoredIdentity>>;
    fn save(&self, handle: &str, identity: &StoredIdentity) -> AgentResult<()>;
}

/// One pretty-printed `<handle>.json` file per player
pub struct FileIdentityStore {
    directory: PathBuf,
}

impl FileIdentityStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn record_path(&self, handle: &str) -> PathBuf {
        self.directory.join(format!("{}.json", handle))
    }
}

impl IdentityStore for FileIdentityStore {
    fn load(&self, handle: &str) -> AgentResult<Option<StoredIdentity>> {
        let path = self.record_path(handle);
        if !Path::new(&path).exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let identity: StoredIdentity = serde_json::from_str(&content)?;
        Ok(Some(identity))
    }

    fn save(&self, handle: &str, identity: &StoredIdentity) -> AgentResult<()> {
        fs::create_dir_all(&self.directory)?;
        let content = serde_json::to_string_pretty(identity)?;
        fs::write(self.record_path(handle), content)?;
        Ok(())
    }
}

/// Identities kept in memory only, for tests and dry runs
#[derive(Default)]
pub struct MemoryIdentityStore {
    records: Mutex<HashMap<String, StoredIdentity>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(handle: &str, identity: StoredIdentity) -> Self {
        let store = Self::default();
        store
            .records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(handle.to_string(), identity);
        store
    }

    pub fn get(&self, handle: &str) -> Option<StoredIdentity> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(handle)
            .cloned()
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn load(&self, handle: &str) -> AgentResult<Option<StoredIdentity>> {
        Ok(self.get(handle))
    }

    fn save(&self, handle: &str, identity: &StoredIdentity) -> AgentResult<()> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(handle.to_string(), identity.clone());
        Ok(())
    }
}

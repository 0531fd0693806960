use crate::error::{AgentError, AgentResult};
use crate::v_info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AgentConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Root URL of the game service
    pub base_url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Delay between two ship state checks while waiting for Idle
    pub idle_interval_seconds: f64,
    /// Give up waiting for a ship after this long (0 = wait forever)
    pub max_wait_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one `<handle>.json` identity record per player
    pub identity_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 0 = status only, 1 = progress, 2 = every request
    pub verbosity: u8,
    pub api_log: bool,
    pub api_log_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: crate::DEFAULT_SERVER_URL.to_string(),
            timeout_ms: 1000,
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            idle_interval_seconds: 2.0,
            max_wait_seconds: 3600,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            identity_dir: ".".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbosity: 1,
            api_log: false,
            api_log_path: "api_debug.log".to_string(),
        }
    }
}

impl PollingConfig {
    pub fn idle_interval(&self) -> Duration {
        Duration::from_secs_f64(self.idle_interval_seconds)
    }

    pub fn max_wait(&self) -> Option<Duration> {
        match self.max_wait_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl AgentConfig {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create(config_path: &str) -> AgentResult<Self> {
        if Path::new(config_path).exists() {
            v_info!("📋 Loading configuration from {}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            toml::from_str(&config_str)
                .map_err(|e| AgentError::Config(format!("{}: {}", config_path, e)))
        } else {
            v_info!("📋 Creating default configuration at {}", config_path);
            let config = AgentConfig::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self, config_path: &str) -> AgentResult<()> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let config_str =
            toml::to_string_pretty(self).map_err(|e| AgentError::Config(e.to_string()))?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    pub fn validate(&self) -> AgentResult<()> {
        let url = &self.server.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AgentError::Config(format!(
                "base_url must be an http(s) URL, got {}",
                url
            )));
        }
        if self.server.timeout_ms == 0 {
            return Err(AgentError::Config("timeout_ms must be greater than 0".to_string()));
        }
        let interval = self.polling.idle_interval_seconds;
        if !interval.is_finite() || interval <= 0.0 {
            return Err(AgentError::Config(
                "idle_interval_seconds must be a positive number".to_string(),
            ));
        }
        if self.logging.verbosity > 2 {
            return Err(AgentError::Config("verbosity must be 0, 1 or 2".to_string()));
        }
        Ok(())
    }

    pub fn print_summary(&self) {
        v_info!("📋 Configuration Summary:");
        v_info!("   🌐 Server: {} (timeout {}ms)", self.server.base_url, self.server.timeout_ms);
        v_info!(
            "   ⏱️  Idle polling: every {:.1}s, cap {}",
            self.polling.idle_interval_seconds,
            match self.polling.max_wait_seconds {
                0 => "none".to_string(),
                secs => format!("{}s", secs),
            }
        );
        v_info!("   💾 Identities in: {}", self.storage.identity_dir);
    }
}

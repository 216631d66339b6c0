use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub world_bank: WorldBankConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: [u8; 4],
    pub port: u16,
    /// Directory with the built rendering client, served as fallback
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WorldBankConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Page size large enough to list every country in one call
    pub countries_per_page: u32,
    /// Page size large enough to return every year of a series in one call
    pub series_per_page: u32,
}

fn default_static_dir() -> String {
    "dist".to_string()
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        (self.host, self.port).into()
    }
}

impl WorldBankConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = [0, 0, 0, 0]
port = 3000
static_dir = "dist"

[world_bank]
base_url = "https://api.worldbank.org/v2"
timeout_secs = 30
countries_per_page = 300
series_per_page = 100
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.world_bank.base_url.trim().is_empty() {
        anyhow::bail!("world_bank.base_url must not be empty");
    }
    if config.world_bank.countries_per_page == 0 || config.world_bank.series_per_page == 0 {
        anyhow::bail!("world_bank page sizes must be positive");
    }
    Ok(config)
}

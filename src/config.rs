use config::{Config, ConfigError, File};
use dotenv::dotenv;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::env;
use std::sync::RwLock;
use std::time::Duration;

// Initialize global configuration
lazy_static! {
    pub static ref SETTINGS: RwLock<Settings> =
        RwLock::new(Settings::new().expect("Failed to load configuration"));
}

#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Provider {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: Server,
    pub provider: Provider,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Try to load config file
        let config_builder = Config::builder().add_source(File::with_name("config"));

        match config_builder.build() {
            Ok(config) => config.try_deserialize(),
            Err(err) => {
                // Config file not found or error loading, use default values
                eprintln!(
                    "Warning: Could not load config file: {}, using default values",
                    err
                );

                Ok(Self {
                    server: Server {
                        host: "127.0.0.1".to_string(),
                        port: 8080,
                    },
                    provider: Provider {
                        base_url: "https://api.tradingeconomics.com".to_string(),
                        timeout_secs: 10,
                    },
                })
            }
        }
    }
}

// Convenience methods to get configuration values
pub fn get_server_addr() -> String {
    let settings = SETTINGS.read().unwrap();
    format!("{}:{}", settings.server.host, settings.server.port)
}

pub fn get_provider_base_url() -> String {
    SETTINGS.read().unwrap().provider.base_url.clone()
}

pub fn get_provider_timeout() -> Duration {
    Duration::from_secs(SETTINGS.read().unwrap().provider.timeout_secs)
}

// API key comes from the environment, not the config file, with the
// provider's public guest credentials as fallback
pub fn get_provider_api_key() -> String {
    dotenv().ok();
    env::var("TRADING_ECONOMICS_API_KEY").unwrap_or_else(|_| "guest:guest".to_string())
}

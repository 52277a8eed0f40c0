mod config;

pub use config::{CacheConfig, Config, ConfigError, GatewayConfig};

pub const DEFAULT_CONFIG_PATH: &str = "~/.config/thub/config.toml";

/// Resolve a network shorthand to its public API, or return the URL as given.
pub fn parse_with_default_api(api: &str) -> &str {
    match api {
        "mainnet" | "m" => "https://api.multiversx.com",
        "testnet" | "t" => "https://testnet-api.multiversx.com",
        "devnet" | "d" => "https://devnet-api.multiversx.com",
        "local" | "l" => "http://127.0.0.1:8085",
        _ => api,
    }
}

pub fn default_config_path() -> String {
    shellexpand::tilde(DEFAULT_CONFIG_PATH).to_string()
}

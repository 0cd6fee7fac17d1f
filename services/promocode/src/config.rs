use serde::Deserialize;

use promocode_core::config::Config;

/// Promo code service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    /// Interface to bind (default `0.0.0.0`). Env var: `PROMOCODE_HOST`.
    #[serde(default = "default_host")]
    pub promocode_host: String,
    /// TCP port for the HTTP server (default 5000). Env var: `PROMOCODE_PORT`.
    #[serde(default = "default_port")]
    pub promocode_port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

fn default_port() -> u16 {
    5000
}

impl Config for ServiceConfig {}

impl ServiceConfig {
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.promocode_host, self.promocode_port)
    }
}

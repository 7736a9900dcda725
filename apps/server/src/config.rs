use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let raw_addr =
            std::env::var("PS_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let listen_addr: SocketAddr = raw_addr
            .parse()
            .with_context(|| format!("Invalid PS_LISTEN_ADDR: {}", raw_addr))?;
        let cors_allow = std::env::var("PS_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("PS_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

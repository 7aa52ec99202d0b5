//! Runtime configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

/// Server configuration, read once at startup after `dotenvy::dotenv()`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to (`BIND_ADDR`, default 0.0.0.0:3000)
    pub bind_addr: SocketAddr,
    /// Directory holding persisted state such as the theme flag
    /// (`STATE_DIR`, default `data`)
    pub state_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .context("BIND_ADDR is not a valid socket address")?;

        let state_dir = std::env::var("STATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        Ok(Self {
            bind_addr,
            state_dir,
        })
    }
}

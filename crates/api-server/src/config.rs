use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub data_dir: PathBuf,
    /// Frontend origin allowed by CORS; unset means any origin (dev mode).
    pub frontend_origin: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let data_dir: PathBuf = env::var("DATA_DIR")
            .unwrap_or_else(|_| "data".to_string())
            .into();
        let frontend_origin = env::var("FRONTEND_ORIGIN").ok();

        bind_addr
            .parse::<std::net::SocketAddr>()
            .with_context(|| format!("invalid BIND_ADDR '{bind_addr}'"))?;

        Ok(ServerConfig {
            bind_addr,
            data_dir,
            frontend_origin,
        })
    }
}

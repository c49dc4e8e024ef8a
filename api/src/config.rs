use analysis_system::gemini_service::{DEFAULT_API_BASE, DEFAULT_MODEL};
use anyhow::Result;
use std::net::SocketAddr;

pub const PORT: u16 = 3000;
const DEFAULT_MAX_UPLOAD_MB: usize = 20;

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub max_upload_bytes: usize,
}

impl Config {
    /// Reads configuration from the process environment. `.env` should already
    /// have been loaded by the caller.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("GEMINI_API_KEY")
            .ok_or_else(|| anyhow::anyhow!("GEMINI_API_KEY environment variable not set"))?;

        let max_upload_mb = match non_empty("MAX_UPLOAD_MB") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                anyhow::anyhow!("MAX_UPLOAD_MB must be a whole number of megabytes, got {raw:?}")
            })?,
            None => DEFAULT_MAX_UPLOAD_MB,
        };

        Ok(Self {
            api_key,
            model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: non_empty("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            max_upload_bytes: max_upload_mb * 1024 * 1024,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], PORT))
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}

use color_eyre::eyre::{eyre, WrapErr};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://petrodashbackend.onrender.com";

/// Upper bound on the number of wells requested from the backend.
pub const MAX_POZOS: usize = 32817;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the wells API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub max_wells: usize,
}

impl ApiConfig {
    /// Builds the configuration from a variable lookup. Blank values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> color_eyre::eyre::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let base_url = get("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_key = get("API_KEY");

        let timeout_secs = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .wrap_err_with(|| format!("REQUEST_TIMEOUT_SECS must be a number, got {raw:?}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(eyre!("REQUEST_TIMEOUT_SECS must be greater than zero"));
        }

        let max_wells = match get("MAX_POZOS") {
            Some(raw) => raw
                .parse::<usize>()
                .wrap_err_with(|| format!("MAX_POZOS must be a number, got {raw:?}"))?,
            None => MAX_POZOS,
        };

        Ok(Self {
            base_url,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
            max_wells,
        })
    }
}

/// Initializes the application configuration from `.env` and the process
/// environment
pub fn init_app_config() -> color_eyre::eyre::Result<ApiConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    ApiConfig::from_lookup(|key| env::var(key).ok())
}

/// Gets the directory used for the interactive session log
pub fn get_log_dir() -> PathBuf {
    env::var("LOG_DIR").map_or_else(|_| PathBuf::from("./logs"), PathBuf::from)
}

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

pub const DEFAULT_SEARCH_URL: &str = "https://www.detik.com/search/searchall";
pub const DEFAULT_TRENDING_URL: &str = "https://explore-api.detik.com/trending";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/244.178.44.111 Safari/537.36";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub search_url: String,
    pub trending_url: String,
    pub user_agent: String,
    pub fetch_timeout: Duration,
    pub default_pages: u32,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for
    /// missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "127.0.0.1");
        let port = var("PORT", "8080");
        let port = port.parse::<u16>().map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let timeout_secs = var("FETCH_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .map_err(|e| AppError::Config(format!("Invalid fetch timeout: {}", e)))?;
        if timeout_secs == 0 {
            return Err(AppError::Config("Fetch timeout must be at least 1 second".to_string()));
        }

        let default_pages = var("DEFAULT_PAGES", "1")
            .parse::<u32>()
            .map_err(|e| AppError::Config(format!("Invalid default page count: {}", e)))?;
        if default_pages == 0 {
            return Err(AppError::Config("Default page count must be at least 1".to_string()));
        }

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            search_url: var("SEARCH_URL", DEFAULT_SEARCH_URL),
            trending_url: var("TRENDING_URL", DEFAULT_TRENDING_URL),
            user_agent: var("USER_AGENT", DEFAULT_USER_AGENT),
            fetch_timeout: Duration::from_secs(timeout_secs),
            default_pages,
        })
    }
}

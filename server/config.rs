use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ROUTE_TIMEOUT_MS: u64 = 2000;

/// Server settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON road map to seed the network with; the built-in map when unset
    pub seed_file: Option<PathBuf>,
    /// Directory of static UI files served at `/`
    pub static_dir: Option<PathBuf>,
    pub route_timeout: Duration,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT`, `SEED_FILE`, `STATIC_DIR` and `ROUTE_TIMEOUT_MS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = non_empty("PORT").map_or(DEFAULT_PORT, |p| {
            p.parse::<u16>().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT {p:?}, using {DEFAULT_PORT}");
                DEFAULT_PORT
            })
        });

        let timeout_ms = non_empty("ROUTE_TIMEOUT_MS").map_or(DEFAULT_ROUTE_TIMEOUT_MS, |t| {
            t.parse::<u64>().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid ROUTE_TIMEOUT_MS {t:?}, using {DEFAULT_ROUTE_TIMEOUT_MS}");
                DEFAULT_ROUTE_TIMEOUT_MS
            })
        });

        Self {
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            seed_file: non_empty("SEED_FILE").map(PathBuf::from),
            static_dir: non_empty("STATIC_DIR").map(PathBuf::from),
            route_timeout: Duration::from_millis(timeout_ms),
        }
    }
}

use std::{env, fmt::Display, net::SocketAddr, str::FromStr, time::Duration};

use tracing::{info, warn};

pub const DEFAULT_API_BASE: &str = "https://wholesellerai-production.up.railway.app";

pub struct Config {
    pub api_base: String,
    pub bind: SocketAddr,
    pub workers: usize,
    pub http_timeout: Duration,
}

impl Config {
    pub fn load() -> Self {
        Self {
            api_base: try_load::<String>("PROSPECTOR_API_BASE", DEFAULT_API_BASE)
                .trim_end_matches('/')
                .to_string(),
            bind: try_load("PROSPECTOR_BIND", "127.0.0.1:3000"),
            workers: try_load("PROSPECTOR_WORKERS", "8"),
            http_timeout: Duration::from_secs(try_load("PROSPECTOR_HTTP_TIMEOUT_SECS", "30")),
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Reads `key` from the environment, falling back to `default` when it is
/// missing or does not parse.
fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            parse_default(key, default)
        }
    }
}

fn parse_default<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    match default.parse() {
        Ok(value) => value,
        // Defaults are literals in this file; reaching this is a programming error.
        Err(e) => panic!("default for {key} does not parse: {e}"),
    }
}

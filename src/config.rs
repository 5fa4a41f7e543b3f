use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Artificial delay around login and vote submission.
    pub latency_ms: u64,
    pub roster_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            latency_ms: try_load("OSIS_LATENCY_MS", 0),
            roster_path: var("OSIS_ROSTER").ok().map(PathBuf::from),
        }
    }

    /// Command-line flags win over the environment.
    pub fn with_overrides(mut self, latency_ms: Option<u64>, roster_path: Option<PathBuf>) -> Self {
        if let Some(latency_ms) = latency_ms {
            self.latency_ms = latency_ms;
        }
        if roster_path.is_some() {
            self.roster_path = roster_path;
        }
        self
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        info!("Environment variable {key} not set");
    })
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    let raw = match var(key) {
        Ok(raw) => raw,
        Err(()) => {
            info!("{key} not set, using default: {default}");
            return default;
        }
    };

    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

use std::env;

use log::{info, warn};

use crate::error::ClientResult;
use crate::storage::KeyValueStore;

pub const LOCAL_BASE_URL: &str = "http://localhost:8080";
pub const REMOTE_BASE_URL: &str = "https://unfair-skiagraphic-miranda.ngrok-free.dev";

/// Store key consulted before the host-name check.
pub const BASE_URL_OVERRIDE_KEY: &str = "apiBaseUrl";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Remote,
}

impl Environment {
    pub fn for_host(host: &str) -> Environment {
        match host.trim().to_ascii_lowercase().as_str() {
            "localhost" | "127.0.0.1" => Environment::Local,
            _ => Environment::Remote,
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Local => LOCAL_BASE_URL,
            Environment::Remote => REMOTE_BASE_URL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn for_host(host: &str) -> Self {
        Self::new(Environment::for_host(host).base_url())
    }

    /// Host-name check, unless an override has been stored.
    pub fn resolve(host: &str, store: &dyn KeyValueStore) -> ClientResult<Self> {
        match store.get(BASE_URL_OVERRIDE_KEY)? {
            Some(url) if !url.trim().is_empty() => {
                info!("Using stored base URL override: {}", url);
                Ok(Self::new(url))
            }
            _ => Ok(Self::for_host(host)),
        }
    }

    /// Reads `.env` then `RIDESHARE_API_URL`, falling back to
    /// `RIDESHARE_HOST` and finally the local backend.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        if let Ok(url) = env::var("RIDESHARE_API_URL") {
            if !url.trim().is_empty() {
                return Self::new(url);
            }
            warn!("RIDESHARE_API_URL is empty, ignoring");
        }

        let host = env::var("RIDESHARE_HOST").unwrap_or_else(|_| {
            info!("RIDESHARE_HOST not set, using default: localhost");
            "localhost".to_string()
        });
        Self::for_host(&host)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

pub fn set_base_url_override(store: &dyn KeyValueStore, url: &str) -> ClientResult<()> {
    info!("Base URL override set to {}", url);
    store.set(BASE_URL_OVERRIDE_KEY, url.trim())
}

pub fn clear_base_url_override(store: &dyn KeyValueStore) -> ClientResult<()> {
    info!("Base URL override cleared");
    store.remove(BASE_URL_OVERRIDE_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<F: FnOnce()>(api_url: Option<&str>, host: Option<&str>, check: F) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for (key, value) in [("RIDESHARE_API_URL", api_url), ("RIDESHARE_HOST", host)] {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
        check();
        env::remove_var("RIDESHARE_API_URL");
        env::remove_var("RIDESHARE_HOST");
    }

    #[test]
    fn env_url_wins_and_is_trimmed() {
        with_env(Some("http://rides.internal:9090/"), Some("localhost"), || {
            assert_eq!(ClientConfig::from_env().base_url(), "http://rides.internal:9090");
        });
    }

    #[test]
    fn empty_env_url_falls_back_to_host() {
        with_env(Some("  "), Some("rides.example.org"), || {
            assert_eq!(ClientConfig::from_env().base_url(), REMOTE_BASE_URL);
        });
    }

    #[test]
    fn unset_env_uses_local_backend() {
        with_env(None, None, || {
            assert_eq!(ClientConfig::from_env().base_url(), LOCAL_BASE_URL);
        });
    }

    #[test]
    fn local_hosts_use_local_backend() {
        assert_eq!(ClientConfig::for_host("localhost").base_url(), LOCAL_BASE_URL);
        assert_eq!(ClientConfig::for_host("127.0.0.1").base_url(), LOCAL_BASE_URL);
        assert_eq!(ClientConfig::for_host("rides.example.org").base_url(), REMOTE_BASE_URL);
    }

    #[test]
    fn override_beats_host_check() {
        let store = MemoryStore::new();
        set_base_url_override(&store, "http://10.0.0.5:9000/").unwrap();
        let config = ClientConfig::resolve("localhost", &store).unwrap();
        assert_eq!(config.base_url(), "http://10.0.0.5:9000");

        clear_base_url_override(&store).unwrap();
        let config = ClientConfig::resolve("localhost", &store).unwrap();
        assert_eq!(config.base_url(), LOCAL_BASE_URL);
    }

    #[test]
    fn url_joins_single_slash() {
        let config = ClientConfig::new("http://localhost:8080/");
        assert_eq!(config.url("/rides/all"), "http://localhost:8080/rides/all");
        assert_eq!(config.url("rides/all"), "http://localhost:8080/rides/all");
    }
}

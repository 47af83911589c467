/// Runtime configuration for the content layer
use std::time::Duration;

/// Worker endpoint used by production builds
pub const DEFAULT_API_BASE_URL: &str = "https://content-worker.workers.dev";

/// Host names that select the development backend
const DEVELOPMENT_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Which physical backend every storage call is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local storage shared by the tabs of one browser
    Development,
    /// HTTP calls against the worker
    Production,
}

impl Environment {
    /// Production iff the host is neither `localhost` nor `127.0.0.1`
    pub fn from_hostname(host: &str) -> Self {
        if DEVELOPMENT_HOSTS.contains(&host) {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Configuration handed to the storage adapter and sync layer
#[derive(Debug, Clone)]
pub struct ContentConfig {
    pub environment: Environment,
    /// Base URL of the worker, without the `/api` suffix
    pub api_base_url: String,
    /// Upper bound for one worker request
    pub request_timeout: Duration,
    /// Gap between clearing and rewriting page keys during a development save
    pub save_pause: Duration,
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig {
            environment: Environment::Development,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(8),
            save_pause: Duration::from_millis(50),
        }
    }
}

impl ContentConfig {
    /// Configuration for a page served from `host`
    pub fn for_host(host: &str) -> Self {
        ContentConfig {
            environment: Environment::from_hostname(host),
            ..Default::default()
        }
    }

    pub fn production() -> Self {
        ContentConfig {
            environment: Environment::Production,
            ..Default::default()
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_save_pause(mut self, pause: Duration) -> Self {
        self.save_pause = pause;
        self
    }
}

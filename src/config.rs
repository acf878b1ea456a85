use std::env;

/// Runtime configuration for the dashboard, read from the environment.
pub struct Config {
    /// Base URL of the property API backend.
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_base_url = env::var("DASHBOARD_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());

        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.parse()?,
            Err(_) => 10,
        };

        Ok(Self {
            api_base_url,
            request_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_backend() {
        env::remove_var("DASHBOARD_API_URL");
        env::remove_var("REQUEST_TIMEOUT_SECS");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout_secs, 10);
    }
}

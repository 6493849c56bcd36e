use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Distance-matrix upstream credential. Absent means the distance endpoint
    /// serves fallback estimates only.
    pub maps_api_key: Option<String>,
    pub maps_base_url: Option<String>,
    /// Flight-search OAuth client credentials. Both must be present for the
    /// live upstream to be used.
    pub flights_api_key: Option<String>,
    pub flights_api_secret: Option<String>,
    pub flights_base_url: Option<String>,
    pub attractions_api_key: Option<String>,
    pub attractions_base_url: Option<String>,
    pub redis_url: Option<String>,
    pub response_cache_ttl: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            maps_api_key: env::var("MAPS_API_KEY").ok(),
            maps_base_url: env::var("MAPS_BASE_URL").ok(),
            flights_api_key: env::var("FLIGHTS_API_KEY").ok(),
            flights_api_secret: env::var("FLIGHTS_API_SECRET").ok(),
            flights_base_url: env::var("FLIGHTS_BASE_URL").ok(),
            attractions_api_key: env::var("ATTRACTIONS_API_KEY").ok(),
            attractions_base_url: env::var("ATTRACTIONS_BASE_URL").ok(),
            redis_url: env::var("REDIS_URL").ok(),
            response_cache_ttl: env::var("RESPONSE_CACHE_TTL")
                .unwrap_or_else(|_| DEFAULT_RESPONSE_CACHE_TTL_SECONDS.to_string())
                .parse()
                .map_err(|_| "Invalid RESPONSE_CACHE_TTL")?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Flight credentials are only usable as a pair. A key without a secret
    /// (or the reverse) is treated as unconfigured and logged by the caller.
    pub fn flight_credentials(&self) -> Option<(&str, &str)> {
        match (
            self.flights_api_key.as_deref(),
            self.flights_api_secret.as_deref(),
        ) {
            (Some(key), Some(secret)) => Some((key, secret)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            "HOST",
            "PORT",
            "MAPS_API_KEY",
            "MAPS_BASE_URL",
            "FLIGHTS_API_KEY",
            "FLIGHTS_API_SECRET",
            "FLIGHTS_BASE_URL",
            "ATTRACTIONS_API_KEY",
            "ATTRACTIONS_BASE_URL",
            "REDIS_URL",
            "RESPONSE_CACHE_TTL",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn defaults_when_env_is_empty() {
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, 3000);
        assert!(config.maps_api_key.is_none());
        assert!(config.redis_url.is_none());
        assert_eq!(
            config.response_cache_ttl,
            DEFAULT_RESPONSE_CACHE_TTL_SECONDS
        );
    }

    #[test]
    #[serial]
    fn invalid_port_is_rejected() {
        clear_env();
        env::set_var("PORT", "not-a-port");

        assert!(Config::from_env().is_err());

        env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn flight_credentials_require_both_halves() {
        clear_env();
        env::set_var("FLIGHTS_API_KEY", "key-only");

        let config = Config::from_env().unwrap();
        assert!(config.flight_credentials().is_none());

        env::set_var("FLIGHTS_API_SECRET", "secret");
        let config = Config::from_env().unwrap();
        assert_eq!(config.flight_credentials(), Some(("key-only", "secret")));

        clear_env();
    }
}

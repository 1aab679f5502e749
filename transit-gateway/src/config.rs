//! Environment-based configuration.
//!
//! Configuration is loaded once at startup and never changes afterwards.
//! Every failed field is reported, not just the first one found.

/// Default listen port when `PORT` is unset.
const DEFAULT_PORT: u16 = 3000;

/// Immutable process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on.
    pub port: u16,
    /// Base URL of the upstream SL API.
    pub api_url: String,
    /// API key for the realtime departures endpoint.
    pub api_key: String,
    /// API key for the typeahead (stop lookup) endpoint.
    pub stop_lookup_api_key: String,
}

/// Configuration validation failure, listing every bad field.
#[derive(Debug, thiserror::Error)]
#[error("invalid configuration: {}", problems.join("; "))]
pub struct ConfigError {
    pub problems: Vec<String>,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Reads `PORT` (optional, default 3000), `API_URL` (required, absolute
    /// URL), `API_KEY` (required), `STOP_LOOKUP_API_KEY` (required).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup (for testing).
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut problems = Vec::new();

        let port = match var("PORT") {
            None => Some(DEFAULT_PORT),
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) => Some(port),
                Err(_) => {
                    problems.push(format!("PORT: not a valid port number: {raw:?}"));
                    None
                }
            },
        };

        let api_url = match var("API_URL") {
            None => {
                problems.push("API_URL: missing".to_string());
                None
            }
            Some(raw) => match reqwest::Url::parse(&raw) {
                Ok(_) => Some(raw),
                Err(e) => {
                    problems.push(format!("API_URL: not an absolute URL: {e}"));
                    None
                }
            },
        };

        let api_key = match var("API_KEY").filter(|k| !k.is_empty()) {
            Some(key) => Some(key),
            None => {
                problems.push("API_KEY: missing".to_string());
                None
            }
        };

        let stop_lookup_api_key = match var("STOP_LOOKUP_API_KEY").filter(|k| !k.is_empty()) {
            Some(key) => Some(key),
            None => {
                problems.push("STOP_LOOKUP_API_KEY: missing".to_string());
                None
            }
        };

        match (port, api_url, api_key, stop_lookup_api_key) {
            (Some(port), Some(api_url), Some(api_key), Some(stop_lookup_api_key)) => Ok(Self {
                port,
                api_url,
                api_key,
                stop_lookup_api_key,
            }),
            _ => Err(ConfigError { problems }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_port_when_unset() {
        let config = Config::from_vars(vars(&[
            ("API_URL", "https://x.test"),
            ("API_KEY", "k"),
            ("STOP_LOOKUP_API_KEY", "sk"),
        ]))
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.api_url, "https://x.test");
        assert_eq!(config.api_key, "k");
        assert_eq!(config.stop_lookup_api_key, "sk");
    }

    #[test]
    fn parses_explicit_port() {
        let config = Config::from_vars(vars(&[
            ("PORT", "8080"),
            ("API_URL", "https://x.test"),
            ("API_KEY", "k"),
            ("STOP_LOOKUP_API_KEY", "sk"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
    }

    #[test]
    fn rejects_relative_api_url() {
        let err = Config::from_vars(vars(&[
            ("API_URL", "not-a-url"),
            ("API_KEY", "k"),
            ("STOP_LOOKUP_API_KEY", "sk"),
        ]))
        .unwrap_err();

        assert_eq!(err.problems.len(), 1);
        assert!(err.problems[0].starts_with("API_URL"));
    }

    #[test]
    fn reports_every_missing_field() {
        let err = Config::from_vars(vars(&[])).unwrap_err();

        assert_eq!(err.problems.len(), 3);
        assert!(err.to_string().contains("API_URL"));
        assert!(err.to_string().contains("API_KEY"));
        assert!(err.to_string().contains("STOP_LOOKUP_API_KEY"));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = Config::from_vars(vars(&[
            ("PORT", "abc"),
            ("API_URL", "https://x.test"),
            ("API_KEY", "k"),
            ("STOP_LOOKUP_API_KEY", "sk"),
        ]))
        .unwrap_err();

        assert!(err.problems.iter().any(|p| p.starts_with("PORT")));
    }

    #[test]
    fn rejects_empty_api_key() {
        let err = Config::from_vars(vars(&[
            ("API_URL", "https://x.test"),
            ("API_KEY", ""),
            ("STOP_LOOKUP_API_KEY", "sk"),
        ]))
        .unwrap_err();

        assert!(err.problems.iter().any(|p| p.starts_with("API_KEY")));
    }
}

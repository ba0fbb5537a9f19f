//! Service configuration loaded from environment variables.

/// Port used when `PORT` is absent or unusable.
pub const DEFAULT_PORT: u16 = 3000;

const BIND_HOST: &str = "0.0.0.0";

/// Listener configuration.
///
/// Reads from environment variables:
/// - `PORT` — listen port (default: `3000`)
///
/// Empty, non-numeric or out-of-range values fall back to the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{BIND_HOST}:{}", self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_port(value: Option<&'static str>) -> Config {
        Config::from_lookup(|key| match key {
            "PORT" => value.map(str::to_string),
            _ => None,
        })
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_missing_port_uses_default() {
        assert_eq!(lookup_port(None).port, 3000);
    }

    #[test]
    fn test_explicit_port() {
        assert_eq!(lookup_port(Some("8080")).port, 8080);
    }

    #[test]
    fn test_invalid_port_uses_default() {
        assert_eq!(lookup_port(Some("")).port, 3000);
        assert_eq!(lookup_port(Some("http")).port, 3000);
        assert_eq!(lookup_port(Some("70000")).port, 3000);
        assert_eq!(lookup_port(Some("-1")).port, 3000);
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config { port: 8080 };
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_addr_default() {
        let config = Config::default();
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }
}

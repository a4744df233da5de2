use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SESSION: &str = "mock-session";

/// Mock server settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `PORT`
    pub port: u16,
    /// `ADE_MOCK_SESSION`: the only session id the server accepts.
    pub session: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            session: DEFAULT_SESSION.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            session: lookup("ADE_MOCK_SESSION")
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.session),
        }
    }
}

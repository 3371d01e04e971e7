/// Environment variable holding the API base URL. Empty means same origin.
pub const API_URL_VAR: &str = "ROSTER_API_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    /// Uses the value baked in at build time.
    pub fn new() -> Self {
        Self {
            api_base_url: option_env!("ROSTER_API_URL").unwrap_or_default().to_string(),
        }
    }

    /// Runtime override, falling back to the build-time value. Always the
    /// fallback in the browser, which has no process environment.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_VAR) {
            Ok(api_base_url) => Self { api_base_url },
            Err(_) => Self::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

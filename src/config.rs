/// Runtime configuration loaded from the environment
///
/// The API key comes from `API_KEY` (a `.env` file in the working
/// directory is honoured). It is not validated: a missing key is sent
/// as an empty header and surfaces as an authorization failure.
use std::fmt;
use std::time::Duration;

/// Default photo search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.pexels.com/v1/search";

/// Fixed search term
pub const SEARCH_QUERY: &str = "mobile wallpaper";

/// Fixed orientation filter
pub const SEARCH_ORIENTATION: &str = "portrait";

/// HTTP client timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const API_KEY_VAR: &str = "API_KEY";
const ENDPOINT_VAR: &str = "PIXEL_WALLPAPERS_ENDPOINT";

/// Opaque authorization token. Never printed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Raw header value
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("ApiKey(<empty>)")
        } else {
            f.write_str("ApiKey(<redacted>)")
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: ApiKey,
    pub endpoint: String,
}

impl Config {
    /// Load `.env` (if any) and read configuration from the process environment
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(err) if err.not_found() => {}
            Err(err) => log::warn!("Ignoring unreadable .env file: {}", err),
        }

        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = ApiKey::new(lookup(API_KEY_VAR).unwrap_or_default());
        if api_key.is_empty() {
            log::warn!("{} is not set; search requests will be unauthenticated", API_KEY_VAR);
        }

        let endpoint = lookup(ENDPOINT_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self { api_key, endpoint }
    }
}

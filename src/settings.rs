//! Immutable client configuration.
//!
//! A [`Settings`] value is built once (programmatically or from the environment)
//! and handed to [`crate::AirQualityHistory::new`]. Nothing in the crate reads
//! process-wide state after that point.

use bon::Builder;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openaq.org/v3";

const API_KEY_VAR: &str = "OPENAQ_API_TOKEN";
const BASE_URL_VAR: &str = "OPENAQ_BASE_URL";
const TIMEOUT_VAR: &str = "REQUEST_TIMEOUT";

/// Connection settings for the OpenAQ v3 API.
///
/// # Examples
///
/// ```
/// use openaq_history::Settings;
/// use std::time::Duration;
///
/// let settings = Settings::builder()
///     .api_key("my-key".to_string())
///     .series_timeout(Duration::from_secs(30))
///     .build();
/// assert_eq!(settings.base_url, "https://api.openaq.org/v3");
/// assert_eq!(settings.series_timeout, Duration::from_secs(30));
/// ```
#[derive(Clone, Builder)]
pub struct Settings {
    /// Sent as `X-API-Key` on every request. Required; checked when the client is built.
    pub api_key: Option<String>,
    #[builder(default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,
    /// Timeout for the coordinate proximity search.
    #[builder(default = Duration::from_secs(10))]
    pub proximity_timeout: Duration,
    /// Timeout for the per-country station listing used by name matching.
    #[builder(default = Duration::from_secs(15))]
    pub catalog_timeout: Duration,
    /// Timeout for the station detail (sensor list) lookup.
    #[builder(default = Duration::from_secs(10))]
    pub station_timeout: Duration,
    /// Timeout for the monthly rollup request.
    #[builder(default = Duration::from_secs(20))]
    pub series_timeout: Duration,
    /// Bypass any system or `HTTP_PROXY` proxy configuration.
    #[builder(default)]
    pub no_proxy: bool,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("proximity_timeout", &self.proximity_timeout)
            .field("catalog_timeout", &self.catalog_timeout)
            .field("station_timeout", &self.station_timeout)
            .field("series_timeout", &self.series_timeout)
            .field("no_proxy", &self.no_proxy)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::builder().build()
    }
}

impl Settings {
    /// Reads settings from the environment, loading a `.env` file first if one exists.
    ///
    /// * `OPENAQ_API_TOKEN` - API key.
    /// * `OPENAQ_BASE_URL` - Overrides the API root.
    /// * `REQUEST_TIMEOUT` - Seconds (fractional allowed); applied to every endpoint.
    ///
    /// Unparseable timeouts are ignored with a warning and the defaults are kept.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("Ignoring unreadable .env file: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Settings::builder()
            .maybe_api_key(lookup(API_KEY_VAR))
            .maybe_base_url(lookup(BASE_URL_VAR))
            .build();

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            match raw.trim().parse::<f64>().ok().filter(|s| s.is_finite() && *s > 0.0) {
                Some(secs) => settings = settings.with_timeout(Duration::from_secs_f64(secs)),
                None => log::warn!("Ignoring invalid {}='{}'", TIMEOUT_VAR, raw),
            }
        }
        settings
    }

    /// Returns a copy with every endpoint timeout set to `timeout`.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            proximity_timeout: timeout,
            catalog_timeout: timeout,
            station_timeout: timeout,
            series_timeout: timeout,
            ..self
        }
    }

    /// The API key, if it is present and not blank.
    pub(crate) fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

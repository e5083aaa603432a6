//! Main entry point: PM2.5 history for a human-entered location.
//!
//! A query runs strictly in sequence: time window, station, sensor, monthly rows,
//! aggregation. The first failing stage aborts the query; nothing is retried and
//! nothing is cached between queries.

use crate::api::client::OpenAqClient;
use crate::api::types::{MonthlyRecord, SensorId, StationId};
use crate::error::HistoryError;
use crate::locations::resolver;
use crate::sensors;
use crate::series::aggregate::aggregate;
use crate::series::fetcher;
use crate::series::summary::HistoricalSeries;
use crate::settings::Settings;
use crate::window::{compute_window, TimeWindow};
use bon::bon;
use log::info;

pub const DEFAULT_MONTHS: i32 = 12;
pub const DEFAULT_COUNTRY: &str = "IN";

/// Client for monthly PM2.5 history from OpenAQ.
///
/// Holds no per-query state, so one instance can serve concurrent queries.
///
/// # Examples
///
/// ```rust,no_run
/// # use openaq_history::{AirQualityHistory, HistoryError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), HistoryError> {
/// let client = AirQualityHistory::from_env()?;
///
/// let series = client
///     .history()
///     .location("Kolkata")
///     .months(6)
///     .call()
///     .await?;
///
/// for month in &series {
///     println!("{}: avg {} µg/m³", month.month, month.average);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AirQualityHistory {
    client: OpenAqClient,
}

#[bon]
impl AirQualityHistory {
    /// Creates a client from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ResolutionError::MissingApiKey`] (wrapped) if `settings`
    /// carries no usable API key, and [`crate::FetchError::ClientBuild`] if the
    /// HTTP client cannot be initialised.
    pub fn new(settings: Settings) -> Result<Self, HistoryError> {
        Ok(Self {
            client: OpenAqClient::new(settings)?,
        })
    }

    /// Creates a client from [`Settings::from_env`].
    pub fn from_env() -> Result<Self, HistoryError> {
        Self::new(Settings::from_env())
    }

    pub fn client(&self) -> &OpenAqClient {
        &self.client
    }

    /// Monthly PM2.5 summaries for the last `months` calendar months at the
    /// station resolved from `location`.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(&str)`: **Required.** A place name (matched within `country`) or `"lat,lon"`.
    /// * `.months(i32)`: Optional. Number of calendar months including the current one. Defaults to `12`; values below 1 count as 1.
    /// * `.country(&str)`: Optional. ISO country code for name matching. Defaults to `"IN"`.
    ///
    /// # Errors
    ///
    /// [`HistoryError::Resolution`] when the location or its PM2.5 sensor cannot be
    /// found, [`HistoryError::Fetch`] when any request fails or a labelled monthly
    /// row lacks required statistics.
    #[builder]
    pub async fn history(
        &self,
        location: &str,
        months: Option<i32>,
        country: Option<&str>,
    ) -> Result<HistoricalSeries, HistoryError> {
        let window = compute_window(months.unwrap_or(DEFAULT_MONTHS));
        let country = country.unwrap_or(DEFAULT_COUNTRY);
        self.history_within(location, country, &window).await
    }

    pub(crate) async fn history_within(
        &self,
        location: &str,
        country: &str,
        window: &TimeWindow,
    ) -> Result<HistoricalSeries, HistoryError> {
        info!(
            "PM2.5 history for '{}' (iso={}) over {}",
            location, country, window
        );
        let station = self.resolve_location(location, country).await?;
        let sensor = self.select_pm25_sensor(station).await?;
        let records = self.fetch_monthly_series(sensor, window).await?;
        let series = aggregate(&records)?;
        info!(
            "Aggregated {} rows into {} months for '{}'",
            records.len(),
            series.len(),
            location
        );
        Ok(series)
    }

    /// See [`resolver::resolve_location`].
    pub async fn resolve_location(
        &self,
        location: &str,
        country: &str,
    ) -> Result<StationId, HistoryError> {
        resolver::resolve_location(&self.client, location, country).await
    }

    /// See [`sensors::select_pm25_sensor`].
    pub async fn select_pm25_sensor(&self, station: StationId) -> Result<SensorId, HistoryError> {
        sensors::select_pm25_sensor(&self.client, station).await
    }

    /// See [`fetcher::fetch_monthly_series`]. Only the first page is read.
    pub async fn fetch_monthly_series(
        &self,
        sensor: SensorId,
        window: &TimeWindow,
    ) -> Result<Vec<MonthlyRecord>, HistoryError> {
        Ok(fetcher::fetch_monthly_series(&self.client, sensor, window).await?)
    }
}

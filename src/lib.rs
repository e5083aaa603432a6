//! Monthly PM2.5 history for a city or coordinate pair, backed by the OpenAQ v3 API.
//!
//! The pipeline resolves a location to a monitoring station, picks the station's
//! PM2.5 sensor, fetches its provider-computed monthly rollups and folds them into
//! a chronologically ordered [`HistoricalSeries`].

mod api;
mod error;
mod history;
mod locations;
mod sensors;
mod series;
mod settings;
mod window;

#[cfg(test)]
mod test_support;

pub use error::HistoryError;
pub use history::*;

pub use api::client::OpenAqClient;
pub use api::error::FetchError;
pub use api::types::{
    Coverage, Found, Location, Meta, MonthlyRecord, Paged, Parameter, Period, Sensor, SensorId,
    StationId, Summary, Timestamp,
};

pub use locations::error::ResolutionError;
pub use locations::query::{LatLon, LocationQuery};
pub use locations::resolver::{
    find_station_by_name, resolve_coordinates, resolve_location, CATALOG_LIMIT, SEARCH_RADIUS_M,
};

pub use sensors::{first_pm25_sensor, select_pm25_sensor, PM25_PARAMETER_ID, PM25_PARAMETER_NAME};

pub use series::aggregate::aggregate;
pub use series::fetcher::{fetch_monthly_series, SERIES_LIMIT};
pub use series::summary::{HistoricalSeries, MonthlySummary};

pub use settings::{Settings, DEFAULT_BASE_URL};
pub use window::{compute_window, compute_window_at, TimeWindow};

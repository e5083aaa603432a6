//! Retrieval of monthly rollups for one sensor.
//!
//! Only page 1 (up to [`SERIES_LIMIT`] rows) is requested. When the provider
//! signals more rows the extra pages are not followed; a warning is logged
//! instead. At one row per month the limit covers more than 80 years.

use crate::api::client::OpenAqClient;
use crate::api::error::FetchError;
use crate::api::types::{MonthlyRecord, Paged, SensorId};
use crate::window::TimeWindow;
use log::{info, warn};

pub const SERIES_LIMIT: u32 = 1000;

/// Fetches the monthly rollups of `sensor` within `window`. An empty list is a
/// valid answer.
pub async fn fetch_monthly_series(
    client: &OpenAqClient,
    sensor: SensorId,
    window: &TimeWindow,
) -> Result<Vec<MonthlyRecord>, FetchError> {
    let context = format!("monthly PM2.5 for sensor {} over {}", sensor, window);
    let page: Paged<MonthlyRecord> = client
        .get_json(
            &format!("/sensors/{}/days/monthly", sensor),
            &[
                ("datetime_from", window.from_iso()),
                ("datetime_to", window.to_iso()),
                ("limit", SERIES_LIMIT.to_string()),
                ("page", "1".to_string()),
            ],
            client.settings().series_timeout,
            &context,
        )
        .await?;

    let received = page.results.len();
    if let Some(found) = page.meta.as_ref().and_then(|m| m.found) {
        if found.exceeds(received) {
            warn!(
                "Sensor {} reports more monthly rows than the first page holds ({:?}, got {}); later pages are not fetched",
                sensor, found, received
            );
        }
    }
    info!("Fetched {} monthly rows for sensor {}", received, sensor);
    Ok(page.results)
}

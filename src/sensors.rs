//! Picks the PM2.5 stream of a station.

use crate::api::client::OpenAqClient;
use crate::api::types::{Location, Paged, SensorId, StationId};
use crate::error::HistoryError;
use crate::locations::error::ResolutionError;
use log::info;

/// OpenAQ parameter id for PM2.5.
pub const PM25_PARAMETER_ID: i64 = 2;
pub const PM25_PARAMETER_NAME: &str = "pm25";

/// Fetches the station detail and returns its first PM2.5 sensor.
pub async fn select_pm25_sensor(
    client: &OpenAqClient,
    station: StationId,
) -> Result<SensorId, HistoryError> {
    let context = format!("station {}", station);
    let page: Paged<Location> = client
        .get_json(
            &format!("/locations/{}", station),
            &[],
            client.settings().station_timeout,
            &context,
        )
        .await?;

    let detail = page
        .results
        .first()
        .ok_or(ResolutionError::StationNotFound { station })?;
    let sensor = first_pm25_sensor(detail).ok_or(ResolutionError::NoPm25Sensor { station })?;
    info!("Using PM2.5 sensor {} of station {}", sensor, station);
    Ok(sensor)
}

/// First sensor, in listing order, whose parameter id is PM2.5 or whose
/// parameter name is `pm25`.
pub fn first_pm25_sensor(station: &Location) -> Option<SensorId> {
    station
        .sensors
        .iter()
        .find(|sensor| {
            sensor.parameter.as_ref().is_some_and(|param| {
                param.id == Some(PM25_PARAMETER_ID)
                    || param.name.as_deref() == Some(PM25_PARAMETER_NAME)
            })
        })
        .map(|sensor| sensor.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubResponse, StubServer};

    fn detail(json: &str) -> Location {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_first_pm25_match_wins() {
        let station = detail(
            r#"{"id": 42, "sensors": [
                {"id": 1, "parameter": {"id": 5, "name": "pm10"}},
                {"id": 2, "parameter": {"id": 2, "name": "pm25"}},
                {"id": 3, "parameter": {"id": 2, "name": "pm25"}}
            ]}"#,
        );
        assert_eq!(first_pm25_sensor(&station), Some(SensorId(2)));
    }

    #[test]
    fn test_name_matches_when_id_is_inconsistent() {
        let station = detail(
            r#"{"id": 42, "sensors": [
                {"id": 7, "parameter": {"id": 19, "name": "pm1"}},
                {"id": 8, "parameter": {"id": 9999, "name": "pm25"}}
            ]}"#,
        );
        assert_eq!(first_pm25_sensor(&station), Some(SensorId(8)));
    }

    #[test]
    fn test_id_matches_without_name() {
        let station = detail(r#"{"id": 42, "sensors": [{"id": 4, "parameter": {"id": 2}}]}"#);
        assert_eq!(first_pm25_sensor(&station), Some(SensorId(4)));
    }

    #[test]
    fn test_no_pm25_sensor() {
        let station = detail(
            r#"{"id": 42, "sensors": [{"id": 1, "parameter": {"id": 5, "name": "pm10"}}, {"id": 9}]}"#,
        );
        assert_eq!(first_pm25_sensor(&station), None);
    }

    async fn select_with(body: &'static str) -> (Result<SensorId, HistoryError>, StubServer) {
        let server = StubServer::start(vec![StubResponse::ok("/v3/locations/42", body)]).await;
        let client = OpenAqClient::new(server.settings()).unwrap();
        (select_pm25_sensor(&client, StationId(42)).await, server)
    }

    #[tokio::test]
    async fn test_selects_from_station_detail() {
        let (result, server) = select_with(
            r#"{"results": [{"id": 42, "sensors": [{"id": 77, "parameter": {"id": 2, "name": "pm25"}}]}]}"#,
        )
        .await;
        assert_eq!(result.unwrap(), SensorId(77));
        assert_eq!(server.requests()[0].target, "/v3/locations/42");
    }

    #[tokio::test]
    async fn test_missing_station_is_a_resolution_error() {
        let (result, _server) = select_with(r#"{"results": []}"#).await;
        assert!(matches!(
            result.unwrap_err(),
            HistoryError::Resolution(ResolutionError::StationNotFound { station: StationId(42) })
        ));
    }

    #[tokio::test]
    async fn test_station_without_pm25_is_a_resolution_error() {
        let (result, _server) = select_with(
            r#"{"results": [{"id": 42, "sensors": [{"id": 1, "parameter": {"id": 5, "name": "pm10"}}]}]}"#,
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            HistoryError::Resolution(ResolutionError::NoPm25Sensor { .. })
        ));
    }
}

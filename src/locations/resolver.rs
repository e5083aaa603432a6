//! Maps a human-entered location to a single OpenAQ station.
//!
//! Two strategies exist, chosen by [`LocationQuery::parse`]:
//!
//! * coordinates: nearest station within [`SEARCH_RADIUS_M`] of the point;
//! * name: first station in the country listing whose name or locality contains
//!   the query, case-insensitively. Listing order decides ties; there is no scoring.

use crate::api::client::OpenAqClient;
use crate::api::types::{Location, Paged, StationId};
use crate::error::HistoryError;
use crate::locations::error::ResolutionError;
use crate::locations::query::{LatLon, LocationQuery};
use log::info;

pub const SEARCH_RADIUS_M: u32 = 20_000;
/// Page size of the per-country listing. Only the first page is scanned.
pub const CATALOG_LIMIT: u32 = 1000;

/// Resolves `location` (a place name or `"lat,lon"`) to a station id.
pub async fn resolve_location(
    client: &OpenAqClient,
    location: &str,
    country: &str,
) -> Result<StationId, HistoryError> {
    let station = match LocationQuery::parse(location) {
        LocationQuery::Coordinates(point) => nearest_station(client, point, location).await?,
        LocationQuery::Name(name) => find_station_by_name(client, &name, country).await?,
    };
    info!("Resolved '{}' (iso={}) to station {}", location, country, station);
    Ok(station)
}

/// Resolves a `"lat,lon"` string to the nearest station, rejecting anything
/// that is not a numeric pair.
pub async fn resolve_coordinates(
    client: &OpenAqClient,
    location: &str,
) -> Result<StationId, HistoryError> {
    let point = LatLon::parse(location).ok_or_else(|| ResolutionError::InvalidCoordinates {
        location: location.to_string(),
    })?;
    nearest_station(client, point, location).await
}

async fn nearest_station(
    client: &OpenAqClient,
    point: LatLon,
    location: &str,
) -> Result<StationId, HistoryError> {
    let context = format!("locations near '{}'", location);
    let page: Paged<Location> = client
        .get_json(
            "/locations",
            &[
                ("coordinates", point.to_string()),
                ("radius", SEARCH_RADIUS_M.to_string()),
                ("limit", "1".to_string()),
            ],
            client.settings().proximity_timeout,
            &context,
        )
        .await?;

    page.results
        .first()
        .map(|loc| loc.id)
        .ok_or_else(|| {
            ResolutionError::NoStationNearby {
                location: location.to_string(),
            }
            .into()
        })
}

/// Scans the first [`CATALOG_LIMIT`] stations registered under `country` for a
/// name or locality containing `name`.
pub async fn find_station_by_name(
    client: &OpenAqClient,
    name: &str,
    country: &str,
) -> Result<StationId, HistoryError> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return Err(ResolutionError::EmptyQuery.into());
    }

    let context = format!("locations matching '{}' (iso={})", name, country);
    let page: Paged<Location> = client
        .get_json(
            "/locations",
            &[
                ("iso", country.to_string()),
                ("limit", CATALOG_LIMIT.to_string()),
                ("page", "1".to_string()),
            ],
            client.settings().catalog_timeout,
            &context,
        )
        .await?;

    first_name_match(&page.results, &needle).ok_or_else(|| {
        ResolutionError::NoStationMatch {
            location: name.to_string(),
            country: country.to_string(),
        }
        .into()
    })
}

/// First station whose name or locality contains `needle` (already trimmed and
/// lowercased).
pub(crate) fn first_name_match(stations: &[Location], needle: &str) -> Option<StationId> {
    let contains = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|value| value.to_lowercase().contains(needle))
    };
    stations
        .iter()
        .find(|loc| contains(&loc.name) || contains(&loc.locality))
        .map(|loc| loc.id)
}

//! Typed projections of the OpenAQ v3 response shapes this crate consumes.
//!
//! Every endpoint answers with a `{ meta, results }` envelope. Only the fields
//! the history pipeline reads are modelled; everything else is ignored by serde.
//! Fields the provider is known to omit are `Option`s so that a missing value
//! surfaces as `None` at a well-defined place instead of failing the whole page.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Provider identifier of a monitoring station (an OpenAQ "location").
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

impl StationId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for StationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Provider identifier of a single pollutant stream belonging to a station.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorId(pub u64);

impl SensorId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for SensorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The `{ meta, results }` envelope shared by all v3 list endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paged<T> {
    #[serde(default)]
    pub meta: Option<Meta>,
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    /// Total hits. The API reports either a number or a lower bound such as `">1000"`.
    #[serde(default, deserialize_with = "deserialize_found")]
    pub found: Option<Found>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Found {
    Exactly(u64),
    MoreThan(u64),
}

impl Found {
    /// True when the provider says more results exist than `received`.
    pub fn exceeds(self, received: usize) -> bool {
        match self {
            Found::Exactly(n) => n > received as u64,
            Found::MoreThan(n) => n >= received as u64,
        }
    }
}

fn deserialize_found<'de, D>(deserializer: D) -> Result<Option<Found>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(Found::Exactly(n)),
        Some(Raw::Text(s)) => {
            let s = s.trim();
            match s.strip_prefix('>') {
                Some(bound) => bound.trim().parse().ok().map(Found::MoreThan),
                None => s.parse().ok().map(Found::Exactly),
            }
        }
        None => None,
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A station as listed by `/locations` and `/locations/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub id: StationId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub sensors: Vec<Sensor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sensor {
    pub id: SensorId,
    #[serde(default)]
    pub parameter: Option<Parameter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One row of `/sensors/{id}/days/monthly`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonthlyRecord {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub period: Option<Period>,
    #[serde(default)]
    pub coverage: Option<Coverage>,
    #[serde(default)]
    pub summary: Option<Summary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    #[serde(default)]
    pub datetime_from: Option<Timestamp>,
    #[serde(default)]
    pub datetime_to: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coverage {
    #[serde(default)]
    pub observed_count: Option<f64>,
    #[serde(default)]
    pub expected_count: Option<f64>,
    #[serde(default)]
    pub datetime_from: Option<Timestamp>,
    #[serde(default)]
    pub datetime_to: Option<Timestamp>,
}

/// Kept as text: only the `YYYY-MM` prefix is ever read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Timestamp {
    #[serde(default)]
    pub utc: Option<String>,
    #[serde(default)]
    pub local: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub avg: Option<f64>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_accepts_number_and_lower_bound() {
        let exact: Paged<Location> =
            serde_json::from_str(r#"{"meta":{"page":1,"limit":100,"found":3},"results":[]}"#)
                .unwrap();
        assert_eq!(exact.meta.unwrap().found, Some(Found::Exactly(3)));

        let bound: Paged<Location> =
            serde_json::from_str(r#"{"meta":{"found":">1000"},"results":null}"#).unwrap();
        assert_eq!(bound.meta.unwrap().found, Some(Found::MoreThan(1000)));
        assert!(bound.results.is_empty());
    }

    #[test]
    fn test_found_exceeds_page() {
        assert!(Found::Exactly(1200).exceeds(1000));
        assert!(!Found::Exactly(1000).exceeds(1000));
        assert!(Found::MoreThan(1000).exceeds(1000));
    }

    #[test]
    fn test_location_with_null_sensors_parses() {
        let loc: Location = serde_json::from_str(
            r#"{"id": 8118, "name": "New Delhi", "locality": null, "sensors": null, "timezone": "Asia/Kolkata"}"#,
        )
        .unwrap();
        assert_eq!(loc.id, StationId(8118));
        assert!(loc.sensors.is_empty());
        assert!(loc.locality.is_none());
    }

    #[test]
    fn test_monthly_record_reads_nested_camel_case() {
        let record: MonthlyRecord = serde_json::from_str(
            r#"{
                "value": 41.2,
                "period": {"label": "1 month", "datetimeFrom": {"utc": "2025-03-01T00:00:00Z", "local": "2025-03-01T05:30:00+05:30"}},
                "coverage": {"observedCount": 28, "expectedCount": 31},
                "summary": {"avg": 41.2, "min": 12.0, "max": 98.7}
            }"#,
        )
        .unwrap();
        let from = record.period.unwrap().datetime_from.unwrap().utc.unwrap();
        assert_eq!(from, "2025-03-01T00:00:00Z");
        assert_eq!(record.coverage.unwrap().observed_count, Some(28.0));
        assert_eq!(record.summary.unwrap().max, Some(98.7));
    }
}

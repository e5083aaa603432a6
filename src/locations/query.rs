//! Classification of free-form location input.

use std::fmt;
use std::fmt::{Display, Formatter};

/// A geographical coordinate, latitude first.
///
/// # Examples
///
/// ```
/// use openaq_history::LatLon;
///
/// let kolkata = LatLon(22.59, 88.36);
/// assert_eq!(kolkata.to_string(), "22.59,88.36");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    /// Parses `"lat,lon"`. Both halves are trimmed; anything other than exactly
    /// two numeric tokens yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let (lat, lon) = split_pair(text)?;
        Some(LatLon(lat.parse().ok()?, lon.parse().ok()?))
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

/// How a location string will be resolved to a station.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// Nearest station to a point.
    Coordinates(LatLon),
    /// Case-insensitive substring match against station name or locality.
    Name(String),
}

impl LocationQuery {
    /// A string with exactly one comma whose halves both parse as floats is a
    /// coordinate pair; everything else is treated as a place name.
    ///
    /// # Examples
    ///
    /// ```
    /// use openaq_history::{LatLon, LocationQuery};
    ///
    /// assert_eq!(
    ///     LocationQuery::parse("22.59,88.36"),
    ///     LocationQuery::Coordinates(LatLon(22.59, 88.36))
    /// );
    /// assert_eq!(
    ///     LocationQuery::parse("Kolkata"),
    ///     LocationQuery::Name("Kolkata".to_string())
    /// );
    /// ```
    pub fn parse(location: &str) -> Self {
        match LatLon::parse(location) {
            Some(point) => LocationQuery::Coordinates(point),
            None => LocationQuery::Name(location.to_string()),
        }
    }
}

fn split_pair(text: &str) -> Option<(&str, &str)> {
    let mut parts = text.split(',');
    let first = parts.next()?;
    let second = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first.trim(), second.trim()))
}

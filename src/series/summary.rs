use serde::{Deserialize, Serialize};

/// PM2.5 statistics for one calendar month, in µg/m³.
///
/// The field names follow the JSON shape the surrounding application consumes;
/// the values are raw concentrations, not an official AQI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// `YYYY-MM`.
    pub month: String,
    #[serde(rename = "avg_aqi")]
    pub average: i64,
    #[serde(rename = "peak_aqi")]
    pub peak: i64,
    #[serde(rename = "least_aqi")]
    pub minimum: i64,
    /// Number of daily values the provider rolled into this month.
    pub count: i64,
}

/// Monthly summaries in ascending month order, at most one per month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoricalSeries(Vec<MonthlySummary>);

impl HistoricalSeries {
    /// Caller guarantees ascending, unique month labels.
    pub(crate) fn from_sorted(summaries: Vec<MonthlySummary>) -> Self {
        Self(summaries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MonthlySummary> {
        self.0.iter()
    }

    pub fn get(&self, month: &str) -> Option<&MonthlySummary> {
        self.0
            .binary_search_by(|s| s.month.as_str().cmp(month))
            .ok()
            .map(|i| &self.0[i])
    }

    pub fn months(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.month.as_str())
    }

    pub fn into_vec(self) -> Vec<MonthlySummary> {
        self.0
    }
}

impl IntoIterator for HistoricalSeries {
    type Item = MonthlySummary;
    type IntoIter = std::vec::IntoIter<MonthlySummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HistoricalSeries {
    type Item = &'a MonthlySummary;
    type IntoIter = std::slice::Iter<'a, MonthlySummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_plain_array_with_application_field_names() {
        let series = HistoricalSeries::from_sorted(vec![MonthlySummary {
            month: "2025-03".to_string(),
            average: 41,
            peak: 98,
            minimum: 12,
            count: 28,
        }]);
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"month": "2025-03", "avg_aqi": 41, "peak_aqi": 98, "least_aqi": 12, "count": 28}
            ])
        );
    }
}

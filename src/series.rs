use std::io::Read;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Result;
use crate::units::{length, speed, temperature};

/// Hourly forecast as parallel arrays sharing one hour index.
///
/// Arrays may be shorter than one another or missing entirely. A sample that
/// is missing, `null`, non-numeric, or non-finite is absent (`None`).
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HourlySeries {
    #[serde(default, deserialize_with = "timestamps")]
    pub time: Vec<String>,

    #[serde(default, alias = "temperature_2m", deserialize_with = "samples")]
    pub temperature: Vec<Option<f64>>,

    #[serde(default, alias = "dew_point_2m", deserialize_with = "samples")]
    pub dewpoint: Vec<Option<f64>>,

    #[serde(default, deserialize_with = "samples")]
    pub precipitation: Vec<Option<f64>>,

    #[serde(default, deserialize_with = "samples")]
    pub snowfall: Vec<Option<f64>>,

    #[serde(default, alias = "wind_gusts_10m", deserialize_with = "samples")]
    pub wind_gust: Vec<Option<f64>>,

    #[serde(default, alias = "wind_direction_10m", deserialize_with = "samples")]
    pub wind_direction: Vec<Option<f64>>,

    #[serde(default, alias = "uv_index", deserialize_with = "samples")]
    pub uv_index: Vec<Option<f64>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Envelope { hourly: HourlySeries },
    Bare(HourlySeries),
}

impl HourlySeries {
    /// Parses a bare series or an Open-Meteo style `{"hourly": {...}}` document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::from_document(serde_json::from_str(json)?))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::from_document(serde_json::from_reader(reader)?))
    }

    fn from_document(doc: Document) -> Self {
        match doc {
            Document::Envelope { hourly } => hourly,
            Document::Bare(series) => series,
        }
    }

    /// Number of hours, taken from the longest array.
    pub fn len(&self) -> usize {
        [
            self.time.len(),
            self.temperature.len(),
            self.dewpoint.len(),
            self.precipitation.len(),
            self.snowfall.len(),
            self.wind_gust.len(),
            self.wind_direction.len(),
            self.uv_index.len(),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn time_at(&self, i: usize) -> Option<NaiveDateTime> {
        self.time.get(i).and_then(|s| parse_local(s))
    }

    /// True when at least one hour carries a parseable timestamp.
    pub fn is_timed(&self) -> bool {
        (0..self.time.len()).any(|i| self.time_at(i).is_some())
    }

    pub fn temperature(&self, i: usize) -> Option<f64> {
        sample(&self.temperature, i)
    }

    pub fn dewpoint(&self, i: usize) -> Option<f64> {
        sample(&self.dewpoint, i)
    }

    pub fn precipitation(&self, i: usize) -> Option<f64> {
        sample(&self.precipitation, i)
    }

    pub fn snowfall(&self, i: usize) -> Option<f64> {
        sample(&self.snowfall, i)
    }

    pub fn wind_gust(&self, i: usize) -> Option<f64> {
        sample(&self.wind_gust, i)
    }

    pub fn wind_direction(&self, i: usize) -> Option<f64> {
        sample(&self.wind_direction, i)
    }

    pub fn uv_index(&self, i: usize) -> Option<f64> {
        sample(&self.uv_index, i)
    }

    /// Converts a metric series (°C, mm rain, cm snow, km/h) to °F, inches and mph.
    pub fn into_imperial(self) -> Self {
        fn convert(values: Vec<Option<f64>>, f: fn(f64) -> f64) -> Vec<Option<f64>> {
            values.into_iter().map(|v| v.map(f)).collect()
        }

        Self {
            temperature: convert(self.temperature, temperature::c2f),
            dewpoint: convert(self.dewpoint, temperature::c2f),
            precipitation: convert(self.precipitation, length::mm2in),
            snowfall: convert(self.snowfall, length::cm2in),
            wind_gust: convert(self.wind_gust, speed::kph2mph),
            ..self
        }
    }
}

fn sample(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten().filter(|v| v.is_finite())
}

/// Reads a local ISO-8601 timestamp, keeping the wall-clock time as written.
pub fn parse_local(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_local()))
}

fn samples<'de, D>(deserializer: D) -> std::result::Result<Vec<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .iter()
        .map(|v| v.as_f64().filter(|x| x.is_finite()))
        .collect())
}

fn timestamps<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|v| match v {
            Value::String(s) => s,
            _ => String::new(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn loads_bare_series_with_gaps() {
        let json = r#"{
            "time": ["2024-01-10T00:00", "2024-01-10T01:00", "2024-01-10T02:00"],
            "temperature": [30.5, null, "n/a"],
            "windGust": [12]
        }"#;
        let series = HourlySeries::from_json_str(json).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.temperature(0), Some(30.5));
        assert_eq!(series.temperature(1), None);
        assert_eq!(series.temperature(2), None);
        assert_eq!(series.wind_gust(0), Some(12.0));
        assert_eq!(series.wind_gust(2), None);
        assert_eq!(series.dewpoint(0), None);
    }

    #[test]
    fn loads_open_meteo_envelope() {
        let json = r#"{
            "latitude": 35.6,
            "hourly": {
                "time": ["2024-01-10T05:00"],
                "temperature_2m": [28.0],
                "dew_point_2m": [25.0],
                "wind_gusts_10m": [31.0],
                "wind_direction_10m": [310],
                "uv_index": [0.0],
                "precipitation": [0.02],
                "snowfall": [0.1]
            }
        }"#;
        let series = HourlySeries::from_json_str(json).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.dewpoint(0), Some(25.0));
        assert_eq!(series.wind_direction(0), Some(310.0));
        assert_eq!(series.snowfall(0), Some(0.1));
        assert_eq!(series.time_at(0).map(|t| t.hour()), Some(5));
    }

    #[test]
    fn null_array_is_absent() {
        let series = HourlySeries::from_json_str(r#"{"time": null, "dewpoint": null}"#).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn rejects_non_object_document() {
        assert!(HourlySeries::from_json_str("[1, 2, 3]").is_err());
    }

    #[test]
    fn non_finite_samples_are_absent() {
        let series = HourlySeries {
            temperature: vec![Some(f64::NAN), Some(f64::INFINITY), Some(40.0)],
            ..Default::default()
        };
        assert_eq!(series.temperature(0), None);
        assert_eq!(series.temperature(1), None);
        assert_eq!(series.temperature(2), Some(40.0));
    }

    #[test]
    fn parses_local_timestamp_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 7, 4)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap();
        assert_eq!(parse_local("2024-07-04T15:00"), Some(expected));
        assert_eq!(parse_local("2024-07-04T15:00:00"), Some(expected));
        assert_eq!(parse_local("2024-07-04T15:00:00-04:00"), Some(expected));
        assert_eq!(parse_local("tomorrow"), None);
        assert_eq!(parse_local(""), None);
    }

    #[test]
    fn converts_metric_series() {
        let series = HourlySeries {
            temperature: vec![Some(0.0), None],
            precipitation: vec![Some(25.4)],
            snowfall: vec![Some(2.54)],
            wind_gust: vec![Some(100.0)],
            wind_direction: vec![Some(300.0)],
            ..Default::default()
        }
        .into_imperial();
        assert_eq!(series.temperature(0), Some(32.0));
        assert_eq!(series.temperature(1), None);
        assert_eq!(series.precipitation(0), Some(1.0));
        assert!((series.snowfall(0).unwrap() - 1.0).abs() < 1e-9);
        assert!((series.wind_gust(0).unwrap() - 62.1371).abs() < 1e-9);
        assert_eq!(series.wind_direction(0), Some(300.0));
    }
}

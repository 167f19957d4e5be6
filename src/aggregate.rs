use serde::Serialize;

use crate::series::HourlySeries;
use crate::window::Window;

/// Scalar summary of one window.
///
/// Temperature and dewpoint are `None` when the window held no valid sample.
/// Precip, snow, gust and UV read absence as zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    pub hours: usize,
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub avg_temp: Option<f64>,
    pub total_precip: f64,
    pub total_snow: f64,
    pub max_gust: f64,
    pub max_dew: Option<f64>,
    #[serde(rename = "maxUV")]
    pub max_uv: f64,
}

impl AggregateSummary {
    /// Less than 0.05in of both rain and snow.
    pub fn is_dry(&self) -> bool {
        self.total_precip < 0.05 && self.total_snow < 0.05
    }

    /// Temperature range across the window, when known.
    pub fn temp_range(&self) -> Option<f64> {
        Some(self.max_temp? - self.min_temp?)
    }
}

pub fn summarize(series: &HourlySeries, window: &Window) -> AggregateSummary {
    let temps: Vec<f64> = window.iter().filter_map(|i| series.temperature(i)).collect();
    let sum = |f: fn(&HourlySeries, usize) -> Option<f64>| -> f64 {
        window.iter().map(|i| f(series, i).unwrap_or(0.0).max(0.0)).sum()
    };

    AggregateSummary {
        hours: window.len(),
        min_temp: temps.iter().copied().reduce(f64::min),
        max_temp: temps.iter().copied().reduce(f64::max),
        avg_temp: mean(&temps),
        total_precip: sum(HourlySeries::precipitation),
        total_snow: sum(HourlySeries::snowfall),
        max_gust: max_of(series, window, HourlySeries::wind_gust).unwrap_or(0.0),
        max_dew: max_of(series, window, HourlySeries::dewpoint),
        max_uv: max_of(series, window, HourlySeries::uv_index).unwrap_or(0.0),
    }
}

/// Largest valid sample in the window.
pub fn max_of(
    series: &HourlySeries,
    window: &Window,
    f: fn(&HourlySeries, usize) -> Option<f64>,
) -> Option<f64> {
    window.iter().filter_map(|i| f(series, i)).reduce(f64::max)
}

/// Smallest valid sample in the window.
pub fn min_of(
    series: &HourlySeries,
    window: &Window,
    f: fn(&HourlySeries, usize) -> Option<f64>,
) -> Option<f64> {
    window.iter().filter_map(|i| f(series, i)).reduce(f64::min)
}

/// Mean temperature over the window's valid hours.
pub fn mean_temp(series: &HourlySeries, window: &Window) -> Option<f64> {
    let temps: Vec<f64> = window.iter().filter_map(|i| series.temperature(i)).collect();
    mean(&temps)
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

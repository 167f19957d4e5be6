//! Independent near-term alerts.
//!
//! Unlike the outlook, every condition that holds produces its own alert.

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;
use tracing::debug;

use crate::aggregate::summarize;
use crate::patterns::{self, PrecipType};
use crate::qpf::{classify_rain, classify_snow, RainSeverity, SnowSeverity};
use crate::series::HourlySeries;
use crate::units::direction;
use crate::window::{self, Window};

/// Default alert horizon, in hours from the head of the series.
pub const HORIZON_START: i64 = 12;
pub const HORIZON_END: i64 = 48;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: String,
    pub detail: String,
}

/// Alerts for hours 12–48 of the series.
pub fn near_term_alerts(series: &HourlySeries) -> Vec<Alert> {
    alerts_between(series, HORIZON_START, HORIZON_END)
}

pub fn alerts_between(series: &HourlySeries, start: i64, end: i64) -> Vec<Alert> {
    alerts_for_window(series, &window::relative_window(series, start, end))
}

pub fn alerts_for_window(series: &HourlySeries, window: &Window) -> Vec<Alert> {
    let mut alerts = Vec::new();
    if window.is_empty() {
        return alerts;
    }

    let summary = summarize(series, window);
    let flags = patterns::detect(series, window, &summary);
    let rain = classify_rain(summary.total_precip);
    let snow = classify_snow(summary.total_snow);
    let hours_where = |f: fn(&HourlySeries, usize) -> Option<f64>, pred: &dyn Fn(f64) -> bool| {
        window
            .iter()
            .filter(|&i| f(series, i).is_some_and(pred))
            .collect::<Vec<_>>()
    };

    if snow >= SnowSeverity::Light {
        let when = timing(series, &hours_where(HourlySeries::snowfall, &|s: f64| s > 0.0));
        alerts.push(Alert {
            id: "snow",
            icon: "❄️",
            title: snow.label().to_string(),
            detail: format!("{:.1} in of snow expected{when}.", summary.total_snow),
        });
    }

    if flags.nw_flow_snow && flags.precip_type == PrecipType::Snow {
        let compass = window
            .iter()
            .filter_map(|i| series.wind_direction(i))
            .find(|&d| direction::is_northwesterly(d))
            .map_or("NW", direction::degree_to_compass);
        let when = timing(series, &hours_where(HourlySeries::snowfall, &|s: f64| s > 0.05));
        alerts.push(Alert {
            id: "nw-flow-snow",
            icon: "🏔️",
            title: "Upslope snow showers".to_string(),
            detail: format!("Snow showers on {compass} winds{when}, favoring the ridges."),
        });
    }

    let drizzle_hours = patterns::freezing_drizzle_hours(series, window);
    if !drizzle_hours.is_empty() {
        let when = timing(series, &drizzle_hours);
        alerts.push(Alert {
            id: "freezing-drizzle",
            icon: "🧊",
            title: "Freezing drizzle".to_string(),
            detail: format!("Light drizzle near freezing could glaze roads and walkways{when}."),
        });
    }

    if rain >= RainSeverity::Steady {
        let when = timing(series, &hours_where(HourlySeries::precipitation, &|p: f64| p > 0.0));
        alerts.push(Alert {
            id: "rain",
            icon: "🌧️",
            title: rain.label().to_string(),
            detail: format!("{:.2} in of rain expected{when}.", summary.total_precip),
        });
    }

    if flags.convective {
        let when = timing(series, &patterns::spike_hours(series, window));
        alerts.push(Alert {
            id: "convective",
            icon: "⛈️",
            title: "Downpour risk".to_string(),
            detail: format!(
                "Hourly rain rates could jump by {:.2} in{when}.",
                flags.max_spike
            ),
        });
    }

    let gust = summary.max_gust;
    if gust >= 40.0 {
        let when = timing(series, &hours_where(HourlySeries::wind_gust, &|g: f64| g >= 40.0));
        alerts.push(Alert {
            id: "strong-wind",
            icon: "💨",
            title: "Strong wind".to_string(),
            detail: format!("Gusts up to {gust:.0} mph{when}."),
        });
    } else if gust >= 30.0 {
        let when = timing(series, &hours_where(HourlySeries::wind_gust, &|g: f64| g >= 30.0));
        alerts.push(Alert {
            id: "gusty",
            icon: "🌬️",
            title: "Gusty winds".to_string(),
            detail: format!("Gusts up to {gust:.0} mph{when}."),
        });
    }

    if let (Some(max_temp), Some(max_dew)) = (summary.max_temp, summary.max_dew) {
        if max_temp >= 85.0 && max_dew >= 68.0 {
            let when = timing(series, &hours_where(HourlySeries::temperature, &|t: f64| t >= 85.0));
            alerts.push(Alert {
                id: "hot-humid",
                icon: "🥵",
                title: "Hot and humid".to_string(),
                detail: format!(
                    "Highs near {max_temp:.0}°F with dewpoints near {max_dew:.0}°F{when}."
                ),
            });
        }
    }

    if let Some(min_temp) = summary.min_temp.filter(|&t| t <= 15.0) {
        let when = timing(series, &hours_where(HourlySeries::temperature, &|t: f64| t <= 15.0));
        alerts.push(Alert {
            id: "bitter-cold",
            icon: "🥶",
            title: "Bitter cold".to_string(),
            detail: format!("Temperatures down to {min_temp:.0}°F{when}."),
        });
    }

    if summary.max_uv >= 7.0 && summary.is_dry() {
        let when = timing(series, &hours_where(HourlySeries::uv_index, &|u: f64| u >= 7.0));
        alerts.push(Alert {
            id: "high-uv",
            icon: "☀️",
            title: "High UV".to_string(),
            detail: format!(
                "UV index up to {:.0}{when}; sunscreen recommended.",
                summary.max_uv
            ),
        });
    }

    debug!(
        hours = window.len(),
        ids = ?alerts.iter().map(|a| a.id).collect::<Vec<_>>(),
        "derived alerts"
    );
    alerts
}

pub fn time_of_day(hour: u32) -> &'static str {
    match hour {
        0..=4 => "overnight",
        5..=7 => "early morning",
        8..=11 => "morning",
        12..=13 => "midday",
        14..=17 => "afternoon",
        18..=20 => "evening",
        _ => "late evening",
    }
}

fn describe(t: NaiveDateTime) -> String {
    format!("{} {}", t.format("%A"), time_of_day(t.hour()))
}

/// " Saturday afternoon", " from Saturday morning into Sunday overnight", or
/// nothing when the qualifying hours carry no usable timestamps.
pub fn timing(series: &HourlySeries, hours: &[usize]) -> String {
    let first = hours.iter().find_map(|&i| series.time_at(i));
    let last = hours.iter().rev().find_map(|&i| series.time_at(i));
    match (first, last) {
        (Some(first), Some(last)) => {
            let (from, to) = (describe(first), describe(last));
            if from == to {
                format!(" {from}")
            } else {
                format!(" from {from} into {to}")
            }
        }
        _ => String::new(),
    }
}

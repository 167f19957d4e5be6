//! Multi-hour signatures scanned from a windowed series.

use crate::aggregate::{self, AggregateSummary};
use crate::series::HourlySeries;
use crate::units::direction;
use crate::window::Window;

/// Hour-over-hour precip jump that marks a convective burst (in).
pub const CONVECTIVE_SPIKE: f64 = 0.20;
/// Max-minus-min temperature that makes a "layers day" (°F).
pub const BIG_SWING: f64 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipType {
    None,
    Rain,
    Snow,
    Mix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourType {
    Rain,
    Mix,
    Snow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goldilocks {
    Full,
    Afternoon,
    Valleys,
    EarlyMuggyLate,
}

impl Goldilocks {
    pub fn headline(self) -> &'static str {
        match self {
            Goldilocks::Full => "Goldilocks day",
            Goldilocks::Afternoon => "Chilly start, ideal afternoon",
            Goldilocks::Valleys => "Ideal in the valleys, breezy on the ridges",
            Goldilocks::EarlyMuggyLate => "Ideal early, turning muggy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Convective {
    pub detected: bool,
    pub max_spike: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternFlags {
    pub convective: bool,
    pub max_spike: f64,
    pub stratiform: bool,
    pub nw_flow_snow: bool,
    pub cold_air_damming: bool,
    pub freezing_drizzle: bool,
    pub goldilocks: Option<Goldilocks>,
    pub big_swing: bool,
    pub swing_phrase: Option<&'static str>,
    pub precip_type: PrecipType,
}

pub fn detect(series: &HourlySeries, window: &Window, summary: &AggregateSummary) -> PatternFlags {
    let convective = convective(series, window);
    let big_swing = big_swing(summary);

    PatternFlags {
        convective: convective.detected,
        max_spike: convective.max_spike,
        stratiform: stratiform(series, window),
        nw_flow_snow: nw_flow_snow(series, window),
        cold_air_damming: cold_air_damming(series, window),
        freezing_drizzle: !freezing_drizzle_hours(series, window).is_empty(),
        goldilocks: goldilocks(series, window, summary),
        big_swing,
        swing_phrase: big_swing.then(|| swing_phrase(series, window)),
        precip_type: precip_type(series, window),
    }
}

/// Missing and negative samples both read as a dry hour.
fn precip_or_zero(series: &HourlySeries, i: usize) -> f64 {
    series.precipitation(i).unwrap_or(0.0).max(0.0)
}

/// Consecutive window-hour pairs `(prev, cur)`.
fn pairs(window: &Window) -> impl Iterator<Item = (usize, usize)> + '_ {
    window.indices().windows(2).map(|w| (w[0], w[1]))
}

pub fn convective(series: &HourlySeries, window: &Window) -> Convective {
    let max_spike = pairs(window)
        .map(|(prev, cur)| precip_or_zero(series, cur) - precip_or_zero(series, prev))
        .fold(0.0, f64::max);
    Convective {
        detected: max_spike >= CONVECTIVE_SPIKE,
        max_spike,
    }
}

/// Hours that close a convective spike.
pub fn spike_hours(series: &HourlySeries, window: &Window) -> Vec<usize> {
    pairs(window)
        .filter(|&(prev, cur)| {
            precip_or_zero(series, cur) - precip_or_zero(series, prev) >= CONVECTIVE_SPIKE
        })
        .map(|(_, cur)| cur)
        .collect()
}

/// Four or more hours of gentle rain.
pub fn stratiform(series: &HourlySeries, window: &Window) -> bool {
    window
        .iter()
        .filter(|&i| {
            let p = precip_or_zero(series, i);
            p > 0.01 && p < 0.10
        })
        .count()
        >= 4
}

/// Each condition may be met by a different hour; the three are ANDed at
/// window level.
pub fn nw_flow_snow(series: &HourlySeries, window: &Window) -> bool {
    let northwesterly = window
        .iter()
        .any(|i| series.wind_direction(i).is_some_and(direction::is_northwesterly));
    let cold = window
        .iter()
        .any(|i| series.temperature(i).is_some_and(|t| t <= 36.0));
    let snowing = window
        .iter()
        .any(|i| series.snowfall(i).is_some_and(|s| s > 0.05));
    northwesterly && cold && snowing
}

/// Same window-level AND of independent per-hour conditions as
/// [`nw_flow_snow`].
pub fn cold_air_damming(series: &HourlySeries, window: &Window) -> bool {
    let step = |f: fn(&HourlySeries, usize) -> Option<f64>| {
        pairs(window).filter_map(move |(prev, cur)| Some(f(series, cur)? - f(series, prev)?))
    };
    let cooling = step(HourlySeries::temperature).any(|d| d < 0.0);
    let moistening = step(HourlySeries::dewpoint).any(|d| d > 0.0);
    let light_wind = window
        .iter()
        .any(|i| series.wind_gust(i).is_some_and(|g| (10.0..=25.0).contains(&g)));
    cooling && moistening && light_wind
}

/// Hours at 28–32°F with light precip and a near-saturated column.
pub fn freezing_drizzle_hours(series: &HourlySeries, window: &Window) -> Vec<usize> {
    window
        .iter()
        .filter(|&i| {
            let (Some(temp), Some(dew)) = (series.temperature(i), series.dewpoint(i)) else {
                return false;
            };
            let precip = precip_or_zero(series, i);
            (28.0..=32.0).contains(&temp) && precip > 0.0 && precip < 0.05 && temp - dew <= 4.0
        })
        .collect()
}

/// Approximate wet-bulb temperature (°F). Missing dewpoint reads as saturated.
pub fn wet_bulb(temp: f64, dew: Option<f64>) -> f64 {
    let spread = dew.map_or(0.0, |d| temp - d);
    if spread <= 2.0 {
        temp - 0.5
    } else if spread >= 15.0 {
        temp - 8.0
    } else {
        temp - 0.5 * spread
    }
}

pub fn hour_type(temp: Option<f64>, dew: Option<f64>, snowfall: f64) -> Option<HourType> {
    if snowfall > 0.05 {
        return Some(HourType::Snow);
    }
    let wb = wet_bulb(temp?, dew);
    Some(if wb <= 31.5 {
        HourType::Snow
    } else if wb <= 33.0 {
        HourType::Mix
    } else {
        HourType::Rain
    })
}

/// Phase of the window's wet hours.
pub fn precip_type(series: &HourlySeries, window: &Window) -> PrecipType {
    let (mut rain, mut mix, mut snow) = (0, 0, 0);
    for i in window.iter() {
        let snowfall = series.snowfall(i).unwrap_or(0.0);
        if precip_or_zero(series, i) <= 0.0 && snowfall <= 0.0 {
            continue;
        }
        match hour_type(series.temperature(i), series.dewpoint(i), snowfall) {
            Some(HourType::Rain) => rain += 1,
            Some(HourType::Mix) => mix += 1,
            Some(HourType::Snow) => snow += 1,
            None => {}
        }
    }

    if mix > 0 || (rain > 0 && snow > 0) {
        PrecipType::Mix
    } else if snow > 0 {
        PrecipType::Snow
    } else if rain > 0 {
        PrecipType::Rain
    } else {
        PrecipType::None
    }
}

pub fn big_swing(summary: &AggregateSummary) -> bool {
    summary.temp_range().is_some_and(|r| r >= BIG_SWING)
}

/// Shape of the day's temperature curve, first match wins.
pub fn swing_phrase(series: &HourlySeries, window: &Window) -> &'static str {
    const FALLBACK: &str = "Big temperature swings";

    let morning = aggregate::mean_temp(series, &window.head(6));
    let afternoon = aggregate::mean_temp(series, &window.sub(10, 18));
    let evening = aggregate::mean_temp(series, &window.tail(6));
    let (Some(m), Some(a), Some(e)) = (morning, afternoon, evening) else {
        return FALLBACK;
    };

    if m > a + 5.0 && a > e + 5.0 {
        "Steadily falling temperatures"
    } else if a < m - 8.0 {
        "Turning colder in the afternoon"
    } else if a >= m + 10.0 && e <= a - 15.0 {
        "Warm afternoon, then a sharp drop"
    } else if a >= m + 15.0 {
        "Cold morning, warm afternoon"
    } else if a >= m + 8.0 && e <= a - 8.0 {
        "Up and down twice"
    } else {
        FALLBACK
    }
}

/// Ideal-day check with its relaxed variants, first match wins.
pub fn goldilocks(
    series: &HourlySeries,
    window: &Window,
    summary: &AggregateSummary,
) -> Option<Goldilocks> {
    let temp = summary.max_temp?;
    let dew = summary.max_dew?;
    let gust = summary.max_gust;
    if !(68.0..=74.0).contains(&temp) || !summary.is_dry() || summary.max_uv >= 6.0 {
        return None;
    }

    let comfortable_dew = (45.0..=52.0).contains(&dew);
    let cold_morning = aggregate::min_of(series, &window.head(6), HourlySeries::temperature)
        .is_some_and(|t| t < 50.0);

    if comfortable_dew && gust < 20.0 {
        Some(Goldilocks::Full)
    } else if comfortable_dew && (20.0..28.0).contains(&gust) && cold_morning {
        Some(Goldilocks::Afternoon)
    } else if comfortable_dew && (20.0..35.0).contains(&gust) {
        Some(Goldilocks::Valleys)
    } else if dew > 52.0 && dew <= 60.0 && gust < 20.0 {
        Some(Goldilocks::EarlyMuggyLate)
    } else {
        None
    }
}

//! Single-headline outlook for a day.
//!
//! Branches are tried in a fixed order and the first one that holds wins:
//! snow, northwest-flow snow, freezing drizzle, heavier rain, convective
//! bursts, lighter rain, wind, heat, cold, ideal day, then the quiet default.

use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;
use tracing::{debug, warn};

use crate::aggregate::{summarize, AggregateSummary};
use crate::clock::Clock;
use crate::comfort::{self, capitalize, Comfort, Locale};
use crate::patterns::{self, Goldilocks, PatternFlags, PrecipType};
use crate::qpf::{classify_rain, classify_snow, RainSeverity, SnowSeverity};
use crate::series::HourlySeries;
use crate::window::{self, Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    NoData,
    Snow,
    Ice,
    Rain,
    Storm,
    Wind,
    Heat,
    Cold,
    Ideal,
    Calm,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub text: String,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outlook {
    pub badge: Badge,
    pub emoji: &'static str,
    pub headline: String,
    pub text: String,
}

impl Outlook {
    fn new(
        category: Category,
        badge: impl Into<String>,
        emoji: &'static str,
        headline: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            badge: Badge {
                text: badge.into(),
                category,
            },
            emoji,
            headline: headline.into(),
            text: text.into(),
        }
    }

    pub fn no_data() -> Self {
        Self::new(
            Category::NoData,
            "No data",
            "❔",
            "Forecast unavailable",
            "No forecast hours are available for this period.",
        )
    }

    pub fn is_no_data(&self) -> bool {
        self.badge.category == Category::NoData
    }
}

/// Outlook for the calendar day after the clock's current date.
pub fn tomorrow_outlook(series: &HourlySeries, clock: &dyn Clock, locale: &Locale) -> Outlook {
    let now = clock.now();
    outlook_for_window(series, &outlook_window(series, now), now, locale)
}

/// Tomorrow's hours, or the last 24 hours of a series that carries no
/// usable timestamps.
pub fn outlook_window(series: &HourlySeries, now: NaiveDateTime) -> Window {
    let window = window::tomorrow_window(series, now);
    if window.is_empty() && !series.is_empty() && !series.is_timed() {
        warn!("series has no usable timestamps, using its last 24 hours");
        return Window::range(series.len().saturating_sub(24), series.len());
    }
    window
}

pub fn outlook_for_window(
    series: &HourlySeries,
    window: &Window,
    now: NaiveDateTime,
    locale: &Locale,
) -> Outlook {
    if !has_samples(series, window) {
        warn!(hours = window.len(), "no forecast data in outlook window");
        return Outlook::no_data();
    }

    let summary = summarize(series, window);
    let flags = patterns::detect(series, window, &summary);
    let comfort = comfort::comfort(
        summary.max_temp,
        summary.max_dew,
        summary.max_gust,
        summary.total_precip,
        now.month(),
        locale,
    );
    debug!(?summary, ?flags, comfort = %comfort.phrase, "classified outlook window");

    let outlook = synthesize(&summary, &flags, &comfort);
    debug!(category = ?outlook.badge.category, headline = %outlook.headline, "selected outlook");
    outlook
}

fn has_samples(series: &HourlySeries, window: &Window) -> bool {
    window.iter().any(|i| {
        [
            series.temperature(i),
            series.dewpoint(i),
            series.precipitation(i),
            series.snowfall(i),
            series.wind_gust(i),
            series.wind_direction(i),
            series.uv_index(i),
        ]
        .iter()
        .any(Option::is_some)
    })
}

pub fn synthesize(summary: &AggregateSummary, flags: &PatternFlags, comfort: &Comfort) -> Outlook {
    let rain = classify_rain(summary.total_precip);
    let snow = classify_snow(summary.total_snow);
    let gust = summary.max_gust;

    if snow >= SnowSeverity::Dusting {
        let mut text = format!("About {:.1} in of snow expected.", summary.total_snow);
        if flags.precip_type == PrecipType::Mix {
            text.push_str(" Rain and snow may mix at times.");
        }
        return Outlook::new(
            Category::Snow,
            snow.label(),
            "❄️",
            format!("{} tomorrow", snow.label()),
            text,
        );
    }

    if flags.nw_flow_snow {
        return Outlook::new(
            Category::Snow,
            "NW-flow snow",
            "🏔️",
            "Upslope snow showers",
            format!(
                "Northwest winds may wring out snow showers along the ridges ({:.1} in).",
                summary.total_snow
            ),
        );
    }

    if flags.freezing_drizzle {
        return Outlook::new(
            Category::Ice,
            "Freezing drizzle",
            "🧊",
            "Watch for slick spots",
            "Light drizzle near freezing could glaze untreated surfaces.",
        );
    }

    if rain >= RainSeverity::Steady {
        let mut text = format!("Around {:.2} in of rain.", summary.total_precip);
        if flags.stratiform {
            text.push_str(" Expect a long, steady soaking rather than quick bursts.");
        } else if flags.convective {
            text.push_str(" Heavier bursts are possible.");
        }
        return Outlook::new(
            Category::Rain,
            rain.label(),
            "🌧️",
            format!("{} tomorrow", rain.label()),
            text,
        );
    }

    if flags.convective {
        return Outlook::new(
            Category::Storm,
            "Downpours",
            "⛈️",
            "Pop-up downpours possible",
            format!(
                "Rain rates could jump by {:.2} in within an hour.",
                flags.max_spike
            ),
        );
    }

    if matches!(rain, RainSeverity::Spotty | RainSeverity::Light) {
        return Outlook::new(
            Category::Rain,
            rain.label(),
            "🌦️",
            rain.label(),
            format!(
                "Up to {:.2} in of rain; keep an umbrella handy.",
                summary.total_precip
            ),
        );
    }

    if gust >= 30.0 {
        let label = capitalize(comfort::wind_description(gust));
        let (emoji, advice) = if gust >= 40.0 {
            ("💨", "; secure loose objects.")
        } else {
            ("🌬️", ".")
        };
        return Outlook::new(
            Category::Wind,
            label.clone(),
            emoji,
            label,
            format!("Gusts up to {gust:.0} mph{advice}"),
        );
    }

    if let Some(outlook) = heat(summary) {
        return outlook;
    }

    if let Some(outlook) = cold(summary, flags) {
        return outlook;
    }

    if let Some(variant) = flags.goldilocks {
        return goldilocks(variant, summary);
    }

    quiet(summary, flags, comfort)
}

fn heat(summary: &AggregateSummary) -> Option<Outlook> {
    if let (Some(max_temp), Some(max_dew)) = (summary.max_temp, summary.max_dew) {
        if max_temp >= 85.0 && max_dew >= 68.0 {
            return Some(Outlook::new(
                Category::Heat,
                "Hot & humid",
                "🥵",
                "Hot and humid",
                format!("Highs near {max_temp:.0}°F with dewpoints around {max_dew:.0}°F."),
            ));
        }
    }
    if summary.max_uv >= 7.0 && summary.is_dry() {
        return Some(Outlook::new(
            Category::Heat,
            "High UV",
            "☀️",
            "Strong sun",
            format!(
                "UV index peaks near {:.0}; sunscreen recommended.",
                summary.max_uv
            ),
        ));
    }
    None
}

fn cold(summary: &AggregateSummary, flags: &PatternFlags) -> Option<Outlook> {
    let max_temp = summary.max_temp?;
    let min_temp = summary.min_temp.unwrap_or(max_temp);
    if max_temp < 40.0 || min_temp <= 15.0 {
        return Some(Outlook::new(
            Category::Cold,
            "Cold",
            "🥶",
            "Bundle up",
            format!("Highs only near {max_temp:.0}°F with lows around {min_temp:.0}°F."),
        ));
    }
    if flags.cold_air_damming && max_temp <= 55.0 {
        return Some(Outlook::new(
            Category::Cold,
            "Wedge",
            "🌫️",
            "Chilly, damp wedge",
            format!("Cold-air damming keeps it gray and raw; highs near {max_temp:.0}°F."),
        ));
    }
    None
}

fn goldilocks(variant: Goldilocks, summary: &AggregateSummary) -> Outlook {
    let high = summary.max_temp.unwrap_or_default();
    let text = match variant {
        Goldilocks::Full => {
            format!("Highs near {high:.0}°F, comfortable dewpoints and light winds. Just right.")
        }
        Goldilocks::Afternoon => format!(
            "A cold, breezy start gives way to a near-perfect afternoon around {high:.0}°F."
        ),
        Goldilocks::Valleys => {
            format!("Sheltered spots stay ideal near {high:.0}°F while the ridges run breezy.")
        }
        Goldilocks::EarlyMuggyLate => {
            format!("Comfortable early with highs near {high:.0}°F; humidity creeps up later.")
        }
    };
    Outlook::new(Category::Ideal, "Ideal", "😎", variant.headline(), text)
}

fn quiet(summary: &AggregateSummary, flags: &PatternFlags, comfort: &Comfort) -> Outlook {
    if let (Some(phrase), Some(min), Some(max)) =
        (flags.swing_phrase, summary.min_temp, summary.max_temp)
    {
        return Outlook::new(
            Category::Calm,
            "Layers",
            "🧥",
            phrase,
            format!(
                "Temperatures range from {min:.0}°F to {max:.0}°F; dress in layers. {}.",
                comfort.phrase
            ),
        );
    }

    let text = match summary.max_temp {
        Some(max) => format!("{}. Highs near {max:.0}°F.", comfort.phrase),
        None => format!("{}.", comfort.phrase),
    };
    let headline = if comfort.ideal {
        "Pleasant and quiet"
    } else {
        "Uneventful weather"
    };
    Outlook::new(Category::Calm, "Mild", "🙂", headline, text)
}

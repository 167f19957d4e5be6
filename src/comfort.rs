//! Season-aware "how does it feel" descriptions.

/// Climatology the seasonal comparisons are tuned to.
#[derive(Debug, Clone, PartialEq)]
pub struct Locale {
    pub name: String,
    /// Normal daily high (°F), January first.
    pub normal_highs: [f64; 12],
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            name: "Western North Carolina mountains".to_string(),
            normal_highs: [
                48.0, 52.0, 60.0, 69.0, 76.0, 82.0, 85.0, 83.0, 77.0, 69.0, 59.0, 50.0,
            ],
        }
    }
}

impl Locale {
    /// Normal high for a 1-based month.
    pub fn normal_high(&self, month: u32) -> f64 {
        self.normal_highs[(month.clamp(1, 12) - 1) as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonalAnomaly {
    UnseasonablyWarm,
    MildForSeason,
    BitWarmer,
    Seasonable,
    BitCooler,
    ChillyForSeason,
    UnseasonablyCold,
}

impl SeasonalAnomaly {
    pub fn from_anomaly(anomaly: f64) -> Self {
        if anomaly >= 15.0 {
            SeasonalAnomaly::UnseasonablyWarm
        } else if anomaly >= 8.0 {
            SeasonalAnomaly::MildForSeason
        } else if anomaly >= 3.0 {
            SeasonalAnomaly::BitWarmer
        } else if anomaly <= -15.0 {
            SeasonalAnomaly::UnseasonablyCold
        } else if anomaly <= -8.0 {
            SeasonalAnomaly::ChillyForSeason
        } else if anomaly <= -3.0 {
            SeasonalAnomaly::BitCooler
        } else {
            SeasonalAnomaly::Seasonable
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeasonalAnomaly::UnseasonablyWarm => "unseasonably warm",
            SeasonalAnomaly::MildForSeason => "mild for the season",
            SeasonalAnomaly::BitWarmer => "a bit warmer than normal",
            SeasonalAnomaly::Seasonable => "seasonable",
            SeasonalAnomaly::BitCooler => "a bit cooler than normal",
            SeasonalAnomaly::ChillyForSeason => "chilly for the season",
            SeasonalAnomaly::UnseasonablyCold => "unseasonably cold",
        }
    }

    fn is_unseasonable(self) -> bool {
        matches!(
            self,
            SeasonalAnomaly::UnseasonablyWarm | SeasonalAnomaly::UnseasonablyCold
        )
    }

    fn is_warm_side(self) -> bool {
        matches!(self, SeasonalAnomaly::MildForSeason | SeasonalAnomaly::BitWarmer)
    }

    fn is_cool_side(self) -> bool {
        matches!(self, SeasonalAnomaly::ChillyForSeason | SeasonalAnomaly::BitCooler)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureFeel {
    Hot,
    Warm,
    Pleasant,
    Mild,
    Cool,
    Chilly,
    VeryCold,
}

impl TemperatureFeel {
    pub fn from_temp(temp: f64) -> Self {
        if temp >= 90.0 {
            TemperatureFeel::Hot
        } else if temp >= 80.0 {
            TemperatureFeel::Warm
        } else if temp >= 70.0 {
            TemperatureFeel::Pleasant
        } else if temp >= 60.0 {
            TemperatureFeel::Mild
        } else if temp >= 50.0 {
            TemperatureFeel::Cool
        } else if temp >= 40.0 {
            TemperatureFeel::Chilly
        } else {
            TemperatureFeel::VeryCold
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TemperatureFeel::Hot => "hot",
            TemperatureFeel::Warm => "warm",
            TemperatureFeel::Pleasant => "pleasant",
            TemperatureFeel::Mild => "mild",
            TemperatureFeel::Cool => "cool",
            TemperatureFeel::Chilly => "chilly",
            TemperatureFeel::VeryCold => "very cold",
        }
    }

    fn is_cool_side(self) -> bool {
        matches!(
            self,
            TemperatureFeel::Cool | TemperatureFeel::Chilly | TemperatureFeel::VeryCold
        )
    }
}

/// Canonical wind wording on max gust (mph).
pub fn wind_description(gust: f64) -> &'static str {
    if gust >= 50.0 {
        "damaging gusts"
    } else if gust >= 40.0 {
        "strong wind"
    } else if gust >= 30.0 {
        "gusty"
    } else if gust >= 20.0 {
        "breezy"
    } else {
        "light winds"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comfort {
    pub phrase: String,
    pub ideal: bool,
    pub anomaly: Option<f64>,
}

/// 68–74°F, dew 45–52°F, gusts under 20 mph and dry.
pub fn is_just_right(temp: f64, dew: Option<f64>, gust: f64, precip: f64) -> bool {
    (68.0..=74.0).contains(&temp)
        && dew.is_some_and(|d| (45.0..=52.0).contains(&d))
        && gust < 20.0
        && precip < 0.05
}

pub fn comfort(
    temp: Option<f64>,
    dew: Option<f64>,
    gust: f64,
    precip: f64,
    month: u32,
    locale: &Locale,
) -> Comfort {
    let Some(temp) = temp else {
        return Comfort {
            phrase: "Comfort unknown".to_string(),
            ideal: false,
            anomaly: None,
        };
    };
    let anomaly = temp - locale.normal_high(month);

    if is_just_right(temp, dew, gust, precip) {
        return Comfort {
            phrase: "Goldilocks — just right".to_string(),
            ideal: true,
            anomaly: Some(anomaly),
        };
    }

    let seasonal = SeasonalAnomaly::from_anomaly(anomaly);
    let absolute = TemperatureFeel::from_temp(temp);
    let base = if seasonal.is_unseasonable() {
        seasonal.label().to_string()
    } else if seasonal.is_warm_side() && absolute.is_cool_side() {
        format!("milder than normal, but still {}", absolute.label())
    } else if seasonal.is_cool_side() && !absolute.is_cool_side() {
        format!("cooler than normal, but still {}", absolute.label())
    } else if seasonal != SeasonalAnomaly::Seasonable {
        seasonal.label().to_string()
    } else {
        absolute.label().to_string()
    };

    // Plain reassignment: only the last matching rule in each group survives.
    let mut humidity = None;
    if dew.is_some_and(|d| d >= 65.0) && temp >= 75.0 {
        humidity = Some("humid");
    }
    if dew.is_some_and(|d| d <= 30.0) && temp >= 60.0 {
        humidity = Some("dry and comfortable");
    }
    let mut wind = None;
    if gust >= 25.0 {
        wind = Some("breezy");
    }
    if gust >= 35.0 {
        wind = Some("windy");
    }

    let mut phrase = capitalize(&base);
    for nuance in [humidity, wind].into_iter().flatten() {
        phrase.push_str(", ");
        phrase.push_str(nuance);
    }

    Comfort {
        phrase,
        ideal: false,
        anomaly: Some(anomaly),
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

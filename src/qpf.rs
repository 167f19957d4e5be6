//! Quantitative precipitation buckets.
//!
//! Breakpoints are inclusive-low, exclusive-high and partition `[0, inf)`
//! into seven contiguous buckets per dimension.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RainSeverity {
    None,
    Trace,
    Spotty,
    Light,
    Steady,
    Soaking,
    Heavy,
}

impl RainSeverity {
    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            RainSeverity::None => "No rain",
            RainSeverity::Trace => "Trace of rain",
            RainSeverity::Spotty => "Spotty showers",
            RainSeverity::Light => "Light rain",
            RainSeverity::Steady => "Steady rain",
            RainSeverity::Soaking => "Soaking rain",
            RainSeverity::Heavy => "Heavy rain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SnowSeverity {
    None,
    Flurries,
    Dusting,
    Light,
    Accumulating,
    Plowable,
    Significant,
}

impl SnowSeverity {
    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            SnowSeverity::None => "No snow",
            SnowSeverity::Flurries => "Flurries",
            SnowSeverity::Dusting => "Dusting of snow",
            SnowSeverity::Light => "Light snow",
            SnowSeverity::Accumulating => "Accumulating snow",
            SnowSeverity::Plowable => "Plowable snow",
            SnowSeverity::Significant => "Significant snow",
        }
    }
}

/// Rain total in inches.
pub fn classify_rain(total: f64) -> RainSeverity {
    if total < 0.01 {
        RainSeverity::None
    } else if total < 0.05 {
        RainSeverity::Trace
    } else if total < 0.15 {
        RainSeverity::Spotty
    } else if total < 0.40 {
        RainSeverity::Light
    } else if total < 0.75 {
        RainSeverity::Steady
    } else if total < 1.25 {
        RainSeverity::Soaking
    } else {
        RainSeverity::Heavy
    }
}

/// Snow total in inches.
pub fn classify_snow(total: f64) -> SnowSeverity {
    if total < 0.05 {
        SnowSeverity::None
    } else if total < 0.10 {
        SnowSeverity::Flurries
    } else if total < 0.50 {
        SnowSeverity::Dusting
    } else if total < 1.0 {
        SnowSeverity::Light
    } else if total < 3.0 {
        SnowSeverity::Accumulating
    } else if total < 6.0 {
        SnowSeverity::Plowable
    } else {
        SnowSeverity::Significant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rain_breakpoints_are_inclusive_low() {
        assert_eq!(classify_rain(0.0), RainSeverity::None);
        assert_eq!(classify_rain(0.0099), RainSeverity::None);
        assert_eq!(classify_rain(0.01), RainSeverity::Trace);
        assert_eq!(classify_rain(0.05), RainSeverity::Spotty);
        assert_eq!(classify_rain(0.15), RainSeverity::Light);
        assert_eq!(classify_rain(0.30), RainSeverity::Light);
        assert_eq!(classify_rain(0.40), RainSeverity::Steady);
        assert_eq!(classify_rain(0.75), RainSeverity::Soaking);
        assert_eq!(classify_rain(1.25), RainSeverity::Heavy);
        assert_eq!(classify_rain(9.0), RainSeverity::Heavy);
    }

    #[test]
    fn snow_breakpoints_are_inclusive_low() {
        assert_eq!(classify_snow(0.049), SnowSeverity::None);
        assert_eq!(classify_snow(0.05), SnowSeverity::Flurries);
        assert_eq!(classify_snow(0.10), SnowSeverity::Dusting);
        assert_eq!(classify_snow(0.50), SnowSeverity::Light);
        assert_eq!(classify_snow(1.0), SnowSeverity::Accumulating);
        assert_eq!(classify_snow(1.5), SnowSeverity::Accumulating);
        assert_eq!(classify_snow(3.0), SnowSeverity::Plowable);
        assert_eq!(classify_snow(6.0), SnowSeverity::Significant);
    }

    #[test]
    fn levels_follow_declaration_order() {
        assert_eq!(RainSeverity::None.level(), 0);
        assert_eq!(RainSeverity::Steady.level(), 4);
        assert_eq!(RainSeverity::Heavy.level(), 6);
        assert_eq!(SnowSeverity::Accumulating.level(), 4);
        assert_eq!(SnowSeverity::Significant.level(), 6);
    }

    proptest! {
        #[test]
        fn rain_is_monotonic(a in 0.0f64..20.0, b in 0.0f64..20.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify_rain(lo) <= classify_rain(hi));
        }

        #[test]
        fn snow_is_monotonic(a in 0.0f64..40.0, b in 0.0f64..40.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify_snow(lo) <= classify_snow(hi));
        }

        #[test]
        fn every_total_lands_in_one_of_seven_buckets(total in 0.0f64..100.0) {
            prop_assert!(classify_rain(total).level() <= 6);
            prop_assert!(classify_snow(total).level() <= 6);
        }
    }
}

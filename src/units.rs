pub mod temperature {
    pub fn c2f(temp_c: f64) -> f64 {
        temp_c * 9.0 / 5.0 + 32.0
    }

    #[test]
    fn test_temperature() {
        assert_eq!(c2f(0.0), 32.0);
        assert_eq!(c2f(100.0), 212.0);
    }
}

pub mod speed {
    const MILES_PER_KM: f64 = 0.621371;

    pub fn kph2mph(kph: f64) -> f64 {
        kph * MILES_PER_KM
    }

    #[test]
    fn test_speed() {
        assert!((kph2mph(100.0) - 62.1371).abs() < 1e-9);
        assert_eq!(kph2mph(0.0), 0.0);
    }
}

pub mod length {
    const MM_PER_INCH: f64 = 25.4;

    pub fn mm2in(mm: f64) -> f64 {
        mm / MM_PER_INCH
    }

    /// Snowfall is reported in centimetres by metric providers.
    pub fn cm2in(cm: f64) -> f64 {
        cm * 10.0 / MM_PER_INCH
    }

    #[test]
    fn test_length() {
        assert_eq!(mm2in(25.4), 1.0);
        assert!((cm2in(2.54) - 1.0).abs() < 1e-9);
    }
}

pub mod direction {
    const COMPASS: [&str; 16] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
        "NW", "NNW",
    ];
    pub fn degree_to_compass<'a>(deg: f64) -> &'a str {
        let deg = (deg % 360.0) + 360.0;
        let val = (deg / 22.5 + 0.5) as usize;
        let idx = val % 16;
        COMPASS[idx]
    }

    /// Northwest-flow sector used by the upslope snow detector.
    pub fn is_northwesterly(deg: f64) -> bool {
        (290.0..=330.0).contains(&deg)
    }

    #[test]
    fn test_degree_to_compass() {
        assert_eq!(degree_to_compass(0.0), "N");
        assert_eq!(degree_to_compass(90.0), "E");
        assert_eq!(degree_to_compass(180.0), "S");
        assert_eq!(degree_to_compass(270.0), "W");
        assert_eq!(degree_to_compass(315.0), "NW");
        assert_eq!(degree_to_compass(360.0), "N");
    }

    #[test]
    fn test_northwesterly_sector() {
        assert!(is_northwesterly(290.0));
        assert!(is_northwesterly(330.0));
        assert!(!is_northwesterly(289.9));
        assert!(!is_northwesterly(331.0));
    }
}

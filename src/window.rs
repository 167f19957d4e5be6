use chrono::{Days, NaiveDate, NaiveDateTime};

use crate::series::HourlySeries;

/// An ordered set of hour indices into a [`HourlySeries`].
///
/// An empty window is valid and means "no data".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Window {
    indices: Vec<usize>,
}

impl Window {
    /// Half-open range `[start, end)`.
    pub fn range(start: usize, end: usize) -> Self {
        Self {
            indices: (start..end.max(start)).collect(),
        }
    }

    /// Indices are sorted and deduplicated.
    pub fn from_indices(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The window positions `[from, to)` clamped to this window.
    pub fn sub(&self, from: usize, to: usize) -> Window {
        let to = to.min(self.len());
        let from = from.min(to);
        Window::from_indices(self.indices[from..to].to_vec())
    }

    pub fn head(&self, n: usize) -> Window {
        self.sub(0, n)
    }

    pub fn tail(&self, n: usize) -> Window {
        self.sub(self.len().saturating_sub(n), self.len())
    }
}

/// Hours whose timestamp falls on `date`, by local calendar day.
pub fn day_window(series: &HourlySeries, date: NaiveDate) -> Window {
    Window::from_indices(
        (0..series.time.len())
            .filter(|&i| series.time_at(i).map(|t| t.date()) == Some(date))
            .collect(),
    )
}

/// The calendar day after `now`.
pub fn tomorrow_window(series: &HourlySeries, now: NaiveDateTime) -> Window {
    match now.date().checked_add_days(Days::new(1)) {
        Some(tomorrow) => day_window(series, tomorrow),
        None => Window::default(),
    }
}

/// Hours `[start, end)` counted from the head of the series.
///
/// Both offsets are clamped into `[0, len]` and swapped if reversed.
pub fn relative_window(series: &HourlySeries, start: i64, end: i64) -> Window {
    let len = series.len() as i64;
    let a = start.clamp(0, len) as usize;
    let b = end.clamp(0, len) as usize;
    Window::range(a.min(b), a.max(b))
}

/// Projects every array onto `window`, preserving order.
///
/// Hours an array does not cover come out absent, so the projection stays
/// aligned.
pub fn slice_to_window(series: &HourlySeries, window: &Window) -> HourlySeries {
    fn project(values: &[Option<f64>], window: &Window) -> Vec<Option<f64>> {
        window
            .iter()
            .map(|i| values.get(i).copied().flatten())
            .collect()
    }

    HourlySeries {
        time: window
            .iter()
            .map(|i| series.time.get(i).cloned().unwrap_or_default())
            .collect(),
        temperature: project(&series.temperature, window),
        dewpoint: project(&series.dewpoint, window),
        precipitation: project(&series.precipitation, window),
        snowfall: project(&series.snowfall, window),
        wind_gust: project(&series.wind_gust, window),
        wind_direction: project(&series.wind_direction, window),
        uv_index: project(&series.uv_index, window),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hourly_times(start: &str, hours: usize) -> Vec<String> {
        let start = crate::series::parse_local(start).unwrap();
        (0..hours)
            .map(|h| {
                (start + chrono::Duration::hours(h as i64))
                    .format("%Y-%m-%dT%H:%M")
                    .to_string()
            })
            .collect()
    }

    fn at(s: &str) -> NaiveDateTime {
        crate::series::parse_local(s).unwrap()
    }

    #[test]
    fn day_window_matches_calendar_day() {
        let series = HourlySeries {
            time: hourly_times("2024-03-09T18:00", 40),
            ..Default::default()
        };
        let window = day_window(&series, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(window.len(), 24);
        assert_eq!(window.indices()[0], 6);
        assert_eq!(window.indices()[23], 29);
    }

    #[test]
    fn tomorrow_uses_calendar_day_not_rolling_24h() {
        let series = HourlySeries {
            time: hourly_times("2024-03-09T00:00", 72),
            ..Default::default()
        };
        let window = tomorrow_window(&series, at("2024-03-09T23:30"));
        assert_eq!(window.indices().first(), Some(&24));
        assert_eq!(window.len(), 24);
    }

    #[test]
    fn missing_day_is_empty() {
        let series = HourlySeries {
            time: hourly_times("2024-03-09T00:00", 24),
            ..Default::default()
        };
        assert!(tomorrow_window(&series, at("2024-03-09T08:00")).is_empty());
        assert!(tomorrow_window(&HourlySeries::default(), at("2024-03-09T08:00")).is_empty());
    }

    #[test]
    fn relative_window_clamps_and_orders() {
        let series = HourlySeries {
            temperature: vec![Some(50.0); 30],
            ..Default::default()
        };
        assert_eq!(relative_window(&series, 12, 48), Window::range(12, 30));
        assert_eq!(relative_window(&series, 20, 5), Window::range(5, 20));
        assert_eq!(relative_window(&series, -4, 3), Window::range(0, 3));
        assert!(relative_window(&series, 40, 60).is_empty());
    }

    #[test]
    fn sub_windows_clamp() {
        let window = Window::range(10, 20);
        assert_eq!(window.head(3).indices(), &[10, 11, 12]);
        assert_eq!(window.tail(2).indices(), &[18, 19]);
        assert_eq!(window.sub(8, 40).indices(), &[18, 19]);
        assert!(window.sub(12, 40).is_empty());
        assert!(Window::default().tail(6).is_empty());
    }

    #[test]
    fn from_indices_orders_and_dedups() {
        let window = Window::from_indices(vec![7, 3, 7, 5, 3]);
        assert_eq!(window.indices(), &[3, 5, 7]);
        assert_eq!(window.len(), 3);
    }

    #[test]
    fn slice_keeps_arrays_aligned() {
        let series = HourlySeries {
            time: hourly_times("2024-03-09T00:00", 4),
            temperature: vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)],
            snowfall: vec![Some(0.5)],
            ..Default::default()
        };
        let sliced = slice_to_window(&series, &Window::from_indices(vec![0, 2, 3]));
        assert_eq!(sliced.len(), 3);
        assert_eq!(sliced.temperature, vec![Some(1.0), Some(3.0), Some(4.0)]);
        assert_eq!(sliced.snowfall, vec![Some(0.5), None, None]);
        assert_eq!(sliced.time[1], "2024-03-09T02:00");
    }
}

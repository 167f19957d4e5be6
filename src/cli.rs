use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::builder::{styling::AnsiColor, Styles};
use clap::Parser;

use wx_outlook::clock::{Clock, FixedClock, SystemClock};
use wx_outlook::error::{Error, Result};
use wx_outlook::series::{parse_local, HourlySeries};

const ABOUT: &str = "Next-day weather outlook and near-term alerts";

const LONG_ABOUT: &str = "
Turns an hourly forecast into a one-line outlook for tomorrow plus a list of alerts for the
12-48 hour horizon.

The forecast is a JSON document with parallel hourly arrays (time, temperature, dewpoint,
precipitation, snowfall, windGust, windDirection, uvIndex), either bare or wrapped in an
Open-Meteo style \"hourly\" object. Values are read as °F, inches and mph unless --metric is
given.

Set WX_OUTLOOK_LOG (e.g. WX_OUTLOOK_LOG=debug) to see how the outlook was chosen.
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(version, styles=STYLES, about=ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[arg(help = "Hourly forecast JSON file (stdin when omitted or '-')")]
    pub input: Option<PathBuf>,

    #[arg(long, value_name = "DATETIME", help = "Pin the current time (YYYY-MM-DDTHH:MM)")]
    pub now: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Outlook this day instead of tomorrow")]
    pub date: Option<String>,

    #[arg(long, help = "Input is in °C, mm (rain), cm (snow) and km/h")]
    pub metric: bool,

    #[arg(long, help = "Print JSON instead of text")]
    pub json: bool,

    #[arg(long, default_value_t = 12, allow_negative_numbers = true, help = "First alert hour")]
    pub alert_start: i64,

    #[arg(long, default_value_t = 48, allow_negative_numbers = true, help = "End of alert horizon (exclusive)")]
    pub alert_end: i64,

    #[arg(short, long, help = "Log pipeline decisions to stderr")]
    pub verbose: bool,
}

impl Args {
    pub fn clock(&self) -> Result<Box<dyn Clock>> {
        match &self.now {
            Some(now) => {
                let at = parse_local(now).ok_or_else(|| Error::InvalidTimestamp(now.clone()))?;
                Ok(Box::new(FixedClock(at)))
            }
            None => Ok(Box::new(SystemClock)),
        }
    }

    pub fn date(&self) -> Result<Option<NaiveDate>> {
        self.date
            .as_deref()
            .map(|d| {
                NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|_| Error::InvalidDate(d.to_string()))
            })
            .transpose()
    }

    pub fn load_series(&self) -> Result<HourlySeries> {
        let series = match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                HourlySeries::from_reader(BufReader::new(File::open(path)?))?
            }
            _ => HourlySeries::from_reader(io::stdin().lock())?,
        };
        Ok(if self.metric {
            series.into_imperial()
        } else {
            series
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["wx-outlook"]).unwrap();
        assert_eq!(args.input, None);
        assert_eq!(args.alert_start, 12);
        assert_eq!(args.alert_end, 48);
        assert!(!args.metric && !args.json && !args.verbose);
        assert_eq!(args.date().unwrap(), None);
    }

    #[test]
    fn pinned_clock_and_date() {
        let args = Args::try_parse_from([
            "wx-outlook",
            "forecast.json",
            "--now",
            "2024-03-09T18:00",
            "--date",
            "2024-03-11",
            "--alert-start",
            "0",
        ])
        .unwrap();
        assert_eq!(args.clock().unwrap().now(), parse_local("2024-03-09T18:00").unwrap());
        assert_eq!(args.date().unwrap(), NaiveDate::from_ymd_opt(2024, 3, 11));
        assert_eq!(args.alert_start, 0);
    }

    #[test]
    fn rejects_bad_timestamps() {
        let args = Args::try_parse_from(["wx-outlook", "--now", "noon", "--date", "3/11"]).unwrap();
        assert!(matches!(args.clock(), Err(Error::InvalidTimestamp(_))));
        assert!(matches!(args.date(), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let args = Args::try_parse_from(["wx-outlook", "/nonexistent/forecast.json"]).unwrap();
        assert!(matches!(args.load_series(), Err(Error::Io(_))));
    }
}

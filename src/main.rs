use std::{error::Error, io};

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;

use crate::cli::Args;

use wx_outlook::aggregate::summarize;
use wx_outlook::alerts::alerts_between;
use wx_outlook::clock::Clock;
use wx_outlook::comfort::Locale;
use wx_outlook::outlook::{outlook_for_window, outlook_window};
use wx_outlook::window::day_window;

const LOG_ENV: &str = "WX_OUTLOOK_LOG";

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let series = args.load_series()?;
    let clock = args.clock()?;
    let locale = Locale::default();
    tracing::debug!(hours = series.len(), locale = %locale.name, "loaded forecast");

    let now = clock.now();
    let window = match args.date()? {
        Some(date) => day_window(&series, date),
        None => outlook_window(&series, now),
    };
    let outlook = outlook_for_window(&series, &window, now, &locale);
    let summary = summarize(&series, &window);
    let alerts = alerts_between(&series, args.alert_start, args.alert_end);

    if args.json {
        println!("{}", app::render_json(&outlook, &summary, &alerts)?);
    } else {
        println!("{}", app::render_text(&outlook, &alerts));
    }

    Ok(())
}

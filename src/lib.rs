//! Turns hourly forecast arrays into a next-day outlook and near-term alerts.
//!
//! Stages run strictly downstream: windowing, then aggregation and pattern
//! detection over the window, then classification, then synthesis.

pub mod aggregate;
pub mod alerts;
pub mod clock;
pub mod comfort;
pub mod error;
pub mod outlook;
pub mod patterns;
pub mod qpf;
pub mod series;
pub mod units;
pub mod window;

pub use alerts::{near_term_alerts, Alert};
pub use clock::{Clock, FixedClock, SystemClock};
pub use comfort::Locale;
pub use outlook::{tomorrow_outlook, Outlook};
pub use series::HourlySeries;

//! Display formatting configuration.
//!
//! Formatting is a parameter, not process state: every load/extract call
//! receives an explicit `FormatConfig` instead of consulting a global
//! locale, so two forms can render differently in the same process.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// How entity attributes are rendered into (and parsed back out of) raw
/// form field strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    date_format: String,
}

impl FormatConfig {
    /// Default date pattern, `dd/MM/yyyy` in strftime notation.
    pub const DEFAULT_DATE_FORMAT: &'static str = "%d/%m/%Y";

    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Render a UTC timestamp as a local calendar date.
    pub fn format_date(&self, ts: DateTime<Utc>) -> String {
        ts.with_timezone(&Local).format(&self.date_format).to_string()
    }

    /// Parse a displayed calendar date back into a UTC timestamp at local
    /// start-of-day. `None` when the input does not match the pattern or the
    /// local start-of-day does not exist (DST gap).
    pub fn parse_date(&self, raw: &str) -> Option<DateTime<Utc>> {
        let date = NaiveDate::parse_from_str(raw.trim(), &self.date_format).ok()?;
        let local = Local
            .from_local_datetime(&date.and_time(NaiveTime::MIN))
            .earliest()?;
        Some(local.with_timezone(&Utc))
    }

    /// Render a salary with exactly two decimal places, `.` separator.
    pub fn format_salary(&self, value: f64) -> String {
        format!("{value:.2}")
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DATE_FORMAT)
    }
}

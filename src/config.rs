//! Run configuration derived from command-line input.

use crate::error::{Result, TcrError};
use crate::types::Period;
use chrono::{Datelike, Days, NaiveDate, SecondsFormat, Utc};
use clap::ValueEnum;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Report date range with an exclusive end, as the usage API expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end_exclusive: NaiveDate,
}

impl DateRange {
    /// Resolve optional YYYY-MM-DD inputs against `today`.
    ///
    /// Start defaults to the first day of today's month and end to today.
    /// The end date is inclusive on input and stored exclusive.
    pub fn resolve(start: Option<&str>, end: Option<&str>, today: NaiveDate) -> Result<Self> {
        let start = match start {
            Some(s) => parse_date("start", s)?,
            None => today.with_day(1).unwrap_or(today),
        };
        let end = match end {
            Some(s) => parse_date("end", s)?,
            None => today,
        };

        if end < start {
            return Err(TcrError::InvalidDateRange);
        }

        let end_exclusive = end
            .checked_add_days(Days::new(1))
            .ok_or_else(|| TcrError::InvalidDate {
                which: "end",
                input: end.format(DATE_FORMAT).to_string(),
            })?;

        Ok(Self {
            start,
            end_exclusive,
        })
    }

    /// Resolve against the current UTC date
    pub fn resolve_now(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        Self::resolve(start, end, Utc::now().date_naive())
    }

    /// Inclusive start as an RFC3339 UTC timestamp
    pub fn start_rfc3339(&self) -> String {
        to_rfc3339(self.start)
    }

    /// Exclusive end as an RFC3339 UTC timestamp
    pub fn end_rfc3339(&self) -> String {
        to_rfc3339(self.end_exclusive)
    }

    /// Inclusive display period
    pub fn display_period(&self) -> Period {
        let display_end = self.end_exclusive.pred_opt().unwrap_or(self.end_exclusive);
        Period::new(
            self.start.format(DATE_FORMAT).to_string(),
            display_end.format(DATE_FORMAT).to_string(),
        )
    }
}

fn parse_date(which: &'static str, input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| TcrError::InvalidDate {
        which,
        input: input.to_string(),
    })
}

fn to_rfc3339(date: NaiveDate) -> String {
    date.and_time(chrono::NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// API key from the flag or environment; blank counts as missing
pub fn resolve_api_key(api_key: Option<&str>) -> Result<String> {
    match api_key.map(str::trim) {
        Some(key) if !key.is_empty() => Ok(key.to_string()),
        _ => Err(TcrError::ApiKeyMissing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults_to_month_to_date() {
        let range = DateRange::resolve(None, None, date(2026, 3, 17)).unwrap();
        assert_eq!(range.start, date(2026, 3, 1));
        assert_eq!(range.end_exclusive, date(2026, 3, 18));
        assert_eq!(range.start_rfc3339(), "2026-03-01T00:00:00Z");
        assert_eq!(range.end_rfc3339(), "2026-03-18T00:00:00Z");
        assert_eq!(range.display_period(), Period::new("2026-03-01", "2026-03-17"));
    }

    #[test]
    fn test_explicit_range() {
        let range =
            DateRange::resolve(Some("2025-12-01"), Some("2025-12-31"), date(2026, 3, 17)).unwrap();
        assert_eq!(range.end_rfc3339(), "2026-01-01T00:00:00Z");
        assert_eq!(range.display_period(), Period::new("2025-12-01", "2025-12-31"));
    }

    #[test]
    fn test_single_day_range() {
        let range =
            DateRange::resolve(Some("2026-02-10"), Some("2026-02-10"), date(2026, 3, 17)).unwrap();
        assert_eq!(range.end_exclusive, date(2026, 2, 11));
    }

    #[test]
    fn test_rejects_bad_dates() {
        let today = date(2026, 3, 17);
        assert!(matches!(
            DateRange::resolve(Some("03/01/2026"), None, today),
            Err(TcrError::InvalidDate { which: "start", .. })
        ));
        assert!(matches!(
            DateRange::resolve(None, Some("2026-02-30"), today),
            Err(TcrError::InvalidDate { which: "end", .. })
        ));
        assert!(matches!(
            DateRange::resolve(Some("2026-03-10"), Some("2026-03-01"), today),
            Err(TcrError::InvalidDateRange)
        ));
    }

    #[test]
    fn test_resolve_api_key() {
        assert_eq!(resolve_api_key(Some("secret")).unwrap(), "secret");
        assert!(matches!(resolve_api_key(None), Err(TcrError::ApiKeyMissing)));
        assert!(matches!(
            resolve_api_key(Some("   ")),
            Err(TcrError::ApiKeyMissing)
        ));
    }
}

use super::error::AppError;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::time_format::{is_next_day_visible, is_now_at};

/// One price quotation as the prices API sends it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireRecord {
    #[serde(rename = "p")]
    pub price: f64,
    #[serde(rename = "s")]
    pub start: String,
    #[serde(rename = "e")]
    pub end: String,
}

/// One time-bounded price. `end` is exclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceRecord {
    pub price: f64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TryFrom<WireRecord> for PriceRecord {
    type Error = AppError;

    fn try_from(r: WireRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            price: r.price,
            start: parse_timestamp(&r.start)?,
            end: parse_timestamp(&r.end)?,
        })
    }
}

/// Parses an ISO-8601 timestamp, with or without seconds.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Some(s_without_z) = s.strip_suffix('Z') {
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s_without_z, format) {
                return Ok(DateTime::from_naive_utc_and_offset(naive, Utc));
            }
        }
    }

    Err(AppError::MalformedResponse(format!(
        "Failed to parse timestamp '{s}'"
    )))
}

/// Converts wire records into price records, keeping length and order.
pub fn normalize(wire: Vec<WireRecord>) -> Result<Vec<PriceRecord>, AppError> {
    wire.into_iter().map(PriceRecord::try_from).collect()
}

/// Parses a prices API response body.
pub fn parse_response(body: &str) -> Result<Vec<PriceRecord>, AppError> {
    let wire: Vec<WireRecord> = serde_json::from_str(body)
        .map_err(|e| AppError::MalformedResponse(format!("Failed to parse response: {e}")))?;

    normalize(wire)
}

/// The prices fetched for one page load.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Prices {
    data: Vec<PriceRecord>,
}

impl Prices {
    pub fn new(data: Vec<PriceRecord>) -> Self {
        Self { data }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The record whose window contains `now`, if any.
    pub fn current<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<&PriceRecord> {
        self.data.iter().find(|r| is_now_at(r, now))
    }

    /// Seconds until the current record ends.
    pub fn seconds_until_next_change<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<f64> {
        let now_utc = now.with_timezone(&Utc);
        self.current(now)
            .map(|r| (r.end - now_utc).num_milliseconds() as f64 / 1000.0)
    }

    /// Records the page should show at `now`.
    ///
    /// Later days are hidden until their prices are published. With
    /// `only_after_now`, records that have already ended are dropped too.
    pub fn visible<Tz: TimeZone>(&self, now: &DateTime<Tz>, only_after_now: bool) -> Vec<PriceRecord> {
        let zone = now.timezone();
        let today = now.date_naive();
        let show_next_day = is_next_day_visible(&self.data, now);
        let now_utc = now.with_timezone(&Utc);

        self.data
            .iter()
            .filter(|r| show_next_day || r.start.with_timezone(&zone).date_naive() <= today)
            .filter(|r| !only_after_now || r.end > now_utc)
            .cloned()
            .collect()
    }
}

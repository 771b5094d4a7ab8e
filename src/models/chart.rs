use chrono::{DateTime, TimeZone};
use serde::Serialize;

use super::prices::PriceRecord;
use crate::config::Config;
use crate::utils::price_math::{display_price, format_display_price, round_cents};
use crate::utils::time_format::{MIDNIGHT_LABEL, format_date_day, format_date_time, is_now_at};

pub const PRICE_UNIT: &str = "c/kWh";

const DEFAULT_COLOR: &str = "rgba(54, 162, 235, 0.5)";
const HIGH_COLOR: &str = "rgba(200, 0, 0, 0.5)";
const LOW_COLOR: &str = "rgba(0, 200, 0, 0.5)";
const TRANSPARENT_COLOR: &str = "rgba(54, 162, 235, 0)";
const DAY_CHANGE_COLOR: &str = "rgba(100, 100, 100, 0.5)";

/// Role of a series in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Prices,
    Now,
    HoverHelper,
    DayChange,
}

impl SeriesKind {
    pub fn label(&self) -> &'static str {
        match self {
            SeriesKind::Prices => PRICE_UNIT,
            SeriesKind::Now => "Nyt",
            SeriesKind::HoverHelper => "Hover helper",
            SeriesKind::DayChange => "Day change",
        }
    }
}

/// One bar series. All vectors have one entry per category label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub kind: SeriesKind,
    pub label: String,
    pub data: Vec<f64>,
    pub colors: Vec<String>,
    /// Text drawn on a bar, where the bar has one
    pub annotations: Vec<Option<String>>,
    /// Draw order, lower is drawn on top
    pub order: u8,
    /// Share of the category width the bar takes (percent)
    pub bar_width_percent: u8,
}

/// Tooltip contents for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipEntry {
    pub title: String,
    pub label: String,
}

/// Everything the chart renderer needs, as plain data.
///
/// Every series shares `tooltips`, so hovering any bar of a column shows
/// that column's record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescription {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub tooltips: Vec<TooltipEntry>,
    pub legend: Vec<String>,
    /// Top of the value axis, the highlight height
    pub max_value: f64,
}

impl ChartDescription {
    /// Builds the chart for `records`, formatting times in `now`'s zone.
    pub fn build<Tz: TimeZone>(records: &[PriceRecord], now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let zone = now.timezone();
        let starts: Vec<_> = records.iter().map(|r| r.start.with_timezone(&zone)).collect();
        let labels: Vec<String> = starts.iter().map(format_date_time).collect();
        let highlight = highlight_height(records);

        let price_texts: Vec<String> = records
            .iter()
            .map(|r| format!("{} {PRICE_UNIT}", format_display_price(r.price)))
            .collect();

        let prices = ChartSeries {
            kind: SeriesKind::Prices,
            label: SeriesKind::Prices.label().to_string(),
            data: records.iter().map(|r| round_cents(display_price(r.price))).collect(),
            colors: records.iter().map(|r| price_color(display_price(r.price)).to_string()).collect(),
            annotations: vec![None; records.len()],
            order: 7,
            bar_width_percent: 80,
        };

        let now_flags: Vec<bool> = records.iter().map(|r| is_now_at(r, now)).collect();
        let current = ChartSeries {
            kind: SeriesKind::Now,
            label: SeriesKind::Now.label().to_string(),
            data: now_flags.iter().map(|&n| if n { highlight } else { 0.0 }).collect(),
            colors: vec![DEFAULT_COLOR.to_string(); records.len()],
            annotations: now_flags
                .iter()
                .zip(&price_texts)
                .map(|(&n, text)| n.then(|| text.clone()))
                .collect(),
            order: 3,
            bar_width_percent: 50,
        };

        let hover_helper = ChartSeries {
            kind: SeriesKind::HoverHelper,
            label: SeriesKind::HoverHelper.label().to_string(),
            data: vec![highlight; records.len()],
            colors: vec![TRANSPARENT_COLOR.to_string(); records.len()],
            annotations: vec![None; records.len()],
            order: 20,
            bar_width_percent: 80,
        };

        let day_flags: Vec<bool> = labels.iter().map(|l| l == MIDNIGHT_LABEL).collect();
        let day_change = ChartSeries {
            kind: SeriesKind::DayChange,
            label: SeriesKind::DayChange.label().to_string(),
            data: day_flags.iter().map(|&d| if d { highlight } else { 0.0 }).collect(),
            colors: day_flags
                .iter()
                .map(|&d| (if d { DAY_CHANGE_COLOR } else { TRANSPARENT_COLOR }).to_string())
                .collect(),
            annotations: day_flags
                .iter()
                .zip(&starts)
                .map(|(&d, start)| d.then(|| format_date_day(start)))
                .collect(),
            order: 1,
            bar_width_percent: 10,
        };

        let tooltips = records
            .iter()
            .zip(price_texts)
            .map(|(r, label)| TooltipEntry {
                title: format!(
                    "{} - {}",
                    format_date_time(&r.start.with_timezone(&zone)),
                    format_date_time(&r.end.with_timezone(&zone))
                ),
                label,
            })
            .collect();

        Self {
            labels,
            series: vec![prices, current, hover_helper, day_change],
            tooltips,
            legend: vec![PRICE_UNIT.to_string()],
            max_value: highlight,
        }
    }

    pub fn series(&self, kind: SeriesKind) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Tooltip text for the column at `index`, one line per entry field.
    pub fn tooltip_text(&self, index: usize) -> Option<String> {
        self.tooltips
            .get(index)
            .map(|tip| format!("{}<br/>{}", tip.title, tip.label))
    }
}

/// Color of a price bar by its display price (c/kWh).
pub fn price_color(display_price: f64) -> &'static str {
    if display_price > Config::HIGH_PRICE_THRESHOLD {
        HIGH_COLOR
    } else if display_price < Config::LOW_PRICE_THRESHOLD {
        LOW_COLOR
    } else {
        DEFAULT_COLOR
    }
}

/// Height of the highlight bars: the tallest price bar, at least the floor.
fn highlight_height(records: &[PriceRecord]) -> f64 {
    let max = records
        .iter()
        .map(|r| round_cents(display_price(r.price)))
        .fold(f64::NEG_INFINITY, f64::max);

    if max < Config::HIGHLIGHT_FLOOR {
        Config::HIGHLIGHT_FLOOR
    } else {
        max
    }
}

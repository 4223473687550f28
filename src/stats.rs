use serde::Serialize;

use crate::models::{DailyRecord, PageRecord};

/// Growth beyond this many percent marks a whole-period trend as up or down.
pub const PERIOD_TREND_THRESHOLD: f64 = 2.0;
/// Day-to-day counts are noisier, so single-day growth needs a wider band.
pub const DAILY_TREND_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedStatistic {
    pub title: String,
    pub value: u64,
}

/// Country and browser rankings summed over the whole window.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StatisticsSummary {
    pub browsers: Vec<RankedStatistic>,
    pub countries: Vec<RankedStatistic>,
    pub best_browser: Option<RankedStatistic>,
    pub best_country: Option<RankedStatistic>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PageRanking {
    pub pages: Vec<PageRecord>,
    pub most_popular: Option<PageRecord>,
}

/// Breakdown of a single selected day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayDetails {
    pub label: String,
    pub total: u64,
    pub top_browsers: Vec<RankedStatistic>,
    pub top_countries: Vec<RankedStatistic>,
    pub browser_count: usize,
    pub country_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn classify(growth_percent: f64, threshold: f64) -> Self {
        if growth_percent > threshold {
            Trend::Up
        } else if growth_percent < -threshold {
            Trend::Down
        } else {
            Trend::Stable
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TrendSummary {
    pub period_growth_percent: f64,
    pub today_growth_percent: f64,
    pub average_daily_total: f64,
    pub window_total: u64,
    pub peak_day: Option<DailyRecord>,
}

impl TrendSummary {
    pub fn period_trend(&self) -> Trend {
        Trend::classify(self.period_growth_percent, PERIOD_TREND_THRESHOLD)
    }

    pub fn today_trend(&self) -> Trend {
        Trend::classify(self.today_growth_percent, DAILY_TREND_THRESHOLD)
    }
}

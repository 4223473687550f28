use std::collections::HashMap;
use std::time::Instant;
use tracing::debug;

use crate::labels::display_country;
use crate::models::{DailyRecord, PageRecord};
use crate::stats::{DayDetails, PageRanking, RankedStatistic, StatisticsSummary};

pub const TOP_COUNTRIES: usize = 12;
pub const TOP_BROWSERS: usize = 10;
pub const TOP_PAGES: usize = 25;
pub const TOP_DAY_ENTRIES: usize = 5;

/// Summed hit counts per key, remembering the order keys were first seen.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str, count: u64) {
        match self.index.get(key) {
            Some(&slot) => {
                let total = &mut self.entries[slot].1;
                *total = total.saturating_add(count);
            }
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), count));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Full ranking, highest first. Equal values keep first-seen order.
    pub fn ranked(&self, relabel: fn(&str) -> &str) -> Vec<RankedStatistic> {
        let mut ranked: Vec<RankedStatistic> = self
            .entries
            .iter()
            .map(|(key, value)| RankedStatistic {
                title: relabel(key.as_str()).to_string(),
                value: *value,
            })
            .collect();
        ranked.sort_by(|a, b| b.value.cmp(&a.value));
        ranked
    }
}

fn keep_key(key: &str) -> &str {
    key
}

fn split_best(
    mut ranked: Vec<RankedStatistic>,
    limit: usize,
) -> (Vec<RankedStatistic>, Option<RankedStatistic>) {
    let best = ranked.first().cloned();
    ranked.truncate(limit);
    (ranked, best)
}

/// Folds the daily records into country and browser rankings for the window.
pub fn aggregate(records: &[DailyRecord]) -> StatisticsSummary {
    let start_time = Instant::now();

    let mut countries = FrequencyTable::new();
    let mut browsers = FrequencyTable::new();

    for day in records {
        for (country, count) in &day.countries {
            countries.add(country, *count);
        }
        for (browser, count) in &day.browsers {
            browsers.add(browser, *count);
        }
    }

    // Best entries come from the full ranking, before truncation.
    let (countries_ranked, best_country) =
        split_best(countries.ranked(display_country), TOP_COUNTRIES);
    let (browsers_ranked, best_browser) = split_best(browsers.ranked(keep_key), TOP_BROWSERS);

    debug!(
        action = "complete",
        component = "daily_aggregation",
        day_count = records.len(),
        country_count = countries.len(),
        browser_count = browsers.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Aggregated daily records"
    );

    StatisticsSummary {
        browsers: browsers_ranked,
        countries: countries_ranked,
        best_browser,
        best_country,
    }
}

/// Ranks pages by hit count. Works on a copy; the caller's slice is untouched.
pub fn rank_pages(pages: &[PageRecord]) -> PageRanking {
    let mut sorted = pages.to_vec();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));

    let most_popular = sorted.first().cloned();
    sorted.truncate(TOP_PAGES);

    PageRanking {
        pages: sorted,
        most_popular,
    }
}

impl DayDetails {
    pub fn from_record(day: &DailyRecord) -> Self {
        let mut countries = FrequencyTable::new();
        for (country, count) in &day.countries {
            countries.add(country, *count);
        }
        let mut browsers = FrequencyTable::new();
        for (browser, count) in &day.browsers {
            browsers.add(browser, *count);
        }

        let mut top_countries = countries.ranked(display_country);
        top_countries.truncate(TOP_DAY_ENTRIES);
        let mut top_browsers = browsers.ranked(keep_key);
        top_browsers.truncate(TOP_DAY_ENTRIES);

        Self {
            label: day.label.clone(),
            total: day.total,
            top_browsers,
            top_countries,
            browser_count: browsers.len(),
            country_count: countries.len(),
        }
    }
}

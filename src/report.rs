use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::cache::{DerivedStatistics, StatusView};
use crate::models::StatusResponse;
use crate::stats::{DayDetails, RankedStatistic, Trend};
use crate::target::TrackingTarget;
use crate::utils::{format_growth, format_number};
use crate::Args;

pub fn load_status(input: &Path) -> Result<StatusResponse> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "status_loading",
        input = ?input,
        "Loading status response"
    );

    let content = if input == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read status response from stdin")?;
        buffer
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("Failed to read status response {:?}", input))?
    };

    let status: StatusResponse =
        serde_json::from_str(&content).context("Failed to parse status response JSON")?;

    if status.daily_results.is_empty() {
        warn!(
            action = "complete",
            component = "status_loading",
            "Status response has no daily results"
        );
    }

    info!(
        action = "complete",
        component = "status_loading",
        day_count = status.daily_results.len(),
        page_count = status.page_results.len(),
        days = status.days,
        duration_ms = start_time.elapsed().as_millis(),
        "Status response loaded"
    );
    Ok(status)
}

#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    #[serde(flatten)]
    pub derived: DerivedStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<DayDetails>,
}

pub fn analyze_status(args: &Args, target: &TrackingTarget) -> Result<Analysis> {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "status_analysis",
        target = %target,
        "Starting status analysis"
    );

    if let Some(api_base) = &args.api_base {
        info!(
            action = "resolve",
            component = "status_request",
            url = target.status_url(api_base),
            "Status endpoint for target"
        );
    }

    let status = load_status(&args.input)?;

    let mut view = StatusView::new();
    view.refresh(&status);

    let day = match &args.day {
        Some(label) => {
            let record = status
                .daily_results
                .iter()
                .find(|day| day.label == *label)
                .with_context(|| format!("No daily result labelled '{}'", label))?;
            Some(DayDetails::from_record(record))
        }
        None => None,
    };

    info!(
        action = "complete",
        component = "status_analysis",
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );

    Ok(Analysis {
        derived: view.derived().clone(),
        day,
    })
}

fn trend_marker(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Stable => "→",
    }
}

fn print_ranking(title: &str, entries: &[RankedStatistic], limit: usize) {
    if entries.is_empty() {
        return;
    }

    println!("\n{}:", title);
    for entry in entries.iter().take(limit) {
        println!("- {}: {} hits", entry.title, format_number(entry.value));
    }
}

pub fn print_report(analysis: &Analysis, target: &TrackingTarget, args: &Args) {
    let derived = &analysis.derived;
    let limit = args.top.unwrap_or(usize::MAX);
    let trends = &derived.trends;
    let statistics = &derived.statistics;

    println!("\n--- Visitor overview for {} ---", target);

    if derived.total > 0 {
        println!("Total hits: {}", format_number(derived.total));
    }
    if derived.today > 0 {
        println!("Today: {}", format_number(derived.today));
    }

    if trends.window_total > 0 {
        let days = if derived.days > 0 {
            derived.days.to_string()
        } else {
            "window".to_string()
        };
        println!("Hits the last {} days: {}", days, format_number(trends.window_total));
        println!("Average per day: {:.1}", trends.average_daily_total);
        println!(
            "Period growth: {} {}",
            trend_marker(trends.period_trend()),
            format_growth(trends.period_growth_percent)
        );
        println!(
            "Today's growth: {} {}",
            trend_marker(trends.today_trend()),
            format_growth(trends.today_growth_percent)
        );
    }

    if let Some(peak) = trends.peak_day.as_ref().filter(|day| day.total > 0) {
        println!("Best day: {} ({} hits)", peak.label, format_number(peak.total));
    }
    if let Some(country) = &statistics.best_country {
        println!("Country: {} ({} hits)", country.title, format_number(country.value));
    }
    if let Some(browser) = &statistics.best_browser {
        println!("Browser: {} ({} hits)", browser.title, format_number(browser.value));
    }

    print_ranking("Browsers", &statistics.browsers, limit);
    print_ranking("Countries", &statistics.countries, limit);

    if !derived.pages.pages.is_empty() {
        println!("\nPages:");
        for page in derived.pages.pages.iter().take(limit) {
            println!("- {}: {} hits", page.url, format_number(page.count));
        }
    }

    if let Some(day) = &analysis.day {
        print_day_details(day);
    }
}

fn print_day_details(day: &DayDetails) {
    println!("\n--- Daily analytics for {} ---", day.label);
    println!("Total visitors: {}", format_number(day.total));
    println!("Different browsers: {}", day.browser_count);
    println!("Different countries: {}", day.country_count);
    print_ranking("Top browsers", &day.top_browsers, usize::MAX);
    print_ranking("Top countries", &day.top_countries, usize::MAX);
}

pub fn print_json(analysis: &Analysis) -> Result<()> {
    let json = serde_json::to_string_pretty(analysis).context("Failed to serialize statistics")?;
    println!("{}", json);
    Ok(())
}

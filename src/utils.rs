use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

use crate::target::TrackingTarget;

pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn format_number(num: u64) -> String {
    let digits = num.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

pub fn format_growth(growth: f64) -> String {
    format!("{:.1}%", growth.abs())
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if let Some(top) = args.top {
        if top == 0 {
            anyhow::bail!("--top must be greater than 0");
        }
    }

    Ok(())
}

pub fn resolve_target(args: &crate::args::Args) -> anyhow::Result<TrackingTarget> {
    let target = match (&args.target, &args.path, &args.user, &args.repo) {
        (Some(slug), _, _, _) => TrackingTarget::from_slug(slug)?,
        (_, Some(path), _, _) => TrackingTarget::path(path)?,
        (_, _, Some(user), Some(repo)) => TrackingTarget::repository(user, repo)?,
        (None, None, None, None) => TrackingTarget::default(),
        _ => anyhow::bail!("incomplete tracking target"),
    };
    Ok(target)
}

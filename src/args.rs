use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "visitor-stats",
    about = "Summarize visitor badge status data: top countries, browsers, pages and growth trends",
    version,
    long_about = None
)]
pub struct Args {
    /// Tracked URL or user/repository slug (defaults to the badge service's own site)
    pub target: Option<String>,

    /// Status response JSON file, or '-' for stdin
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,

    /// Tracked URL (alternative to the positional target)
    #[arg(long, conflicts_with_all = ["target", "user", "repo"])]
    pub path: Option<String>,

    /// GitHub user of the tracked repository
    #[arg(short, long, requires = "repo", conflicts_with = "target")]
    pub user: Option<String>,

    /// Tracked repository name
    #[arg(short, long, requires = "user", conflicts_with = "target")]
    pub repo: Option<String>,

    /// Number of ranked entries to display per table
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Base URL of the visitor badge API, used to show the status request
    #[arg(long, env = "VISITOR_API")]
    pub api_base: Option<String>,

    /// Show the browser and country breakdown of one day, by its label
    #[arg(long)]
    pub day: Option<String>,

    /// Print the derived statistics as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

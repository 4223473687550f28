use anyhow::Result;
use clap::Parser;
use tracing::error;

use visitor_stats::report::{analyze_status, print_json, print_report};
use visitor_stats::utils::{resolve_target, setup_logging, validate_args};
use visitor_stats::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    validate_args(&args)?;
    let target = resolve_target(&args)?;

    match analyze_status(&args, &target) {
        Ok(analysis) => {
            if args.json {
                print_json(&analysis)?;
            } else {
                print_report(&analysis, &target, &args);
            }
            Ok(())
        }
        Err(e) => {
            error!(action = "fail", component = "status_analysis", error = %e, "Analysis failed");
            std::process::exit(1);
        }
    }
}

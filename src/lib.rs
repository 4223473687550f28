pub mod aggregate;
pub mod args;
pub mod cache;
pub mod labels;
pub mod models;
pub mod report;
pub mod stats;
pub mod target;
pub mod trends;
pub mod utils;

pub use aggregate::{aggregate, rank_pages};
pub use args::Args;
pub use cache::{DerivedStatistics, StatusView};
pub use models::{DailyRecord, PageRecord, StatusResponse};
pub use stats::{DayDetails, PageRanking, RankedStatistic, StatisticsSummary, Trend, TrendSummary};
pub use target::{TargetError, TrackingTarget};
pub use trends::analyze_trends;

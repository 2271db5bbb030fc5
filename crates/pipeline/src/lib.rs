//! Aggregation and ranking of movie ratings per user group.
//!
//! This crate provides:
//! - `AnalysisConfig` for validating one run's arguments
//! - `aggregate_group` for summing ratings within a group
//! - `rank` for picking the top or bottom N movies
//! - `build_report` for rendering the result
//!
//! ## Architecture
//! A run is one straight line with no retries:
//! 1. Validate the arguments (`AnalysisConfig::from_args`)
//! 2. Load the dataset (`DataSet::load_from_dir`)
//! 3. For every group, in ascending key order: aggregate, then rank
//! 4. Build the report
//!
//! Any failure stops the run before a report exists.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{run_analysis, AnalysisConfig};
//!
//! let config = AnalysisConfig::from_args("gender", "top", "10", "data/ml-1m")?;
//! println!("{}", run_analysis(&config)?);
//! ```

pub mod config;
pub mod aggregate;
pub mod ranking;
pub mod report;

pub use aggregate::{aggregate_group, GroupTotals};
pub use config::{AnalysisConfig, MAX_MOVIES, USAGE};
pub use ranking::{rank, RankOrder, ScoredMovie};
pub use report::{build_report, GroupRanking};

use data_loader::{DataSet, GroupKey, Result, UserId};
use tracing::{debug, instrument};

/// Aggregate and rank one group
#[instrument(skip(data, key, members), fields(group = key.label(), member_count = members.len()))]
pub fn rank_group(
    data: &DataSet,
    key: GroupKey,
    members: &[UserId],
    order: RankOrder,
    count: usize,
) -> GroupRanking {
    let totals = aggregate_group(data, members);
    let movies = rank(&totals, order, count);
    debug!(
        "Ranked {} of {} rated movies",
        movies.len(),
        totals.len()
    );
    GroupRanking { key, movies }
}

/// Rank every group in ascending key order
pub fn rank_all_groups(data: &DataSet, order: RankOrder, count: usize) -> Vec<GroupRanking> {
    data.groups()
        .map(|(key, members)| rank_group(data, key, members, order, count))
        .collect()
}

/// Run the whole analysis described by `config` and return the report text
pub fn run_analysis(config: &AnalysisConfig) -> Result<String> {
    let data = DataSet::load_from_dir(&config.data_dir, config.grouping)?;
    let rankings = rank_all_groups(&data, config.order, config.count);
    build_report(&data, config.order, &rankings)
}

//! Per-run configuration.
//!
//! One `AnalysisConfig` is built from the command line for each run and
//! passed down explicitly; nothing about a run lives in shared state.

use crate::ranking::RankOrder;
use data_loader::{AnalysisError, GroupingMode, Result};
use std::path::PathBuf;

/// Largest number of movies that can be requested per group
pub const MAX_MOVIES: usize = 100;

/// Usage line shown alongside any input error
pub const USAGE: &str = "usage: analyze-movies (gender|agegroup) (top|bottom) <number>";

/// Everything one run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub grouping: GroupingMode,
    pub order: RankOrder,
    /// Movies to report per group, in `1..=MAX_MOVIES`
    pub count: usize,
    /// Directory holding movies.dat, ratings.dat and users.dat
    pub data_dir: PathBuf,
}

impl AnalysisConfig {
    /// Validate the three raw arguments, in order, before any file is opened
    pub fn from_args(
        grouping: &str,
        order: &str,
        count: &str,
        data_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        let grouping: GroupingMode = grouping.parse()?;
        let order: RankOrder = order.parse()?;
        let count = parse_count(count)?;

        Ok(Self {
            grouping,
            order,
            count,
            data_dir: data_dir.into(),
        })
    }
}

fn parse_count(raw: &str) -> Result<usize> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| AnalysisError::Input("<number> must be an integer".to_string()))?;

    if value < 1 || value > MAX_MOVIES as i64 {
        return Err(AnalysisError::Input(format!(
            "Please choose a number between 1 and {}",
            MAX_MOVIES
        )));
    }
    Ok(value as usize)
}

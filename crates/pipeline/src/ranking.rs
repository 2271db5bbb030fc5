//! Ordering a group's totals and picking the top or bottom slice.
//!
//! ## Algorithm
//! 1. Sort every (movie, total) pair by total, highest first
//! 2. Break ties by movie id, lowest first, so every run gives the same order
//! 3. `top` keeps the head of that sequence, `bottom` the tail, read from the
//!    lowest total upward
//!
//! Asking for more movies than the group rated returns all of them.

use crate::aggregate::GroupTotals;
use data_loader::{AnalysisError, MovieId};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Which end of the ranking to report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
    Top,
    Bottom,
}

impl RankOrder {
    pub const ALLOWED: [&'static str; 2] = ["top", "bottom"];

    /// Capitalised name used in report headers
    pub fn title(&self) -> &'static str {
        match self {
            RankOrder::Top => "Top",
            RankOrder::Bottom => "Bottom",
        }
    }
}

impl FromStr for RankOrder {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(RankOrder::Top),
            "bottom" => Ok(RankOrder::Bottom),
            other => Err(AnalysisError::Input(format!(
                "{} is not a valid order. Supported orders are: ({})",
                other,
                Self::ALLOWED.join(", ")
            ))),
        }
    }
}

impl fmt::Display for RankOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankOrder::Top => write!(f, "top"),
            RankOrder::Bottom => write!(f, "bottom"),
        }
    }
}

/// One movie's aggregate rating within a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMovie {
    pub movie_id: MovieId,
    pub total: i64,
}

/// Highest total first, then lowest movie id
fn descending(a: &ScoredMovie, b: &ScoredMovie) -> Ordering {
    b.total
        .cmp(&a.total)
        .then_with(|| a.movie_id.cmp(&b.movie_id))
}

/// Every movie in `totals` in descending rank order
pub fn sort_descending(totals: &GroupTotals) -> Vec<ScoredMovie> {
    let mut scored: Vec<ScoredMovie> = totals
        .iter()
        .map(|(&movie_id, &total)| ScoredMovie { movie_id, total })
        .collect();
    scored.sort_unstable_by(descending);
    scored
}

/// Select at most `count` movies from `totals` according to `order`
pub fn rank(totals: &GroupTotals, order: RankOrder, count: usize) -> Vec<ScoredMovie> {
    let mut scored = sort_descending(totals);
    match order {
        RankOrder::Top => {
            scored.truncate(count);
            scored
        }
        RankOrder::Bottom => {
            let start = scored.len().saturating_sub(count);
            let mut bottom = scored.split_off(start);
            bottom.reverse();
            bottom
        }
    }
}

//! Leaderboard selectors.
//!
//! `ViewMode` picks the board (which filter and default order apply),
//! `PopularityMetric` picks the popularity flavor, and `SortKey` overrides
//! the default order within a board.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which leaderboard board to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Comprehensive score board: score, then NAV, then PnL.
    #[default]
    Score,
    /// NAV scale board: median-based NAV threshold, sorted by NAV.
    Scale,
    /// Popularity board: subscribers (or volume), sorted descending.
    Popularity,
    /// Absolute return board: non-negative PnL, sorted by PnL.
    Pnl,
}

impl ViewMode {
    pub const ALL: [ViewMode; 4] = [Self::Score, Self::Scale, Self::Popularity, Self::Pnl];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Scale => "scale",
            Self::Popularity => "popularity",
            Self::Pnl => "pnl",
        }
    }

    /// Whether this board is truncated to a top-N list.
    ///
    /// The score board shows every participant.
    pub fn is_truncated(&self) -> bool {
        !matches!(self, Self::Score)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "score" => Ok(Self::Score),
            "scale" | "nav" => Ok(Self::Scale),
            "popularity" => Ok(Self::Popularity),
            "pnl" => Ok(Self::Pnl),
            _ => Err(CoreError::InvalidViewMode(s.to_string())),
        }
    }
}

/// Ranking metric for the popularity board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopularityMetric {
    #[default]
    Subscribers,
    Volume,
}

impl PopularityMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Subscribers => "subscribers",
            Self::Volume => "volume",
        }
    }

    /// The sort key this metric orders by.
    pub fn sort_key(&self) -> SortKey {
        match self {
            Self::Subscribers => SortKey::Subscribers,
            Self::Volume => SortKey::Volume,
        }
    }
}

impl fmt::Display for PopularityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PopularityMetric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "subscribers" | "subscriber_count" => Ok(Self::Subscribers),
            "volume" => Ok(Self::Volume),
            _ => Err(CoreError::InvalidPopularityMetric(s.to_string())),
        }
    }
}

/// Explicit ordering requested by the "sort by" selector.
///
/// Every key sorts descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Score,
    Nav,
    Pnl,
    NavGrowth7d,
    Pnl7dAvg,
    Subscribers,
    Volume,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Nav => "nav",
            Self::Pnl => "pnl",
            Self::NavGrowth7d => "nav_growth_7d",
            Self::Pnl7dAvg => "pnl_7d_avg",
            Self::Subscribers => "subscribers",
            Self::Volume => "volume",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "score" => Ok(Self::Score),
            "nav" | "aum" => Ok(Self::Nav),
            "pnl" => Ok(Self::Pnl),
            "nav_growth_7d" | "growth" => Ok(Self::NavGrowth7d),
            "pnl_7d_avg" => Ok(Self::Pnl7dAvg),
            "subscribers" => Ok(Self::Subscribers),
            "volume" => Ok(Self::Volume),
            _ => Err(CoreError::InvalidSortKey(s.to_string())),
        }
    }
}

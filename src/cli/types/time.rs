//! Time-related types for NFL seasons and weeks.

use crate::error::{PipelineError, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of seasons collected when none are requested.
pub const DEFAULT_SEASON_SPAN: u16 = 5;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The season matching the current calendar year.
    pub fn current() -> Self {
        Self(chrono::Local::now().year() as u16)
    }

    /// The last [`DEFAULT_SEASON_SPAN`] seasons ending with `latest`, oldest first.
    ///
    /// ```rust
    /// use fantasy_football::Season;
    ///
    /// let seasons = Season::recent(Season::new(2024));
    /// assert_eq!(seasons.first(), Some(&Season::new(2020)));
    /// assert_eq!(seasons.len(), 5);
    /// ```
    pub fn recent(latest: Season) -> Vec<Season> {
        let first = latest.0.saturating_sub(DEFAULT_SEASON_SPAN - 1);
        (first..=latest.0).map(Season).collect()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for Week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

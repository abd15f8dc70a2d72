//! Warehouse table identifiers.

use crate::error::PipelineError;
use std::fmt;
use std::str::FromStr;

/// Tables managed in the warehouse dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Table {
    Players,
    Teams,
    Games,
    Stadiums,
    PlayerGameStats,
    PlayerSeasons,
}

impl Table {
    /// Every table, in creation order.
    pub const ALL: [Table; 6] = [
        Table::Players,
        Table::Teams,
        Table::Games,
        Table::Stadiums,
        Table::PlayerGameStats,
        Table::PlayerSeasons,
    ];

    /// Name of the table inside the dataset.
    pub fn name(&self) -> &'static str {
        match self {
            Table::Players => "Players",
            Table::Teams => "Teams",
            Table::Games => "Games",
            Table::Stadiums => "Stadiums",
            Table::PlayerGameStats => "PlayerGameStats",
            Table::PlayerSeasons => "PlayerSeasons",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Table {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], "").to_lowercase();
        Table::ALL
            .into_iter()
            .find(|t| t.name().to_lowercase() == wanted)
            .ok_or_else(|| PipelineError::InvalidTable {
                name: s.to_string(),
            })
    }
}

//! Fantasy-relevant NFL positions.

use crate::error::PipelineError;
use std::fmt;
use std::str::FromStr;

/// Positions that score fantasy points.
///
/// Stat lines for any other position (offensive line, individual defenders,
/// long snappers, ...) are discarded during collection.
///
/// # Examples
///
/// ```rust
/// use fantasy_football::Position;
///
/// let wr: Position = "wr".parse().unwrap();
/// assert_eq!(wr, Position::WR);
/// assert!(Position::is_fantasy_relevant("TE"));
/// assert!(!Position::is_fantasy_relevant("OL"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
    ];

    /// Whether a raw position code names a fantasy-relevant position.
    pub fn is_fantasy_relevant(code: &str) -> bool {
        code.parse::<Position>().is_ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            _ => Err(PipelineError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_round_trip_strings() {
        for position in Position::ALL {
            assert_eq!(position.to_string().parse::<Position>().unwrap(), position);
        }
    }

    #[test]
    fn test_non_fantasy_positions_rejected() {
        // FB and defensive positions are collected by nflverse but never scored here
        for code in ["FB", "OL", "LB", "CB", "P", "LS", ""] {
            assert!(!Position::is_fantasy_relevant(code), "{code} should be rejected");
        }
    }

    #[test]
    fn test_invalid_position_error_keeps_input() {
        match "DL".parse::<Position>() {
            Err(PipelineError::InvalidPosition { position }) => assert_eq!(position, "DL"),
            other => panic!("Expected InvalidPosition, got {:?}", other),
        }
    }
}

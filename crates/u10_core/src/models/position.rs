use crate::error::PlayerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field positions for 7-a-side U10 play.
///
/// Declaration order matters: it is the secondary sort key of lineup
/// selection and the primary key of the lineup listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    Goalie,
    Defender,
    Midfielder,
    Forward,
    Bench,
}

impl Position {
    /// Positions a player may name as their preference.
    pub const FIELD: [Position; 4] =
        [Position::Goalie, Position::Defender, Position::Midfielder, Position::Forward];

    pub fn is_bench(&self) -> bool {
        matches!(self, Position::Bench)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Goalie => "GOALIE",
            Position::Defender => "DEFENDER",
            Position::Midfielder => "MIDFIELDER",
            Position::Forward => "FORWARD",
            Position::Bench => "BENCH",
        }
    }

    /// Parse a preferred position. BENCH is never a valid preference.
    pub fn parse_preferred(text: &str) -> Result<Position, PlayerError> {
        match text.parse::<Position>()? {
            Position::Bench => Err(PlayerError::InvalidPosition(text.to_string())),
            position => Ok(position),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GOALIE" => Ok(Position::Goalie),
            "DEFENDER" => Ok(Position::Defender),
            "MIDFIELDER" => Ok(Position::Midfielder),
            "FORWARD" => Ok(Position::Forward),
            "BENCH" => Ok(Position::Bench),
            _ => Err(PlayerError::InvalidPosition(s.to_string())),
        }
    }
}

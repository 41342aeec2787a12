use thiserror::Error;

/// Failures raised while building or updating a [`Player`](crate::models::Player).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Skill level must be between 1 and 5, got {0}")]
    InvalidSkillLevel(i32),

    #[error("Only players under ten years of age can be part of the team (age {age})")]
    InvalidAge { age: i32 },

    #[error("Invalid date of birth: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    #[error("Invalid position: {0}")]
    InvalidPosition(String),
}

/// Failures raised by roster operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error(transparent)]
    Player(#[from] PlayerError),

    #[error("Cannot remove player. The team is empty.")]
    EmptyRoster,

    #[error("The team must have at least {required} players, found {found}")]
    RosterTooSmall { required: usize, found: usize },
}

impl RosterError {
    /// Stable machine-readable code, used by the JSON API.
    pub fn code(&self) -> &'static str {
        match self {
            RosterError::Player(err) => err.code(),
            RosterError::EmptyRoster => "EMPTY_ROSTER",
            RosterError::RosterTooSmall { .. } => "ROSTER_TOO_SMALL",
        }
    }
}

impl PlayerError {
    pub fn code(&self) -> &'static str {
        match self {
            PlayerError::InvalidName(_) => "INVALID_NAME",
            PlayerError::InvalidSkillLevel(_) => "INVALID_SKILL_LEVEL",
            PlayerError::InvalidAge { .. } => "INVALID_AGE",
            PlayerError::InvalidDate { .. } => "INVALID_DATE",
            PlayerError::InvalidPosition(_) => "INVALID_POSITION",
        }
    }
}

/// Rejected [`RosterConfig`](crate::config::RosterConfig) values.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Capacity must be between {min} and {max}, got {found}")]
    InvalidCapacity { min: usize, max: usize, found: usize },

    #[error("Lineup floor {floor} must be at least {starters} and at most the capacity {capacity}")]
    InvalidLineupFloor { floor: usize, starters: usize, capacity: usize },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;

//! # Roster configuration
//!
//! Tunables for [`RosterManager`](crate::roster::RosterManager), kept in one
//! place and loadable from JSON.
//!
//! ```rust
//! use u10_core::config::{RosterConfig, SlotAllocation};
//!
//! let config = RosterConfig::default();
//! assert_eq!(config.capacity, 20);
//!
//! let seeded = RosterConfig::seeded(42);
//! assert_eq!(seeded.slot_allocation, SlotAllocation::Seeded { seed: 42 });
//! ```

use crate::error::ConfigError;
use crate::roster::lineup::STARTERS;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CAPACITY: usize = 20;
pub const DEFAULT_LINEUP_FLOOR: usize = 10;
/// Slot ids double as jersey numbers, which stay two-digit.
pub const MAX_CAPACITY: usize = 99;

/// How free slot ids are picked on admission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum SlotAllocation {
    /// Smallest unused id
    #[default]
    LowestFree,
    /// Uniform draw over unused ids from a ChaCha8 stream
    Seeded { seed: u64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RosterConfig {
    /// Maximum number of rostered players; slot ids run 1..=capacity
    pub capacity: usize,
    /// Minimum roster size before a lineup or bench can be listed
    pub lineup_floor: usize,
    pub slot_allocation: SlotAllocation,
    /// Date ages are checked against. `None` means today.
    pub evaluation_date: Option<NaiveDate>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            lineup_floor: DEFAULT_LINEUP_FLOOR,
            slot_allocation: SlotAllocation::LowestFree,
            evaluation_date: None,
        }
    }
}

impl RosterConfig {
    /// Default roster numbered from a seeded random stream.
    pub fn seeded(seed: u64) -> Self {
        Self { slot_allocation: SlotAllocation::Seeded { seed }, ..Self::default() }
    }

    /// Pin the evaluation date (tests, replays of past seasons).
    pub fn with_evaluation_date(mut self, date: NaiveDate) -> Self {
        self.evaluation_date = Some(date);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RosterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(STARTERS..=MAX_CAPACITY).contains(&self.capacity) {
            return Err(ConfigError::InvalidCapacity {
                min: STARTERS,
                max: MAX_CAPACITY,
                found: self.capacity,
            });
        }
        if self.lineup_floor < STARTERS || self.lineup_floor > self.capacity {
            return Err(ConfigError::InvalidLineupFloor {
                floor: self.lineup_floor,
                starters: STARTERS,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    pub fn evaluation_date(&self) -> NaiveDate {
        self.evaluation_date.unwrap_or_else(|| Local::now().date_naive())
    }
}

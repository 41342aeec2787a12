//! Validation rules for player data
//!
//! Every constructor and mutator on [`Player`](crate::models::Player) goes
//! through these checks, so a stored player always satisfies them.

use crate::error::PlayerError;
use crate::models::Position;
use chrono::{Datelike, NaiveDate};

/// Players must be strictly younger than this many whole years.
pub const AGE_LIMIT: i32 = 10;

pub const MIN_SKILL_LEVEL: i32 = 1;
pub const MAX_SKILL_LEVEL: i32 = 5;

/// Player validation utility
pub struct PlayerValidator;

impl PlayerValidator {
    /// Names must contain at least one non-whitespace character.
    pub fn validate_name(name: &str) -> Result<(), PlayerError> {
        if name.trim().is_empty() {
            return Err(PlayerError::InvalidName("Name cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Skill level (1-5 inclusive)
    pub fn validate_skill_level(skill_level: i32) -> Result<u8, PlayerError> {
        if !(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&skill_level) {
            return Err(PlayerError::InvalidSkillLevel(skill_level));
        }
        Ok(skill_level as u8)
    }

    pub fn validate_preferred_position(position: Position) -> Result<Position, PlayerError> {
        if position.is_bench() {
            return Err(PlayerError::InvalidPosition(position.to_string()));
        }
        Ok(position)
    }

    /// Build a calendar date, rejecting things like February 30th or a
    /// negative month.
    pub fn birth_date(year: i32, month: i32, day: i32) -> Result<NaiveDate, PlayerError> {
        let invalid = PlayerError::InvalidDate { year, month, day };
        let (Ok(m), Ok(d)) = (u32::try_from(month), u32::try_from(day)) else {
            return Err(invalid);
        };
        NaiveDate::from_ymd_opt(year, m, d).ok_or(invalid)
    }

    /// Whole years elapsed between `date_of_birth` and `as_of`.
    ///
    /// Goes negative for birth dates after `as_of`.
    pub fn age_on(date_of_birth: NaiveDate, as_of: NaiveDate) -> i32 {
        let mut years = as_of.year() - date_of_birth.year();
        if (as_of.month(), as_of.day()) < (date_of_birth.month(), date_of_birth.day()) {
            years -= 1;
        }
        years
    }

    /// Age must lie in the open interval (0, 10).
    pub fn validate_age(date_of_birth: NaiveDate, as_of: NaiveDate) -> Result<i32, PlayerError> {
        let age = Self::age_on(date_of_birth, as_of);
        if age <= 0 || age >= AGE_LIMIT {
            return Err(PlayerError::InvalidAge { age });
        }
        Ok(age)
    }
}

use super::Position;
use crate::error::PlayerError;
use crate::player::PlayerValidator;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw admission record, as typed into a form or read from a JSON file.
///
/// Nothing here is validated yet; [`Player::new`] does that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    /// Case-insensitive position name (GOALIE, DEFENDER, MIDFIELDER, FORWARD)
    pub position: String,
    pub skill_level: i32,
}

impl NewPlayer {
    pub fn new(
        first_name: &str,
        last_name: &str,
        (year, month, day): (i32, i32, i32),
        position: &str,
        skill_level: i32,
    ) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            year,
            month,
            day,
            position: position.to_string(),
            skill_level,
        }
    }
}

/// A rostered U10 player.
///
/// `assigned_position` reflects the most recent lineup computation and is
/// BENCH for a freshly built player.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Player {
    id: Uuid,
    first_name: String,
    last_name: String,
    date_of_birth: NaiveDate,
    preferred_position: Position,
    skill_level: u8,
    assigned_position: Position,
}

impl Player {
    /// Validate `data` and build a player, checking age against `as_of`.
    pub fn new(data: &NewPlayer, as_of: NaiveDate) -> Result<Self, PlayerError> {
        let preferred_position = Position::parse_preferred(&data.position)?;
        let skill_level = PlayerValidator::validate_skill_level(data.skill_level)?;
        PlayerValidator::validate_name(&data.first_name)?;
        PlayerValidator::validate_name(&data.last_name)?;
        let date_of_birth = PlayerValidator::birth_date(data.year, data.month, data.day)?;
        PlayerValidator::validate_age(date_of_birth, as_of)?;

        Ok(Self {
            id: Uuid::new_v4(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            date_of_birth,
            preferred_position,
            skill_level,
            assigned_position: Position::Bench,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: &str) -> Result<(), PlayerError> {
        PlayerValidator::validate_name(first_name)?;
        self.first_name = first_name.to_string();
        Ok(())
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: &str) -> Result<(), PlayerError> {
        PlayerValidator::validate_name(last_name)?;
        self.last_name = last_name.to_string();
        Ok(())
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Replace the birth date. The new date must keep the player under ten
    /// on `as_of`; on failure the player is left untouched.
    pub fn set_date_of_birth(
        &mut self,
        year: i32,
        month: i32,
        day: i32,
        as_of: NaiveDate,
    ) -> Result<(), PlayerError> {
        let date_of_birth = PlayerValidator::birth_date(year, month, day)?;
        PlayerValidator::validate_age(date_of_birth, as_of)?;
        self.date_of_birth = date_of_birth;
        Ok(())
    }

    /// Age in whole years on `as_of`. Pass the roster's evaluation date to
    /// get the age the roster checked.
    pub fn age_on(&self, as_of: NaiveDate) -> i32 {
        PlayerValidator::age_on(self.date_of_birth, as_of)
    }

    pub fn preferred_position(&self) -> Position {
        self.preferred_position
    }

    pub fn set_preferred_position(&mut self, position: Position) -> Result<(), PlayerError> {
        self.preferred_position = PlayerValidator::validate_preferred_position(position)?;
        Ok(())
    }

    pub fn skill_level(&self) -> u8 {
        self.skill_level
    }

    pub fn set_skill_level(&mut self, skill_level: i32) -> Result<(), PlayerError> {
        self.skill_level = PlayerValidator::validate_skill_level(skill_level)?;
        Ok(())
    }

    pub fn assigned_position(&self) -> Position {
        self.assigned_position
    }

    pub fn set_assigned_position(&mut self, position: Position) {
        self.assigned_position = position;
    }

    /// Key ordering players for eviction: weakest first, then alphabetical.
    pub(crate) fn eviction_key(&self) -> (u8, &str, &str) {
        (self.skill_level, &self.last_name, &self.first_name)
    }
}

//! Player rules module
//!
//! Validation shared by player construction and profile updates.

pub mod validation;

pub use validation::{PlayerValidator, AGE_LIMIT, MAX_SKILL_LEVEL, MIN_SKILL_LEVEL};

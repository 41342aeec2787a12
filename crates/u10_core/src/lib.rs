//! # u10_core - Bounded U10 Soccer Roster
//!
//! Keeps a youth team of at most twenty players and picks its seven-a-side
//! starting lineup.
//!
//! ## Features
//! - Validated admission with deterministic eviction of the weakest player
//! - Stable jersey-number slots and reverse lookup by player
//! - 1-2-3-1 lineup selection with a fixed fallback order
//! - JSON API over the roster operations

// `RosterManager::admit_player` takes every record field positionally
#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod player;
pub mod roster;
pub mod state;

// Re-export main API functions
pub use api::{
    admit_player_json, bench_json, remove_player_json, roster_json, starting_lineup_json,
    ApiError, ApiResponse,
};
pub use error::{ConfigError, PlayerError, Result, RosterError};

// Re-export domain types
pub use config::{RosterConfig, SlotAllocation};
pub use models::{NewPlayer, Player, Position, SlotId};
pub use player::PlayerValidator;

// Re-export roster management
pub use roster::{
    render_list, Admission, Evicted, Lineup, LineupEntry, LineupSelector, PlayerSummary, Removal,
    RosterManager, STARTERS,
};
pub use state::SharedRoster;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

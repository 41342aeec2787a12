//! Display-ordered listings built from a roster and a [`Lineup`].
//!
//! Listings are plain data. `Display` renders one player per line as
//! `First, Last, Jersey Number: N`, with `, Position: P` appended for starters.

use super::lineup::Lineup;
use crate::models::{Player, Position, SlotId};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSummary {
    pub first_name: String,
    pub last_name: String,
    pub slot: SlotId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineupEntry {
    pub first_name: String,
    pub last_name: String,
    pub slot: SlotId,
    pub position: Position,
}

impl PlayerSummary {
    fn of(slot: SlotId, player: &Player) -> Self {
        Self {
            first_name: player.first_name().to_string(),
            last_name: player.last_name().to_string(),
            slot,
        }
    }
}

impl fmt::Display for PlayerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, Jersey Number: {}", self.first_name, self.last_name, self.slot)
    }
}

impl fmt::Display for LineupEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, Jersey Number: {}, Position: {}",
            self.first_name, self.last_name, self.slot, self.position
        )
    }
}

/// Every player, by last name. Ties keep the order of `players`.
pub fn roster_listing<'a, I>(players: I) -> Vec<PlayerSummary>
where
    I: IntoIterator<Item = (SlotId, &'a Player)>,
{
    let mut listing: Vec<PlayerSummary> =
        players.into_iter().map(|(slot, player)| PlayerSummary::of(slot, player)).collect();
    listing.sort_by(|a, b| a.last_name.cmp(&b.last_name));
    listing
}

/// Starters ordered by position, then last and first name.
pub fn starting_listing<'a, I>(players: I, lineup: &Lineup) -> Vec<LineupEntry>
where
    I: IntoIterator<Item = (SlotId, &'a Player)>,
{
    let mut listing: Vec<LineupEntry> = players
        .into_iter()
        .filter_map(|(slot, player)| {
            let position = lineup.position_of(slot).filter(|pos| !pos.is_bench())?;
            Some(LineupEntry {
                first_name: player.first_name().to_string(),
                last_name: player.last_name().to_string(),
                slot,
                position,
            })
        })
        .collect();
    listing.sort_by(|a, b| {
        (a.position, &a.last_name, &a.first_name).cmp(&(b.position, &b.last_name, &b.first_name))
    });
    listing
}

/// Bench players by last name.
pub fn bench_listing<'a, I>(players: I, lineup: &Lineup) -> Vec<PlayerSummary>
where
    I: IntoIterator<Item = (SlotId, &'a Player)>,
{
    roster_listing(
        players.into_iter().filter(|(slot, _)| lineup.position_of(*slot) == Some(Position::Bench)),
    )
}

/// One entry per line, each line newline-terminated.
pub fn render_list<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(|item| format!("{}\n", item)).collect()
}

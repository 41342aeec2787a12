use super::eviction::{eviction_target, EvictionTarget};
use super::lineup::{Lineup, LineupSelector};
use super::listing::{bench_listing, roster_listing, starting_listing, LineupEntry, PlayerSummary};
use super::slots::SlotAllocator;
use crate::config::RosterConfig;
use crate::error::{ConfigError, Result, RosterError};
use crate::models::{NewPlayer, Player, Position, SlotId};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Outcome of an admission request that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Admission {
    Admitted {
        slot: SlotId,
        /// Player removed to make room, when the roster was full
        evicted: Option<Evicted>,
    },
    /// The roster was full and the newcomer was its weakest candidate.
    NotAdmitted,
}

impl Admission {
    pub fn slot(&self) -> Option<SlotId> {
        match self {
            Admission::Admitted { slot, .. } => Some(*slot),
            Admission::NotAdmitted => None,
        }
    }

    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evicted {
    pub slot: SlotId,
    pub player: Player,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "player", rename_all = "snake_case")]
pub enum Removal {
    Removed(Player),
    NotFound,
}

#[derive(Debug, Clone)]
struct CachedLineup {
    version: u64,
    lineup: Lineup,
}

/// Owns the roster: players keyed by slot, the capacity policy and the
/// last computed lineup.
///
/// Every mutation bumps `version`, which invalidates the cached lineup and
/// puts every player back on the bench until the next computation.
#[derive(Debug, Clone)]
pub struct RosterManager {
    config: RosterConfig,
    players: BTreeMap<SlotId, Player>,
    index: HashMap<Uuid, SlotId>,
    slots: SlotAllocator,
    selector: LineupSelector,
    version: u64,
    cached: Option<CachedLineup>,
}

impl Default for RosterManager {
    fn default() -> Self {
        Self::build(RosterConfig::default())
    }
}

impl RosterManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RosterConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: RosterConfig) -> Self {
        Self {
            slots: SlotAllocator::new(config.capacity, config.slot_allocation),
            selector: LineupSelector::new(config.lineup_floor),
            players: BTreeMap::new(),
            index: HashMap::new(),
            version: 0,
            cached: None,
            config,
        }
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn size(&self) -> usize {
        self.players.len()
    }

    pub fn team_size(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Mutation counter; changes whenever the roster does.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn evaluation_date(&self) -> NaiveDate {
        self.config.evaluation_date()
    }

    /// Validate `data` and add the player, evicting the weakest candidate
    /// when the roster is full.
    pub fn admit(&mut self, data: &NewPlayer) -> Result<Admission> {
        let player = Player::new(data, self.evaluation_date())?;

        let mut evicted = None;
        if self.slots.free_count() == 0 {
            match eviction_target(self.players(), &player) {
                EvictionTarget::Newcomer => {
                    log::info!(
                        "Roster full: {} {} (skill {}) not admitted",
                        player.first_name(),
                        player.last_name(),
                        player.skill_level()
                    );
                    return Ok(Admission::NotAdmitted);
                }
                EvictionTarget::Existing(slot) => {
                    if let Some(gone) = self.take(slot) {
                        log::info!(
                            "Roster full: evicted {} {} from slot {}",
                            gone.first_name(),
                            gone.last_name(),
                            slot
                        );
                        evicted = Some(Evicted { slot, player: gone });
                    }
                }
            }
        }

        let Some(slot) = self.slots.allocate() else {
            log::warn!("No free slot for {} {}", player.first_name(), player.last_name());
            return Ok(Admission::NotAdmitted);
        };

        log::info!("Admitted {} {} at slot {}", player.first_name(), player.last_name(), slot);
        self.index.insert(player.id(), slot);
        self.players.insert(slot, player);
        self.touch();

        Ok(Admission::Admitted { slot, evicted })
    }

    /// Positional form of [`admit`](Self::admit).
    pub fn admit_player(
        &mut self,
        first_name: &str,
        last_name: &str,
        year: i32,
        month: i32,
        day: i32,
        position: &str,
        skill_level: i32,
    ) -> Result<Admission> {
        self.admit(&NewPlayer::new(first_name, last_name, (year, month, day), position, skill_level))
    }

    /// Remove the player at `slot`. Fails only when the roster is empty.
    pub fn remove(&mut self, slot: SlotId) -> Result<Removal> {
        if self.players.is_empty() {
            return Err(RosterError::EmptyRoster);
        }

        match self.take(slot) {
            Some(player) => {
                log::info!(
                    "Removed {} {} from slot {}",
                    player.first_name(),
                    player.last_name(),
                    slot
                );
                Ok(Removal::Removed(player))
            }
            None => {
                log::debug!("No player at slot {}", slot);
                Ok(Removal::NotFound)
            }
        }
    }

    /// Remove by jersey number. Numbers that can never name a slot are
    /// `NotFound`, once the roster is known to be non-empty.
    pub fn remove_player(&mut self, jersey_number: i64) -> Result<Removal> {
        if self.players.is_empty() {
            return Err(RosterError::EmptyRoster);
        }
        match u8::try_from(jersey_number) {
            Ok(number) => self.remove(SlotId::new(number)),
            Err(_) => {
                log::debug!("Jersey number {} is out of range", jersey_number);
                Ok(Removal::NotFound)
            }
        }
    }

    pub fn lookup(&self, slot: SlotId) -> Option<&Player> {
        self.players.get(&slot)
    }

    /// Mutable access for profile updates. Counts as a roster change.
    pub fn lookup_mut(&mut self, slot: SlotId) -> Option<&mut Player> {
        if !self.players.contains_key(&slot) {
            return None;
        }
        self.touch();
        self.players.get_mut(&slot)
    }

    /// Slot currently holding `player`, matched by player id.
    pub fn slot_of(&self, player: &Player) -> Option<SlotId> {
        self.index.get(&player.id()).copied()
    }

    /// Players in slot order.
    pub fn players(&self) -> impl Iterator<Item = (SlotId, &Player)> + '_ {
        self.players.iter().map(|(slot, player)| (*slot, player))
    }

    /// Owned copy of the roster, for computing outside a lock.
    pub fn snapshot(&self) -> Vec<(SlotId, Player)> {
        self.players.iter().map(|(slot, player)| (*slot, player.clone())).collect()
    }

    pub fn selector(&self) -> LineupSelector {
        self.selector
    }

    /// Fails with `RosterTooSmall` until the roster reaches the lineup floor.
    pub fn validate_team(&self) -> Result<()> {
        if self.players.len() < self.config.lineup_floor {
            return Err(RosterError::RosterTooSmall {
                required: self.config.lineup_floor,
                found: self.players.len(),
            });
        }
        Ok(())
    }

    /// Current lineup, recomputed if the roster changed since the last call.
    pub fn lineup(&mut self) -> Result<Lineup> {
        if let Some(cached) = &self.cached {
            if cached.version == self.version {
                return Ok(cached.lineup.clone());
            }
        }

        let view: Vec<(SlotId, &Player)> = self.players().collect();
        let lineup = self.selector.select(&view)?;
        log::debug!("Lineup recomputed at roster version {}", self.version);

        for (slot, player) in self.players.iter_mut() {
            player.set_assigned_position(lineup.position_of(*slot).unwrap_or(Position::Bench));
        }
        self.cached = Some(CachedLineup { version: self.version, lineup: lineup.clone() });
        Ok(lineup)
    }

    /// All players sorted by last name.
    pub fn all_players(&self) -> Vec<PlayerSummary> {
        roster_listing(self.players())
    }

    /// Starters sorted by position, last name, first name.
    pub fn starting_lineup(&mut self) -> Result<Vec<LineupEntry>> {
        let lineup = self.lineup()?;
        Ok(starting_listing(self.players(), &lineup))
    }

    /// Bench players sorted by last name.
    pub fn bench_players(&mut self) -> Result<Vec<PlayerSummary>> {
        let lineup = self.lineup()?;
        Ok(bench_listing(self.players(), &lineup))
    }

    fn take(&mut self, slot: SlotId) -> Option<Player> {
        let mut player = self.players.remove(&slot)?;
        self.index.remove(&player.id());
        self.slots.release(slot);
        player.set_assigned_position(Position::Bench);
        self.touch();
        Some(player)
    }

    fn touch(&mut self) {
        self.version += 1;
        if self.cached.take().is_some() {
            for player in self.players.values_mut() {
                player.set_assigned_position(Position::Bench);
            }
        }
    }
}

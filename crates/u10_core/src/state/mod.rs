//! Shared roster handle
//!
//! Wraps a [`RosterManager`] for use from several threads. Each mutation
//! runs as one critical section under the write lock; lineup reads copy a
//! snapshot under the read lock and compute outside it.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;
use crate::models::{NewPlayer, Player, SlotId};
use crate::roster::{
    bench_listing, starting_listing, Admission, LineupEntry, PlayerSummary, Removal,
    RosterManager,
};

#[derive(Debug, Clone, Default)]
pub struct SharedRoster {
    inner: Arc<RwLock<RosterManager>>,
}

impl SharedRoster {
    pub fn new(roster: RosterManager) -> Self {
        Self { inner: Arc::new(RwLock::new(roster)) }
    }

    // A panic mid-operation cannot leave the roster half-mutated: every
    // mutation checks before it changes anything.
    fn read(&self) -> RwLockReadGuard<'_, RosterManager> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RosterManager> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn admit(&self, data: &NewPlayer) -> Result<Admission> {
        self.write().admit(data)
    }

    pub fn remove(&self, slot: SlotId) -> Result<Removal> {
        self.write().remove(slot)
    }

    pub fn team_size(&self) -> usize {
        self.read().size()
    }

    pub fn lookup(&self, slot: SlotId) -> Option<Player> {
        self.read().lookup(slot).cloned()
    }

    pub fn all_players(&self) -> Vec<PlayerSummary> {
        self.read().all_players()
    }

    pub fn snapshot(&self) -> Vec<(SlotId, Player)> {
        self.read().snapshot()
    }

    pub fn starting_lineup(&self) -> Result<Vec<LineupEntry>> {
        let (selector, snapshot) = {
            let roster = self.read();
            (roster.selector(), roster.snapshot())
        };
        let view: Vec<(SlotId, &Player)> = snapshot.iter().map(|(s, p)| (*s, p)).collect();
        let lineup = selector.select(&view)?;
        Ok(starting_listing(view, &lineup))
    }

    pub fn bench_players(&self) -> Result<Vec<PlayerSummary>> {
        let (selector, snapshot) = {
            let roster = self.read();
            (roster.selector(), roster.snapshot())
        };
        let view: Vec<(SlotId, &Player)> = snapshot.iter().map(|(s, p)| (*s, p)).collect();
        let lineup = selector.select(&view)?;
        Ok(bench_listing(view, &lineup))
    }

    /// Run `f` with exclusive access, e.g. to apply several changes at once.
    pub fn with_roster<T>(&self, f: impl FnOnce(&mut RosterManager) -> T) -> T {
        let mut roster = self.write();
        f(&mut roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RosterConfig;
    use chrono::NaiveDate;
    use std::collections::HashSet;
    use std::thread;

    fn shared() -> SharedRoster {
        let config = RosterConfig::default()
            .with_evaluation_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        SharedRoster::new(RosterManager::with_config(config).unwrap())
    }

    #[test]
    fn test_concurrent_admissions_respect_capacity() {
        let roster = shared();
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let roster = roster.clone();
                thread::spawn(move || {
                    for i in 0..10 {
                        let name = format!("P{}x{}", t, i);
                        let skill = (i % 5) + 1;
                        roster
                            .admit(&NewPlayer::new(&name, &name, (2016, 1, 1), "Midfielder", skill))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(roster.team_size(), 20);
        let slots: HashSet<SlotId> = roster.all_players().iter().map(|p| p.slot).collect();
        assert_eq!(slots.len(), 20);
        // eight arrivals per skill level; only the twenty strongest remain
        assert!(roster.snapshot().iter().all(|(_, p)| p.skill_level() >= 3));
    }

    #[test]
    fn test_lineup_from_snapshot_matches_manager() {
        let roster = shared();
        let positions = ["Goalie", "Defender", "Midfielder", "Forward"];
        for (i, position) in positions.iter().cycle().take(12).enumerate() {
            let name = format!("N{}", i);
            let skill = (i % 5) as i32 + 1;
            roster.admit(&NewPlayer::new(&name, &name, (2017, 3, 3), position, skill)).unwrap();
        }

        let from_snapshot = roster.starting_lineup().unwrap();
        let from_manager = roster.with_roster(|team| team.starting_lineup()).unwrap();
        assert_eq!(from_snapshot, from_manager);
        assert_eq!(roster.bench_players().unwrap().len(), 5);
    }

    #[test]
    fn test_remove_through_handle() {
        let roster = shared();
        assert!(roster.remove(SlotId::new(1)).is_err());
        roster.admit(&NewPlayer::new("A", "B", (2017, 3, 3), "Goalie", 3)).unwrap();
        assert!(roster.lookup(SlotId::new(1)).is_some());
        assert!(matches!(roster.remove(SlotId::new(1)), Ok(Removal::Removed(_))));
        assert_eq!(roster.team_size(), 0);
    }
}

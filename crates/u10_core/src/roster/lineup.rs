//! LineupSelector: 7-a-side starting lineup and bench from a roster snapshot
//!
//! Two greedy passes over the players ordered by skill:
//! 1. everyone gets their preferred position while its quota is open;
//! 2. leftover quota is filled in fixed MIDFIELDER, DEFENDER, FORWARD,
//!    GOALIE priority, regardless of preference.
//!
//! Everyone not picked sits on the bench. The selector never touches the
//! players it reads; it returns a fresh slot → position mapping.

use crate::error::RosterError;
use crate::models::{Player, Position, SlotId};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Players on the field at kick-off.
pub const STARTERS: usize = 7;

/// Order in which the second pass fills quota left open by preference.
pub const FALLBACK_ORDER: [Position; 4] =
    [Position::Midfielder, Position::Defender, Position::Forward, Position::Goalie];

/// Starting slots per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineupQuota {
    pub goalies: usize,
    pub defenders: usize,
    pub midfielders: usize,
    pub forwards: usize,
}

impl LineupQuota {
    /// 1-2-3-1
    pub const U10: LineupQuota = LineupQuota { goalies: 1, defenders: 2, midfielders: 3, forwards: 1 };

    pub fn for_position(&self, position: Position) -> usize {
        match position {
            Position::Goalie => self.goalies,
            Position::Defender => self.defenders,
            Position::Midfielder => self.midfielders,
            Position::Forward => self.forwards,
            Position::Bench => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.goalies + self.defenders + self.midfielders + self.forwards
    }
}

/// Result of one lineup computation, keyed by slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lineup {
    assignments: BTreeMap<SlotId, Position>,
}

impl Lineup {
    pub fn position_of(&self, slot: SlotId) -> Option<Position> {
        self.assignments.get(&slot).copied()
    }

    /// Starters in slot order.
    pub fn starters(&self) -> impl Iterator<Item = (SlotId, Position)> + '_ {
        self.assignments.iter().filter(|(_, pos)| !pos.is_bench()).map(|(slot, pos)| (*slot, *pos))
    }

    /// Bench slots in slot order.
    pub fn bench(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.assignments.iter().filter(|(_, pos)| pos.is_bench()).map(|(slot, _)| *slot)
    }

    pub fn count_at(&self, position: Position) -> usize {
        self.assignments.values().filter(|pos| **pos == position).count()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LineupSelector {
    quota: LineupQuota,
    floor: usize,
}

impl Default for LineupSelector {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_LINEUP_FLOOR)
    }
}

impl LineupSelector {
    pub fn new(floor: usize) -> Self {
        Self { quota: LineupQuota::U10, floor }
    }

    /// Assign every player in `roster` a position.
    ///
    /// Ties on (skill, preferred position) resolve by ascending slot, so the
    /// result does not depend on the order of `roster`.
    pub fn select(&self, roster: &[(SlotId, &Player)]) -> Result<Lineup, RosterError> {
        if roster.len() < self.floor {
            return Err(RosterError::RosterTooSmall { required: self.floor, found: roster.len() });
        }

        let mut order: Vec<(SlotId, &Player)> = roster.to_vec();
        order.sort_by_key(|(slot, player)| {
            (Reverse(player.skill_level()), player.preferred_position(), *slot)
        });

        let mut filled = [0usize; 4];
        let mut assignments: BTreeMap<SlotId, Position> = BTreeMap::new();

        // preferred-position pass
        for (slot, player) in &order {
            let preferred = player.preferred_position();
            if preferred.is_bench() {
                continue;
            }
            if filled[preferred as usize] < self.quota.for_position(preferred) {
                filled[preferred as usize] += 1;
                assignments.insert(*slot, preferred);
            }
        }

        // fallback pass
        let target = self.quota.total();
        for (slot, _) in &order {
            if assignments.len() >= target {
                break;
            }
            if assignments.contains_key(slot) {
                continue;
            }
            let open = FALLBACK_ORDER.iter().copied().find(|position| {
                filled[*position as usize] < self.quota.for_position(*position)
            });
            if let Some(position) = open {
                filled[position as usize] += 1;
                assignments.insert(*slot, position);
            }
        }

        for (slot, _) in &order {
            assignments.entry(*slot).or_insert(Position::Bench);
        }

        Ok(Lineup { assignments })
    }
}

/// Select with the U10 quota and the default size floor of ten.
pub fn select_starting_lineup(roster: &[(SlotId, &Player)]) -> Result<Lineup, RosterError> {
    LineupSelector::default().select(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewPlayer;
    use chrono::NaiveDate;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn squad(spec: &[(&str, &str, i32)]) -> Vec<(SlotId, Player)> {
        spec.iter()
            .enumerate()
            .map(|(idx, (name, position, skill))| {
                let data = NewPlayer::new(name, name, (2016, 5, 5), position, *skill);
                (SlotId::new(idx as u8 + 1), Player::new(&data, as_of()).unwrap())
            })
            .collect()
    }

    fn view(players: &[(SlotId, Player)]) -> Vec<(SlotId, &Player)> {
        players.iter().map(|(slot, player)| (*slot, player)).collect()
    }

    fn slot(n: u8) -> SlotId {
        SlotId::new(n)
    }

    #[test]
    fn test_quota_totals_seven() {
        assert_eq!(LineupQuota::U10.total(), STARTERS);
        assert_eq!(LineupQuota::U10.for_position(Position::Bench), 0);
    }

    #[test]
    fn test_too_small_roster() {
        let players = squad(&[("A", "Goalie", 3); 9]);
        let err = select_starting_lineup(&view(&players)).unwrap_err();
        assert_eq!(err, RosterError::RosterTooSmall { required: 10, found: 9 });
    }

    #[test]
    fn test_mixed_roster() {
        let players = squad(&[
            ("A", "Goalie", 5),
            ("B", "Defender", 3),
            ("C", "Defender", 4),
            ("D", "Defender", 4),
            ("E", "Midfielder", 5),
            ("F", "Midfielder", 3),
            ("G", "Forward", 5),
            ("H", "Forward", 1),
            ("I", "Defender", 2),
            ("J", "Defender", 3),
        ]);
        let lineup = select_starting_lineup(&view(&players)).unwrap();

        assert_eq!(lineup.position_of(slot(1)), Some(Position::Goalie));
        assert_eq!(lineup.position_of(slot(3)), Some(Position::Defender));
        assert_eq!(lineup.position_of(slot(4)), Some(Position::Defender));
        assert_eq!(lineup.position_of(slot(5)), Some(Position::Midfielder));
        assert_eq!(lineup.position_of(slot(6)), Some(Position::Midfielder));
        assert_eq!(lineup.position_of(slot(7)), Some(Position::Forward));
        // B and J tie on (3, DEFENDER); the lower slot takes the open midfield spot
        assert_eq!(lineup.position_of(slot(2)), Some(Position::Midfielder));

        let bench: Vec<SlotId> = lineup.bench().collect();
        assert_eq!(bench, vec![slot(8), slot(9), slot(10)]);
    }

    #[test]
    fn test_everyone_wants_to_play_forward() {
        let players = squad(&[
            ("A", "Forward", 5),
            ("B", "Forward", 3),
            ("C", "Forward", 4),
            ("D", "Forward", 4),
            ("E", "Forward", 5),
            ("F", "Forward", 3),
            ("G", "Forward", 5),
            ("H", "Forward", 1),
            ("I", "Forward", 2),
            ("J", "Forward", 3),
        ]);
        let lineup = select_starting_lineup(&view(&players)).unwrap();

        assert_eq!(lineup.position_of(slot(1)), Some(Position::Forward));
        assert_eq!(lineup.position_of(slot(5)), Some(Position::Midfielder));
        assert_eq!(lineup.position_of(slot(7)), Some(Position::Midfielder));
        assert_eq!(lineup.position_of(slot(3)), Some(Position::Midfielder));
        assert_eq!(lineup.position_of(slot(4)), Some(Position::Defender));
        assert_eq!(lineup.position_of(slot(2)), Some(Position::Defender));
        assert_eq!(lineup.position_of(slot(6)), Some(Position::Goalie));

        assert_eq!(lineup.starters().count(), 7);
        let bench: Vec<SlotId> = lineup.bench().collect();
        assert_eq!(bench, vec![slot(8), slot(9), slot(10)]);
    }

    #[test]
    fn test_secondary_key_is_declared_position_order() {
        // two goalies and a forward all at skill 4: the goalie in slot 2
        // is ranked ahead of the forward in slot 1
        let mut spec = vec![("X", "Forward", 4), ("Y", "Goalie", 4), ("Z", "Goalie", 4)];
        spec.extend([("M", "Midfielder", 1); 8]);
        let players = squad(&spec);
        let lineup = select_starting_lineup(&view(&players)).unwrap();

        assert_eq!(lineup.position_of(slot(2)), Some(Position::Goalie));
        assert_eq!(lineup.position_of(slot(1)), Some(Position::Forward));
        // the second goalie falls through to the fallback pass; midfield is
        // already full so defence is next
        assert_eq!(lineup.position_of(slot(3)), Some(Position::Defender));
        assert_eq!(lineup.position_of(slot(7)), Some(Position::Defender));
        assert_eq!(lineup.count_at(Position::Midfielder), 3);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let players = squad(&[
            ("A", "Goalie", 2),
            ("B", "Goalie", 2),
            ("C", "Defender", 2),
            ("D", "Defender", 2),
            ("E", "Defender", 2),
            ("F", "Midfielder", 2),
            ("G", "Midfielder", 2),
            ("H", "Midfielder", 2),
            ("I", "Midfielder", 2),
            ("J", "Forward", 2),
            ("K", "Forward", 2),
        ]);
        let forward = view(&players);
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(
            select_starting_lineup(&forward).unwrap(),
            select_starting_lineup(&reversed).unwrap()
        );
    }

    #[test]
    fn test_selection_does_not_touch_players() {
        let players = squad(&[("A", "Defender", 3); 10]);
        select_starting_lineup(&view(&players)).unwrap();
        assert!(players.iter().all(|(_, p)| p.assigned_position() == Position::Bench));
    }
}

//! Eviction comparison for a full roster.
//!
//! Candidates are ordered by `(skill ascending, last name, first name)` and
//! the front of that order leaves. Current players with identical keys are
//! ordered by slot, and the newcomer sorts after any current player it ties
//! with.

use crate::models::{Player, SlotId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionTarget {
    /// The newcomer is the weakest candidate and is turned away.
    Newcomer,
    /// The rostered player at this slot makes room.
    Existing(SlotId),
}

/// Pick who leaves when `newcomer` asks to join a full `roster`.
///
/// An empty `roster` has nobody to evict, so the newcomer is the target.
pub fn eviction_target<'a, I>(roster: I, newcomer: &Player) -> EvictionTarget
where
    I: IntoIterator<Item = (SlotId, &'a Player)>,
{
    let weakest = roster
        .into_iter()
        .min_by(|(slot_a, a), (slot_b, b)| {
            a.eviction_key().cmp(&b.eviction_key()).then(slot_a.cmp(slot_b))
        });

    match weakest {
        Some((slot, player)) if player.eviction_key() <= newcomer.eviction_key() => {
            EvictionTarget::Existing(slot)
        }
        _ => EvictionTarget::Newcomer,
    }
}

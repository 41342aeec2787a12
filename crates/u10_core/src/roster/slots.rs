//! Slot id allocation over `1..=capacity`.

use crate::config::SlotAllocation;
use crate::models::SlotId;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone)]
pub struct SlotAllocator {
    /// `in_use[i]` tracks slot id `i + 1`
    in_use: Vec<bool>,
    free: usize,
    rng: Option<ChaCha8Rng>,
}

impl SlotAllocator {
    pub fn new(capacity: usize, strategy: SlotAllocation) -> Self {
        let rng = match strategy {
            SlotAllocation::LowestFree => None,
            SlotAllocation::Seeded { seed } => Some(ChaCha8Rng::seed_from_u64(seed)),
        };
        Self { in_use: vec![false; capacity], free: capacity, rng }
    }

    pub fn free_count(&self) -> usize {
        self.free
    }

    /// Claim an unused id, or `None` when every id is taken.
    pub fn allocate(&mut self) -> Option<SlotId> {
        if self.free == 0 {
            return None;
        }

        let idx = match self.rng.as_mut() {
            None => self.in_use.iter().position(|used| !used)?,
            Some(rng) => {
                let pick = rng.gen_range(0..self.free);
                self.in_use
                    .iter()
                    .enumerate()
                    .filter(|(_, used)| !**used)
                    .nth(pick)
                    .map(|(idx, _)| idx)?
            }
        };

        self.in_use[idx] = true;
        self.free -= 1;
        Some(SlotId::new((idx + 1) as u8))
    }

    /// Return `slot` to the free pool. Returns false if it was not taken.
    pub fn release(&mut self, slot: SlotId) -> bool {
        match self.in_use.get_mut(Self::index(slot)) {
            Some(used) if *used => {
                *used = false;
                self.free += 1;
                true
            }
            _ => false,
        }
    }

    fn index(slot: SlotId) -> usize {
        // slot 0 maps past the end so it is never in range
        (slot.get() as usize).wrapping_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lowest_free_fills_in_order_and_reuses_gaps() {
        let mut slots = SlotAllocator::new(20, SlotAllocation::LowestFree);
        let taken: Vec<u8> = (0..5).map(|_| slots.allocate().unwrap().get()).collect();
        assert_eq!(taken, vec![1, 2, 3, 4, 5]);

        assert!(slots.release(SlotId::new(3)));
        assert!(!slots.release(SlotId::new(3)));
        assert_eq!(slots.allocate(), Some(SlotId::new(3)));
        assert_eq!(slots.allocate(), Some(SlotId::new(6)));
    }

    #[test]
    fn test_exhaustion() {
        let mut slots = SlotAllocator::new(7, SlotAllocation::LowestFree);
        for _ in 0..7 {
            assert!(slots.allocate().is_some());
        }
        assert_eq!(slots.free_count(), 0);
        assert_eq!(slots.allocate(), None);
    }

    #[test]
    fn test_out_of_range_ids() {
        let mut slots = SlotAllocator::new(20, SlotAllocation::LowestFree);
        assert!(!slots.release(SlotId::new(0)));
        assert!(!slots.release(SlotId::new(21)));
        assert_eq!(slots.free_count(), 20);
    }

    #[test]
    fn test_seeded_is_unique_and_reproducible() {
        let draw = |seed| {
            let mut slots = SlotAllocator::new(20, SlotAllocation::Seeded { seed });
            (0..20).map(|_| slots.allocate().unwrap().get()).collect::<Vec<_>>()
        };

        let first = draw(42);
        assert_eq!(first, draw(42));

        let unique: HashSet<u8> = first.iter().copied().collect();
        assert_eq!(unique.len(), 20);
        assert!(first.iter().all(|id| (1..=20).contains(id)));
    }
}

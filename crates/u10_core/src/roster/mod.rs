//! Roster system module
//!
//! - `RosterManager`: capacity policy, slot ids, reverse index, lineup cache
//! - `LineupSelector`: two-pass 1-2-3-1 lineup selection
//! - eviction comparison, slot allocation and display listings

pub mod eviction;
pub mod lineup;
pub mod listing;
pub mod manager;
pub mod slots;

pub use eviction::{eviction_target, EvictionTarget};
pub use lineup::{
    select_starting_lineup, Lineup, LineupQuota, LineupSelector, FALLBACK_ORDER, STARTERS,
};
pub use listing::{
    bench_listing, render_list, roster_listing, starting_listing, LineupEntry, PlayerSummary,
};
pub use manager::{Admission, Evicted, Removal, RosterManager};
pub use slots::SlotAllocator;

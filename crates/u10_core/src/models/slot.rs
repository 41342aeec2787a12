use serde::{Deserialize, Serialize};
use std::fmt;

/// Roster slot identifier, shown to users as the jersey number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct SlotId(u8);

impl SlotId {
    pub const fn new(number: u8) -> Self {
        SlotId(number)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for SlotId {
    fn from(number: u8) -> Self {
        SlotId(number)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

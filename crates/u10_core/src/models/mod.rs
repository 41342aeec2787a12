pub mod player;
pub mod position;
pub mod slot;

pub use player::{NewPlayer, Player};
pub use position::Position;
pub use slot::SlotId;

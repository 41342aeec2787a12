pub mod roster_json;

pub use roster_json::*;

//! Entity creation

pub mod player;

pub use player::spawn_player;

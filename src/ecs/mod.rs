//! Entity Component System module
//!
//! Components for the entities held by the engine.

pub mod components;

pub use components::*;

//! Game module - turn loop, actions and input dispatch

mod action;
mod engine;
mod input;

pub use action::Action;
pub use engine::{Engine, EngineError, DEFAULT_FOV_RADIUS};
pub use input::{EventHandler, KeyboardHandler};

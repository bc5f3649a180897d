//! Player actions
//!
//! What an input event turns into once dispatched. Performing an action may
//! mutate anything the engine owns.

use hecs::Entity;

use super::{Engine, EventHandler};

/// Everything an actor can do in a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the game
    Escape,
    /// Step by a delta, if the destination is open floor
    Movement { dx: i32, dy: i32 },
}

impl Action {
    pub fn perform<H: EventHandler>(&self, engine: &mut Engine<H>, actor: Entity) {
        match *self {
            Action::Escape => engine.request_quit(),
            Action::Movement { dx, dy } => try_move(engine, actor, dx, dy),
        }
    }
}

fn try_move<H: EventHandler>(engine: &mut Engine<H>, actor: Entity, dx: i32, dy: i32) {
    let Some(from) = engine.position_of(actor) else {
        log::warn!("Entity {:?} tried to move without a position", actor);
        return;
    };

    let dest = from.offset(dx, dy);
    if !engine.map().in_bounds(dest.x, dest.y) {
        log::trace!("Move to ({}, {}) is off the map", dest.x, dest.y);
        return;
    }
    if !engine.map().is_walkable(dest.x, dest.y) {
        log::trace!("Move to ({}, {}) is blocked", dest.x, dest.y);
        return;
    }

    engine.set_position(actor, dest);
}

//! Player entity creation

use hecs::World;

use crate::ecs::{Name, Player, Position, Renderable};

/// Spawn the player entity
pub fn spawn_player(world: &mut World, pos: Position) -> hecs::Entity {
    world.spawn((
        Player,
        Name::new("Player"),
        pos,
        Renderable::new('@', (255, 255, 255)).with_order(100),
    ))
}

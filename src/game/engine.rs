//! The turn loop
//!
//! Owns the map, the entities and the input handler. Each dispatched action is
//! performed against the engine and followed by a full field-of-view refresh;
//! events that produce no action leave the world untouched.

use hecs::{Entity, World};
use ratatui::buffer::Buffer;
use thiserror::Error;

use super::EventHandler;
use crate::ecs::{Position, Renderable};
use crate::render::{self, Presenter};
use crate::world::{compute_fov, Map};

/// Sight radius around the player
pub const DEFAULT_FOV_RADIUS: i32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("player entity {0:?} has no Position component")]
    PlayerWithoutPosition(Entity),
}

pub struct Engine<H: EventHandler> {
    world: World,
    event_handler: H,
    map: Map,
    player: Entity,
    fov_radius: i32,
    running: bool,
}

impl<H: EventHandler> Engine<H> {
    /// Build an engine around a generated map and compute the first field of view
    pub fn new(world: World, event_handler: H, map: Map, player: Entity) -> Result<Self, EngineError> {
        Self::with_fov_radius(world, event_handler, map, player, DEFAULT_FOV_RADIUS)
    }

    /// Like [`Engine::new`], seeing `fov_radius` cells around the player from the first turn
    pub fn with_fov_radius(
        world: World,
        event_handler: H,
        map: Map,
        player: Entity,
        fov_radius: i32,
    ) -> Result<Self, EngineError> {
        if world.get::<&Position>(player).is_err() {
            return Err(EngineError::PlayerWithoutPosition(player));
        }

        let mut engine = Self {
            world,
            event_handler,
            map,
            player,
            fov_radius,
            running: true,
        };
        engine.update_fov();
        Ok(engine)
    }

    /// Dispatch events in order, performing whatever actions they produce.
    ///
    /// Stops early once an action asks the game to quit.
    pub fn handle_events<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = H::Event>,
    {
        for event in events {
            let Some(action) = self.event_handler.dispatch(&event) else {
                continue;
            };

            log::trace!("Performing {:?}", action);
            let player = self.player;
            action.perform(self, player);
            self.update_fov();

            if !self.running {
                break;
            }
        }
    }

    /// Recompute the visible area from the player's position
    pub fn update_fov(&mut self) {
        match self.player_position() {
            Some(origin) => {
                let visible = compute_fov(&self.map, origin, self.fov_radius);
                self.map.set_visibility(visible);
            }
            None => {
                log::warn!("Player {:?} has no position; nothing is visible", self.player);
                self.map.clear_visibility();
            }
        }
    }

    /// Draw the map and every entity in view, present the frame, then clear the surface
    pub fn render<P: Presenter>(&self, surface: &mut Buffer, presenter: &mut P) -> Result<(), P::Error> {
        render::draw_map(&self.map, surface);

        let mut in_view: Vec<(Position, Renderable)> = self
            .world
            .query::<(&Position, &Renderable)>()
            .iter()
            .filter(|(_, (pos, _))| self.map.is_visible(pos.x, pos.y))
            .map(|(_, (pos, renderable))| (*pos, renderable.clone()))
            .collect();
        in_view.sort_by_key(|(_, renderable)| renderable.render_order);

        for (pos, renderable) in &in_view {
            render::draw_entity(surface, *pos, renderable);
        }

        let presented = presenter.present(surface);
        surface.reset();
        presented
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut Map {
        &mut self.map
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn fov_radius(&self) -> i32 {
        self.fov_radius
    }

    pub fn position_of(&self, entity: Entity) -> Option<Position> {
        self.world.get::<&Position>(entity).ok().map(|p| *p)
    }

    pub fn player_position(&self) -> Option<Position> {
        self.position_of(self.player)
    }

    /// Move an entity; ignored for entities without a position
    pub fn set_position(&mut self, entity: Entity, pos: Position) {
        if let Ok(mut current) = self.world.get::<&mut Position>(entity) {
            *current = pos;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn request_quit(&mut self) {
        log::info!("Quit requested");
        self.running = false;
    }
}

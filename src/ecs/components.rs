//! ECS Components
//!
//! Components attached to entities living in the engine's `hecs::World`.

use serde::{Deserialize, Serialize};

// ============================================================================
// Position
// ============================================================================

/// Position in the game world
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by a delta
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance to another position
    pub fn distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chebyshev distance (allows diagonal)
    pub fn chebyshev_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Visual representation of an entity
#[derive(Debug, Clone, PartialEq)]
pub struct Renderable {
    /// Character to display
    pub glyph: char,
    /// Foreground color (RGB)
    pub fg: (u8, u8, u8),
    /// Render order (higher = on top)
    pub render_order: i32,
}

impl Renderable {
    pub fn new(glyph: char, fg: (u8, u8, u8)) -> Self {
        Self {
            glyph,
            fg,
            render_order: 0,
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.render_order = order;
        self
    }
}

// ============================================================================
// Identity & Naming
// ============================================================================

/// Name component for entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(pub String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Marks an entity as the player
#[derive(Debug, Clone, Copy, Default)]
pub struct Player;

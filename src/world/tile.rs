//! Tile definitions
//!
//! Terrain templates copied into map cells, and how each one is drawn.

use serde::{Deserialize, Serialize};

/// Glyph and colors for drawing a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Graphic {
    pub glyph: char,
    pub fg: (u8, u8, u8),
    pub bg: (u8, u8, u8),
}

impl Graphic {
    pub const fn new(glyph: char, fg: (u8, u8, u8), bg: (u8, u8, u8)) -> Self {
        Self { glyph, fg, bg }
    }
}

/// Drawn for cells that have never been seen
pub const SHROUD: Graphic = Graphic::new(' ', (255, 255, 255), (0, 0, 0));

/// Types of tiles in the game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Floor,
    #[default]
    Wall,
}

impl TileType {
    pub fn is_walkable(&self) -> bool {
        matches!(self, TileType::Floor)
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, TileType::Floor)
    }

    /// Graphic while the tile is inside the field of view
    pub fn light(&self) -> Graphic {
        match self {
            TileType::Floor => Graphic::new('.', (230, 220, 170), (200, 180, 50)),
            TileType::Wall => Graphic::new('#', (255, 240, 200), (130, 110, 50)),
        }
    }

    /// Graphic once explored but no longer visible
    pub fn dark(&self) -> Graphic {
        match self {
            TileType::Floor => Graphic::new('.', (100, 100, 180), (50, 50, 150)),
            TileType::Wall => Graphic::new('#', (60, 60, 160), (0, 0, 100)),
        }
    }

    /// Pick the graphic for the tile's current visibility state
    pub fn graphic(&self, visible: bool, explored: bool) -> Graphic {
        if visible {
            self.light()
        } else if explored {
            self.dark()
        } else {
            SHROUD
        }
    }
}

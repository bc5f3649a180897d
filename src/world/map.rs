//! Map data structure
//!
//! The 2D tile grid plus the `visible` and `explored` layers kept in step with it.
//! Out-of-bounds indexing panics; the `get_*`/`is_walkable`/`is_opaque` queries
//! are the non-panicking way in.

use std::ops::{Index, IndexMut, Range};

use super::tile::TileType;
use crate::ecs::Position;

/// A dungeon map
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    pub width: i32,
    pub height: i32,
    tiles: Vec<TileType>,
    visible: Vec<bool>,
    explored: Vec<bool>,
    /// Start position for player
    pub start_pos: Position,
}

impl Map {
    /// Create a new map filled with walls, nothing seen yet
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "map dimensions must be positive, got {}x{}", width, height);
        assert!(
            width.checked_mul(height).is_some(),
            "{}x{} map has more cells than i32 can index",
            width,
            height
        );
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            tiles: vec![TileType::default(); len],
            visible: vec![false; len],
            explored: vec![false; len],
            start_pos: Position::new(0, 0),
        }
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert 1D index to 2D coordinates
    #[inline]
    pub fn idx_to_xy(&self, idx: usize) -> (i32, i32) {
        let idx = idx as i32;
        (idx % self.width, idx / self.width)
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    #[track_caller]
    fn checked_idx(&self, x: i32, y: i32) -> usize {
        assert!(
            self.in_bounds(x, y),
            "({}, {}) is outside the {}x{} map",
            x,
            y,
            self.width,
            self.height
        );
        self.xy_to_idx(x, y)
    }

    /// Get tile at position, `None` outside the map
    pub fn get_tile(&self, x: i32, y: i32) -> Option<TileType> {
        if self.in_bounds(x, y) {
            Some(self.tiles[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    /// Set tile type at position
    #[track_caller]
    pub fn set_tile(&mut self, x: i32, y: i32, tile_type: TileType) {
        self[(x, y)] = tile_type;
    }

    /// Assign one tile to every cell of a rectangular region (half-open ranges)
    #[track_caller]
    pub fn fill(&mut self, xs: Range<i32>, ys: Range<i32>, tile_type: TileType) {
        if xs.is_empty() || ys.is_empty() {
            return;
        }
        // Both corners in bounds means the whole region is.
        self.checked_idx(xs.start, ys.start);
        self.checked_idx(xs.end - 1, ys.end - 1);

        for y in ys {
            let row = self.xy_to_idx(xs.start, y);
            self.tiles[row..row + xs.len()].fill(tile_type);
        }
    }

    /// Check if a position is walkable
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).is_some_and(|t| t.is_walkable())
    }

    /// Check if a position blocks line of sight (everything off the map does)
    pub fn is_opaque(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).map_or(true, |t| !t.is_transparent())
    }

    /// Is the cell in the current field of view
    #[track_caller]
    pub fn is_visible(&self, x: i32, y: i32) -> bool {
        self.visible[self.checked_idx(x, y)]
    }

    /// Has the cell ever been in the field of view
    #[track_caller]
    pub fn is_explored(&self, x: i32, y: i32) -> bool {
        self.explored[self.checked_idx(x, y)]
    }

    /// The `visible` layer, row-major
    pub fn visible(&self) -> &[bool] {
        &self.visible
    }

    /// The `explored` layer, row-major
    pub fn explored(&self) -> &[bool] {
        &self.explored
    }

    /// Replace the `visible` layer and fold it into `explored`
    pub fn set_visibility(&mut self, visible: Vec<bool>) {
        assert_eq!(visible.len(), self.tiles.len(), "visibility grid does not match the map");
        for (explored, &seen) in self.explored.iter_mut().zip(&visible) {
            *explored |= seen;
        }
        self.visible = visible;
    }

    /// Clear all visibility; `explored` is left alone
    pub fn clear_visibility(&mut self) {
        self.visible.fill(false);
    }

    /// Get all walkable positions
    pub fn walkable_positions(&self) -> Vec<Position> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_walkable())
            .map(|(idx, _)| {
                let (x, y) = self.idx_to_xy(idx);
                Position::new(x, y)
            })
            .collect()
    }
}

impl Index<(i32, i32)> for Map {
    type Output = TileType;

    #[track_caller]
    fn index(&self, (x, y): (i32, i32)) -> &TileType {
        &self.tiles[self.checked_idx(x, y)]
    }
}

impl IndexMut<(i32, i32)> for Map {
    #[track_caller]
    fn index_mut(&mut self, (x, y): (i32, i32)) -> &mut TileType {
        let idx = self.checked_idx(x, y);
        &mut self.tiles[idx]
    }
}

impl Index<Position> for Map {
    type Output = TileType;

    #[track_caller]
    fn index(&self, pos: Position) -> &TileType {
        &self[(pos.x, pos.y)]
    }
}

impl IndexMut<Position> for Map {
    #[track_caller]
    fn index_mut(&mut self, pos: Position) -> &mut TileType {
        &mut self[(pos.x, pos.y)]
    }
}

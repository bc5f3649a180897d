//! Tunnels between rooms
//!
//! L-shaped paths rasterized with Bresenham's line algorithm.

use rand::rngs::StdRng;
use rand::Rng;

use crate::ecs::Position;

/// Integer points on the line between two cells, both endpoints included
#[derive(Debug, Clone)]
pub struct Bresenham {
    x: i32,
    y: i32,
    end_x: i32,
    end_y: i32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl Bresenham {
    pub fn new(start: Position, end: Position) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = -(end.y - start.y).abs();
        Self {
            x: start.x,
            y: start.y,
            end_x: end.x,
            end_y: end.y,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for Bresenham {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.done {
            return None;
        }

        let current = Position::new(self.x, self.y);
        if self.x == self.end_x && self.y == self.end_y {
            self.done = true;
        } else {
            let e2 = 2 * self.err;
            if e2 >= self.dy {
                self.err += self.dy;
                self.x += self.sx;
            }
            if e2 <= self.dx {
                self.err += self.dx;
                self.y += self.sy;
            }
        }
        Some(current)
    }
}

impl std::iter::FusedIterator for Bresenham {}

/// An L-shaped tunnel from `start` to `end`.
///
/// The bend is chosen here, with even odds between going horizontal first
/// (corner at `(end.x, start.y)`) and vertical first (corner at
/// `(start.x, end.y)`). The corner cell is yielded twice, once per leg.
pub fn tunnel_between(
    rng: &mut StdRng,
    start: Position,
    end: Position,
) -> impl Iterator<Item = Position> {
    let corner = if rng.gen_bool(0.5) {
        Position::new(end.x, start.y)
    } else {
        Position::new(start.x, end.y)
    };

    Bresenham::new(start, corner).chain(Bresenham::new(corner, end))
}

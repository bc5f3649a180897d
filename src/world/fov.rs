//! Field of View calculation
//!
//! Recursive shadowcasting over the map's transparency, limited to a circular
//! radius. Produces a fresh row-major visibility grid; the caller decides how
//! to merge it into the map.

use super::Map;
use crate::ecs::Position;

/// Compute the cells visible from `origin` within `radius`.
///
/// Panics if `origin` lies outside the map.
pub fn compute_fov(map: &Map, origin: Position, radius: i32) -> Vec<bool> {
    assert!(
        map.in_bounds(origin.x, origin.y),
        "fov origin ({}, {}) is outside the {}x{} map",
        origin.x,
        origin.y,
        map.width,
        map.height
    );

    let mut caster = ShadowCaster {
        map,
        origin,
        radius: radius.max(0),
        visible: vec![false; map.visible().len()],
    };

    // Origin is always visible
    caster.light(origin.x, origin.y);

    for octant in 0..8 {
        caster.scan(octant, 1, 1.0, 0.0);
    }

    caster.visible
}

struct ShadowCaster<'a> {
    map: &'a Map,
    origin: Position,
    radius: i32,
    visible: Vec<bool>,
}

impl ShadowCaster<'_> {
    fn light(&mut self, x: i32, y: i32) {
        if self.map.in_bounds(x, y) {
            let idx = self.map.xy_to_idx(x, y);
            self.visible[idx] = true;
        }
    }

    /// Scan one octant row by row, starting at `row`, between two slopes
    fn scan(&mut self, octant: u8, row: i32, mut start_slope: f64, end_slope: f64) {
        if start_slope < end_slope {
            return;
        }

        let radius_sq = self.radius * self.radius;
        let mut next_start_slope = start_slope;

        for depth in row..=self.radius {
            let mut blocked = false;
            let dy = -depth;

            for dx in dy..=0 {
                let left_slope = (dx as f64 - 0.5) / (dy as f64 + 0.5);
                let right_slope = (dx as f64 + 0.5) / (dy as f64 - 0.5);

                if start_slope < right_slope {
                    continue;
                }
                if end_slope > left_slope {
                    break;
                }

                let (ox, oy) = transform_octant(dx, dy, octant);
                let x = self.origin.x + ox;
                let y = self.origin.y + oy;

                if dx * dx + dy * dy <= radius_sq {
                    self.light(x, y);
                }

                let opaque = self.map.is_opaque(x, y);
                if blocked {
                    if opaque {
                        next_start_slope = right_slope;
                    } else {
                        blocked = false;
                        start_slope = next_start_slope;
                    }
                } else if opaque && depth < self.radius {
                    blocked = true;
                    self.scan(octant, depth + 1, start_slope, left_slope);
                    next_start_slope = right_slope;
                }
            }

            if blocked {
                break;
            }
        }
    }
}

/// Map octant-local (col, row) onto world offsets
fn transform_octant(col: i32, row: i32, octant: u8) -> (i32, i32) {
    match octant {
        0 => (col, row),
        1 => (row, col),
        2 => (row, -col),
        3 => (col, -row),
        4 => (-col, -row),
        5 => (-row, -col),
        6 => (-row, col),
        _ => (-col, row),
    }
}

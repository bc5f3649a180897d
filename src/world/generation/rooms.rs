//! Room and corridor dungeon generator
//!
//! Classic roguelike dungeon with rectangular rooms connected by tunnels.
//! Placement makes a fixed number of attempts and silently drops any room
//! that would touch one already placed, so a map may end up with far fewer
//! rooms than attempts.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::Rng;

use super::{tunnel_between, DungeonConfig, GenerationError};
use crate::ecs::Position;
use crate::world::{Map, TileType};

/// A rectangular room; the outer ring of cells stays wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangularRoom {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RectangularRoom {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn center(&self) -> Position {
        Position::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Carvable interior as half-open column and row ranges
    pub fn inner(&self) -> (Range<i32>, Range<i32>) {
        (self.x1 + 1..self.x2, self.y1 + 1..self.y2)
    }

    /// Strictly inside the border
    pub fn contains_inner(&self, pos: Position) -> bool {
        let (xs, ys) = self.inner();
        xs.contains(&pos.x) && ys.contains(&pos.y)
    }

    /// Closed-interval overlap: rooms sharing an edge count as intersecting
    pub fn intersects(&self, other: &RectangularRoom) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }
}

/// Generate a dungeon and move `player` to the center of its first room
pub fn generate_dungeon(
    rng: &mut StdRng,
    config: &DungeonConfig,
    player: &mut Position,
) -> Result<Map, GenerationError> {
    place_rooms(rng, config, player).map(|(map, _)| map)
}

/// Like [`generate_dungeon`], also returning the accepted rooms in placement order
pub fn place_rooms(
    rng: &mut StdRng,
    config: &DungeonConfig,
    player: &mut Position,
) -> Result<(Map, Vec<RectangularRoom>), GenerationError> {
    config.validate()?;

    let mut map = Map::new(config.map_width, config.map_height);
    let mut rooms: Vec<RectangularRoom> = Vec::new();

    for _ in 0..config.max_rooms {
        let w = rng.gen_range(config.room_min_size..=config.room_max_size);
        let h = rng.gen_range(config.room_min_size..=config.room_max_size);
        let x = rng.gen_range(0..=map.width - w - 1);
        let y = rng.gen_range(0..=map.height - h - 1);

        let new_room = RectangularRoom::new(x, y, w, h);

        if rooms.iter().any(|r| new_room.intersects(r)) {
            continue;
        }

        let (xs, ys) = new_room.inner();
        map.fill(xs, ys, TileType::Floor);

        match rooms.last() {
            None => {
                *player = new_room.center();
                map.start_pos = new_room.center();
            }
            Some(prev) => {
                for pos in tunnel_between(rng, prev.center(), new_room.center()) {
                    map[pos] = TileType::Floor;
                }
            }
        }

        rooms.push(new_room);
    }

    log::debug!(
        "Placed {} of {} attempted rooms on a {}x{} map",
        rooms.len(),
        config.max_rooms,
        map.width,
        map.height
    );

    Ok((map, rooms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::generation::ConfigError;
    use rand::SeedableRng;

    #[test]
    fn test_room_geometry() {
        let room = RectangularRoom::new(2, 3, 5, 4);
        assert_eq!((room.x2, room.y2), (7, 7));
        assert_eq!(room.center(), Position::new(4, 5));
        assert_eq!(room.inner(), (3..7, 4..7));
        assert!(room.contains_inner(room.center()));
        assert!(!room.contains_inner(Position::new(2, 5)));
    }

    #[test]
    fn test_shared_edge_intersects() {
        let a = RectangularRoom::new(0, 0, 4, 4);
        let touching = RectangularRoom::new(4, 0, 4, 4);
        let apart = RectangularRoom::new(5, 0, 4, 4);
        assert!(a.intersects(&touching));
        assert!(touching.intersects(&a));
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_accepted_rooms_never_intersect() {
        let config = DungeonConfig::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut player = Position::default();
            let (_, rooms) = place_rooms(&mut rng, &config, &mut player).unwrap();

            assert!(!rooms.is_empty());
            assert!(rooms.len() <= config.max_rooms as usize);
            for (i, a) in rooms.iter().enumerate() {
                for b in &rooms[i + 1..] {
                    assert!(!a.intersects(b), "seed {}: {:?} overlaps {:?}", seed, a, b);
                }
            }
        }
    }

    #[test]
    fn test_rooms_stay_off_the_map_edge() {
        let config = DungeonConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut player = Position::default();
        let (map, rooms) = place_rooms(&mut rng, &config, &mut player).unwrap();

        for room in &rooms {
            assert!(room.x1 >= 0 && room.y1 >= 0);
            assert!(room.x2 < map.width && room.y2 < map.height);
        }
        for x in 0..map.width {
            assert!(!map.is_walkable(x, 0));
            assert!(!map.is_walkable(x, map.height - 1));
        }
    }

    #[test]
    fn test_player_spawns_inside_first_room() {
        let config = DungeonConfig::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut player = Position::new(-1, -1);
            let (map, rooms) = place_rooms(&mut rng, &config, &mut player).unwrap();

            assert!(rooms[0].contains_inner(player));
            assert_eq!(map.start_pos, player);
            assert!(map.is_walkable(player.x, player.y));
        }
    }

    #[test]
    fn test_consecutive_rooms_are_connected() {
        let config = DungeonConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut player = Position::default();
        let (map, rooms) = place_rooms(&mut rng, &config, &mut player).unwrap();

        // Flood fill over walkable cells from the start
        let mut seen = vec![false; (map.width * map.height) as usize];
        let mut stack = vec![player];
        while let Some(pos) = stack.pop() {
            let idx = map.xy_to_idx(pos.x, pos.y);
            if seen[idx] {
                continue;
            }
            seen[idx] = true;
            for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                let next = pos.offset(dx, dy);
                if map.is_walkable(next.x, next.y) {
                    stack.push(next);
                }
            }
        }

        for room in &rooms {
            let c = room.center();
            assert!(seen[map.xy_to_idx(c.x, c.y)], "room at {:?} is unreachable", c);
        }
    }

    #[test]
    fn test_single_room_dungeon() {
        let config = DungeonConfig {
            max_rooms: 1,
            room_min_size: 3,
            room_max_size: 3,
            map_width: 10,
            map_height: 10,
        };
        let mut rng = StdRng::seed_from_u64(42);
        let mut player = Position::new(-1, -1);
        let (map, rooms) = place_rooms(&mut rng, &config, &mut player).unwrap();

        assert_eq!(rooms.len(), 1);
        let room = rooms[0];
        assert_eq!(player, room.center());

        for y in 0..map.height {
            for x in 0..map.width {
                let tile = map[(x, y)];
                if room.contains_inner(Position::new(x, y)) {
                    assert!(tile.is_walkable() && tile.is_transparent());
                } else {
                    assert_eq!(tile, TileType::Wall);
                }
            }
        }
        assert_eq!(map.walkable_positions().len(), 4);
    }

    #[test]
    fn test_same_seed_same_dungeon() {
        let config = DungeonConfig::default();
        let mut a = Position::default();
        let mut b = Position::default();
        let map_a = generate_dungeon(&mut StdRng::seed_from_u64(99), &config, &mut a).unwrap();
        let map_b = generate_dungeon(&mut StdRng::seed_from_u64(99), &config, &mut b).unwrap();
        assert_eq!(map_a, map_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_attempts_leaves_solid_rock() {
        let config = DungeonConfig {
            max_rooms: 0,
            ..DungeonConfig::default()
        };
        let mut player = Position::new(1, 1);
        let map = generate_dungeon(&mut StdRng::seed_from_u64(0), &config, &mut player).unwrap();
        assert!(map.walkable_positions().is_empty());
        assert_eq!(player, Position::new(1, 1));
    }

    #[test]
    fn test_oversized_map_fails_instead_of_overflowing() {
        let config = DungeonConfig {
            max_rooms: 0,
            room_min_size: 3,
            room_max_size: 5,
            map_width: 50_000,
            map_height: 50_000,
        };
        let mut player = Position::new(1, 1);
        let err = generate_dungeon(&mut StdRng::seed_from_u64(0), &config, &mut player).unwrap_err();
        assert_eq!(
            err,
            GenerationError::InvalidConfiguration(ConfigError::MapTooLarge {
                width: 50_000,
                height: 50_000,
            })
        );
    }

    #[test]
    fn test_invalid_config_fails_before_touching_player() {
        let config = DungeonConfig {
            room_max_size: 45,
            ..DungeonConfig::default()
        };
        let mut player = Position::new(1, 1);
        let err = generate_dungeon(&mut StdRng::seed_from_u64(0), &config, &mut player).unwrap_err();
        assert_eq!(
            err,
            GenerationError::InvalidConfiguration(ConfigError::RoomTooLarge {
                max: 45,
                width: 80,
                height: 45,
            })
        );
        assert_eq!(player, Position::new(1, 1));
    }
}

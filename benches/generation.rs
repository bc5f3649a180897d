use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hecs::World;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cryptcrawl::entities::spawn_player;
use cryptcrawl::world::compute_fov;
use cryptcrawl::{generate_dungeon, Action, DungeonConfig, Engine, EventHandler, Position};

struct Replay;

impl EventHandler for Replay {
    type Event = Action;

    fn dispatch(&mut self, event: &Action) -> Option<Action> {
        Some(*event)
    }
}

fn bench_generation(c: &mut Criterion) {
    let config = DungeonConfig::default();
    c.bench_function("generate_dungeon 80x45", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| {
            let mut start = Position::default();
            black_box(generate_dungeon(&mut rng, &config, &mut start).unwrap())
        })
    });
}

fn bench_fov(c: &mut Criterion) {
    let mut start = Position::default();
    let map = generate_dungeon(&mut StdRng::seed_from_u64(1), &DungeonConfig::default(), &mut start).unwrap();

    c.bench_function("compute_fov radius 3", |b| {
        b.iter(|| black_box(compute_fov(&map, start, 3)))
    });
    c.bench_function("compute_fov radius 10", |b| {
        b.iter(|| black_box(compute_fov(&map, start, 10)))
    });
}

fn bench_turns(c: &mut Criterion) {
    let mut start = Position::default();
    let map = generate_dungeon(&mut StdRng::seed_from_u64(1), &DungeonConfig::default(), &mut start).unwrap();
    let mut world = World::new();
    let player = spawn_player(&mut world, start);
    let mut engine = Engine::new(world, Replay, map, player).unwrap();

    let shuffle = [
        Action::Movement { dx: 1, dy: 0 },
        Action::Movement { dx: -1, dy: 0 },
        Action::Movement { dx: 0, dy: 1 },
        Action::Movement { dx: 0, dy: -1 },
    ];
    c.bench_function("handle_events 4 moves", |b| {
        b.iter(|| engine.handle_events(shuffle))
    });
}

criterion_group!(benches, bench_generation, bench_fov, bench_turns);
criterion_main!(benches);

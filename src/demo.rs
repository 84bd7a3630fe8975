//! Sample components and systems the runtime drives

use glam::Vec2;
use tracing::debug;

use tessera_ecs::{EntityId, Name, Registry, System};

/// World-space position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

/// Units per second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

/// Integrates velocity into position on every fixed step.
pub struct Movement;

impl System for Movement {
    fn step_update(&mut self, delta_time: f32, registry: &mut Registry) {
        let Some(velocities) = registry.column::<Velocity>() else {
            return;
        };
        let moving: Vec<(EntityId, Vec2)> = velocities.iter().map(|(e, v)| (e, v.0)).collect();

        for (entity, velocity) in moving {
            // Velocity without a position: nothing to move.
            if let Ok(position) = registry.get_component_mut::<Position>(entity) {
                position.0 += velocity * delta_time;
            }
        }
    }

    fn name(&self) -> &str {
        "movement"
    }
}

/// Logs every positioned entity once every `interval` frames.
pub struct Reporter {
    interval: u64,
    frames: u64,
}

impl Reporter {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
        }
    }
}

impl System for Reporter {
    fn update(&mut self, _delta_time: f32, registry: &mut Registry) {
        self.frames += 1;
        if self.frames % self.interval != 0 {
            return;
        }
        let Some(positions) = registry.column::<Position>() else {
            return;
        };
        for (entity, position) in positions.iter() {
            let name = registry
                .get_component::<Name>(entity)
                .map(Name::as_str)
                .unwrap_or("<unnamed>");
            debug!("frame {}: {} at {}", self.frames, name, position.0);
        }
    }

    fn name(&self) -> &str {
        "reporter"
    }
}

/// Populate a registry with a handful of moving and static entities.
pub fn spawn_entities(registry: &mut Registry) -> Vec<EntityId> {
    let mut spawned = Vec::new();

    let hero = registry.create_named_entity("Hero");
    registry.emplace_component(hero, Position::new(0.0, 0.0));
    registry.emplace_component(hero, Velocity::new(1.0, 0.5));
    spawned.push(hero);

    for i in 0..3 {
        let drone = registry.create_entity();
        registry.emplace_component(drone, Position::new(i as f32 * 2.0, 5.0));
        registry.emplace_component(drone, Velocity::new(0.0, -1.0));
        spawned.push(drone);
    }

    let beacon = registry.create_named_entity("Beacon");
    registry.emplace_component(beacon, Position::new(-3.0, -3.0));
    spawned.push(beacon);

    spawned
}

//! Tessera - headless runtime for the Tessera ECS
//!
//! Usage: `tessera [CONFIG_PATH]`
//!
//! Loads the engine configuration, builds a world with the sample systems and drives it
//! for the configured number of frames.

mod demo;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use tessera_core::{EngineConfig, GameTime, LogConfig};
use tessera_ecs::{Name, World};

use crate::demo::{Movement, Position, Reporter};

/// Application state
struct TesseraApp {
    world: World,
    clock: GameTime,
    fixed_steps: u64,
}

impl TesseraApp {
    fn new(config: &EngineConfig) -> Self {
        let mut world = World::new();
        world.add_system(Movement);
        world.add_system(Reporter::new(30));
        demo::spawn_entities(world.registry_mut());

        Self {
            world,
            clock: GameTime::new(config.time.clone()),
            fixed_steps: 0,
        }
    }

    fn update(&mut self, delta: f32) {
        self.fixed_steps += self.world.advance(&mut self.clock, delta) as u64;
    }
}

fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("Invalid log level '{}'", config.level))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to set subscriber")
}

/// Load the config under a temporary subscriber so the loader's own logs are not lost
/// before the configured one is installed.
fn load_config<W>(path: Option<&Path>, make_writer: W) -> EngineConfig
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(make_writer)
        .finish();
    tracing::subscriber::with_default(bootstrap, || EngineConfig::load_or_default(path))
}

fn main() -> Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref(), std::io::stdout);

    init_logging(&config.log)?;

    info!("Starting Tessera runtime...");

    let mut app = TesseraApp::new(&config);
    info!(
        "World ready: {} entities, {} systems",
        app.world.registry().entity_count(),
        app.world.system_count()
    );

    for _ in 0..config.run.frames {
        app.update(config.run.frame_delta);
    }

    info!(
        "Ran {} frames ({} fixed steps, {:.3}s simulated)",
        app.clock.frame_count, app.fixed_steps, app.clock.total_time
    );

    let registry = app.world.registry();
    for (kind, column) in registry {
        info!("{}: {} components", kind.name(), column.len());
    }
    if let Some(positions) = registry.column::<Position>() {
        for (entity, position) in positions.iter() {
            let name = registry
                .get_component::<Name>(entity)
                .map(Name::as_str)
                .unwrap_or("<unnamed>");
            info!("{} ended at {}", name, position.0);
        }
    }

    Ok(())
}

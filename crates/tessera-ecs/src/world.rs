use tessera_core::GameTime;
use tracing::{debug, trace};

use crate::registry::Registry;
use crate::system::{System, SystemId};

/// Owns a [`Registry`] and the ordered list of systems that run against it.
///
/// Systems run strictly in registration order. A change one system makes to the registry is
/// visible to every system after it in the same sweep.
pub struct World {
    registry: Registry,
    systems: Vec<Box<dyn System>>,
}

impl World {
    pub fn new() -> Self {
        Self::with_registry(Registry::new())
    }

    /// Wrap an already populated registry.
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            systems: Vec::new(),
        }
    }

    /// Append a system to the end of the schedule.
    pub fn add_system<S: System + 'static>(&mut self, system: S) -> SystemId {
        let id = SystemId(self.systems.len() as u32);
        debug!("registered system {} as #{}", system.name(), id.0);
        self.systems.push(Box::new(system));
        id
    }

    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Run the variable-timestep phase of every system once.
    pub fn update(&mut self, delta_time: f32) {
        trace!("update sweep over {} systems, dt={}", self.systems.len(), delta_time);
        for system in &mut self.systems {
            system.update(delta_time, &mut self.registry);
        }
    }

    /// Run the fixed-timestep phase of every system once.
    pub fn step_update(&mut self, delta_time: f32) {
        trace!("step sweep over {} systems, dt={}", self.systems.len(), delta_time);
        for system in &mut self.systems {
            system.step_update(delta_time, &mut self.registry);
        }
    }

    /// Drive one frame from a clock.
    ///
    /// Feeds `real_delta` to `clock`, runs [`step_update`](Self::step_update) once for each
    /// fixed step the clock has accumulated, then [`update`](Self::update) once with the
    /// frame's scaled delta. Returns the number of fixed steps run.
    pub fn advance(&mut self, clock: &mut GameTime, real_delta: f32) -> u32 {
        clock.update(real_delta);
        let steps = clock.fixed_steps();
        let fixed_timestep = clock.config.fixed_timestep;
        for _ in 0..steps {
            self.step_update(fixed_timestep);
        }
        self.update(clock.delta_time);
        steps
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Consume the world, keeping its registry.
    pub fn into_registry(self) -> Registry {
        self.registry
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

use crate::registry::Registry;

/// Per-frame behaviour driven by a [`World`](crate::World).
///
/// The world calls both phases on every system each tick; implement only the ones you need.
pub trait System: Send {
    /// Variable-timestep phase, run once per frame.
    fn update(&mut self, _delta_time: f32, _registry: &mut Registry) {}

    /// Fixed-timestep phase, run once per fixed step.
    fn step_update(&mut self, _delta_time: f32, _registry: &mut Registry) {}

    /// Label used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Blanket implementation so closures can be used as update-phase systems.
impl<F: FnMut(f32, &mut Registry) + Send> System for F {
    fn update(&mut self, delta_time: f32, registry: &mut Registry) {
        (self)(delta_time, registry);
    }
}

/// Handle returned when a system is added to a world. Ids follow registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SystemId(pub(crate) u32);

impl SystemId {
    pub fn index(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::Name;

    struct Rename;

    impl System for Rename {
        fn step_update(&mut self, _delta_time: f32, registry: &mut Registry) {
            if let Some(names) = registry.column_mut::<Name>() {
                for (_, name) in names.iter_mut() {
                    name.set("stepped");
                }
            }
        }
    }

    #[test]
    fn closure_system() {
        let mut registry = Registry::new();
        let mut total = 0.0;
        let mut system = |dt: f32, r: &mut Registry| {
            total += dt;
            r.create_entity();
        };
        system.update(0.5, &mut registry);
        system.step_update(0.5, &mut registry);
        system.update(0.25, &mut registry);
        assert_eq!(registry.entity_count(), 2);
        assert_eq!(total, 0.75);
    }

    #[test]
    fn default_phases_are_noops() {
        let mut registry = Registry::new();
        let e = registry.create_entity();
        let mut system = Rename;

        system.update(0.1, &mut registry);
        assert_eq!(registry.get_component::<Name>(e).unwrap().as_str(), "Entity 0");

        system.step_update(0.1, &mut registry);
        assert_eq!(registry.get_component::<Name>(e).unwrap().as_str(), "stepped");
        assert!(system.name().ends_with("Rename"));
    }
}

//! Tessera ECS - Entity Component System
//!
//! A registry of per-component-kind sparse-set columns addressed by plain entity ids,
//! plus a [`World`] that drives an ordered list of [`System`]s against it in two phases:
//! a variable-timestep `update` and a fixed-timestep `step_update`.

mod component;
mod entity;
mod error;
mod name;
mod registry;
mod system;
mod world;

pub use component::{Component, ComponentColumn, ComponentKindId, SparseSet};
pub use entity::{EntityAllocator, EntityId};
pub use error::{EcsError, EcsResult};
pub use name::Name;
pub use registry::{Columns, Registry};
pub use system::{System, SystemId};
pub use world::World;

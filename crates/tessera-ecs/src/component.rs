use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::entity::EntityId;

/// Marker trait for types that can be stored as ECS components.
pub trait Component: 'static + Send + Sync {}

/// Blanket implementation: any `'static + Send + Sync` type is a valid component.
impl<T: 'static + Send + Sync> Component for T {}

/// Runtime identifier of a component type, used to key the registry's columns.
///
/// Equality and hashing only look at the [`TypeId`]; the type name rides along for
/// error messages and logs.
#[derive(Clone, Copy)]
pub struct ComponentKindId {
    type_id: TypeId,
    name: &'static str,
}

impl ComponentKindId {
    /// The kind id of `T`.
    pub fn of<T: Component>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Fully qualified Rust type name of the component.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ComponentKindId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ComponentKindId {}

impl Hash for ComponentKindId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ComponentKindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentKindId({})", self.name)
    }
}

/// Type-erased view of a component column, as yielded by registry iteration.
pub trait ComponentColumn: Any + Send + Sync {
    /// The component kind stored in this column.
    fn kind(&self) -> ComponentKindId;
    fn has(&self, entity: EntityId) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Entities currently holding a value in this column, in dense order.
    fn entities(&self) -> &[EntityId];
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Sparse-set storage for a single component type. Provides O(1) insert/remove/lookup
/// and dense iteration.
pub struct SparseSet<T> {
    /// Maps entity index → dense index. `None` means the entity has no component.
    sparse: Vec<Option<usize>>,
    /// Packed component values.
    dense: Vec<T>,
    /// Entity owning each dense slot.
    entities: Vec<EntityId>,
}

impl<T: Component> SparseSet<T> {
    pub fn new() -> Self {
        Self {
            sparse: Vec::new(),
            dense: Vec::new(),
            entities: Vec::new(),
        }
    }

    fn dense_index(&self, entity: EntityId) -> Option<usize> {
        self.sparse.get(entity.0 as usize).copied().flatten()
    }

    /// Insert or replace the component for an entity, returning the stored value.
    ///
    /// The sparse index grows to cover `entity`, so inserting for a very large id costs
    /// memory proportional to that id.
    pub fn insert(&mut self, entity: EntityId, value: T) -> &mut T {
        let idx = entity.0 as usize;
        if idx >= self.sparse.len() {
            self.sparse.resize(idx + 1, None);
        }
        let dense_idx = match self.sparse[idx] {
            Some(dense_idx) => {
                self.dense[dense_idx] = value;
                dense_idx
            }
            None => {
                let dense_idx = self.dense.len();
                self.sparse[idx] = Some(dense_idx);
                self.dense.push(value);
                self.entities.push(entity);
                dense_idx
            }
        };
        &mut self.dense[dense_idx]
    }

    pub fn get(&self, entity: EntityId) -> Option<&T> {
        self.dense_index(entity).map(|dense_idx| &self.dense[dense_idx])
    }

    pub fn get_mut(&mut self, entity: EntityId) -> Option<&mut T> {
        self.dense_index(entity)
            .map(move |dense_idx| &mut self.dense[dense_idx])
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.dense_index(entity).is_some()
    }

    /// Remove the component for an entity, returning it if it was present.
    pub fn remove(&mut self, entity: EntityId) -> Option<T> {
        let dense_idx = self.dense_index(entity)?;
        self.sparse[entity.0 as usize] = None;

        let last = self.dense.len() - 1;
        if dense_idx != last {
            // Swap-remove: move the last element into the removed slot.
            self.dense.swap(dense_idx, last);
            self.entities.swap(dense_idx, last);
            let moved = self.entities[dense_idx];
            self.sparse[moved.0 as usize] = Some(dense_idx);
        }
        self.entities.pop();
        self.dense.pop()
    }

    /// Iterate over all (entity, &component) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.entities.iter().copied().zip(self.dense.iter())
    }

    /// Iterate over all (entity, &mut component) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut T)> {
        self.entities.iter().copied().zip(self.dense.iter_mut())
    }

    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }
}

impl<T: Component> Default for SparseSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Component> ComponentColumn for SparseSet<T> {
    fn kind(&self) -> ComponentKindId {
        ComponentKindId::of::<T>()
    }

    fn has(&self, entity: EntityId) -> bool {
        self.contains(entity)
    }

    fn len(&self) -> usize {
        self.dense.len()
    }

    fn entities(&self) -> &[EntityId] {
        &self.entities
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

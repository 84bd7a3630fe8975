use std::any::type_name;
use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::component::{Component, ComponentColumn, ComponentKindId, SparseSet};
use crate::entity::{EntityAllocator, EntityId};
use crate::error::{EcsError, EcsResult};
use crate::name::Name;

/// Owns every entity id and every component column.
///
/// One [`SparseSet`] column exists per component kind. Columns are created the first time a
/// component of that kind is emplaced and are kept for the registry's whole lifetime, even
/// once emptied.
///
/// Entity ids are not validated: passing an id this registry never handed out is allowed and
/// simply addresses that slot of the column.
pub struct Registry {
    entities: EntityAllocator,
    /// Columns in creation order.
    columns: Vec<Box<dyn ComponentColumn>>,
    /// Kind → position in `columns`.
    index: HashMap<ComponentKindId, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entities: EntityAllocator::new(),
            columns: Vec::new(),
            index: HashMap::new(),
        }
    }

    // ---- Entity management ----

    /// Create an entity named `"Entity {id}"`.
    pub fn create_entity(&mut self) -> EntityId {
        let id = self.entities.allocate();
        self.emplace_component(id, Name::new(format!("Entity {id}")));
        trace!("created entity {}", id);
        id
    }

    /// Create an entity with the given name.
    pub fn create_named_entity(&mut self, name: impl Into<Name>) -> EntityId {
        let id = self.entities.allocate();
        self.emplace_component(id, name.into());
        trace!("created entity {}", id);
        id
    }

    /// Number of entities ever created. Never decreases.
    pub fn entity_count(&self) -> usize {
        self.entities.count()
    }

    // ---- Columns ----

    fn column_or_insert<T: Component>(&mut self) -> &mut SparseSet<T> {
        let kind = ComponentKindId::of::<T>();
        let slot = match self.index.get(&kind) {
            Some(&slot) => slot,
            None => {
                let slot = self.columns.len();
                self.columns.push(Box::new(SparseSet::<T>::new()));
                self.index.insert(kind, slot);
                debug!("created column for component {}", kind.name());
                slot
            }
        };
        self.columns[slot]
            .as_any_mut()
            .downcast_mut::<SparseSet<T>>()
            .expect("component column stored under a foreign kind id")
    }

    /// The column for `T`, if any entity has ever been given a `T`.
    pub fn column<T: Component>(&self) -> Option<&SparseSet<T>> {
        let &slot = self.index.get(&ComponentKindId::of::<T>())?;
        self.columns[slot].as_any().downcast_ref::<SparseSet<T>>()
    }

    /// Mutable access to the column for `T`.
    pub fn column_mut<T: Component>(&mut self) -> Option<&mut SparseSet<T>> {
        let &slot = self.index.get(&ComponentKindId::of::<T>())?;
        self.columns[slot].as_any_mut().downcast_mut::<SparseSet<T>>()
    }

    /// Number of component kinds that have a column.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Iterate every column with its kind, in creation order.
    pub fn iter(&self) -> Columns<'_> {
        Columns {
            inner: self.columns.iter(),
        }
    }

    // ---- Component management ----

    /// Store `component` on `entity`, replacing any previous value of the same kind.
    pub fn emplace_component<T: Component>(&mut self, entity: EntityId, component: T) -> &mut T {
        self.column_or_insert::<T>().insert(entity, component)
    }

    /// Remove the `T` held by `entity`.
    ///
    /// Fails with [`EcsError::ComponentKindNotFound`] when no `T` column exists yet. When the
    /// column exists but `entity` holds no `T`, nothing happens and `Ok(None)` is returned, so
    /// repeated removal is harmless.
    pub fn remove_component<T: Component>(&mut self, entity: EntityId) -> EcsResult<Option<T>> {
        let column = self
            .column_mut::<T>()
            .ok_or(EcsError::ComponentKindNotFound {
                kind: type_name::<T>(),
            })?;
        Ok(column.remove(entity))
    }

    pub fn get_component<T: Component>(&self, entity: EntityId) -> EcsResult<&T> {
        self.column::<T>()
            .ok_or(EcsError::ComponentKindNotFound {
                kind: type_name::<T>(),
            })?
            .get(entity)
            .ok_or(EcsError::ComponentNotPresent {
                entity,
                kind: type_name::<T>(),
            })
    }

    pub fn get_component_mut<T: Component>(&mut self, entity: EntityId) -> EcsResult<&mut T> {
        self.column_mut::<T>()
            .ok_or(EcsError::ComponentKindNotFound {
                kind: type_name::<T>(),
            })?
            .get_mut(entity)
            .ok_or(EcsError::ComponentNotPresent {
                entity,
                kind: type_name::<T>(),
            })
    }

    pub fn has_component<T: Component>(&self, entity: EntityId) -> bool {
        self.column::<T>().is_some_and(|column| column.contains(entity))
    }

    /// Like [`has_component`](Self::has_component), for callers holding only a runtime kind id.
    pub fn has_component_kind(&self, entity: EntityId, kind: ComponentKindId) -> bool {
        self.index
            .get(&kind)
            .is_some_and(|&slot| self.columns[slot].has(entity))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("entity_count", &self.entity_count())
            .field(
                "columns",
                &self.iter().map(|(kind, _)| kind).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Iterator over a registry's columns, returned by [`Registry::iter`].
pub struct Columns<'r> {
    inner: std::slice::Iter<'r, Box<dyn ComponentColumn>>,
}

impl<'r> Iterator for Columns<'r> {
    type Item = (ComponentKindId, &'r dyn ComponentColumn);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|column| (column.kind(), &**column))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'r> IntoIterator for &'r Registry {
    type Item = (ComponentKindId, &'r dyn ComponentColumn);
    type IntoIter = Columns<'r>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

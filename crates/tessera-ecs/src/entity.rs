use std::fmt;

/// An entity handle. A bare monotonically allocated index, never recycled.
///
/// Ids carry no generation, so the registry cannot tell a handle it issued from one made up
/// with [`EntityId::from_raw`]. Handing out only ids obtained from the owning registry is the
/// caller's job.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub(crate) u32);

impl EntityId {
    /// Create an entity id from its raw index.
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// The raw index of this entity.
    pub fn index(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out entity ids in strictly increasing order.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    /// Wider than the id so the count never wraps back onto an issued id.
    next: u64,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Allocate the next id.
    ///
    /// # Panics
    /// Panics once all 2^32 ids have been handed out, since ids are never reused.
    pub fn allocate(&mut self) -> EntityId {
        let index = u32::try_from(self.next).expect("entity id space exhausted");
        self.next += 1;
        EntityId(index)
    }

    /// Number of ids allocated so far.
    pub fn count(&self) -> usize {
        self.next as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_sequential() {
        let mut alloc = EntityAllocator::new();
        let e0 = alloc.allocate();
        let e1 = alloc.allocate();
        assert_eq!(e0.index(), 0);
        assert_eq!(e1.index(), 1);
        assert!(e0 < e1);
        assert_eq!(alloc.count(), 2);
    }

    #[test]
    fn ids_strictly_increase() {
        let mut alloc = EntityAllocator::new();
        let ids: Vec<_> = (0..100).map(|_| alloc.allocate()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(alloc.count(), ids.len());
    }

    #[test]
    fn last_id_is_allocated_once() {
        let mut alloc = EntityAllocator {
            next: u32::MAX as u64,
        };
        assert_eq!(alloc.allocate().index(), u32::MAX);
        assert_eq!(alloc.count(), 1 << 32);
    }

    #[test]
    #[should_panic(expected = "entity id space exhausted")]
    fn exhausted_id_space_panics_instead_of_wrapping() {
        let mut alloc = EntityAllocator {
            next: u32::MAX as u64 + 1,
        };
        alloc.allocate();
    }

    #[test]
    fn formatting() {
        let e = EntityId::from_raw(7);
        assert_eq!(format!("{e}"), "7");
        assert_eq!(format!("{e:?}"), "EntityId(7)");
    }
}

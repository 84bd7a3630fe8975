use crate::entity::EntityId;

/// Errors returned by registry component access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EcsError {
    /// No entity of this registry has ever been given a component of this kind.
    #[error("no storage exists for component '{kind}'")]
    ComponentKindNotFound { kind: &'static str },

    /// Storage exists for the kind, but the entity does not currently hold one.
    #[error("entity {entity} has no component '{kind}'")]
    ComponentNotPresent {
        entity: EntityId,
        kind: &'static str,
    },
}

pub type EcsResult<T> = Result<T, EcsError>;

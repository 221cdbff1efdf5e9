//! Entity trait: identity + continuity across state changes.

use std::collections::HashMap;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Borrowing index over a slice of entities, keyed by identity.
///
/// When the same id appears twice the first occurrence wins.
pub fn index_by_id<E: Entity>(entities: &[E]) -> HashMap<&E::Id, &E> {
    let mut index = HashMap::with_capacity(entities.len());
    for entity in entities {
        index.entry(entity.id()).or_insert(entity);
    }
    index
}

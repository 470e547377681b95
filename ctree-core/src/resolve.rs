use std::{collections::HashMap, fmt};

use crate::entities::owner::{OwnerId, OwnerRef, OwnerType};

/// Maps owner type tags to lookup functions of the host system.
///
/// `T` is whatever the host uses as an entity handle. Unregistered tags
/// and missing entities both resolve to `None`.
pub struct OwnerRegistry<T> {
    resolvers: HashMap<OwnerType, Box<dyn Fn(OwnerId) -> Option<T>>>,
}

impl<T> fmt::Debug for OwnerRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnerRegistry")
            .field("owner_types", &self.resolvers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> Default for OwnerRegistry<T> {
    fn default() -> Self {
        Self {
            resolvers: HashMap::new(),
        }
    }
}

impl<T> OwnerRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, owner_type: impl Into<OwnerType>, resolver: F)
    where
        F: Fn(OwnerId) -> Option<T> + 'static,
    {
        self.resolvers.insert(owner_type.into(), Box::new(resolver));
    }

    pub fn is_registered(&self, owner_type: &OwnerType) -> bool {
        self.resolvers.contains_key(owner_type)
    }

    pub fn resolve(&self, owner_ref: &OwnerRef) -> Option<T> {
        self.resolvers
            .get(&owner_ref.owner_type)
            .and_then(|resolver| resolver(owner_ref.owner_id))
    }
}

//! Type-indexed context store.

use std::any::{type_name, Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::PipelineError;

/// Heterogeneous store keyed by the concrete type of each value.
///
/// At most one entry per type: a second `insert` of the same type fails with
/// [`PipelineError::DuplicateContextEntry`] rather than silently overwriting,
/// since silent replacement hides ordering bugs between independently
/// written stages. Entries live exactly as long as the owning run.
#[derive(Debug, Default)]
pub struct ContextStore {
    entries: HashMap<TypeId, Box<dyn Any>>,
}

impl ContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `value` under its concrete type.
    pub fn insert<T: Any>(&mut self, value: T) -> Result<(), PipelineError> {
        match self.entries.entry(TypeId::of::<T>()) {
            Entry::Occupied(_) => Err(PipelineError::DuplicateContextEntry {
                type_name: type_name::<T>(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(Box::new(value));
                Ok(())
            }
        }
    }

    /// The entry of type `T`, or [`PipelineError::ContextEntryNotFound`].
    pub fn get<T: Any>(&self) -> Result<&T, PipelineError> {
        self.try_get::<T>()
            .ok_or_else(|| PipelineError::ContextEntryNotFound {
                type_name: type_name::<T>(),
            })
    }

    pub fn get_mut<T: Any>(&mut self) -> Result<&mut T, PipelineError> {
        self.try_get_mut::<T>()
            .ok_or_else(|| PipelineError::ContextEntryNotFound {
                type_name: type_name::<T>(),
            })
    }

    /// Present/absent lookup that never fails.
    pub fn try_get<T: Any>(&self) -> Option<&T> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref())
    }

    pub fn try_get_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.entries
            .get_mut(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_mut())
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }
}

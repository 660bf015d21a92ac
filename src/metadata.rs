//! Declarative metadata access.
//!
//! The binding layer (out of scope here) discovers argument names and
//! descriptions from metadata attached to handlers. The pipeline core only
//! needs a queryable container abstraction: any metadata source implements
//! [`AttributesContainer`], and the three query operations below are the
//! whole contract. How the set gets populated — explicit registration, a
//! build-time generator, whatever the host supports — is not the core's
//! concern.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use crate::error::MetadataError;

/// Type-indexed multimap of opaque metadata values.
///
/// Unlike the context store, several values of the same type may be attached
/// to one container (a handler argument can carry repeated annotations).
#[derive(Debug, Default)]
pub struct AttributeSet {
    entries: HashMap<TypeId, Vec<Box<dyn Any>>>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<T: Any>(&mut self, value: T) {
        self.entries
            .entry(TypeId::of::<T>())
            .or_default()
            .push(Box::new(value));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn all<T: Any>(&self) -> impl Iterator<Item = &T> {
        self.entries
            .get(&TypeId::of::<T>())
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.downcast_ref())
    }
}

/// Anything that can surface an [`AttributeSet`] to the pipeline.
pub trait AttributesContainer {
    fn attributes(&self) -> &AttributeSet;
}

impl AttributesContainer for AttributeSet {
    fn attributes(&self) -> &AttributeSet {
        self
    }
}

/// Whether the container carries at least one `T`.
///
/// Fails with [`MetadataError::NullContainer`] when the container itself is
/// absent, rather than deferring the failure downstream.
pub fn has_attribute<T, C>(container: Option<&C>) -> Result<bool, MetadataError>
where
    T: Any,
    C: AttributesContainer + ?Sized,
{
    let container = container.ok_or(MetadataError::NullContainer)?;
    Ok(container.attributes().all::<T>().next().is_some())
}

/// The first `T` on the container, or [`MetadataError::NotFound`].
///
/// Multiple values of the same type are tolerated: the earliest added one
/// is returned, never a fault. Callers that must see every value use
/// [`attributes_of`].
pub fn attribute<T, C>(container: Option<&C>) -> Result<&T, MetadataError>
where
    T: Any,
    C: AttributesContainer + ?Sized,
{
    let container = container.ok_or(MetadataError::NullContainer)?;
    container
        .attributes()
        .all::<T>()
        .next()
        .ok_or(MetadataError::NotFound {
            type_name: type_name::<T>(),
        })
}

/// Every `T` on the container, possibly empty.
pub fn attributes_of<'c, T, C>(
    container: Option<&'c C>,
) -> Result<impl Iterator<Item = &'c T>, MetadataError>
where
    T: Any,
    C: AttributesContainer + ?Sized,
{
    let container = container.ok_or(MetadataError::NullContainer)?;
    Ok(container.attributes().all::<T>())
}

/// Canonical metadata record the binding layer stores per handler argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMetadata {
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub description: Option<String>,
    pub required: bool,
}

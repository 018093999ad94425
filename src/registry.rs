//! Registry for managing named behaviors.
//!
//! The `Registry` is a type-safe container for behaviors that supports
//! registration and lookup by name while remembering registration order.

use std::collections::HashMap;

use crate::behavior::Behavior;
use crate::error::{RegistryError, RegistryResult};

/// A registry of behaviors keyed by `Behavior::name`.
///
/// # Example
///
/// ```rust
/// use patterncraft::{Behavior, Registry};
/// use std::any::Any;
///
/// #[derive(Debug)]
/// struct Cruise;
///
/// impl Behavior for Cruise {
///     fn name(&self) -> &str { "cruise" }
///     fn as_any(&self) -> &dyn Any { self }
/// }
///
/// let mut registry: Registry<dyn Behavior> = Registry::new();
/// registry.register(Box::new(Cruise));
///
/// assert!(registry.get("cruise").is_some());
/// ```
#[derive(Debug)]
pub struct Registry<B: ?Sized> {
    behaviors: HashMap<String, Box<B>>,
    ordered: Vec<String>,
}

impl<B: Behavior + ?Sized> Registry<B> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
            ordered: Vec::new(),
        }
    }

    /// Register a behavior.
    ///
    /// A behavior with the same name is replaced in place and keeps its
    /// original position in the iteration order.
    pub fn register(&mut self, behavior: Box<B>) {
        let name = behavior.name().to_string();
        if !self.behaviors.contains_key(&name) {
            self.ordered.push(name.clone());
        }
        tracing::debug!(behavior = %name, "registered");
        self.behaviors.insert(name, behavior);
    }

    /// Register a behavior, returning an error if the name is empty or taken.
    pub fn register_unique(&mut self, behavior: Box<B>) -> RegistryResult<()> {
        let name = behavior.name().to_string();
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidName(name));
        }
        if self.behaviors.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        self.register(behavior);
        Ok(())
    }

    /// Get a behavior by name.
    pub fn get(&self, name: &str) -> Option<&B> {
        self.behaviors.get(name).map(|b| b.as_ref())
    }

    /// Get a behavior by name, or `NotFound`.
    pub fn require(&self, name: &str) -> RegistryResult<&B> {
        self.get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Check if a behavior with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.behaviors.contains_key(name)
    }

    /// Remove a behavior by name.
    pub fn remove(&mut self, name: &str) -> Option<Box<B>> {
        self.ordered.retain(|n| n != name);
        self.behaviors.remove(name)
    }

    /// Get the names of all registered behaviors.
    pub fn names(&self) -> Vec<&str> {
        self.ordered.iter().map(|s| s.as_str()).collect()
    }

    /// Get the number of registered behaviors.
    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    /// Clear all behaviors from the registry.
    pub fn clear(&mut self) {
        self.behaviors.clear();
        self.ordered.clear();
    }

    /// Iterate over all behaviors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &B> {
        self.ordered
            .iter()
            .filter_map(move |name| self.behaviors.get(name))
            .map(|b| b.as_ref())
    }
}

impl<B: Behavior + ?Sized> Default for Registry<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating registries with fluent API.
pub struct RegistryBuilder<B: ?Sized> {
    registry: Registry<B>,
}

impl<B: Behavior + ?Sized> RegistryBuilder<B> {
    /// Create a new registry builder.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Add a behavior to the registry.
    pub fn with(mut self, behavior: Box<B>) -> Self {
        self.registry.register(behavior);
        self
    }

    /// Build the registry.
    pub fn build(self) -> Registry<B> {
        self.registry
    }
}

impl<B: Behavior + ?Sized> Default for RegistryBuilder<B> {
    fn default() -> Self {
        Self::new()
    }
}

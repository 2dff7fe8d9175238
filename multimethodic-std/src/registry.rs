//! HashMap-based method registry.
//!
//! This is the registry every multimethod flavour stores its methods in.

use std::{collections::HashMap, fmt, hash::Hash};

use multimethodic_core::{Key, MethodTable, RegistryError};

/// A registry of methods keyed by discriminant, plus one default slot.
///
/// Registering twice under the same discriminant replaces the earlier
/// method. The default slot is held apart from the keyed map and never
/// shows up in [`discriminants`](Registry::discriminants).
#[derive(Clone)]
pub struct Registry<D, M> {
    methods: HashMap<D, M>,
    default: Option<M>,
}

impl<D, M> Registry<D, M> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
            default: None,
        }
    }

    /// Install the default method, returning the one it replaced.
    pub fn register_default(&mut self, method: M) -> Option<M> {
        self.default.replace(method)
    }

    /// Remove the default method.
    pub fn remove_default(&mut self) -> Option<M> {
        self.default.take()
    }

    /// Returns true if a default method is installed.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Iterate over the keyed discriminants (the default slot is not included).
    pub fn discriminants(&self) -> impl Iterator<Item = &D> {
        self.methods.keys()
    }

    /// Get the number of keyed methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Check if the registry holds neither keyed methods nor a default.
    ///
    /// Unlike [`len`](Registry::len), this counts the default slot: a
    /// registry holding only a default has `len() == 0` but is not empty.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty() && self.default.is_none()
    }
}

impl<D, M> Registry<D, M>
where
    D: Eq + Hash,
{
    /// Register a method under `discriminant`, returning the one it replaced.
    pub fn register(&mut self, discriminant: D, method: M) -> Option<M> {
        self.methods.insert(discriminant, method)
    }

    /// Register under a [`Key`], routing [`Key::Default`] to the default slot.
    pub fn insert(&mut self, key: Key<D>, method: M) -> Option<M> {
        match key {
            Key::Value(d) => self.register(d, method),
            Key::Default => self.register_default(method),
        }
    }

    /// Register under a [`Key`], failing if the key is already taken.
    pub fn try_insert(&mut self, key: Key<D>, method: M) -> Result<(), RegistryError>
    where
        D: fmt::Debug,
    {
        if self.contains_key(&key) {
            return Err(RegistryError::DuplicateKey(key.to_string()));
        }
        self.insert(key, method);
        Ok(())
    }

    /// Get the method registered under a [`Key`].
    pub fn get_key(&self, key: &Key<D>) -> Option<&M> {
        match key {
            Key::Value(d) => self.methods.get(d),
            Key::Default => self.default.as_ref(),
        }
    }

    /// Remove the method registered under a [`Key`].
    pub fn remove(&mut self, key: &Key<D>) -> Option<M> {
        match key {
            Key::Value(d) => self.methods.remove(d),
            Key::Default => self.remove_default(),
        }
    }

    /// Check if a method is registered under a [`Key`].
    pub fn contains_key(&self, key: &Key<D>) -> bool {
        self.get_key(key).is_some()
    }
}

impl<D, M> Default for Registry<D, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, M> MethodTable<D, M> for Registry<D, M>
where
    D: Eq + Hash,
{
    fn get(&self, discriminant: &D) -> Option<&M> {
        self.methods.get(discriminant)
    }

    fn default_method(&self) -> Option<&M> {
        self.default.as_ref()
    }
}

impl<D: fmt::Debug, M> fmt::Debug for Registry<D, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("discriminants", &self.methods.keys().collect::<Vec<_>>())
            .field("has_default", &self.default.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Key, MethodTable, Registry, RegistryError};
    use multimethodic_core::Lookup;

    #[test]
    fn test_basic_lookup() {
        let mut registry: Registry<String, i32> = Registry::new();
        registry.register("hello".to_string(), 1);
        registry.register("world".to_string(), 2);

        assert_eq!(registry.get(&"hello".to_string()), Some(&1));
        assert_eq!(registry.get(&"world".to_string()), Some(&2));
        assert_eq!(registry.get(&"unknown".to_string()), None);
        assert_eq!(registry.resolve(&"unknown".to_string()), Lookup::NotFound);
    }

    #[test]
    fn test_reregister_replaces() {
        let mut registry: Registry<&str, i32> = Registry::new();
        assert_eq!(registry.register("key", 1), None);
        assert_eq!(registry.register("key", 2), Some(1));

        assert_eq!(registry.get(&"key"), Some(&2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_default_slot_is_separate() {
        let mut registry: Registry<&str, i32> = Registry::new();
        registry.insert(Key::Default, 0);
        registry.insert(Key::Value("one"), 1);

        assert_eq!(registry.resolve(&"one"), Lookup::Exact(&1));
        assert_eq!(registry.resolve(&"two"), Lookup::Default(&0));
        assert_eq!(registry.discriminants().collect::<Vec<_>>(), vec![&"one"]);
        assert_eq!(registry.register_default(5), Some(0));
    }

    #[test]
    fn test_default_only_is_not_empty() {
        let mut registry: Registry<&str, i32> = Registry::new();
        registry.register_default(0);

        assert_eq!(registry.len(), 0);
        assert!(!registry.is_empty());

        registry.remove_default();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_try_insert_rejects_duplicates() {
        let mut registry: Registry<&str, i32> = Registry::new();
        registry.try_insert(Key::Value("key"), 1).unwrap();
        registry.try_insert(Key::Default, 0).unwrap();

        let result = registry.try_insert(Key::Value("key"), 2);
        assert_eq!(
            result,
            Err(RegistryError::DuplicateKey("\"key\"".to_string()))
        );
        let result = registry.try_insert(Key::Default, 3);
        assert!(matches!(result, Err(RegistryError::DuplicateKey(_))));
        assert_eq!(registry.get(&"key"), Some(&1));
    }

    #[test]
    fn test_remove() {
        let mut registry: Registry<u8, &str> = Registry::new();
        registry.register(1, "one");
        registry.register_default("other");

        assert_eq!(registry.remove(&Key::Value(1)), Some("one"));
        assert_eq!(registry.resolve(&1), Lookup::Default(&"other"));
        assert_eq!(registry.remove(&Key::Default), Some("other"));
        assert!(registry.is_empty());
        assert_eq!(registry.remove(&Key::Value(1)), None);
    }
}

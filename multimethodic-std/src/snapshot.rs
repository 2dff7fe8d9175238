//! Copy-on-write registry for registration that overlaps with calls.
//!
//! Readers load an [`Arc`] snapshot with no lock taken. Writers serialize on
//! a mutex, clone the current registry, mutate the copy and swap it in.

use std::{
    hash::Hash,
    sync::{Arc, Mutex, PoisonError},
};

use arc_swap::ArcSwap;
use multimethodic_core::Key;

use crate::registry::Registry;

/// A [`Registry`] published through an atomic pointer swap.
///
/// A writer only publishes once its mutation has returned. If it panics
/// halfway, the copy is dropped and readers keep the previous registry; the
/// poisoned writer lock is then recovered by taking the inner value.
pub struct SnapshotRegistry<D, M> {
    current: ArcSwap<Registry<D, M>>,
    writer: Mutex<()>,
}

impl<D, M> SnapshotRegistry<D, M> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::from_registry(Registry::new())
    }

    /// Wrap an existing registry.
    pub fn from_registry(registry: Registry<D, M>) -> Self {
        Self {
            current: ArcSwap::new(Arc::new(registry)),
            writer: Mutex::new(()),
        }
    }

    /// Take the current snapshot.
    ///
    /// Later registrations are not visible through the returned value.
    pub fn snapshot(&self) -> Arc<Registry<D, M>> {
        self.current.load_full()
    }
}

impl<D, M> SnapshotRegistry<D, M>
where
    D: Eq + Hash + Clone,
    M: Clone,
{
    /// Apply a mutation to a copy of the registry and publish the copy.
    pub fn update<T>(&self, f: impl FnOnce(&mut Registry<D, M>) -> T) -> T {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = Registry::clone(&self.current.load());
        let output = f(&mut next);
        self.current.store(Arc::new(next));
        output
    }

    /// Register a method under `discriminant`, returning the one it replaced.
    pub fn register(&self, discriminant: D, method: M) -> Option<M> {
        self.update(|registry| registry.register(discriminant, method))
    }

    /// Install the default method, returning the one it replaced.
    pub fn register_default(&self, method: M) -> Option<M> {
        self.update(|registry| registry.register_default(method))
    }

    /// Register under a [`Key`].
    pub fn insert(&self, key: Key<D>, method: M) -> Option<M> {
        self.update(|registry| registry.insert(key, method))
    }

    /// Remove the method registered under a [`Key`].
    pub fn remove(&self, key: &Key<D>) -> Option<M> {
        self.update(|registry| registry.remove(key))
    }
}

impl<D, M> Default for SnapshotRegistry<D, M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::SnapshotRegistry;
    use multimethodic_core::{Key, Lookup, MethodTable};
    use std::{
        panic::{AssertUnwindSafe, catch_unwind},
        sync::Arc,
    };

    #[test]
    fn test_snapshot_is_isolated_from_later_writes() {
        let registry: SnapshotRegistry<u8, &str> = SnapshotRegistry::new();
        registry.register(1, "one");

        let before = registry.snapshot();
        registry.register(1, "uno");
        registry.register_default("other");

        assert_eq!(before.resolve(&1), Lookup::Exact(&"one"));
        assert_eq!(before.resolve(&2), Lookup::NotFound);

        let after = registry.snapshot();
        assert_eq!(after.resolve(&1), Lookup::Exact(&"uno"));
        assert_eq!(after.resolve(&2), Lookup::Default(&"other"));
    }

    #[test]
    fn test_remove_through_key() {
        let registry: SnapshotRegistry<u8, &str> = SnapshotRegistry::new();
        registry.insert(Key::Value(1), "one");
        registry.insert(Key::Default, "other");

        assert_eq!(registry.remove(&Key::Default), Some("other"));
        assert!(!registry.snapshot().has_default());
        assert!(registry.snapshot().contains(&1));
    }

    #[test]
    fn test_panicking_update_publishes_nothing() {
        let registry: SnapshotRegistry<u8, &str> = SnapshotRegistry::new();
        registry.register(0, "zero");

        let result = catch_unwind(AssertUnwindSafe(|| {
            registry.update(|r| {
                r.register(1, "half");
                r.remove_default();
                panic!("writer failed");
            })
        }));
        assert!(result.is_err());

        let snapshot = registry.snapshot();
        assert!(!snapshot.contains(&1));
        assert_eq!(snapshot.resolve(&0), Lookup::Exact(&"zero"));

        // The writer lock was poisoned; later writes still go through.
        assert_eq!(registry.register(1, "one"), None);
        assert_eq!(registry.snapshot().resolve(&1), Lookup::Exact(&"one"));
        assert_eq!(registry.snapshot().len(), 2);
    }

    #[test]
    fn test_concurrent_registration_and_reads() {
        let registry: Arc<SnapshotRegistry<u32, u32>> = Arc::new(SnapshotRegistry::new());

        let writers: Vec<_> = (0..4u32)
            .map(|t| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        registry.register(t * 100 + i, i);
                        let _ = registry.snapshot().resolve(&(t * 100));
                    }
                })
            })
            .collect();

        for writer in writers {
            writer.join().unwrap();
        }

        assert_eq!(registry.snapshot().len(), 200);
    }
}

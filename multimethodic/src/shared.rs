//! Multimethods that accept registrations while other threads call them.

use std::{fmt, sync::Arc};

use multimethodic_core::{Discriminant, DispatchNotFound, Key, MethodTable};
use multimethodic_std::{Registry, SnapshotRegistry, log};

use crate::multimethod::{DispatchFn, Method};

/// A multimethod whose methods can be registered through a shared reference.
///
/// Registration clones the registry on write under a short lock. A call
/// takes a snapshot first and runs the selected method with no lock held,
/// so a method may itself register further methods.
///
/// # Example
///
/// ```rust,ignore
/// let greet = Arc::new(SharedMultiMethod::new("greet", |lang: &Lang| *lang));
/// greet.method(Lang::En).attach(|_| "hello");
///
/// let handle = {
///     let greet = Arc::clone(&greet);
///     std::thread::spawn(move || greet.call(Lang::En))
/// };
/// ```
pub struct SharedMultiMethod<A, D, R> {
    name: String,
    dispatch: DispatchFn<A, D>,
    registry: SnapshotRegistry<D, Method<A, R>>,
}

impl<A, D, R> SharedMultiMethod<A, D, R>
where
    D: Discriminant + Clone,
{
    /// Create a new shared multimethod with no methods.
    pub fn new<F>(name: impl Into<String>, dispatch: F) -> Self
    where
        F: Fn(&A) -> D + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            dispatch: Arc::new(dispatch),
            registry: SnapshotRegistry::new(),
        }
    }

    /// The diagnostic name of this multimethod.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate only the dispatch function for `args`.
    pub fn dispatch_value(&self, args: &A) -> D {
        (self.dispatch)(args)
    }

    /// Call the multimethod.
    pub fn call(&self, args: A) -> Result<R, DispatchNotFound<D>> {
        let discriminant = (self.dispatch)(&args);
        let snapshot = self.registry.snapshot();
        let lookup = snapshot.resolve(&discriminant);
        log::dispatched(&self.name, &discriminant, &lookup);

        match lookup.method() {
            Some(method) => Ok(method(args)),
            None => Err(DispatchNotFound::new(self.name.clone(), discriminant)),
        }
    }

    /// Get a registrar that binds a method to `key` on this multimethod.
    pub fn method(&self, key: impl Into<Key<D>>) -> SharedRegistrar<'_, A, D, R> {
        SharedRegistrar {
            multimethod: self,
            key: key.into(),
        }
    }

    /// Register `method` under `key`, replacing any method already there.
    pub fn add_method<F>(&self, key: impl Into<Key<D>>, method: F) -> &Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        self.insert(key.into(), Arc::new(method));
        self
    }

    /// Remove the method registered under `key`.
    pub fn remove_method(&self, key: impl Into<Key<D>>) -> Option<Method<A, R>> {
        let key = key.into();
        let removed = self.registry.remove(&key);
        log::removed(&self.name, &key, removed.is_some());
        removed
    }

    /// Get the method registered under `key`.
    pub fn get_method(&self, key: impl Into<Key<D>>) -> Option<Method<A, R>> {
        self.registry.snapshot().get_key(&key.into()).cloned()
    }

    /// The discriminants that currently have a method of their own.
    pub fn discriminants(&self) -> Vec<D> {
        self.registry.snapshot().discriminants().cloned().collect()
    }

    /// Returns true if a default method is registered.
    pub fn has_default(&self) -> bool {
        self.registry.snapshot().has_default()
    }

    /// Get the number of methods, not counting the default.
    pub fn len(&self) -> usize {
        self.registry.snapshot().len()
    }

    /// Returns true if neither methods nor a default are registered.
    ///
    /// A multimethod with only a default method is not empty, even though
    /// its [`len`](Self::len) is 0.
    pub fn is_empty(&self) -> bool {
        self.registry.snapshot().is_empty()
    }

    /// Take an immutable snapshot of the current methods.
    pub fn snapshot(&self) -> Arc<Registry<D, Method<A, R>>> {
        self.registry.snapshot()
    }

    fn insert(&self, key: Key<D>, method: Method<A, R>) {
        self.registry.update(|registry| {
            log::registered(&self.name, &key, registry.contains_key(&key));
            registry.insert(key, method);
        });
    }
}

impl<A, D, T, E> SharedMultiMethod<A, D, Result<T, E>>
where
    D: Discriminant + Clone,
    E: From<DispatchNotFound<D>>,
{
    /// Call a multimethod whose methods are fallible, folding a missing
    /// method into the methods' own error type.
    pub fn try_call(&self, args: A) -> Result<T, E> {
        self.call(args)
            .unwrap_or_else(|not_found| Err(E::from(not_found)))
    }
}

impl<A, D, R> fmt::Display for SharedMultiMethod<A, D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<MultiMethod '{}'>", self.name)
    }
}

impl<A, D: fmt::Debug, R> fmt::Debug for SharedMultiMethod<A, D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedMultiMethod")
            .field("name", &self.name)
            .field("registry", &self.registry.snapshot())
            .finish_non_exhaustive()
    }
}

/// Binds one method to one key on a specific [`SharedMultiMethod`].
#[must_use = "a registrar does nothing until a method is attached"]
pub struct SharedRegistrar<'m, A, D, R> {
    multimethod: &'m SharedMultiMethod<A, D, R>,
    key: Key<D>,
}

impl<'m, A, D, R> SharedRegistrar<'m, A, D, R>
where
    D: Discriminant + Clone,
{
    /// The key the method will be registered under.
    pub fn key(&self) -> &Key<D> {
        &self.key
    }

    /// Register `method` and return the owning multimethod.
    pub fn attach<F>(self, method: F) -> &'m SharedMultiMethod<A, D, R>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        self.multimethod.insert(self.key, Arc::new(method));
        self.multimethod
    }
}
